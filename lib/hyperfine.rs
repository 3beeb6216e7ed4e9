//! Description of a single hyperfine level and the linear Zeeman shifts of its
//! magnetic sublevels.

use indexmap::IndexMap;
use crate::{
    error::{ ZResult, ZeemanError },
    gfactors::{ g_f, try_g_f },
    spin::{ Spin, SpinTotal },
    zeeman::{ frequency_at, shift_at },
};

// true if `i + j -> f` is an allowed angular momentum addition
fn couples(i: f64, j: f64, f: f64) -> bool {
    let halves = (
        SpinTotal::from_f64(i),
        SpinTotal::from_f64(j),
        SpinTotal::from_f64(f),
    );
    match halves {
        (Some(i2), Some(j2), Some(f2)) => {
            let (i2, j2, f2)
                = (
                    u64::from(i2.halves()),
                    u64::from(j2.halves()),
                    u64::from(f2.halves()),
                );
            i2.abs_diff(j2) <= f2 && f2 <= i2 + j2 && (i2 + j2 + f2) % 2 == 0
        },
        _ => false,
    }
}

/// A hyperfine level `|I, J; F>` together with the electronic and nuclear
/// g-factors needed to compute its g<sub>F</sub>.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HyperfineLevel {
    /// Nuclear spin.
    pub i: f64,
    /// Total electronic angular momentum.
    pub j: f64,
    /// Total atomic angular momentum.
    pub f: f64,
    /// Electronic Landé g-factor.
    pub g_j: f64,
    /// Nuclear g-factor.
    pub g_i: f64,
}

impl HyperfineLevel {
    /// Create a new level without any validation.
    pub fn new(i: f64, j: f64, f: f64, g_j: f64, g_i: f64) -> Self {
        Self { i, j, f, g_j, g_i }
    }

    /// Create a new level, checking that `I`, `J`, and `F` are half-integers
    /// with `|J - I| <= F <= J + I` and `F - I - J` an integer.
    pub fn new_checked(i: f64, j: f64, f: f64, g_j: f64, g_i: f64)
        -> ZResult<Self>
    {
        if !couples(i, j, f) {
            log::debug!("rejecting hyperfine level I = {i}, J = {j}, F = {f}");
            return Err(ZeemanError::InvalidHyperfineLevel {
                level: format!("I = {i}, J = {j}"),
                f,
            });
        }
        Ok(Self::new(i, j, f, g_j, g_i))
    }

    /// Hyperfine Landé g-factor of the level.
    pub fn g_f(&self) -> f64 { g_f(self.i, self.j, self.f, self.g_j, self.g_i) }

    /// Checked version of [`Self::g_f`].
    pub fn try_g_f(&self) -> ZResult<f64> {
        try_g_f(self.i, self.j, self.f, self.g_j, self.g_i)
    }

    /// Iterate over all `|F, m_F>` sublevels by ascending `m_F`.
    ///
    /// Fails if `F` is not a non-negative half-integer.
    pub fn sublevels(&self) -> ZResult<impl Iterator<Item = Spin>> {
        SpinTotal::from_f64(self.f)
            .map(SpinTotal::iter)
            .ok_or_else(|| ZeemanError::InvalidHyperfineLevel {
                level: format!("I = {}, J = {}", self.i, self.j),
                f: self.f,
            })
    }

    /// Linear Zeeman energy shift of sublevel `m_F` at field `B`.
    pub fn shift(&self, B: f64, m_f: f64) -> f64 {
        shift_at(B, m_f, self.g_f())
    }

    /// Linear Zeeman frequency shift of sublevel `m_F` at field `B`.
    pub fn frequency_shift(&self, B: f64, m_f: f64) -> f64 {
        frequency_at(B, m_f, self.g_f())
    }

    /// Linear Zeeman frequency shifts of all sublevels at field `B`, by
    /// ascending `m_F`.
    pub fn frequency_shifts(&self, B: f64) -> ZResult<IndexMap<Spin, f64>> {
        let g = self.g_f();
        Ok(
            self.sublevels()?
                .map(|s| (s, frequency_at(B, s.proj().f(), g)))
                .collect()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gfactors::{ g_j, HPLANCK, MU_B };

    fn rb87_f2() -> HyperfineLevel {
        HyperfineLevel::new(1.5, 0.5, 2.0, g_j(0.0, 0.5, 0.5), -0.0009951414)
    }

    #[test]
    fn triangle_rule() {
        let gj = g_j(0.0, 0.5, 0.5);
        assert!(HyperfineLevel::new_checked(1.5, 0.5, 1.0, gj, 0.0).is_ok());
        assert!(HyperfineLevel::new_checked(1.5, 0.5, 2.0, gj, 0.0).is_ok());
        assert!(matches!(
            HyperfineLevel::new_checked(1.5, 0.5, 3.0, gj, 0.0),
            Err(ZeemanError::InvalidHyperfineLevel { .. })
        ));
        assert!(HyperfineLevel::new_checked(1.5, 0.5, 1.5, gj, 0.0).is_err());
        assert!(HyperfineLevel::new_checked(1.5, 0.5, 0.0, gj, 0.0).is_err());
    }

    #[test]
    fn huge_spins_are_rejected() {
        assert!(matches!(
            HyperfineLevel::new_checked(1.5e9, 1.5e9, 1.0, 2.0, 0.0),
            Err(ZeemanError::InvalidHyperfineLevel { .. })
        ));
        assert!(!couples(1.0e9, 1.0e9, 2.0e9 + 0.5));
        assert!(couples(1.0e9, 1.0e9, 1.0));
    }

    #[test]
    fn shifts_by_sublevel() {
        let level = rb87_f2();
        let B = 1e-4;
        let shifts = level.frequency_shifts(B).unwrap();
        assert_eq!(shifts.len(), 5);
        let m: Vec<f64> = shifts.keys().map(|s| s.proj().f()).collect();
        assert_eq!(m, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        let (_, &top) = shifts.last().unwrap();
        assert_eq!(top, MU_B * level.g_f() * B * 2.0 / HPLANCK);
        let (_, &bottom) = shifts.first().unwrap();
        assert_eq!(bottom, -top);
        // ~ 1.4 MHz / G * 0.5 * 2 * 1 G
        assert!((top - 1.399e6).abs() < 1e3);
    }

    #[test]
    fn energy_and_frequency_agree() {
        let level = rb87_f2();
        let dE = level.shift(3e-4, -1.0);
        assert_eq!(level.frequency_shift(3e-4, -1.0), dE / HPLANCK);
    }

    #[test]
    fn non_half_integer_f_has_no_sublevels() {
        let level = HyperfineLevel::new(1.5, 0.5, 1.3, 2.0, 0.0);
        assert!(level.sublevels().is_err());
        assert!(level.frequency_shifts(1e-4).is_err());
    }
}
