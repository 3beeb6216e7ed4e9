//! Non-linear (Breit-Rabi) field dependence of J = 1/2 ground-state sublevels.
//!
//! For a ground state with `J = 1/2`, the energy of `|F = I ± 1/2, m_F>` in a
//! static field `B` is exactly
//! ```text
//! E / h = -A_hfs / 2(2I + 1) + g_I μ_B m B / h
//!         ± (A_hfs / 2) sqrt(1 + 4 m x / (2I + 1) + x^2)
//! x = (g_J - g_I) μ_B B / h A_hfs
//! ```
//! where `A_hfs` is the zero-field hyperfine splitting in Hz. For the stretched
//! states `|m| = I + 1/2` the square root is replaced by `1 + sign(m) x`, which
//! keeps the level continuous past `x = 1`. Energies are relative to the
//! hyperfine centroid.

use crate::{
    config::PhysicalConstants,
    error::ZResult,
    rubidium::Isotope,
    spin::Spin,
};

/// Parameters `A0, ..., A4` describing a single sublevel's frequency shift as
/// ```text
/// A0 + A1 * B + A2 * sqrt(1 + A3 * B + A4 * B^2)
/// ```
/// with `B` in Tesla and the result in Hz.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BreitRabi {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    pub a4: f64,
    /// For stretched states, the sign of `m_F`.
    stretched: Option<f64>,
}

impl BreitRabi {
    /// Compute the parameters for sublevel `|F, m_F>` of `isotope`'s ground
    /// state.
    ///
    /// Fails if `F` is not one of the two ground-state hyperfine levels or
    /// `m_F` is not a projection of `F`.
    pub fn new(isotope: Isotope, F: f64, m_f: f64) -> ZResult<Self> {
        Self::new_with(isotope, F, m_f, &PhysicalConstants::default())
    }

    /// Like [`Self::new`], but with μ<sub>B</sub>, h, and the electron
    /// g-factors taken from `consts`.
    pub fn new_with(
        isotope: Isotope,
        F: f64,
        m_f: f64,
        consts: &PhysicalConstants,
    ) -> ZResult<Self>
    {
        isotope.check_level(F)?;
        let spin = Spin::from_f64(F, m_f)?;
        let I = isotope.nuclear_spin();
        let g_i = isotope.nuclear_g();
        let hfs = isotope.hyperfine_splitting();
        let two_i_p1 = 2.0 * I + 1.0;
        let upper = F > I;
        // x / B
        let x_per_b
            = (isotope.ground_gj_with(consts) - g_i) * consts.mu_b
            / (consts.h * hfs);
        let stretched = (upper && spin.is_stretched()).then(|| m_f.signum());
        Ok(Self {
            a0: -hfs / (2.0 * two_i_p1),
            a1: g_i * consts.mu_b * m_f / consts.h,
            a2: if upper { hfs / 2.0 } else { -hfs / 2.0 },
            a3: 4.0 * m_f * x_per_b / two_i_p1,
            a4: x_per_b.powi(2),
            stretched,
        })
    }

    /// Frequency shift at field `B`, in Hz.
    pub fn eval(&self, B: f64) -> f64 {
        let root
            = match self.stretched {
                Some(sgn) => 1.0 + sgn * self.a4.sqrt() * B,
                None => (1.0 + self.a3 * B + self.a4 * B.powi(2)).sqrt(),
            };
        self.a0 + self.a1 * B + self.a2 * root
    }
}

/// Breit-Rabi frequency of the ground-state sublevel `|F, m_F>` of `isotope`
/// at field `B`, in Hz relative to the hyperfine centroid.
pub fn breit_rabi_frequency(isotope: Isotope, F: f64, m_f: f64, B: f64)
    -> ZResult<f64>
{
    BreitRabi::new(isotope, F, m_f).map(|br| br.eval(B))
}

/// Like [`breit_rabi_frequency`], but with constants taken from `consts`.
pub fn breit_rabi_frequency_with(
    isotope: Isotope,
    F: f64,
    m_f: f64,
    B: f64,
    consts: &PhysicalConstants,
) -> ZResult<f64>
{
    BreitRabi::new_with(isotope, F, m_f, consts).map(|br| br.eval(B))
}

/// Breit-Rabi frequencies of every ground-state sublevel of `isotope` at field
/// `B`, as `(F, m_F, frequency)` by ascending `F` then `m_F`.
pub fn breit_rabi_spectrum(isotope: Isotope, B: f64)
    -> ZResult<Vec<(f64, f64, f64)>>
{
    isotope.ground_levels()
        .iter()
        .map(|level| level.sublevels().map(|s| (level.f, s)))
        .collect::<ZResult<Vec<_>>>()?
        .into_iter()
        .flat_map(|(F, sublevels)| sublevels.map(move |s| (F, s.proj().f())))
        .map(|(F, m)| {
            breit_rabi_frequency(isotope, F, m, B).map(|nu| (F, m, nu))
        })
        .collect()
}
