//! Landé g-factors for fine- and hyperfine-structure levels.
//!
//! All quantum numbers are taken as plain `f64`s and no consistency checks
//! (e.g. `|J - I| <= F <= J + I`) are performed. The unchecked functions follow
//! IEEE-754 semantics when a denominator vanishes, i.e. `J = 0` in [`g_j`] or
//! `F = 0` in [`g_f`] produce a non-finite result (NaN or ±∞) rather than a
//! panic. Use [`try_g_j`] and [`try_g_f`] to reject these inputs instead.

use crate::error::{ ZResult, ZeemanError };

// Bohr magneton [J / T]
pub const MU_B: f64 = 9.274009994e-24;

// Planck constant [J s]
pub const HPLANCK: f64 = 6.62607015e-34;

// free-electron spin g-factor [dimensionless]
pub const G_S: f64 = 2.00231930436256;

// electron orbital g-factor [dimensionless]
pub const G_L: f64 = 1.0;

// X (X + 1)
fn casimir(x: f64) -> f64 { x * (x + 1.0) }

/// Electronic Landé g-factor g<sub>J</sub> for orbital, spin, and total
/// electronic angular momenta `L`, `S`, `J`, using the free-electron values
/// [`G_S`] and [`G_L`].
///
/// ```text
/// g_J = g_L (J(J+1) + L(L+1) - S(S+1)) / 2J(J+1)
///     + g_S (J(J+1) + S(S+1) - L(L+1)) / 2J(J+1)
/// ```
pub fn g_j(L: f64, S: f64, J: f64) -> f64 { g_j_with(L, S, J, G_S, G_L) }

/// Like [`g_j`], but with explicit spin and orbital g-factors.
pub fn g_j_with(L: f64, S: f64, J: f64, g_s: f64, g_l: f64) -> f64 {
    let jterm = casimir(J);
    let lterm = casimir(L);
    let sterm = casimir(S);
    g_l * (jterm + lterm - sterm) / (2.0 * jterm)
        + g_s * (jterm + sterm - lterm) / (2.0 * jterm)
}

/// Hyperfine Landé g-factor g<sub>F</sub> for nuclear, electronic, and total
/// angular momenta `I`, `J`, `F`, given the electronic g-factor `g_j_val` and
/// nuclear g-factor `g_i`.
///
/// ```text
/// g_F = g_J (F(F+1) + J(J+1) - I(I+1)) / 2F(F+1)
///     + g_I (F(F+1) + I(I+1) - J(J+1)) / 2F(F+1)
/// ```
pub fn g_f(I: f64, J: f64, F: f64, g_j_val: f64, g_i: f64) -> f64 {
    let fterm = casimir(F);
    let jterm = casimir(J);
    let iterm = casimir(I);
    g_j_val * (fterm + jterm - iterm) / (2.0 * fterm)
        + g_i * (fterm + iterm - jterm) / (2.0 * fterm)
}

/// Checked version of [`g_j`].
///
/// Fails with [`ZeemanError::UndefinedArithmetic`] if `J(J + 1) = 0`.
pub fn try_g_j(L: f64, S: f64, J: f64) -> ZResult<f64> {
    try_g_j_with(L, S, J, G_S, G_L)
}

/// Checked version of [`g_j_with`].
pub fn try_g_j_with(L: f64, S: f64, J: f64, g_s: f64, g_l: f64)
    -> ZResult<f64>
{
    if casimir(J) == 0.0 {
        log::debug!("rejecting g_J evaluation at J = {J}");
        return Err(ZeemanError::UndefinedArithmetic {
            factor: "g_J",
            quantity: "J",
            value: J,
        });
    }
    Ok(g_j_with(L, S, J, g_s, g_l))
}

/// Checked version of [`g_f`].
///
/// Fails with [`ZeemanError::UndefinedArithmetic`] if `F(F + 1) = 0`.
pub fn try_g_f(I: f64, J: f64, F: f64, g_j_val: f64, g_i: f64)
    -> ZResult<f64>
{
    if casimir(F) == 0.0 {
        log::debug!("rejecting g_F evaluation at F = {F}");
        return Err(ZeemanError::UndefinedArithmetic {
            factor: "g_F",
            quantity: "F",
            value: F,
        });
    }
    Ok(g_f(I, J, F, g_j_val, g_i))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn spin_dominated_g_j() {
        let gj = g_j(0.0, 0.5, 0.5);
        assert!((gj - 2.0023).abs() < 5e-5);
        assert!((gj - G_S).abs() < 1e-15);
    }

    #[test]
    fn orbital_only_g_j() {
        // 1P1: pure orbital angular momentum
        assert_eq!(g_j(1.0, 0.0, 1.0), G_L);
    }

    #[test]
    fn lande_3p1() {
        let gj = g_j_with(1.0, 1.0, 1.0, 2.0, 1.0);
        assert!((gj - 1.5).abs() < 1e-15);
    }

    #[test]
    fn g_f_without_nucleus_is_g_j() {
        let gj = g_j(0.0, 0.5, 0.5);
        assert!((g_f(0.0, 0.5, 0.5, gj, 0.0) - gj).abs() < 1e-15);
    }

    #[test]
    fn zero_j_is_nan() {
        assert!(g_j(0.0, 0.5, 0.0).is_nan());
        assert!(g_j(0.0, 0.0, 0.0).is_nan());
    }

    #[test]
    fn zero_f_is_not_finite() {
        let gj = g_j(0.0, 0.5, 0.5);
        let gf = g_f(1.5, 0.5, 0.0, gj, -0.0009951414);
        assert!(!gf.is_finite());
        assert_eq!(gf, f64::NEG_INFINITY);
    }

    #[test]
    fn checked_rejects_vanishing_denominators() {
        assert!(matches!(
            try_g_j(0.0, 0.5, 0.0),
            Err(ZeemanError::UndefinedArithmetic { quantity: "J", .. })
        ));
        // J = -1 also gives J(J + 1) = 0
        assert!(try_g_j(0.0, 0.5, -1.0).is_err());
        assert!(matches!(
            try_g_f(1.5, 0.5, 0.0, G_S, 0.0),
            Err(ZeemanError::UndefinedArithmetic { quantity: "F", .. })
        ));
        assert_eq!(try_g_j(0.0, 0.5, 0.5).unwrap(), g_j(0.0, 0.5, 0.5));
        assert_eq!(
            try_g_f(1.5, 0.5, 2.0, G_S, 0.0).unwrap(),
            g_f(1.5, 0.5, 2.0, G_S, 0.0),
        );
    }
}
