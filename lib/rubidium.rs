//! Convenience definitions for the 5S<sub>1/2</sub> ground states of
//! <sup>87</sup>Rb and <sup>85</sup>Rb.

use std::{ fmt, str::FromStr };
use crate::{
    config::PhysicalConstants,
    error::{ ZResult, ZeemanError },
    gfactors::g_f,
    hyperfine::HyperfineLevel,
};

// nuclear spins
pub const I_RB87: f64 = 3.0 / 2.0;
pub const I_RB85: f64 = 5.0 / 2.0;

// nuclear g-factors [dimensionless] (CODATA 2018)
pub const G_I_RB87: f64 = -0.0009951414;
pub const G_I_RB85: f64 = -0.0002936400;

// ground-state hyperfine splittings [Hz]
pub const HFS_RB87: f64 = 6_834_682_610.904_29;
pub const HFS_RB85: f64 = 3_035_732_439.0;

// 5S1/2
const L_GROUND: f64 = 0.0;
const S_GROUND: f64 = 0.5;
const J_GROUND: f64 = 0.5;

/// g<sub>F</sub> of the <sup>87</sup>Rb ground state.
///
/// Physical levels are `F = 1, 2`, but any `F` is accepted.
pub fn rb87_ground_gf(F: impl Into<f64>) -> f64 {
    Isotope::Rb87.ground_gf(F.into())
}

/// g<sub>F</sub> of the <sup>85</sup>Rb ground state.
///
/// Physical levels are `F = 2, 3`, but any `F` is accepted.
pub fn rb85_ground_gf(F: impl Into<f64>) -> f64 {
    Isotope::Rb85.ground_gf(F.into())
}

/// A Rubidium isotope.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Isotope {
    Rb87,
    Rb85,
}

impl Isotope {
    /// Nuclear spin I.
    pub fn nuclear_spin(self) -> f64 {
        match self {
            Self::Rb87 => I_RB87,
            Self::Rb85 => I_RB85,
        }
    }

    /// Nuclear g-factor g<sub>I</sub>.
    pub fn nuclear_g(self) -> f64 {
        match self {
            Self::Rb87 => G_I_RB87,
            Self::Rb85 => G_I_RB85,
        }
    }

    /// Ground-state hyperfine splitting, in Hz.
    pub fn hyperfine_splitting(self) -> f64 {
        match self {
            Self::Rb87 => HFS_RB87,
            Self::Rb85 => HFS_RB85,
        }
    }

    /// The two ground-state hyperfine levels `F = I ∓ 1/2`, lower first.
    pub fn hyperfine_levels(self) -> [f64; 2] {
        let I = self.nuclear_spin();
        [I - J_GROUND, I + J_GROUND]
    }

    /// Electronic g-factor g<sub>J</sub> of the 5S<sub>1/2</sub> state.
    pub fn ground_gj(self) -> f64 {
        self.ground_gj_with(&PhysicalConstants::default())
    }

    /// Like [`Self::ground_gj`], but with the electron g-factors taken from
    /// `consts`.
    pub fn ground_gj_with(self, consts: &PhysicalConstants) -> f64 {
        consts.g_j(L_GROUND, S_GROUND, J_GROUND)
    }

    /// g<sub>F</sub> of the ground state for any `F`, without validation.
    pub fn ground_gf(self, F: f64) -> f64 {
        self.ground_gf_with(F, &PhysicalConstants::default())
    }

    /// Like [`Self::ground_gf`], but with the electron g-factors taken from
    /// `consts`.
    pub fn ground_gf_with(self, F: f64, consts: &PhysicalConstants) -> f64 {
        g_f(
            self.nuclear_spin(),
            J_GROUND,
            F,
            self.ground_gj_with(consts),
            self.nuclear_g(),
        )
    }

    /// Fail with [`ZeemanError::InvalidHyperfineLevel`] unless `F` is one of
    /// [`Self::hyperfine_levels`].
    pub fn check_level(self, F: f64) -> ZResult<()> {
        if self.hyperfine_levels().contains(&F) {
            Ok(())
        } else {
            log::debug!("rejecting F = {} for the {} ground state", F, self);
            Err(ZeemanError::InvalidHyperfineLevel {
                level: format!("the {} ground state", self),
                f: F,
            })
        }
    }

    /// g<sub>F</sub> of the ground state, checking that `F` is a physical
    /// hyperfine level.
    pub fn ground_gf_checked(self, F: f64) -> ZResult<f64> {
        self.check_level(F)?;
        Ok(self.ground_gf(F))
    }

    /// The ground-state [`HyperfineLevel`] with total angular momentum `F`.
    pub fn ground_level(self, F: f64) -> ZResult<HyperfineLevel> {
        self.check_level(F)?;
        HyperfineLevel::new_checked(
            self.nuclear_spin(),
            J_GROUND,
            F,
            self.ground_gj(),
            self.nuclear_g(),
        )
    }

    /// Both ground-state hyperfine levels, lower first.
    pub fn ground_levels(self) -> [HyperfineLevel; 2] {
        self.ground_levels_with(&PhysicalConstants::default())
    }

    /// Like [`Self::ground_levels`], but with g<sub>J</sub> computed from
    /// `consts`.
    pub fn ground_levels_with(self, consts: &PhysicalConstants)
        -> [HyperfineLevel; 2]
    {
        let g_j = self.ground_gj_with(consts);
        self.hyperfine_levels()
            .map(|F| {
                HyperfineLevel::new(
                    self.nuclear_spin(),
                    J_GROUND,
                    F,
                    g_j,
                    self.nuclear_g(),
                )
            })
    }
}

impl fmt::Display for Isotope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rb87 => write!(f, "87Rb"),
            Self::Rb85 => write!(f, "85Rb"),
        }
    }
}

impl FromStr for Isotope {
    type Err = ZeemanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rb87" | "87rb" | "rb-87" => Ok(Self::Rb87),
            "rb85" | "85rb" | "rb-85" => Ok(Self::Rb85),
            _ => Err(ZeemanError::UnknownIsotope(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_almost_eq(a: f64, b: f64, places: i32) {
        let tol = 0.5 * 10.0_f64.powi(-places);
        assert!((a - b).abs() < tol, "{a} != {b} to {places} places");
    }

    #[test]
    fn rb87_gf() {
        assert_almost_eq(rb87_ground_gf(1), -0.5018, 4);
        assert_almost_eq(rb87_ground_gf(2), 0.4998, 4);
    }

    #[test]
    fn rb85_gf() {
        assert_almost_eq(rb85_ground_gf(2), -0.3341, 4);
        assert_almost_eq(rb85_ground_gf(3), 0.3335, 4);
    }

    #[test]
    fn unphysical_f_is_accepted() {
        let gf = rb87_ground_gf(3);
        assert!(gf.is_finite());
        assert!(rb87_ground_gf(0).is_infinite());
        assert!(Isotope::Rb87.ground_gf_checked(3.0).is_err());
        assert!(Isotope::Rb85.ground_gf_checked(1.0).is_err());
        assert_eq!(
            Isotope::Rb85.ground_gf_checked(3.0).unwrap(),
            rb85_ground_gf(3),
        );
    }

    #[test]
    fn levels() {
        assert_eq!(Isotope::Rb87.hyperfine_levels(), [1.0, 2.0]);
        assert_eq!(Isotope::Rb85.hyperfine_levels(), [2.0, 3.0]);
        let [lo, hi] = Isotope::Rb87.ground_levels();
        assert_eq!(lo.g_f(), rb87_ground_gf(1));
        assert_eq!(hi.g_f(), rb87_ground_gf(2));
        assert_eq!(Isotope::Rb87.ground_level(2.0).unwrap(), hi);
        assert!(Isotope::Rb87.ground_level(0.0).is_err());
    }

    #[test]
    fn overridden_electron_g_factor() {
        let consts = PhysicalConstants { g_s: 2.0, ..Default::default() };
        assert_eq!(Isotope::Rb87.ground_gj_with(&consts), 2.0);
        let gf = Isotope::Rb87.ground_gf_with(2.0, &consts);
        assert_eq!(gf, g_f(I_RB87, 0.5, 2.0, 2.0, G_I_RB87));
        assert!((gf - rb87_ground_gf(2)).abs() > 1e-4);
        let [_, hi] = Isotope::Rb87.ground_levels_with(&consts);
        assert_eq!(hi.g_f(), gf);
        assert_eq!(
            Isotope::Rb85.ground_gf_with(3.0, &PhysicalConstants::default()),
            rb85_ground_gf(3),
        );
    }

    #[test]
    fn names() {
        assert_eq!("Rb87".parse::<Isotope>().unwrap(), Isotope::Rb87);
        assert_eq!(" 85Rb".parse::<Isotope>().unwrap(), Isotope::Rb85);
        assert_eq!(Isotope::Rb85.to_string(), "85Rb");
        assert!(matches!(
            "Cs133".parse::<Isotope>(),
            Err(ZeemanError::UnknownIsotope(_))
        ));
    }
}
