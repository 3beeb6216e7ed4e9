//! Overridable physical constants.
//!
//! A constants file is a flat TOML table whose keys are any subset of `mu_b`,
//! `h`, `g_s`, and `g_l`; missing keys keep their default values.
//! ```toml
//! mu_b = 9.2740100783e-24
//! g_s = 2.00231930436182
//! ```

use std::path::Path;
use ndarray as nd;
use crate::{
    broadcast::IntoOperand,
    error::{ ZResult, ZeemanError },
    gfactors::{ G_L, G_S, HPLANCK, MU_B, g_j_with },
    zeeman::{ zeeman_frequency_with, zeeman_shift_with },
};

/// Values of the constants entering the g-factor and Zeeman shift formulas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicalConstants {
    /// Bohr magneton [J / T]
    pub mu_b: f64,
    /// Planck constant [J s]
    pub h: f64,
    /// Electron spin g-factor
    pub g_s: f64,
    /// Electron orbital g-factor
    pub g_l: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self { mu_b: MU_B, h: HPLANCK, g_s: G_S, g_l: G_L }
    }
}

impl PhysicalConstants {
    /// Parse overrides from a TOML string.
    pub fn from_toml_str(s: &str) -> ZResult<Self> {
        let table: toml::Table = s.parse()?;
        let mut consts = Self::default();
        for (key, value) in table.iter() {
            let slot
                = match key.as_str() {
                    "mu_b" => &mut consts.mu_b,
                    "h" => &mut consts.h,
                    "g_s" => &mut consts.g_s,
                    "g_l" => &mut consts.g_l,
                    _ => {
                        return Err(ZeemanError::Config(
                            format!("unknown constant '{}'", key)
                        ));
                    },
                };
            *slot
                = value.as_float()
                .or_else(|| value.as_integer().map(|i| i as f64))
                .ok_or_else(|| {
                    ZeemanError::Config(
                        format!("constant '{}' must be a number", key)
                    )
                })?;
            log::debug!("overriding constant {} = {}", key, *slot);
        }
        Ok(consts)
    }

    /// Read overrides from a TOML file.
    pub fn from_toml_file<P>(path: P) -> ZResult<Self>
    where P: AsRef<Path>
    {
        log::debug!("loading constants from {}", path.as_ref().display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Electronic g-factor g<sub>J</sub> with these constants.
    pub fn g_j(&self, L: f64, S: f64, J: f64) -> f64 {
        g_j_with(L, S, J, self.g_s, self.g_l)
    }

    /// Zeeman energy shift with these constants.
    pub fn zeeman_shift<'a, 'b, Fld, Mf>(&self, B: Fld, m_f: Mf, g_f_val: f64)
        -> ZResult<nd::ArrayD<f64>>
    where
        Fld: IntoOperand<'a>,
        Mf: IntoOperand<'b>,
    {
        zeeman_shift_with(B, m_f, g_f_val, self.mu_b)
    }

    /// Zeeman frequency shift with these constants.
    pub fn zeeman_frequency<'a, 'b, Fld, Mf>(
        &self,
        B: Fld,
        m_f: Mf,
        g_f_val: f64,
    ) -> ZResult<nd::ArrayD<f64>>
    where
        Fld: IntoOperand<'a>,
        Mf: IntoOperand<'b>,
    {
        zeeman_frequency_with(B, m_f, g_f_val, self.mu_b, self.h)
    }
}
