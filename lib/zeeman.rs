//! Linear (weak-field) Zeeman shifts of hyperfine sublevels.
//!
//! Field strengths `B` are in Tesla, energies in Joules and frequencies in Hz.
//! `B` and `m_F` may each be a scalar or an array of any shape; see
//! [`broadcast`][crate::broadcast] for how they are combined.

use ndarray as nd;
use crate::{
    broadcast::{ IntoOperand, zip_broadcast },
    error::ZResult,
    gfactors::{ HPLANCK, MU_B },
};

/// Zeeman energy shift `ΔE = μ_B g_F B m_F` using [`MU_B`].
pub fn zeeman_shift<'a, 'b, Fld, Mf>(B: Fld, m_f: Mf, g_f_val: f64)
    -> ZResult<nd::ArrayD<f64>>
where
    Fld: IntoOperand<'a>,
    Mf: IntoOperand<'b>,
{
    zeeman_shift_with(B, m_f, g_f_val, MU_B)
}

/// Like [`zeeman_shift`], but with an explicit Bohr magneton.
pub fn zeeman_shift_with<'a, 'b, Fld, Mf>(
    B: Fld,
    m_f: Mf,
    g_f_val: f64,
    mu_b: f64,
) -> ZResult<nd::ArrayD<f64>>
where
    Fld: IntoOperand<'a>,
    Mf: IntoOperand<'b>,
{
    zip_broadcast(B, m_f, |b, m| shift_at_with(b, m, g_f_val, mu_b))
}

/// Zeeman frequency shift `Δν = ΔE / h` using [`MU_B`] and [`HPLANCK`].
pub fn zeeman_frequency<'a, 'b, Fld, Mf>(B: Fld, m_f: Mf, g_f_val: f64)
    -> ZResult<nd::ArrayD<f64>>
where
    Fld: IntoOperand<'a>,
    Mf: IntoOperand<'b>,
{
    zeeman_frequency_with(B, m_f, g_f_val, MU_B, HPLANCK)
}

/// Like [`zeeman_frequency`], but with an explicit Bohr magneton and Planck
/// constant.
pub fn zeeman_frequency_with<'a, 'b, Fld, Mf>(
    B: Fld,
    m_f: Mf,
    g_f_val: f64,
    mu_b: f64,
    h: f64,
) -> ZResult<nd::ArrayD<f64>>
where
    Fld: IntoOperand<'a>,
    Mf: IntoOperand<'b>,
{
    zeeman_shift_with(B, m_f, g_f_val, mu_b).map(|dE| dE / h)
}

/// Scalar Zeeman energy shift.
///
/// Evaluated in the same order as [`zeeman_shift`], so the two agree exactly.
pub fn shift_at(B: f64, m_f: f64, g_f_val: f64) -> f64 {
    shift_at_with(B, m_f, g_f_val, MU_B)
}

/// Like [`shift_at`], but with an explicit Bohr magneton.
pub fn shift_at_with(B: f64, m_f: f64, g_f_val: f64, mu_b: f64) -> f64 {
    mu_b * g_f_val * B * m_f
}

/// Scalar Zeeman frequency shift.
pub fn frequency_at(B: f64, m_f: f64, g_f_val: f64) -> f64 {
    frequency_at_with(B, m_f, g_f_val, MU_B, HPLANCK)
}

/// Like [`frequency_at`], but with an explicit Bohr magneton and Planck
/// constant.
pub fn frequency_at_with(B: f64, m_f: f64, g_f_val: f64, mu_b: f64, h: f64)
    -> f64
{
    shift_at_with(B, m_f, g_f_val, mu_b) / h
}
