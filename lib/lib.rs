#![allow(non_snake_case)]

//! Landé g-factors and Zeeman shifts of hyperfine atomic levels.
//!
//! The basic chain is [`g_j`] → [`g_f`] → [`zeeman_shift`] →
//! [`zeeman_frequency`], with ground-state shortcuts for <sup>87</sup>Rb and
//! <sup>85</sup>Rb in [`rubidium`]. Everything is pure and stateless.

pub mod error;
pub mod utils;
pub mod spin;
pub mod gfactors;
pub mod broadcast;
pub mod zeeman;
pub mod hyperfine;
pub mod rubidium;
pub mod breit_rabi;
pub mod config;

pub use ndarray_npy;

pub use error::{ ZResult, ZeemanError };
pub use gfactors::{
    G_L,
    G_S,
    HPLANCK,
    MU_B,
    g_f,
    g_j,
    g_j_with,
    try_g_f,
    try_g_j,
};
pub use zeeman::{
    frequency_at,
    shift_at,
    zeeman_frequency,
    zeeman_frequency_with,
    zeeman_shift,
    zeeman_shift_with,
};
pub use rubidium::{
    G_I_RB85,
    G_I_RB87,
    I_RB85,
    I_RB87,
    Isotope,
    rb85_ground_gf,
    rb87_ground_gf,
};
pub use hyperfine::HyperfineLevel;
pub use breit_rabi::{
    BreitRabi,
    breit_rabi_frequency,
    breit_rabi_frequency_with,
};
pub use config::PhysicalConstants;
