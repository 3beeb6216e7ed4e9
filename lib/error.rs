//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZeemanError {
    /// A g-factor denominator `X(X + 1)` vanished.
    #[error("undefined arithmetic: {quantity} = {value} makes the {factor} denominator vanish")]
    UndefinedArithmetic {
        factor: &'static str,
        quantity: &'static str,
        value: f64,
    },

    /// Two operands could not be broadcast to a common shape.
    #[error("operands could not be broadcast together with shapes {lhs:?} and {rhs:?}")]
    Broadcast { lhs: Vec<usize>, rhs: Vec<usize> },

    #[error("F = {f} is not a hyperfine level of {level}")]
    InvalidHyperfineLevel { level: String, f: f64 },

    #[error("m_F = {m} is not a projection of F = {f}")]
    InvalidProjection { f: f64, m: f64 },

    #[error("unknown isotope '{0}'")]
    UnknownIsotope(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ZResult<T> = Result<T, ZeemanError>;
