use thiserror::Error;

/// Failure modes of the forecast model.
///
/// These are the only errors the core recognises; malformed raw input is
/// rejected by the prompting layer before it gets here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    #[error("insufficient data: the {which} sample is empty")]
    EmptySample { which: &'static str },

    #[error("degenerate distribution: pooled standard deviation is zero")]
    ZeroSpread,

    #[error("degenerate distribution: joint probability mass sums to zero")]
    ZeroMass,
}
