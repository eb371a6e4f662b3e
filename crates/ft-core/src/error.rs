//! Framework error type.
//!
//! Sub-crates either convert into `FtError` or wrap it as one variant of
//! their own enum (`ft-sim` does the latter).

use thiserror::Error;

/// The top-level error type for `ft-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FtError {
    /// A numeric input is outside its domain.  Rejected at construction time;
    /// the model never sees out-of-domain values.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name:   &'static str,
        value:  f64,
        reason: &'static str,
    },
}

impl FtError {
    /// Shorthand for [`FtError::InvalidParameter`].
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        FtError::InvalidParameter { name, value, reason }
    }
}

/// Shorthand result type for all `ft-*` crates.
pub type FtResult<T> = Result<T, FtError>;
