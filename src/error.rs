//! # Error
//!
//! $$
//! \text{validate}:\ (t,n,b,\mathbf t)\mapsto \text{Ok}\ \vert\ \text{InvalidParameter}
//! $$
//!
use thiserror::Error;

/// Rejected sampler input. Raised before any randomness is consumed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid parameter: {cause}")]
pub struct InvalidParameter {
  /// Human readable reason for the rejection.
  pub cause: String,
}

impl InvalidParameter {
  pub fn new(cause: impl Into<String>) -> Self {
    Self {
      cause: cause.into(),
    }
  }
}

pub type Result<T> = std::result::Result<T, InvalidParameter>;
