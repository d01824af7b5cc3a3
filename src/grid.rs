//! # Time grid
//!
//! $$
//! \mathbf t=\{i\,t/n\}_{i=\mathbb 1_{\neg\text{zero}}}^{n},\qquad t_0<t_1<\dots<t_{k}
//! $$
//!
//! Validation shared by every sampler in the crate.
use ndarray::Array1;

use crate::error::InvalidParameter;
use crate::error::Result;
use crate::traits::FloatExt;

/// Horizon used when a sampler is built with `t = None`.
pub const DEFAULT_HORIZON: f64 = 1.0;

pub fn check_number<T: FloatExt>(value: T, name: &str) -> Result<()> {
  if !value.is_finite() {
    return Err(InvalidParameter::new(format!(
      "{name} must be a finite number"
    )));
  }

  Ok(())
}

pub fn check_horizon<T: FloatExt>(t: T) -> Result<T> {
  check_number(t, "time horizon")?;
  if t <= T::zero() {
    return Err(InvalidParameter::new("time horizon must be positive"));
  }

  Ok(t)
}

/// Resolves an optional horizon, falling back to [`DEFAULT_HORIZON`].
pub fn resolve_horizon<T: FloatExt>(t: Option<T>) -> Result<T> {
  check_horizon(t.unwrap_or_else(|| T::from_f64_fast(DEFAULT_HORIZON)))
}

pub fn check_steps(n: usize) -> Result<()> {
  if n == 0 {
    return Err(InvalidParameter::new(
      "step count must be a positive integer",
    ));
  }

  Ok(())
}

pub fn check_increasing<T: FloatExt>(times: &[T]) -> Result<()> {
  if times.is_empty() {
    return Err(InvalidParameter::new("time grid must not be empty"));
  }
  if times.iter().any(|s| !s.is_finite()) {
    return Err(InvalidParameter::new("time grid entries must be finite"));
  }
  if times.windows(2).any(|w| w[1] <= w[0]) {
    return Err(InvalidParameter::new(
      "time grid must be strictly increasing",
    ));
  }

  Ok(())
}

/// Uniform grid `i * t / n`, starting at `i = 0` when `zero` is set.
///
/// The last point is exactly `t`.
pub fn uniform<T: FloatExt>(t: T, n: usize, zero: bool) -> Result<Array1<T>> {
  check_steps(n)?;
  let start = if zero { 0 } else { 1 };
  let nf = T::from_usize_(n);
  let mut times = (start..=n)
    .map(|i| T::from_usize_(i) * t / nf)
    .collect::<Array1<T>>();
  if let Some(last) = times.last_mut() {
    *last = t;
  }

  Ok(times)
}
