//! # Bm
//!
//! $$
//! W_{t_{i+1}}=W_{t_i}+\sqrt{t_{i+1}-t_i}\,Z_i,\qquad W_{t_0}=0
//! $$
//!
use std::fmt;

use ndarray::Array1;
use ndarray::s;
use rand::Rng;

use crate::error::Result;
use crate::grid;
use crate::stochastic::noise::gn::Gn;
use crate::traits::FloatExt;

#[derive(Copy, Clone, Debug)]
pub struct BM<T: FloatExt> {
  /// Right endpoint of `[0, t]`.
  pub t: T,
}

impl<T: FloatExt> BM<T> {
  pub fn new(t: Option<T>) -> Result<Self> {
    Ok(Self {
      t: grid::resolve_horizon(t)?,
    })
  }

  /// Path on `n` equal steps of `[0, t]`, starting at 0.
  pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize, zero: bool) -> Result<Array1<T>> {
    grid::check_steps(n)?;
    let gn = Gn::new(n, self.t).sample(rng);
    let bm = cumulate(&gn);

    Ok(if zero { bm } else { bm.slice(s![1..]).to_owned() })
  }

  /// Path over `times`, equal to 0 at `times[0]`.
  pub fn sample_at<R: Rng + ?Sized>(&self, rng: &mut R, times: &[T]) -> Result<Array1<T>> {
    grid::check_increasing(times)?;
    Ok(cumulate(&Gn::sample_at(rng, times)))
  }
}

/// Partial sums of `increments` with a leading 0.
pub(crate) fn cumulate<T: FloatExt>(increments: &Array1<T>) -> Array1<T> {
  let mut bm = Array1::<T>::zeros(increments.len() + 1);

  for i in 1..bm.len() {
    bm[i] = bm[i - 1] + increments[i - 1];
  }

  bm
}

impl<T: FloatExt> fmt::Display for BM<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Brownian motion on [0, {}]", self.t)
  }
}
