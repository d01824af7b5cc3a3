//! # Gn
//!
//! $$
//! \Delta W_i\sim\mathcal N(0,\ t_{i+1}-t_i)\ \text{i.i.d.}
//! $$
//!
use ndarray::Array1;
use rand::Rng;

use crate::traits::FloatExt;

/// Gaussian increments of a standard Brownian motion.
#[derive(Copy, Clone, Debug)]
pub struct Gn<T: FloatExt> {
  /// Number of increments.
  pub n: usize,
  /// Horizon the `n` increments span.
  pub t: T,
}

impl<T: FloatExt> Gn<T> {
  pub fn new(n: usize, t: T) -> Self {
    Gn { n, t }
  }

  pub fn dt(&self) -> T {
    self.t / T::from_usize_(self.n)
  }

  /// `n` increments, each with variance `t / n`.
  pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<T> {
    T::normal_array(self.n, self.dt().sqrt(), rng)
  }

  /// One increment per consecutive pair of `times`, variance equal to the gap.
  pub fn sample_at<R: Rng + ?Sized>(rng: &mut R, times: &[T]) -> Array1<T> {
    let mut out = T::normal_array(times.len().saturating_sub(1), T::one(), rng);
    for (x, w) in out.iter_mut().zip(times.windows(2)) {
      *x = *x * (w[1] - w[0]).sqrt();
    }
    out
  }
}
