//! # Traits
//!
//! $$
//! \text{Trait contracts: }\mathcal{A}:\text{inputs}\to\text{samples}
//! $$
//!
use std::fmt::Debug;
use std::fmt::Display;
use std::ops::AddAssign;
use std::ops::SubAssign;

use ndarray::Array1;
use ndarray::ScalarOperand;
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::Exp1;
use rand_distr::StandardNormal;
use rayon::prelude::*;

use crate::error::Result;
use crate::grid;

pub trait FloatExt:
  num_traits::Float
  + Debug
  + Display
  + Send
  + Sync
  + ScalarOperand
  + AddAssign
  + SubAssign
  + 'static
{
  fn from_usize_(n: usize) -> Self;
  fn from_f64_fast(v: f64) -> Self;
  /// One draw from `Exp(1)`.
  fn standard_exp<R: Rng + ?Sized>(rng: &mut R) -> Self;
  /// `n` independent draws from `N(0, std_dev^2)`.
  fn normal_array<R: Rng + ?Sized>(n: usize, std_dev: Self, rng: &mut R) -> Array1<Self>;
}

impl FloatExt for f64 {
  fn from_usize_(n: usize) -> Self {
    n as f64
  }

  fn from_f64_fast(v: f64) -> Self {
    v
  }

  fn standard_exp<R: Rng + ?Sized>(rng: &mut R) -> Self {
    rng.sample(Exp1)
  }

  fn normal_array<R: Rng + ?Sized>(n: usize, std_dev: Self, rng: &mut R) -> Array1<Self> {
    Array1::<Self>::random_using(n, StandardNormal, rng) * std_dev
  }
}

impl FloatExt for f32 {
  fn from_usize_(n: usize) -> Self {
    n as f32
  }

  fn from_f64_fast(v: f64) -> Self {
    v as f32
  }

  fn standard_exp<R: Rng + ?Sized>(rng: &mut R) -> Self {
    rng.sample(Exp1)
  }

  fn normal_array<R: Rng + ?Sized>(n: usize, std_dev: Self, rng: &mut R) -> Array1<Self> {
    Array1::<Self>::random_using(n, StandardNormal, rng) * std_dev
  }
}

pub trait ProcessExt<T: FloatExt>: Send + Sync {
  type Output: Send;

  fn sample(&self) -> Self::Output;

  fn sample_par(&self, m: usize) -> Vec<Self::Output> {
    (0..m).into_par_iter().map(|_| self.sample()).collect()
  }
}

/// Source of zero-endpoint Brownian bridge realizations.
///
/// Every call must be independent of every other call.
pub trait BridgeSource<T: FloatExt>: Send + Sync {
  /// Right endpoint of `[0, t]` for uniform-grid draws.
  fn horizon(&self) -> T;

  /// Grid check applied by [`BridgeSource::bridge_sample_at`].
  fn check_times(&self, times: &[T]) -> Result<()> {
    grid::check_increasing(times)
  }

  /// Bridge on `n` equal steps of `[0, horizon]`, length `n + zero as usize`.
  fn bridge_sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize, zero: bool)
    -> Result<Array1<T>>;

  /// Bridge over `times`, pinned to 0 at the first and last entry.
  fn bridge_sample_at<R: Rng + ?Sized>(&self, rng: &mut R, times: &[T]) -> Result<Array1<T>>;
}
