//! # Brownian bridge
//!
//! $$
//! B_s=W_s-\frac{s-s_0}{S-s_0}\,W_S,\qquad B_{s_0}=B_S=0
//! $$
//!
use std::fmt;

use ndarray::s;
use ndarray::Array1;
use rand::Rng;
use tracing::trace;

use super::bm::BM;
use crate::error::Result;
use crate::grid;
use crate::traits::BridgeSource;
use crate::traits::FloatExt;

/// Brownian bridge pinned to 0 at both ends of its grid.
#[derive(Copy, Clone, Debug)]
pub struct BrownianBridge<T: FloatExt> {
  bm: BM<T>,
}

impl<T: FloatExt> BrownianBridge<T> {
  pub fn new(t: Option<T>) -> Result<Self> {
    Ok(Self { bm: BM::new(t)? })
  }

  pub fn t(&self) -> T {
    self.bm.t
  }
}

/// Pins `path` to 0 at the last grid point, measuring time from `times[0]`.
fn pin<T: FloatExt>(path: &mut Array1<T>, times: &[T]) {
  let (Some(&first), Some(&last), Some(&end)) = (times.first(), times.last(), path.last()) else {
    return;
  };
  let span = last - first;
  if span <= T::zero() {
    path.fill(T::zero());
    return;
  }

  for (x, &s) in path.iter_mut().zip(times) {
    *x -= (s - first) / span * end;
  }
}

impl<T: FloatExt> BridgeSource<T> for BrownianBridge<T> {
  fn horizon(&self) -> T {
    self.bm.t
  }

  fn bridge_sample<R: Rng + ?Sized>(
    &self,
    rng: &mut R,
    n: usize,
    zero: bool,
  ) -> Result<Array1<T>> {
    let times = grid::uniform(self.bm.t, n, true)?;
    let mut bridge = self.bm.sample(rng, n, true)?;
    pin(&mut bridge, times.as_slice().unwrap_or(&[]));
    trace!(n, zero, "brownian bridge realization");

    Ok(if zero {
      bridge
    } else {
      bridge.slice(s![1..]).to_owned()
    })
  }

  fn bridge_sample_at<R: Rng + ?Sized>(&self, rng: &mut R, times: &[T]) -> Result<Array1<T>> {
    self.check_times(times)?;
    let mut bridge = self.bm.sample_at(rng, times)?;
    pin(&mut bridge, times);
    trace!(len = times.len(), "brownian bridge realization on custom grid");

    Ok(bridge)
  }
}

impl<T: FloatExt> fmt::Display for BrownianBridge<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Brownian bridge on [0, {}]", self.bm.t)
  }
}
