//! # Brownian meander
//!
//! $$
//! M_s=\sqrt{\Big(\frac{b\,s}{t}+B^{(1)}_s\Big)^2+\big(B^{(2)}_s\big)^2+\big(B^{(3)}_s\big)^2},
//! \qquad b=\sqrt{2E},\ E\sim\mathrm{Exp}(1)
//! $$
//!
//! Brownian motion conditioned to stay nonnegative on `[0, t]`, built from three
//! independent Brownian bridges (Williams 1970, Imhof 1984). When the terminal
//! value `b` is not given it is drawn from the Rayleigh law of the meander's
//! endpoint.
use std::fmt;

use ndarray::Array1;
use rand::Rng;
use tracing::debug;
use tracing::trace;

use super::bridge::BrownianBridge;
use crate::error::InvalidParameter;
use crate::error::Result;
use crate::grid;
use crate::traits::BridgeSource;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;

#[derive(Clone, Debug)]
pub struct BrownianMeander<T: FloatExt, B: BridgeSource<T> = BrownianBridge<T>> {
  t: T,
  bridge: B,
}

impl<T: FloatExt> BrownianMeander<T> {
  /// Meander on `[0, t]` (`t` defaults to `1`) backed by [`BrownianBridge`].
  pub fn new(t: Option<T>) -> Result<Self> {
    Self::with_bridge(BrownianBridge::new(t)?)
  }
}

impl<T: FloatExt, B: BridgeSource<T>> BrownianMeander<T, B> {
  /// Meander sharing the horizon of `bridge`.
  pub fn with_bridge(bridge: B) -> Result<Self> {
    let t = grid::check_horizon(bridge.horizon())?;
    debug!(%t, "brownian meander sampler created");

    Ok(Self { t, bridge })
  }

  pub fn t(&self) -> T {
    self.t
  }

  pub fn bridge(&self) -> &B {
    &self.bridge
  }

  /// Grid used by [`BrownianMeander::sample`].
  pub fn times(&self, n: usize, zero: bool) -> Result<Array1<T>> {
    grid::uniform(self.t, n, zero)
  }

  /// Realization on `n` equal steps of `[0, t]`.
  ///
  /// The conditioning term is normalized by the sampler's horizon `t`.
  pub fn sample<R: Rng + ?Sized>(
    &self,
    rng: &mut R,
    n: usize,
    b: Option<T>,
    zero: bool,
  ) -> Result<Array1<T>> {
    check_terminal(b)?;
    let times = self.times(n, zero)?;
    let b = resolve_terminal(rng, b);

    let bridges = [
      self.bridge.bridge_sample(rng, n, zero)?,
      self.bridge.bridge_sample(rng, n, zero)?,
      self.bridge.bridge_sample(rng, n, zero)?,
    ];
    trace!(n, zero, %b, "brownian meander realization");

    combine(&times, self.t, b, bridges)
  }

  /// Realization over the caller's `times`.
  ///
  /// The conditioning term is normalized by `times[times.len() - 1]`, never by
  /// the sampler's horizon.
  pub fn sample_at<R: Rng + ?Sized>(
    &self,
    rng: &mut R,
    times: &[T],
    b: Option<T>,
  ) -> Result<Array1<T>> {
    check_terminal(b)?;
    self.bridge.check_times(times)?;
    let b = resolve_terminal(rng, b);

    let bridges = [
      self.bridge.bridge_sample_at(rng, times)?,
      self.bridge.bridge_sample_at(rng, times)?,
      self.bridge.bridge_sample_at(rng, times)?,
    ];
    let horizon = times.last().copied().unwrap_or_else(T::zero);
    trace!(len = times.len(), %b, "brownian meander realization on custom grid");

    combine(&Array1::from(times.to_vec()), horizon, b, bridges)
  }

  /// Batch configuration for [`ProcessExt::sample_par`].
  pub fn paths(self, n: usize, b: Option<T>, zero: bool) -> Result<MeanderPaths<T, B>> {
    check_terminal(b)?;
    grid::check_steps(n)?;

    Ok(MeanderPaths {
      meander: self,
      n,
      b,
      zero,
    })
  }
}

fn check_terminal<T: FloatExt>(b: Option<T>) -> Result<()> {
  let Some(b) = b else {
    return Ok(());
  };
  grid::check_number(b, "right endpoint")?;
  if b < T::zero() {
    return Err(InvalidParameter::new("right endpoint must be nonnegative"));
  }

  Ok(())
}

/// `b` as given, or `sqrt(2 E)` with `E ~ Exp(1)`.
fn resolve_terminal<T: FloatExt, R: Rng + ?Sized>(rng: &mut R, b: Option<T>) -> T {
  match b {
    Some(b) => b,
    None => {
      let b = (T::from_f64_fast(2.0) * T::standard_exp(rng)).sqrt();
      trace!(%b, "drew meander terminal value");
      b
    }
  }
}

fn combine<T: FloatExt>(
  times: &Array1<T>,
  horizon: T,
  b: T,
  bridges: [Array1<T>; 3],
) -> Result<Array1<T>> {
  let [mut out, b2, b3] = bridges;
  if [out.len(), b2.len(), b3.len()]
    .iter()
    .any(|&len| len != times.len())
  {
    return Err(InvalidParameter::new(format!(
      "bridge realization length does not match the {} point time grid",
      times.len()
    )));
  }

  for i in 0..out.len() {
    let drift = if horizon == T::zero() {
      T::zero()
    } else {
      b * times[i] / horizon
    };
    let x = drift + out[i];
    out[i] = (x * x + b2[i] * b2[i] + b3[i] * b3[i]).sqrt();
  }

  Ok(out)
}

impl<T: FloatExt, B: BridgeSource<T>> fmt::Display for BrownianMeander<T, B> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Brownian meander on [0, {}]", self.t)
  }
}

/// Validated meander request, sampled with the thread-local generator.
#[derive(Clone, Debug)]
pub struct MeanderPaths<T: FloatExt, B: BridgeSource<T> = BrownianBridge<T>> {
  pub meander: BrownianMeander<T, B>,
  pub n: usize,
  pub b: Option<T>,
  pub zero: bool,
}

impl<T: FloatExt, B: BridgeSource<T>> ProcessExt<T> for MeanderPaths<T, B> {
  type Output = Result<Array1<T>>;

  fn sample(&self) -> Self::Output {
    let mut rng = rand::thread_rng();
    self.meander.sample(&mut rng, self.n, self.b, self.zero)
  }
}
