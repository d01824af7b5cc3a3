//! # stochastic-meander
//!
//! $$
//! M_s=\sqrt{\big(b\,s/t+B^{(1)}_s\big)^2+\big(B^{(2)}_s\big)^2+\big(B^{(3)}_s\big)^2}
//! $$
//!
//! Samplers for Brownian motion, the Brownian bridge and the Brownian meander on
//! uniform or caller supplied time grids.
//!
//! | Module         | Description                                                        |
//! |----------------|--------------------------------------------------------------------|
//! | [`error`]      | The single [`InvalidParameter`] error kind.                        |
//! | [`grid`]       | Time grid construction and validation shared by every sampler.     |
//! | [`traits`]     | Float abstraction, process and bridge source contracts.            |
//! | [`stochastic`] | Gaussian noise, Brownian motion, bridge and meander samplers.      |
//!
//! Randomness is always injected: every sampling call takes `&mut impl Rng`.
//! [`ProcessExt::sample_par`] draws batches in parallel with `rayon`, each
//! worker using its thread-local generator.
//!
//! ```rust
//! use rand::SeedableRng;
//! use stochastic_meander::BrownianMeander;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let meander = BrownianMeander::<f64>::new(Some(1.0))?;
//! let path = meander.sample(&mut rng, 1000, None, true)?;
//! ```

pub mod error;
pub mod grid;
pub mod stochastic;
pub mod traits;

pub use error::InvalidParameter;
pub use grid::DEFAULT_HORIZON;
pub use stochastic::process::bm::BM;
pub use stochastic::process::bridge::BrownianBridge;
pub use stochastic::process::meander::BrownianMeander;
pub use stochastic::process::meander::MeanderPaths;
pub use traits::BridgeSource;
pub use traits::FloatExt;
pub use traits::ProcessExt;
