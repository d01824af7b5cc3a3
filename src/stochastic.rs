//! # Stochastic processes
//!
//! | Module      | Description                                                         |
//! |-------------|---------------------------------------------------------------------|
//! | [`noise`]   | Gaussian increments on uniform and arbitrary grids.                 |
//! | [`process`] | Brownian motion, Brownian bridge and Brownian meander samplers.     |

pub mod noise;
pub mod process;
