//! Noise parameters for invariant extended Kalman navigation filters
//!
//! This crate provides the noise model consumed by an invariant extended Kalman filter (InEKF) for
//! inertial, visual, acoustic, and legged navigation. The filter itself (propagation, update, state
//! representation, Lie group math) lives elsewhere; this crate is only the canonical holder of the
//! 3×3 noise covariances it reads.
//!
//! Primarily built off of two crate dependencies:
//! - [`nalgebra`](https://crates.io/crates/nalgebra): Provides the fixed-size matrix and vector types.
//! - [`serde`](https://crates.io/crates/serde): Allows the parameters to be embedded in a filter's own configuration.
//!
//! ## Crate overview
//!
//! This crate is organized into several modules:
//! - [noise]: Contains [NoiseParams], the container of the nine noise covariances, and [NoiseSource].
//! - [linalg]: Contains the covariance builders used by the setters.
//! - [quality]: Contains typical IMU noise figures by sensor grade.
//! - [config]: Contains a serializable description of a [NoiseParams] instance.
//!
//! ## Noise sources
//!
//! Each covariance describes the noise of a three-dimensional quantity:
//!
//! $$
//! Q = \begin{bmatrix} \sigma_x^2 & 0 & 0 \\\\ 0 & \sigma_y^2 & 0 \\\\ 0 & 0 & \sigma_z^2 \end{bmatrix}
//! $$
//!
//! when built from standard deviations, or any matrix the user supplies directly. Two sources are
//! special. A depth sensor only observes the vertical axis, so its scalar setter assigns a very large
//! variance (`1e15`) to the horizontal axes. A Doppler velocity log is set from a horizontal and a
//! vertical standard deviation instead of a single one.
//!
//! No setter validates its input. Symmetry and positive semi-definiteness of a supplied covariance are
//! the responsibility of the caller, and a negative standard deviation simply squares to a valid
//! variance.
//!
//! ## Logging
//!
//! The crate emits records through the [`log`](https://crates.io/crates/log) facade: `trace` for every
//! covariance overwrite and `debug` when a [config::NoiseConfig] is applied. Installing a logger is
//! left to the application.
//!
//! # Example
//! ```rust
//! use inekf_noise::{NoiseParams, NoiseSource};
//! use nalgebra::Vector3;
//!
//! let mut params = NoiseParams::default();
//! params.set_accelerometer_noise_per_axis(&Vector3::new(0.05, 0.05, 0.1));
//! params.set_depth_noise(0.02);
//!
//! let depth = params.get_covariance(NoiseSource::Depth);
//! assert_eq!(depth[(0, 0)], 1e15);
//! ```
pub mod config;
pub mod error;
pub mod linalg;
pub mod noise;
pub mod quality;

pub use crate::config::{DvlNoiseSpec, NoiseConfig, NoiseSpec};
pub use crate::error::NoiseError;
pub use crate::noise::{NoiseParams, NoiseSource};
pub use crate::quality::ImuQuality;
