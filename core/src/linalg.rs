//! Covariance builders for three-axis noise sources.
//!
//! Public API:
//!     pub fn isotropic_covariance(std: f64) -> Matrix3<f64>
//!     pub fn per_axis_covariance(std: &Vector3<f64>) -> Matrix3<f64>
//!     pub fn vertical_covariance(std: f64) -> Matrix3<f64>
//!     pub fn horizontal_vertical_covariance(std: f64, std_z: f64) -> Matrix3<f64>
//!
//! All builders square the supplied standard deviations and place them on the diagonal.
//! None of them validate their input: a negative standard deviation squares to a valid
//! variance and a NaN propagates into the matrix.

use nalgebra::{Matrix3, Vector3};

/// Variance assigned to axes a sensor does not observe.
///
/// Large but finite so that a filter consuming the matrix can still invert it, while the
/// corresponding innovation is effectively ignored.
pub const UNOBSERVED_VARIANCE: f64 = 1e15;

/// Isotropic covariance `std² · I₃`
///
/// # Arguments
/// * `std` - standard deviation shared by all three axes
///
/// # Returns
/// A diagonal matrix with `std * std` on every diagonal entry.
#[inline]
pub fn isotropic_covariance(std: f64) -> Matrix3<f64> {
    Matrix3::from_diagonal_element(std * std)
}
/// Diagonal covariance from per-axis standard deviations
///
/// # Arguments
/// * `std` - standard deviations of the x, y, and z axes
///
/// # Returns
/// `diag(std[0]², std[1]², std[2]²)`
#[inline]
pub fn per_axis_covariance(std: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::from_diagonal(&std.component_mul(std))
}
/// Covariance of a sensor that only observes the vertical axis (e.g. a pressure depth sensor).
///
/// The horizontal axes receive [UNOBSERVED_VARIANCE], the vertical axis `std²`.
#[inline]
pub fn vertical_covariance(std: f64) -> Matrix3<f64> {
    Matrix3::from_diagonal(&Vector3::new(
        UNOBSERVED_VARIANCE,
        UNOBSERVED_VARIANCE,
        std * std,
    ))
}
/// Covariance with a shared horizontal standard deviation and a separate vertical one.
///
/// # Arguments
/// * `std` - standard deviation of the x and y axes
/// * `std_z` - standard deviation of the z axis
///
/// # Returns
/// `diag(std², std², std_z²)`
#[inline]
pub fn horizontal_vertical_covariance(std: f64, std_z: f64) -> Matrix3<f64> {
    Matrix3::from_diagonal(&Vector3::new(std * std, std * std, std_z * std_z))
}
