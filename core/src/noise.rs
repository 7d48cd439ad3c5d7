//! Noise covariance container for invariant extended Kalman navigation filters.
//!
//! [NoiseParams] holds one 3×3 covariance matrix per noise source the filter consumes. Each matrix
//! can be set from a single standard deviation, from per-axis standard deviations, or verbatim from a
//! full covariance matrix, and is read back as a full matrix copy.
//!
//! | Source             | Default                      | Scalar setter semantics            |
//! |--------------------|------------------------------|------------------------------------|
//! | Gyroscope          | 0.01² · I₃                   | isotropic                          |
//! | Accelerometer      | 0.1² · I₃                    | isotropic                          |
//! | Gyroscope bias     | (1e-5)² · I₃                 | isotropic                          |
//! | Accelerometer bias | (1e-4)² · I₃                 | isotropic                          |
//! | Landmark           | 0.1² · I₃                    | isotropic                          |
//! | Contact            | 0.1² · I₃                    | isotropic                          |
//! | GPS                | 0.1² · I₃                    | isotropic                          |
//! | Depth              | diag(1e15, 1e15, 0.1²)       | vertical axis only                 |
//! | DVL                | diag(0.1², 0.1², 10000²)     | horizontal/vertical pair           |
//!
//! No setter validates its input. Covariances supplied directly are stored as given, whether or not
//! they are symmetric or positive semi-definite; that is the responsibility of the caller.
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use std::fmt::{self, Display};

use crate::linalg::{
    horizontal_vertical_covariance, isotropic_covariance, per_axis_covariance, vertical_covariance,
};

/// Default gyroscope white noise standard deviation
pub const DEFAULT_GYROSCOPE_STD: f64 = 0.01;
/// Default accelerometer white noise standard deviation
pub const DEFAULT_ACCELEROMETER_STD: f64 = 0.1;
/// Default gyroscope bias random walk standard deviation
pub const DEFAULT_GYROSCOPE_BIAS_STD: f64 = 0.00001;
/// Default accelerometer bias random walk standard deviation
pub const DEFAULT_ACCELEROMETER_BIAS_STD: f64 = 0.0001;
/// Default landmark observation standard deviation
pub const DEFAULT_LANDMARK_STD: f64 = 0.1;
/// Default contact (kinematic) measurement standard deviation
pub const DEFAULT_CONTACT_STD: f64 = 0.1;
/// Default GPS position standard deviation
pub const DEFAULT_GPS_STD: f64 = 0.1;
/// Default depth standard deviation (vertical axis)
pub const DEFAULT_DEPTH_STD: f64 = 0.1;
/// Default DVL horizontal standard deviation
pub const DEFAULT_DVL_STD: f64 = 0.1;
/// Default DVL vertical standard deviation
pub const DEFAULT_DVL_STD_Z: f64 = 10000.0;

const HEADER: &str = "--------- Noise Params -------------";
const FOOTER: &str = "-----------------------------------";

/// The noise sources a [NoiseParams] instance carries a covariance for, in rendering order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseSource {
    /// Gyroscope (angular rate) white noise
    Gyroscope,
    /// Accelerometer (specific force) white noise
    Accelerometer,
    /// Gyroscope bias random walk
    GyroscopeBias,
    /// Accelerometer bias random walk
    AccelerometerBias,
    /// Landmark (feature) position observations
    Landmark,
    /// Contact / leg kinematic measurements
    Contact,
    /// GPS position measurements
    Gps,
    /// Depth (pressure) measurements
    Depth,
    /// Doppler velocity log measurements
    Dvl,
}
impl NoiseSource {
    /// Every source, in the order they are rendered
    pub const ALL: [NoiseSource; 9] = [
        NoiseSource::Gyroscope,
        NoiseSource::Accelerometer,
        NoiseSource::GyroscopeBias,
        NoiseSource::AccelerometerBias,
        NoiseSource::Landmark,
        NoiseSource::Contact,
        NoiseSource::Gps,
        NoiseSource::Depth,
        NoiseSource::Dvl,
    ];
    /// Human readable label used when rendering a [NoiseParams]
    pub fn label(&self) -> &'static str {
        match self {
            NoiseSource::Gyroscope => "Gyroscope",
            NoiseSource::Accelerometer => "Accelerometer",
            NoiseSource::GyroscopeBias => "Gyroscope Bias",
            NoiseSource::AccelerometerBias => "Accelerometer Bias",
            NoiseSource::Landmark => "Landmark",
            NoiseSource::Contact => "Contact",
            NoiseSource::Gps => "GPS",
            NoiseSource::Depth => "DEPTH",
            NoiseSource::Dvl => "DVL",
        }
    }
}
impl Display for NoiseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Noise covariances consumed by an invariant extended Kalman filter.
///
/// A `NoiseParams` is a plain value: it is `Copy`, owns no resources, and performs no
/// synchronization. Every covariance is always defined; [NoiseParams::new] assigns the defaults
/// listed in the [module documentation](self) before any caller mutation.
///
/// Every setter fully replaces its target matrix. Getters return copies, so the only way to
/// change the stored values is through the setters.
///
/// # Example
/// ```rust
/// use inekf_noise::NoiseParams;
/// use nalgebra::{Matrix3, Vector3};
///
/// let mut params = NoiseParams::new();
/// params.set_gyroscope_noise(0.02);
/// params.set_gps_noise_per_axis(&Vector3::new(1.0, 1.0, 3.0));
/// params.set_dvl_noise(0.05, 0.5);
///
/// assert_eq!(params.get_gyroscope_cov(), Matrix3::from_diagonal_element(0.02 * 0.02));
/// assert_eq!(params.get_gps_cov()[(2, 2)], 9.0);
/// println!("{params}");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseParams {
    gyroscope: Matrix3<f64>,
    accelerometer: Matrix3<f64>,
    gyroscope_bias: Matrix3<f64>,
    accelerometer_bias: Matrix3<f64>,
    landmark: Matrix3<f64>,
    contact: Matrix3<f64>,
    gps: Matrix3<f64>,
    depth: Matrix3<f64>,
    dvl: Matrix3<f64>,
}
impl Default for NoiseParams {
    fn default() -> Self {
        NoiseParams::new()
    }
}
impl NoiseParams {
    /// Create a new set of noise parameters populated with the default covariances.
    pub fn new() -> Self {
        let mut params = NoiseParams {
            gyroscope: Matrix3::zeros(),
            accelerometer: Matrix3::zeros(),
            gyroscope_bias: Matrix3::zeros(),
            accelerometer_bias: Matrix3::zeros(),
            landmark: Matrix3::zeros(),
            contact: Matrix3::zeros(),
            gps: Matrix3::zeros(),
            depth: Matrix3::zeros(),
            dvl: Matrix3::zeros(),
        };
        params.set_gyroscope_noise(DEFAULT_GYROSCOPE_STD);
        params.set_accelerometer_noise(DEFAULT_ACCELEROMETER_STD);
        params.set_gyroscope_bias_noise(DEFAULT_GYROSCOPE_BIAS_STD);
        params.set_accelerometer_bias_noise(DEFAULT_ACCELEROMETER_BIAS_STD);
        params.set_landmark_noise(DEFAULT_LANDMARK_STD);
        params.set_contact_noise(DEFAULT_CONTACT_STD);
        params.set_gps_noise(DEFAULT_GPS_STD);
        params.set_depth_noise(DEFAULT_DEPTH_STD);
        params.set_dvl_noise(DEFAULT_DVL_STD, DEFAULT_DVL_STD_Z);
        params
    }
    /// Overwrite the covariance of `source` with `covariance`, stored verbatim.
    ///
    /// Equivalent to calling the matrix setter of the corresponding source, e.g.
    /// [NoiseParams::set_gyroscope_covariance] for [NoiseSource::Gyroscope].
    pub fn set_covariance(&mut self, source: NoiseSource, covariance: Matrix3<f64>) {
        log::trace!("{source} covariance set to diagonal {:?}", covariance.diagonal().as_slice());
        *self.slot_mut(source) = covariance;
    }
    /// Copy of the covariance currently held for `source`
    pub fn get_covariance(&self, source: NoiseSource) -> Matrix3<f64> {
        match source {
            NoiseSource::Gyroscope => self.gyroscope,
            NoiseSource::Accelerometer => self.accelerometer,
            NoiseSource::GyroscopeBias => self.gyroscope_bias,
            NoiseSource::AccelerometerBias => self.accelerometer_bias,
            NoiseSource::Landmark => self.landmark,
            NoiseSource::Contact => self.contact,
            NoiseSource::Gps => self.gps,
            NoiseSource::Depth => self.depth,
            NoiseSource::Dvl => self.dvl,
        }
    }
    fn slot_mut(&mut self, source: NoiseSource) -> &mut Matrix3<f64> {
        match source {
            NoiseSource::Gyroscope => &mut self.gyroscope,
            NoiseSource::Accelerometer => &mut self.accelerometer,
            NoiseSource::GyroscopeBias => &mut self.gyroscope_bias,
            NoiseSource::AccelerometerBias => &mut self.accelerometer_bias,
            NoiseSource::Landmark => &mut self.landmark,
            NoiseSource::Contact => &mut self.contact,
            NoiseSource::Gps => &mut self.gps,
            NoiseSource::Depth => &mut self.depth,
            NoiseSource::Dvl => &mut self.dvl,
        }
    }

    // ============= Gyroscope ===========================================================================

    /// Set the gyroscope noise to an isotropic covariance `std² · I₃`.
    pub fn set_gyroscope_noise(&mut self, std: f64) {
        self.set_covariance(NoiseSource::Gyroscope, isotropic_covariance(std));
    }
    /// Set the gyroscope noise from per-axis standard deviations, `diag(std²)`.
    pub fn set_gyroscope_noise_per_axis(&mut self, std: &Vector3<f64>) {
        self.set_covariance(NoiseSource::Gyroscope, per_axis_covariance(std));
    }
    /// Set the gyroscope noise covariance directly. The matrix is stored unchanged.
    pub fn set_gyroscope_covariance(&mut self, cov: Matrix3<f64>) {
        self.set_covariance(NoiseSource::Gyroscope, cov);
    }
    /// Gyroscope noise covariance
    pub fn get_gyroscope_cov(&self) -> Matrix3<f64> {
        self.gyroscope
    }

    // ============= Accelerometer =======================================================================

    /// Set the accelerometer noise to an isotropic covariance `std² · I₃`.
    pub fn set_accelerometer_noise(&mut self, std: f64) {
        self.set_covariance(NoiseSource::Accelerometer, isotropic_covariance(std));
    }
    /// Set the accelerometer noise from per-axis standard deviations, `diag(std²)`.
    pub fn set_accelerometer_noise_per_axis(&mut self, std: &Vector3<f64>) {
        self.set_covariance(NoiseSource::Accelerometer, per_axis_covariance(std));
    }
    /// Set the accelerometer noise covariance directly. The matrix is stored unchanged.
    pub fn set_accelerometer_covariance(&mut self, cov: Matrix3<f64>) {
        self.set_covariance(NoiseSource::Accelerometer, cov);
    }
    /// Accelerometer noise covariance
    pub fn get_accelerometer_cov(&self) -> Matrix3<f64> {
        self.accelerometer
    }

    // ============= Gyroscope bias ======================================================================

    /// Set the gyroscope bias random walk to an isotropic covariance `std² · I₃`.
    pub fn set_gyroscope_bias_noise(&mut self, std: f64) {
        self.set_covariance(NoiseSource::GyroscopeBias, isotropic_covariance(std));
    }
    /// Set the gyroscope bias random walk from per-axis standard deviations.
    pub fn set_gyroscope_bias_noise_per_axis(&mut self, std: &Vector3<f64>) {
        self.set_covariance(NoiseSource::GyroscopeBias, per_axis_covariance(std));
    }
    /// Set the gyroscope bias random walk covariance directly.
    pub fn set_gyroscope_bias_covariance(&mut self, cov: Matrix3<f64>) {
        self.set_covariance(NoiseSource::GyroscopeBias, cov);
    }
    /// Gyroscope bias random walk covariance
    pub fn get_gyroscope_bias_cov(&self) -> Matrix3<f64> {
        self.gyroscope_bias
    }

    // ============= Accelerometer bias ==================================================================

    /// Set the accelerometer bias random walk to an isotropic covariance `std² · I₃`.
    pub fn set_accelerometer_bias_noise(&mut self, std: f64) {
        self.set_covariance(NoiseSource::AccelerometerBias, isotropic_covariance(std));
    }
    /// Set the accelerometer bias random walk from per-axis standard deviations.
    pub fn set_accelerometer_bias_noise_per_axis(&mut self, std: &Vector3<f64>) {
        self.set_covariance(NoiseSource::AccelerometerBias, per_axis_covariance(std));
    }
    /// Set the accelerometer bias random walk covariance directly.
    pub fn set_accelerometer_bias_covariance(&mut self, cov: Matrix3<f64>) {
        self.set_covariance(NoiseSource::AccelerometerBias, cov);
    }
    /// Accelerometer bias random walk covariance
    pub fn get_accelerometer_bias_cov(&self) -> Matrix3<f64> {
        self.accelerometer_bias
    }

    // ============= Landmark ============================================================================

    /// Set the landmark observation noise to an isotropic covariance `std² · I₃`.
    pub fn set_landmark_noise(&mut self, std: f64) {
        self.set_covariance(NoiseSource::Landmark, isotropic_covariance(std));
    }
    /// Set the landmark observation noise from per-axis standard deviations.
    pub fn set_landmark_noise_per_axis(&mut self, std: &Vector3<f64>) {
        self.set_covariance(NoiseSource::Landmark, per_axis_covariance(std));
    }
    /// Set the landmark observation covariance directly.
    pub fn set_landmark_covariance(&mut self, cov: Matrix3<f64>) {
        self.set_covariance(NoiseSource::Landmark, cov);
    }
    pub fn get_landmark_cov(&self) -> Matrix3<f64> {
        self.landmark
    }

    // ============= Contact =============================================================================

    /// Set the contact (kinematic) noise to an isotropic covariance `std² · I₃`.
    pub fn set_contact_noise(&mut self, std: f64) {
        self.set_covariance(NoiseSource::Contact, isotropic_covariance(std));
    }
    /// Set the contact noise from per-axis standard deviations.
    pub fn set_contact_noise_per_axis(&mut self, std: &Vector3<f64>) {
        self.set_covariance(NoiseSource::Contact, per_axis_covariance(std));
    }
    /// Set the contact covariance directly.
    pub fn set_contact_covariance(&mut self, cov: Matrix3<f64>) {
        self.set_covariance(NoiseSource::Contact, cov);
    }
    pub fn get_contact_cov(&self) -> Matrix3<f64> {
        self.contact
    }

    // ============= GPS =================================================================================

    /// Set the GPS position noise to an isotropic covariance `std² · I₃`.
    pub fn set_gps_noise(&mut self, std: f64) {
        self.set_covariance(NoiseSource::Gps, isotropic_covariance(std));
    }
    /// Set the GPS position noise from per-axis standard deviations.
    pub fn set_gps_noise_per_axis(&mut self, std: &Vector3<f64>) {
        self.set_covariance(NoiseSource::Gps, per_axis_covariance(std));
    }
    /// Set the GPS position covariance directly.
    pub fn set_gps_covariance(&mut self, cov: Matrix3<f64>) {
        self.set_covariance(NoiseSource::Gps, cov);
    }
    pub fn get_gps_cov(&self) -> Matrix3<f64> {
        self.gps
    }

    // ============= Depth ===============================================================================

    /// Set the depth noise for a sensor that only observes the vertical axis.
    ///
    /// Produces `diag(1e15, 1e15, std²)`, *not* an isotropic covariance: the horizontal axes are
    /// assigned [crate::linalg::UNOBSERVED_VARIANCE] so the filter effectively ignores them.
    pub fn set_depth_noise(&mut self, std: f64) {
        self.set_covariance(NoiseSource::Depth, vertical_covariance(std));
    }
    /// Set the depth noise from per-axis standard deviations, `diag(std²)`.
    ///
    /// Unlike [NoiseParams::set_depth_noise] no axis is treated specially.
    pub fn set_depth_noise_per_axis(&mut self, std: &Vector3<f64>) {
        self.set_covariance(NoiseSource::Depth, per_axis_covariance(std));
    }
    /// Set the depth covariance directly.
    pub fn set_depth_covariance(&mut self, cov: Matrix3<f64>) {
        self.set_covariance(NoiseSource::Depth, cov);
    }
    pub fn get_depth_cov(&self) -> Matrix3<f64> {
        self.depth
    }

    // ============= DVL =================================================================================

    /// Set the Doppler velocity log noise from separate horizontal and vertical standard deviations.
    ///
    /// # Arguments
    /// * `std` - standard deviation of the x and y velocity components
    /// * `std_z` - standard deviation of the z velocity component
    ///
    /// Produces `diag(std², std², std_z²)`. There is no single-scalar form for the DVL.
    pub fn set_dvl_noise(&mut self, std: f64, std_z: f64) {
        self.set_covariance(NoiseSource::Dvl, horizontal_vertical_covariance(std, std_z));
    }
    /// Set the DVL noise from per-axis standard deviations, `diag(std²)`.
    pub fn set_dvl_noise_per_axis(&mut self, std: &Vector3<f64>) {
        self.set_covariance(NoiseSource::Dvl, per_axis_covariance(std));
    }
    /// Set the DVL covariance directly.
    pub fn set_dvl_covariance(&mut self, cov: Matrix3<f64>) {
        self.set_covariance(NoiseSource::Dvl, cov);
    }
    pub fn get_dvl_cov(&self) -> Matrix3<f64> {
        self.dvl
    }
}

/// Render the rows of a 3×3 matrix with every entry right-aligned to the widest one.
fn write_matrix(f: &mut fmt::Formatter<'_>, matrix: &Matrix3<f64>) -> fmt::Result {
    let entries: Vec<String> = matrix.iter().map(|value| value.to_string()).collect();
    let width = entries.iter().map(String::len).max().unwrap_or(0);
    for row in 0..3 {
        // nalgebra storage is column-major
        writeln!(
            f,
            "{:>width$} {:>width$} {:>width$}",
            entries[row],
            entries[row + 3],
            entries[row + 6],
        )?;
    }
    Ok(())
}
impl Display for NoiseParams {
    /// Diagnostic dump of every covariance, in [NoiseSource::ALL] order. Not intended for parsing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        for source in NoiseSource::ALL {
            writeln!(f, "{} Covariance:", source.label())?;
            write_matrix(f, &self.get_covariance(source))?;
        }
        writeln!(f, "{FOOTER}")
    }
}
