//! Serializable description of a [NoiseParams] instance.
//!
//! [NoiseConfig] is meant to be embedded in the configuration of whatever filter consumes the noise
//! parameters. This crate does not read or write any files itself; any serde format works. Each noise
//! source is optional and accepts the same three shapes as the [NoiseParams] setters:
//!
//! ```toml
//! imu_quality = "tactical"            # optional preset, applied first
//! gyroscope = 0.02                    # scalar standard deviation
//! gps = [1.0, 1.0, 3.0]               # per-axis standard deviations
//! contact = [[0.01, 0.0, 0.0],        # full covariance, row-major
//!            [0.0, 0.01, 0.0],
//!            [0.0, 0.0, 0.04]]
//! depth = 0.1                         # vertical axis only
//! dvl = { std = 0.1, std_z = 1.0 }    # horizontal / vertical pair
//! ```
//!
//! Sources that are not listed keep their current (or default) covariance.
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::noise::{NoiseParams, NoiseSource};
use crate::quality::ImuQuality;

/// Noise description of a single three-axis source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoiseSpec {
    /// Single standard deviation. Isotropic for every source except depth, where it only sets the
    /// vertical axis.
    Std(f64),
    /// Per-axis standard deviations
    PerAxis([f64; 3]),
    /// Full covariance matrix, row-major, stored verbatim
    Covariance([[f64; 3]; 3]),
}
impl NoiseSpec {
    fn per_axis(std: &[f64; 3]) -> Vector3<f64> {
        Vector3::new(std[0], std[1], std[2])
    }
}
impl From<Matrix3<f64>> for NoiseSpec {
    fn from(cov: Matrix3<f64>) -> Self {
        NoiseSpec::Covariance(rows(&cov))
    }
}
impl TryFrom<&[f64]> for NoiseSpec {
    type Error = NoiseError;
    /// Interpret a flat slice as a scalar (1 value), per-axis (3 values), or row-major covariance (9 values).
    fn try_from(slice: &[f64]) -> Result<Self, Self::Error> {
        match *slice {
            [std] => Ok(NoiseSpec::Std(std)),
            [x, y, z] => Ok(NoiseSpec::PerAxis([x, y, z])),
            [a, b, c, d, e, f, g, h, i] => Ok(NoiseSpec::Covariance([[a, b, c], [d, e, f], [g, h, i]])),
            _ => Err(NoiseError::InvalidLength { len: slice.len() }),
        }
    }
}
impl TryFrom<Vec<f64>> for NoiseSpec {
    type Error = NoiseError;
    fn try_from(vec: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(vec.as_slice())
    }
}

/// Noise description of a Doppler velocity log. The DVL has no single-scalar form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DvlNoiseSpec {
    /// Horizontal (x, y) and vertical (z) standard deviations
    HorizontalVertical { std: f64, std_z: f64 },
    /// Per-axis standard deviations
    PerAxis([f64; 3]),
    /// Full covariance matrix, row-major, stored verbatim
    Covariance([[f64; 3]; 3]),
}
impl From<Matrix3<f64>> for DvlNoiseSpec {
    fn from(cov: Matrix3<f64>) -> Self {
        DvlNoiseSpec::Covariance(rows(&cov))
    }
}

fn rows(cov: &Matrix3<f64>) -> [[f64; 3]; 3] {
    [
        [cov[(0, 0)], cov[(0, 1)], cov[(0, 2)]],
        [cov[(1, 0)], cov[(1, 1)], cov[(1, 2)]],
        [cov[(2, 0)], cov[(2, 1)], cov[(2, 2)]],
    ]
}
fn from_rows(rows: &[[f64; 3]; 3]) -> Matrix3<f64> {
    Matrix3::new(
        rows[0][0], rows[0][1], rows[0][2], rows[1][0], rows[1][1], rows[1][2], rows[2][0],
        rows[2][1], rows[2][2],
    )
}

/// Optional overrides for every noise source of a [NoiseParams].
///
/// ## Example
///
/// ```
/// use inekf_noise::config::{DvlNoiseSpec, NoiseConfig, NoiseSpec};
///
/// let cfg = NoiseConfig {
///     gps: Some(NoiseSpec::PerAxis([2.0, 2.0, 5.0])),
///     dvl: Some(DvlNoiseSpec::HorizontalVertical { std: 0.05, std_z: 0.5 }),
///     ..Default::default()
/// };
/// let params = cfg.build();
/// assert_eq!(params.get_gps_cov()[(2, 2)], 25.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// IMU grade preset applied before any of the per-source entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imu_quality: Option<ImuQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gyroscope: Option<NoiseSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerometer: Option<NoiseSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gyroscope_bias: Option<NoiseSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerometer_bias: Option<NoiseSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark: Option<NoiseSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<NoiseSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gps: Option<NoiseSpec>,
    /// A scalar entry only sets the vertical axis, see [NoiseParams::set_depth_noise]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<NoiseSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dvl: Option<DvlNoiseSpec>,
}

impl NoiseConfig {
    /// Build a [NoiseParams] from the defaults with this configuration applied.
    pub fn build(&self) -> NoiseParams {
        let mut params = NoiseParams::default();
        self.apply(&mut params);
        params
    }
    /// Apply the configured entries to an existing [NoiseParams].
    ///
    /// The IMU preset (if any) is applied first so that explicit gyroscope and accelerometer entries
    /// override it. Entries that are `None` leave the corresponding covariance untouched.
    pub fn apply(&self, params: &mut NoiseParams) {
        if let Some(quality) = self.imu_quality {
            log::debug!("Applying {quality:?} IMU noise preset");
            params.apply_imu_quality(quality);
        }
        if let Some(spec) = &self.gyroscope {
            log::debug!("Gyroscope noise: {spec:?}");
            match spec {
                NoiseSpec::Std(std) => params.set_gyroscope_noise(*std),
                NoiseSpec::PerAxis(std) => {
                    params.set_gyroscope_noise_per_axis(&NoiseSpec::per_axis(std))
                }
                NoiseSpec::Covariance(cov) => params.set_gyroscope_covariance(from_rows(cov)),
            }
        }
        if let Some(spec) = &self.accelerometer {
            log::debug!("Accelerometer noise: {spec:?}");
            match spec {
                NoiseSpec::Std(std) => params.set_accelerometer_noise(*std),
                NoiseSpec::PerAxis(std) => {
                    params.set_accelerometer_noise_per_axis(&NoiseSpec::per_axis(std))
                }
                NoiseSpec::Covariance(cov) => params.set_accelerometer_covariance(from_rows(cov)),
            }
        }
        if let Some(spec) = &self.gyroscope_bias {
            log::debug!("Gyroscope bias noise: {spec:?}");
            match spec {
                NoiseSpec::Std(std) => params.set_gyroscope_bias_noise(*std),
                NoiseSpec::PerAxis(std) => {
                    params.set_gyroscope_bias_noise_per_axis(&NoiseSpec::per_axis(std))
                }
                NoiseSpec::Covariance(cov) => params.set_gyroscope_bias_covariance(from_rows(cov)),
            }
        }
        if let Some(spec) = &self.accelerometer_bias {
            log::debug!("Accelerometer bias noise: {spec:?}");
            match spec {
                NoiseSpec::Std(std) => params.set_accelerometer_bias_noise(*std),
                NoiseSpec::PerAxis(std) => {
                    params.set_accelerometer_bias_noise_per_axis(&NoiseSpec::per_axis(std))
                }
                NoiseSpec::Covariance(cov) => {
                    params.set_accelerometer_bias_covariance(from_rows(cov))
                }
            }
        }
        if let Some(spec) = &self.landmark {
            log::debug!("Landmark noise: {spec:?}");
            match spec {
                NoiseSpec::Std(std) => params.set_landmark_noise(*std),
                NoiseSpec::PerAxis(std) => {
                    params.set_landmark_noise_per_axis(&NoiseSpec::per_axis(std))
                }
                NoiseSpec::Covariance(cov) => params.set_landmark_covariance(from_rows(cov)),
            }
        }
        if let Some(spec) = &self.contact {
            log::debug!("Contact noise: {spec:?}");
            match spec {
                NoiseSpec::Std(std) => params.set_contact_noise(*std),
                NoiseSpec::PerAxis(std) => params.set_contact_noise_per_axis(&NoiseSpec::per_axis(std)),
                NoiseSpec::Covariance(cov) => params.set_contact_covariance(from_rows(cov)),
            }
        }
        if let Some(spec) = &self.gps {
            log::debug!("GPS noise: {spec:?}");
            match spec {
                NoiseSpec::Std(std) => params.set_gps_noise(*std),
                NoiseSpec::PerAxis(std) => params.set_gps_noise_per_axis(&NoiseSpec::per_axis(std)),
                NoiseSpec::Covariance(cov) => params.set_gps_covariance(from_rows(cov)),
            }
        }
        if let Some(spec) = &self.depth {
            log::debug!("Depth noise: {spec:?}");
            match spec {
                NoiseSpec::Std(std) => params.set_depth_noise(*std),
                NoiseSpec::PerAxis(std) => params.set_depth_noise_per_axis(&NoiseSpec::per_axis(std)),
                NoiseSpec::Covariance(cov) => params.set_depth_covariance(from_rows(cov)),
            }
        }
        if let Some(spec) = &self.dvl {
            log::debug!("DVL noise: {spec:?}");
            match spec {
                DvlNoiseSpec::HorizontalVertical { std, std_z } => params.set_dvl_noise(*std, *std_z),
                DvlNoiseSpec::PerAxis(std) => params.set_dvl_noise_per_axis(&NoiseSpec::per_axis(std)),
                DvlNoiseSpec::Covariance(cov) => params.set_dvl_covariance(from_rows(cov)),
            }
        }
    }
}
impl From<&NoiseParams> for NoiseConfig {
    /// Capture every covariance of `params` as a full matrix entry.
    fn from(params: &NoiseParams) -> Self {
        let spec = |source: NoiseSource| Some(NoiseSpec::from(params.get_covariance(source)));
        NoiseConfig {
            imu_quality: None,
            gyroscope: spec(NoiseSource::Gyroscope),
            accelerometer: spec(NoiseSource::Accelerometer),
            gyroscope_bias: spec(NoiseSource::GyroscopeBias),
            accelerometer_bias: spec(NoiseSource::AccelerometerBias),
            landmark: spec(NoiseSource::Landmark),
            contact: spec(NoiseSource::Contact),
            gps: spec(NoiseSource::Gps),
            depth: spec(NoiseSource::Depth),
            dvl: Some(DvlNoiseSpec::from(params.get_dvl_cov())),
        }
    }
}
