//! Typical IMU noise figures by sensor grade.
//!
//! Benchmarks for typical IMU grades are shown below. These are not strict definitions, but the
//! order of magnitude is typical for the associated application [1][2]:
//!
//! | IMU Grade  | Gyro ARW (°/√h) | Gyro Bias Instability (°/h) | Accel VRW (m/s/√h) | Accel Bias Instability (m/s²) |
//! |------------|-----------------|-----------------------------|--------------------|-------------------------------|
//! | Consumer   | 1.0             | 100                         | 0.1                | 0.1                           |
//! | Industrial | 0.1             | 50                          | 0.03               | 0.05                          |
//! | Tactical   | 0.01            | 1                           | 0.01               | 0.001                         |
//! | Navigation | 0.005           | 0.01                        | 0.005              | 0.0001                        |
//! | Strategic  | 0.0005          | 0.0001                      | 0.0001             | 0.00001                       |
//!
//! The random walk terms map onto the gyroscope and accelerometer white noise of a [NoiseParams],
//! the bias instability terms onto the bias random walk covariances. All conversions produce SI
//! units per second (rad/s, m/s²) so they can be passed straight to the scalar setters.
//!
//! # References
//! - [1] https://www.advancednavigation.com/tech-articles/mems-vs-fog-what-inertial-system-should-you-choose/
//! - [2] Principles of GNSS, Inertial, and Multisensor Navigation Systems. Chapter 4.4.1, Paul D. Groves, 2nd Edition. Table 4.1
use serde::{Deserialize, Serialize};

use crate::noise::NoiseParams;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Performance grade of an IMU
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImuQuality {
    #[default]
    /// Low cost MEMS found in smartphones, wearables, and hobby drones
    Consumer,
    /// High-end MEMS found in automotive, robotics, and commercial drones
    Industrial,
    /// High-end MEMS or fiber-optic gyros, robust to short GNSS outages
    Tactical,
    /// FOG or ring-laser gyros for aircraft, ships, and submarines
    Navigation,
    /// Survey and strategic grade ring-laser gyros
    Strategic,
}
impl ImuQuality {
    /// Gyroscope angle random walk in degrees per root hour
    pub fn gyro_angle_random_walk_dprh(&self) -> f64 {
        match self {
            ImuQuality::Consumer => 1.0,
            ImuQuality::Industrial => 0.1,
            ImuQuality::Tactical => 0.01,
            ImuQuality::Navigation => 0.005,
            ImuQuality::Strategic => 0.0005,
        }
    }
    /// Gyroscope bias instability in degrees per hour
    pub fn gyro_bias_instability_dph(&self) -> f64 {
        match self {
            ImuQuality::Consumer => 100.0,
            ImuQuality::Industrial => 50.0,
            ImuQuality::Tactical => 1.0,
            ImuQuality::Navigation => 0.01,
            ImuQuality::Strategic => 0.0001,
        }
    }
    /// Accelerometer velocity random walk in m/s per root hour
    pub fn accel_velocity_random_walk(&self) -> f64 {
        match self {
            ImuQuality::Consumer => 0.1,
            ImuQuality::Industrial => 0.03,
            ImuQuality::Tactical => 0.01,
            ImuQuality::Navigation => 0.005,
            ImuQuality::Strategic => 0.0001,
        }
    }
    /// Accelerometer bias instability in m/s^2
    pub fn accel_bias_instability_mps2(&self) -> f64 {
        match self {
            ImuQuality::Consumer => 0.1,
            ImuQuality::Industrial => 0.05,
            ImuQuality::Tactical => 0.001,
            ImuQuality::Navigation => 0.0001,
            ImuQuality::Strategic => 0.00001,
        }
    }
    /// Gyroscope white noise standard deviation in rad/s/√Hz
    pub fn gyroscope_noise_std(&self) -> f64 {
        self.gyro_angle_random_walk_dprh().to_radians() / SECONDS_PER_HOUR.sqrt()
    }
    /// Accelerometer white noise standard deviation in m/s²/√Hz
    pub fn accelerometer_noise_std(&self) -> f64 {
        self.accel_velocity_random_walk() / SECONDS_PER_HOUR.sqrt()
    }
    /// Gyroscope bias standard deviation in rad/s
    pub fn gyroscope_bias_std(&self) -> f64 {
        self.gyro_bias_instability_dph().to_radians() / SECONDS_PER_HOUR
    }
    /// Accelerometer bias standard deviation in m/s²
    pub fn accelerometer_bias_std(&self) -> f64 {
        self.accel_bias_instability_mps2()
    }
}

impl NoiseParams {
    /// Default noise parameters with the IMU covariances replaced by the figures of `quality`.
    ///
    /// # Example
    /// ```rust
    /// use inekf_noise::{ImuQuality, NoiseParams};
    ///
    /// let params = NoiseParams::from_imu_quality(ImuQuality::Tactical);
    /// assert_eq!(params.get_gps_cov(), NoiseParams::default().get_gps_cov());
    /// ```
    pub fn from_imu_quality(quality: ImuQuality) -> Self {
        let mut params = NoiseParams::new();
        params.apply_imu_quality(quality);
        params
    }
    /// Overwrite the gyroscope, accelerometer, and both bias covariances with the isotropic figures
    /// of `quality`. Landmark, contact, GPS, depth, and DVL covariances are left as they are.
    pub fn apply_imu_quality(&mut self, quality: ImuQuality) {
        self.set_gyroscope_noise(quality.gyroscope_noise_std());
        self.set_accelerometer_noise(quality.accelerometer_noise_std());
        self.set_gyroscope_bias_noise(quality.gyroscope_bias_std());
        self.set_accelerometer_bias_noise(quality.accelerometer_bias_std());
    }
}
