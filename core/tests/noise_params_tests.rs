//! Integration tests for the public noise parameter API
//!
//! These tests exercise every noise source through the named setters and getters a filter would
//! call, and check the properties a consumer relies on:
//! 1. Defaults are the documented covariances
//! 2. Scalar, per-axis, and matrix setters produce the documented matrices
//! 3. Setters overwrite (no accumulation) and only touch their own source
//! 4. The diagnostic rendering lists every source in a fixed order
//! 5. A filter configuration written in TOML or JSON builds the expected parameters
use inekf_noise::config::{DvlNoiseSpec, NoiseConfig, NoiseSpec};
use inekf_noise::linalg::UNOBSERVED_VARIANCE;
use inekf_noise::{ImuQuality, NoiseParams, NoiseSource};

use assert_approx_eq::assert_approx_eq;
use nalgebra::{Matrix3, Vector3};

type ScalarSetter = fn(&mut NoiseParams, f64);
type VectorSetter = fn(&mut NoiseParams, &Vector3<f64>);
type MatrixSetter = fn(&mut NoiseParams, Matrix3<f64>);
type Getter = fn(&NoiseParams) -> Matrix3<f64>;

/// Named accessors of one noise source
struct Accessors {
    source: NoiseSource,
    /// `None` for the DVL, which has no single-scalar setter
    scalar: Option<ScalarSetter>,
    vector: VectorSetter,
    matrix: MatrixSetter,
    get: Getter,
}

fn accessors() -> Vec<Accessors> {
    vec![
        Accessors {
            source: NoiseSource::Gyroscope,
            scalar: Some(NoiseParams::set_gyroscope_noise),
            vector: NoiseParams::set_gyroscope_noise_per_axis,
            matrix: NoiseParams::set_gyroscope_covariance,
            get: NoiseParams::get_gyroscope_cov,
        },
        Accessors {
            source: NoiseSource::Accelerometer,
            scalar: Some(NoiseParams::set_accelerometer_noise),
            vector: NoiseParams::set_accelerometer_noise_per_axis,
            matrix: NoiseParams::set_accelerometer_covariance,
            get: NoiseParams::get_accelerometer_cov,
        },
        Accessors {
            source: NoiseSource::GyroscopeBias,
            scalar: Some(NoiseParams::set_gyroscope_bias_noise),
            vector: NoiseParams::set_gyroscope_bias_noise_per_axis,
            matrix: NoiseParams::set_gyroscope_bias_covariance,
            get: NoiseParams::get_gyroscope_bias_cov,
        },
        Accessors {
            source: NoiseSource::AccelerometerBias,
            scalar: Some(NoiseParams::set_accelerometer_bias_noise),
            vector: NoiseParams::set_accelerometer_bias_noise_per_axis,
            matrix: NoiseParams::set_accelerometer_bias_covariance,
            get: NoiseParams::get_accelerometer_bias_cov,
        },
        Accessors {
            source: NoiseSource::Landmark,
            scalar: Some(NoiseParams::set_landmark_noise),
            vector: NoiseParams::set_landmark_noise_per_axis,
            matrix: NoiseParams::set_landmark_covariance,
            get: NoiseParams::get_landmark_cov,
        },
        Accessors {
            source: NoiseSource::Contact,
            scalar: Some(NoiseParams::set_contact_noise),
            vector: NoiseParams::set_contact_noise_per_axis,
            matrix: NoiseParams::set_contact_covariance,
            get: NoiseParams::get_contact_cov,
        },
        Accessors {
            source: NoiseSource::Gps,
            scalar: Some(NoiseParams::set_gps_noise),
            vector: NoiseParams::set_gps_noise_per_axis,
            matrix: NoiseParams::set_gps_covariance,
            get: NoiseParams::get_gps_cov,
        },
        Accessors {
            source: NoiseSource::Depth,
            scalar: Some(NoiseParams::set_depth_noise),
            vector: NoiseParams::set_depth_noise_per_axis,
            matrix: NoiseParams::set_depth_covariance,
            get: NoiseParams::get_depth_cov,
        },
        Accessors {
            source: NoiseSource::Dvl,
            scalar: None,
            vector: NoiseParams::set_dvl_noise_per_axis,
            matrix: NoiseParams::set_dvl_covariance,
            get: NoiseParams::get_dvl_cov,
        },
    ]
}

fn diag(x: f64, y: f64, z: f64) -> Matrix3<f64> {
    Matrix3::from_diagonal(&Vector3::new(x, y, z))
}

/// Asymmetric and indefinite, so any correction applied on store would show up.
fn odd_matrix() -> Matrix3<f64> {
    Matrix3::new(1.0, -2.0, 3.5, 0.25, -4.0, 6.0, -7.0, 8.0, -9.0)
}

fn assert_matrix_approx(actual: &Matrix3<f64>, expected: &Matrix3<f64>) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        // off-diagonal entries are exactly zero
        assert_approx_eq!(a, e, e.abs() * 1e-12 + f64::MIN_POSITIVE);
    }
}

#[test]
fn default_covariances() {
    let params = NoiseParams::new();
    assert_matrix_approx(&params.get_gyroscope_cov(), &diag(1e-4, 1e-4, 1e-4));
    assert_matrix_approx(&params.get_accelerometer_cov(), &diag(0.01, 0.01, 0.01));
    assert_matrix_approx(&params.get_gyroscope_bias_cov(), &diag(1e-10, 1e-10, 1e-10));
    assert_matrix_approx(&params.get_accelerometer_bias_cov(), &diag(1e-8, 1e-8, 1e-8));
    assert_matrix_approx(&params.get_landmark_cov(), &diag(0.01, 0.01, 0.01));
    assert_matrix_approx(&params.get_contact_cov(), &diag(0.01, 0.01, 0.01));
    assert_matrix_approx(&params.get_gps_cov(), &diag(0.01, 0.01, 0.01));
    assert_matrix_approx(&params.get_depth_cov(), &diag(1e15, 1e15, 0.01));
    assert_matrix_approx(&params.get_dvl_cov(), &diag(0.01, 0.01, 1e8));
}

#[test]
fn scalar_setters_are_isotropic() {
    for std in [0.0, 0.3, 2.0, -1.5, 1e-6] {
        for acc in accessors() {
            if matches!(acc.source, NoiseSource::Depth | NoiseSource::Dvl) {
                continue;
            }
            let mut params = NoiseParams::new();
            (acc.scalar.expect("isotropic sources have a scalar setter"))(&mut params, std);
            assert_eq!((acc.get)(&params), diag(std * std, std * std, std * std), "{}", acc.source);
        }
    }
}

#[test]
fn depth_scalar_only_sets_vertical_axis() {
    let mut params = NoiseParams::new();
    params.set_depth_noise_per_axis(&Vector3::new(1.0, 2.0, 3.0));
    params.set_depth_noise(0.4);
    assert_eq!(
        params.get_depth_cov(),
        diag(UNOBSERVED_VARIANCE, UNOBSERVED_VARIANCE, 0.4 * 0.4)
    );
    assert_ne!(params.get_depth_cov(), diag(0.16, 0.16, 0.16));
}

#[test]
fn dvl_horizontal_vertical_setter() {
    let mut params = NoiseParams::new();
    params.set_dvl_noise(0.02, 0.7);
    assert_eq!(params.get_dvl_cov(), diag(0.02 * 0.02, 0.02 * 0.02, 0.7 * 0.7));
}

#[test]
fn vector_setters_are_diagonal_for_every_source() {
    let std = Vector3::new(0.5, -2.0, 3.0);
    for acc in accessors() {
        let mut params = NoiseParams::new();
        (acc.vector)(&mut params, &std);
        assert_eq!((acc.get)(&params), diag(0.25, 4.0, 9.0), "{}", acc.source);
    }
}

#[test]
fn matrix_setters_store_verbatim() {
    for acc in accessors() {
        let mut params = NoiseParams::new();
        (acc.matrix)(&mut params, odd_matrix());
        assert_eq!((acc.get)(&params), odd_matrix(), "{}", acc.source);
        assert_eq!(params.get_covariance(acc.source), odd_matrix());
    }
}

#[test]
fn setters_overwrite_instead_of_accumulating() {
    for acc in accessors() {
        let mut params = NoiseParams::new();
        (acc.vector)(&mut params, &Vector3::new(1.0, 2.0, 3.0));
        let first = (acc.get)(&params);
        (acc.vector)(&mut params, &Vector3::new(1.0, 2.0, 3.0));
        assert_eq!((acc.get)(&params), first, "{}", acc.source);

        (acc.matrix)(&mut params, Matrix3::identity());
        (acc.matrix)(&mut params, Matrix3::identity());
        assert_eq!((acc.get)(&params), Matrix3::identity(), "{}", acc.source);
    }
    let mut params = NoiseParams::new();
    params.set_dvl_noise(1.0, 2.0);
    params.set_dvl_noise(1.0, 2.0);
    assert_eq!(params.get_dvl_cov(), diag(1.0, 1.0, 4.0));
}

#[test]
fn setters_leave_other_sources_untouched() {
    let reference = NoiseParams::new();
    for acc in accessors() {
        let mut params = NoiseParams::new();
        (acc.matrix)(&mut params, odd_matrix());
        for other in NoiseSource::ALL {
            if other != acc.source {
                assert_eq!(
                    params.get_covariance(other),
                    reference.get_covariance(other),
                    "setting {} changed {}",
                    acc.source,
                    other
                );
            }
        }
    }
}

#[test]
fn copies_are_independent() {
    let original = NoiseParams::new();
    let mut copy = original;
    copy.set_landmark_noise(3.0);
    assert_eq!(original.get_landmark_cov(), NoiseParams::new().get_landmark_cov());
    assert_ne!(copy, original);
}

#[test]
fn negative_and_non_finite_inputs_are_accepted() {
    let mut params = NoiseParams::new();
    params.set_gps_noise(-3.0);
    assert_eq!(params.get_gps_cov(), diag(9.0, 9.0, 9.0));
    params.set_contact_noise(f64::NAN);
    assert!(params.get_contact_cov()[(1, 1)].is_nan());
    params.set_landmark_noise(f64::INFINITY);
    assert_eq!(params.get_landmark_cov()[(2, 2)], f64::INFINITY);
}

#[test]
fn rendering_lists_every_source_in_order() {
    let mut params = NoiseParams::new();
    params.set_gyroscope_covariance(odd_matrix());
    params.set_dvl_noise(5.0, 6.0);
    let rendered = format!("{params}");

    assert!(rendered.starts_with("--------- Noise Params -------------\n"));
    assert!(rendered.ends_with("-----------------------------------\n"));
    let labels = [
        "Gyroscope Covariance:",
        "Accelerometer Covariance:",
        "Gyroscope Bias Covariance:",
        "Accelerometer Bias Covariance:",
        "Landmark Covariance:",
        "Contact Covariance:",
        "GPS Covariance:",
        "DEPTH Covariance:",
        "DVL Covariance:",
    ];
    let lines: Vec<&str> = rendered.lines().collect();
    let positions: Vec<usize> = labels
        .iter()
        .map(|label| {
            lines
                .iter()
                .position(|line| line == label)
                .unwrap_or_else(|| panic!("missing label {label}"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[1] == w[0] + 4));
    assert!(lines[positions[8] + 3].ends_with("36"));
}

#[test]
fn toml_configuration() {
    let text = r#"
        gyroscope = 0.02
        gps = [1.0, 1.0, 3.0]
        contact = [[0.01, 0.0, 0.0], [0.0, 0.01, 0.0], [0.0, 0.0, 0.04]]
        depth = 0.5
        dvl = { std = 0.1, std_z = 1.0 }
    "#;
    let cfg: NoiseConfig = toml::from_str(text).unwrap();
    assert_eq!(cfg.gyroscope, Some(NoiseSpec::Std(0.02)));
    assert_eq!(
        cfg.dvl,
        Some(DvlNoiseSpec::HorizontalVertical { std: 0.1, std_z: 1.0 })
    );
    let params = cfg.build();
    assert_eq!(params.get_gyroscope_cov(), diag(0.02 * 0.02, 0.02 * 0.02, 0.02 * 0.02));
    assert_eq!(params.get_gps_cov(), diag(1.0, 1.0, 9.0));
    assert_eq!(params.get_contact_cov(), diag(0.01, 0.01, 0.04));
    assert_eq!(params.get_depth_cov(), diag(1e15, 1e15, 0.25));
    assert_eq!(params.get_dvl_cov(), diag(0.1 * 0.1, 0.1 * 0.1, 1.0));
    // absent entries keep their defaults
    let defaults = NoiseParams::default();
    assert_eq!(params.get_accelerometer_cov(), defaults.get_accelerometer_cov());
    assert_eq!(params.get_landmark_cov(), defaults.get_landmark_cov());
}

#[test]
fn json_configuration_with_preset() {
    let text = r#"{
        "imu_quality": "navigation",
        "accelerometer": [0.1, 0.2, 0.3],
        "dvl": [0.5, 0.5, 2.0]
    }"#;
    let cfg: NoiseConfig = serde_json::from_str(text).unwrap();
    let params = cfg.build();
    let quality = ImuQuality::Navigation;
    let std = quality.gyroscope_noise_std();
    assert_eq!(params.get_gyroscope_cov(), diag(std * std, std * std, std * std));
    assert_eq!(
        params.get_accelerometer_cov(),
        diag(0.1 * 0.1, 0.2 * 0.2, 0.3 * 0.3)
    );
    assert_eq!(params.get_dvl_cov(), diag(0.25, 0.25, 4.0));
}

#[test]
fn configuration_round_trips_through_toml() {
    let mut params = NoiseParams::from_imu_quality(ImuQuality::Industrial);
    params.set_landmark_covariance(odd_matrix());
    params.set_depth_noise(0.05);
    let text = toml::to_string(&NoiseConfig::from(&params)).unwrap();
    let cfg: NoiseConfig = toml::from_str(&text).unwrap();
    assert_eq!(cfg.build(), params);
}

#[test]
fn params_serialize_with_serde() {
    let mut params = NoiseParams::new();
    params.set_contact_covariance(odd_matrix());
    let text = serde_json::to_string(&params).unwrap();
    let restored: NoiseParams = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, params);
}
