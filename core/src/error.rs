use thiserror::Error;

/// Errors raised when converting loosely typed data into noise descriptions.
///
/// Every [crate::NoiseParams] operation is infallible; only conversions from untyped input
/// (e.g. a flat `Vec<f64>` read by a caller's configuration layer) can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoiseError {
    /// The flat slice is neither a scalar (1), a per-axis vector (3), nor a row-major 3×3 matrix (9).
    #[error("expected 1, 3, or 9 values for a noise description, got {len}")]
    InvalidLength { len: usize },
}
