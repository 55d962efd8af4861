use thiserror::Error;

/// Domain errors raised by the algebra layer.
///
/// Geometric queries never produce these: "no intersection" is a normal
/// result. Only operations with an invalid input domain fail.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("matrix is not invertible (determinant = {determinant})")]
    NotInvertible { determinant: f32 },

    #[error("division by near-zero scalar {divisor}")]
    DivisionByZero { divisor: f32 },

    #[error("zero-length value")]
    ZeroLength,
}

/// Convenience type alias for results using [`MathError`].
pub type Result<T> = std::result::Result<T, MathError>;
