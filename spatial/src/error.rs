use thiserror::Error;

/// Errors raised while building or configuring spatial values.
#[derive(Error, Debug)]
pub enum SpatialError {
    #[error("Expected at least {expected} components, found {found}")]
    TooFewComponents { expected: usize, found: usize },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid {axis} bounds: min {min} and max {max} do not form a range")]
    InvalidBounds { axis: char, min: f64, max: f64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpatialError>;

/// Returns the first three elements of `values`, or `TooFewComponents`.
pub(crate) fn take_three(values: &[f64]) -> Result<[f64; 3]> {
    match values {
        [a, b, c, ..] => Ok([*a, *b, *c]),
        _ => Err(SpatialError::TooFewComponents {
            expected: 3,
            found: values.len(),
        }),
    }
}
