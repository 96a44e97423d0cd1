use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Degenerate geometry: {0}")]
    Degenerate(String),

    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    #[error("Tolerance violation: {0}")]
    Tolerance(String),
}

pub type Result<T> = std::result::Result<T, CurveError>;
