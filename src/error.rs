use thiserror::Error;

/// Errors raised while validating generation input.
///
/// Both kinds are detected before any sampling starts, so a failed call never
/// produces a partial texture.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanetError {
    #[error("Invalid noise parameters: {0}")]
    InvalidParameters(String),
    #[error("Invalid texture side: {0} (must be greater than zero)")]
    InvalidSize(i32),
}

pub type Result<T> = std::result::Result<T, PlanetError>;
