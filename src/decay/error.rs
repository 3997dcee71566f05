use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecayError {
    #[error("altitude filter must be a positive number of kilometres, got {0}")]
    InvalidAltitudeFilter(f64),
}
