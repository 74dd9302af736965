use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GuidanceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid zone {id}: {reason}")]
    InvalidZone { id: String, reason: String },
    #[error("duplicate zone id: {0}")]
    DuplicateZoneId(String),
}
