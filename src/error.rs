use thiserror::Error;

/// Errors that can occur while configuring the cleansing pipeline.
///
/// The transformation itself is total: absent entries and entries that
/// cleanse to nothing are normal outcomes, not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CleanseError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
