use thiserror::Error;

/// Errors surfaced by registry operations and configuration loading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// An empty or otherwise unusable node identifier was supplied
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A required platform field or label was absent or empty
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// No entry exists for the requested node
    #[error("Node not found: {0}")]
    NotFound(String),

    /// Environment configuration could not be parsed
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
