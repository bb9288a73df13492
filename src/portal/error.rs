//! Error types and handling
//!
//! The access router and price calculator never fail; malformed input is folded
//! into "anonymous" and "zero". Errors exist only at the edges: loading
//! configuration, reading request files and workflow transitions.

use crate::types::{ConfigError, ConfigValidationError};
use crate::workflow::WorkflowError;
use thiserror::Error;

/// Errors raised at the edges of the portal core
#[derive(Debug, Error)]
pub enum PortalError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration failed validation
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ConfigValidationError),

    /// A request document could not be used
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Workflow transition rejected
    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<anyhow::Error> for PortalError {
    fn from(error: anyhow::Error) -> Self {
        PortalError::InvalidRequest(error.to_string())
    }
}

impl PortalError {
    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            PortalError::Config(_) => "Configuration",
            PortalError::Validation(_) => "Configuration",
            PortalError::InvalidRequest(_) => "Request",
            PortalError::Workflow(_) => "Workflow",
            PortalError::Io(_) => "IO",
            PortalError::Serialization(_) => "Serialization",
        }
    }

    /// Process exit code for the binary
    pub fn exit_code(&self) -> i32 {
        match self {
            PortalError::Config(_) | PortalError::Validation(_) => 2,
            _ => 1,
        }
    }
}

/// Result type for portal operations
pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let error = PortalError::invalid_request("missing item");
        assert!(matches!(error, PortalError::InvalidRequest(_)));
        assert_eq!(error.to_string(), "Invalid request: missing item");
        assert_eq!(error.category(), "Request");
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_conversions() {
        let io_error: PortalError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(io_error, PortalError::Io(_)));

        let validation: PortalError = ConfigValidationError::InvalidNightsPerMonth(0).into();
        assert_eq!(validation.category(), "Configuration");
        assert_eq!(validation.exit_code(), 2);
        assert_eq!(
            validation.to_string(),
            "Configuration validation failed: Nights per month must be greater than 0, got 0"
        );

        let workflow: PortalError = WorkflowError::NoteRequired.into();
        assert_eq!(workflow.category(), "Workflow");

        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(PortalError::from(json_error).category(), "Serialization");

        let anyhow_error: PortalError = anyhow::anyhow!("bad input").into();
        assert!(matches!(anyhow_error, PortalError::InvalidRequest(_)));
    }

    #[test]
    fn test_portal_result_type() {
        let success: PortalResult<i32> = Ok(42);
        assert!(success.is_ok());

        let failure: PortalResult<i32> = Err(PortalError::invalid_request("Test"));
        assert!(failure.is_err());
    }
}
