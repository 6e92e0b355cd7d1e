//! Error types for the risk engine
//!
//! Exactly three failure kinds; all are local and synchronous.

use crate::model::ModelVersion;
use thiserror::Error;

/// Failure returned by a risk computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// A logarithm input is missing, non-positive or not finite
    #[error("Precondition violated: {field} must be a positive number, got {value}")]
    PreconditionViolation { field: &'static str, value: String },

    /// Unrecognized model selector
    #[error("Invalid model_version '{given}'. Use 'pce2013' or 'prevent2023'.")]
    InvalidInput { given: String },

    /// Recognized selector whose model is not built
    #[error("{} model not yet implemented", .model.display_name())]
    NotImplemented { model: ModelVersion },
}

impl RiskError {
    /// Precondition failure for a field the caller never supplied
    pub fn missing(field: &'static str) -> Self {
        RiskError::PreconditionViolation {
            field,
            value: "missing".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_lists_valid_values() {
        let err = RiskError::InvalidInput {
            given: "xyz".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("xyz"));
        assert!(msg.contains("'pce2013'"));
        assert!(msg.contains("'prevent2023'"));
    }

    #[test]
    fn test_not_implemented_display() {
        let err = RiskError::NotImplemented {
            model: ModelVersion::Prevent2023,
        };
        assert_eq!(err.to_string(), "PREVENT 2023 model not yet implemented");
    }

    #[test]
    fn test_missing_field() {
        let err = RiskError::missing("hdl_cholesterol");
        assert_eq!(
            err.to_string(),
            "Precondition violated: hdl_cholesterol must be a positive number, got missing"
        );
    }
}
