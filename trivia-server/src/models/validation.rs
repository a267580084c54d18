//! Validation error types

use std::fmt;

/// Validation error for request bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is not a JSON object
    NotAnObject,

    /// Required field is absent
    MissingField { field: &'static str },

    /// Field is present but has the wrong JSON type
    InvalidType { field: &'static str, expected: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "request body must be a JSON object"),
            Self::MissingField { field } => write!(f, "missing required field '{}'", field),
            Self::InvalidType { field, expected } => {
                write!(f, "field '{}' must be {}", field, expected)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidType {
            field: "difficulty",
            expected: "an integer",
        };
        assert_eq!(err.to_string(), "field 'difficulty' must be an integer");

        let err = ValidationError::MissingField { field: "answer" };
        assert_eq!(err.to_string(), "missing required field 'answer'");
    }
}
