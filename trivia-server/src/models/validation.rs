//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty (or whitespace only) when it shouldn't be
    Empty { field: &'static str },

    /// Required field absent or null
    Missing { field: &'static str },

    /// Value present but not in the expected shape
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::Missing { field } | Self::InvalidFormat { field, .. } => {
                field
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Missing { field: "difficulty" };
        assert_eq!(err.to_string(), "difficulty is required");

        let err = ValidationError::InvalidFormat {
            field: "category",
            reason: "expected an integer",
        };
        assert_eq!(err.to_string(), "category: expected an integer");
        assert_eq!(err.field(), "category");
    }
}
