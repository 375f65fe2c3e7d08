//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors surfaced by the account service.
///
/// Every service failure is one of three kinds. `BadRequest` and `NotFound`
/// are raised by the service itself and always reach the caller unchanged;
/// `Unexpected` is the catch-all for faults the validation rules did not
/// anticipate, carrying only a generic message.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Unexpected { message: String },
}

impl DomainError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }
}

/// Errors produced by repository implementations.
///
/// `Duplicate` is raised when a store-level uniqueness constraint fires,
/// so the service can fold the check-then-act race back into its normal
/// validation outcome instead of reporting an internal fault.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("duplicate value for {field}")]
    Duplicate { field: String },

    #[error("storage failure: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn duplicate(field: impl Into<String>) -> Self {
        Self::Duplicate {
            field: field.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display_is_the_message() {
        let error = DomainError::bad_request("Email is required.");
        assert_eq!(error.to_string(), "Email is required.");

        let error = DomainError::not_found("Account not found.");
        assert_eq!(error.to_string(), "Account not found.");
    }

    #[test]
    fn test_repository_error_display() {
        let error = RepositoryError::duplicate("email");
        assert_eq!(error.to_string(), "duplicate value for email");

        let error = RepositoryError::storage("connection reset");
        assert_eq!(error.to_string(), "storage failure: connection reset");
    }
}
