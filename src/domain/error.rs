use thiserror::Error;

/// Core domain errors
///
/// These travel through the `Err` channel of repository and service calls
/// and always represent infrastructure failures. Expected business outcomes
/// (a rejected registration) are reported through `RegistrationResult`.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Organisation 'abc' not found");
        assert_eq!(error.to_string(), "Not found: Organisation 'abc' not found");
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("Resource already exists");
        assert_eq!(error.to_string(), "Conflict: Resource already exists");
    }

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("Store unreachable");
        assert_eq!(error.to_string(), "Storage error: Store unreachable");
    }
}
