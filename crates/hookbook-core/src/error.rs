//! Registry errors.

use thiserror::Error;

use hookbook_protocols::StoreError;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not available while a subscription is being edited")]
    Editing,

    #[error("No subscription is being edited")]
    NotEditing,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = RegistryError::Validation("subscriber URL cannot be empty".to_string());
        assert!(err.to_string().contains("Validation failed"));
        assert!(err.to_string().contains("subscriber URL"));
    }

    #[test]
    fn test_store_error_is_transparent() {
        let err = RegistryError::from(StoreError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        assert_eq!(err.to_string(), "API error: 500 - boom");
    }

    #[test]
    fn test_mode_errors() {
        assert!(RegistryError::Editing.to_string().contains("edited"));
        assert!(RegistryError::NotEditing.to_string().contains("No subscription"));
    }
}
