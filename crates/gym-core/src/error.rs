//! Domain errors

use gym_shared::EntityId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Trainee not found: {0}")]
    TraineeNotFound(String),

    #[error("Trainer not found: {0}")]
    TrainerNotFound(String),

    #[error("Training not found: {0}")]
    TrainingNotFound(EntityId),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Unable to generate unique username")]
    UnableToGenerateUniqueName,

    #[error("Password too weak")]
    PasswordTooWeak,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Business-rule violation the caller can fix, as opposed to a store failure.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            DomainError::DatabaseError(_) | DomainError::PasswordHashError(_)
        )
    }
}
