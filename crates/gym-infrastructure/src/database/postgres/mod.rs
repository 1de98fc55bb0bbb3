//! PostgreSQL repository implementations

pub mod trainee_repo_impl;
pub mod trainer_repo_impl;
pub mod training_repo_impl;

pub use trainee_repo_impl::PgTraineeRepository;
pub use trainer_repo_impl::PgTrainerRepository;
pub use training_repo_impl::PgTrainingRepository;

use gym_core::error::DomainError;
use tracing::error;

/// Logs a store failure and converts it.
pub(crate) fn database_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        error!("Database error {}: {}", operation, e);
        DomainError::DatabaseError(e.to_string())
    }
}

/// As [`database_error`], with unique violations reported as a taken username.
pub(crate) fn insert_error<'a>(
    operation: &'static str,
    username: &'a str,
) -> impl FnOnce(sqlx::Error) -> DomainError + 'a {
    move |e| match e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            error!("Unique violation {}: {}", operation, db_err);
            DomainError::UsernameAlreadyExists(username.to_string())
        }
        other => database_error(operation)(other),
    }
}
