//! Trainee repository trait (port)

use async_trait::async_trait;
use gym_shared::EntityId;

use crate::domain::Trainee;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TraineeRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Trainee>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<Trainee>, DomainError>;
    async fn find_all(&self) -> Result<Vec<Trainee>, DomainError>;
    async fn exists_by_id(&self, id: EntityId) -> Result<bool, DomainError>;
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;
    /// Inserts `trainee` and returns it with the store-assigned id.
    async fn create(&self, trainee: &Trainee) -> Result<Trainee, DomainError>;
    async fn update(&self, trainee: &Trainee) -> Result<Trainee, DomainError>;
    /// Hard delete.
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
