//! Trainer repository trait (port)

use async_trait::async_trait;
use gym_shared::EntityId;

use crate::domain::Trainer;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrainerRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Trainer>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<Trainer>, DomainError>;
    async fn find_all(&self) -> Result<Vec<Trainer>, DomainError>;
    async fn exists_by_id(&self, id: EntityId) -> Result<bool, DomainError>;
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;
    async fn create(&self, trainer: &Trainer) -> Result<Trainer, DomainError>;
    async fn update(&self, trainer: &Trainer) -> Result<Trainer, DomainError>;
}
