//! Training repository trait (port)

use async_trait::async_trait;
use gym_shared::EntityId;

use crate::domain::{TraineeTrainingCriteria, TrainerTrainingCriteria, Training};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrainingRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Training>, DomainError>;
    /// Unordered.
    async fn find_all(&self) -> Result<Vec<Training>, DomainError>;
    async fn create(&self, training: &Training) -> Result<Training, DomainError>;
    async fn exists_by_id(&self, id: EntityId) -> Result<bool, DomainError>;
    async fn find_by_trainee_criteria(
        &self,
        criteria: &TraineeTrainingCriteria,
    ) -> Result<Vec<Training>, DomainError>;
    async fn find_by_trainer_criteria(
        &self,
        criteria: &TrainerTrainingCriteria,
    ) -> Result<Vec<Training>, DomainError>;
}
