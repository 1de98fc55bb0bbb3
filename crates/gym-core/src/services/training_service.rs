// ============================================================================
// Gym Core - Training Service
// File: crates/gym-core/src/services/training_service.rs
// ============================================================================
//! Scheduling and criteria queries over trainings

use std::sync::Arc;

use gym_shared::EntityId;
use tracing::{debug, info, warn};

use crate::domain::{NewTraining, TraineeTrainingCriteria, TrainerTrainingCriteria, Training};
use crate::error::DomainError;
use crate::repositories::{TraineeRepository, TrainerRepository, TrainingRepository};

pub struct TrainingService<T: TrainingRepository, E: TraineeRepository, R: TrainerRepository> {
    training_repo: Arc<T>,
    trainee_repo: Arc<E>,
    trainer_repo: Arc<R>,
}

impl<T, E, R> TrainingService<T, E, R>
where
    T: TrainingRepository,
    E: TraineeRepository,
    R: TrainerRepository,
{
    pub fn new(training_repo: Arc<T>, trainee_repo: Arc<E>, trainer_repo: Arc<R>) -> Self {
        Self {
            training_repo,
            trainee_repo,
            trainer_repo,
        }
    }

    /// Schedule a training between an existing trainee and trainer
    pub async fn add(&self, new_training: NewTraining) -> Result<Training, DomainError> {
        info!(
            "Scheduling training '{}' for {} with {}",
            new_training.name, new_training.trainee_username, new_training.trainer_username
        );

        let trainee = self
            .trainee_repo
            .find_by_username(&new_training.trainee_username)
            .await?
            .ok_or_else(|| {
                warn!("Training not scheduled: unknown trainee {}", new_training.trainee_username);
                DomainError::TraineeNotFound(new_training.trainee_username.clone())
            })?;

        let trainer = self
            .trainer_repo
            .find_by_username(&new_training.trainer_username)
            .await?
            .ok_or_else(|| {
                warn!("Training not scheduled: unknown trainer {}", new_training.trainer_username);
                DomainError::TrainerNotFound(new_training.trainer_username.clone())
            })?;

        let training = Training::new(
            trainee.id,
            trainer.id,
            new_training.name,
            new_training.training_type,
            new_training.training_date,
            new_training.duration_minutes,
        )
        .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        let created = self.training_repo.create(&training).await?;

        info!("Training scheduled with id {}", created.id);
        Ok(created)
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<Option<Training>, DomainError> {
        debug!("Getting training by id: {}", id);
        self.training_repo.find_by_id(id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Training>, DomainError> {
        self.training_repo.find_all().await
    }

    pub async fn exists_by_id(&self, id: EntityId) -> Result<bool, DomainError> {
        self.training_repo.exists_by_id(id).await
    }

    pub async fn trainee_trainings(
        &self,
        criteria: &TraineeTrainingCriteria,
    ) -> Result<Vec<Training>, DomainError> {
        if criteria.date_from > criteria.date_to {
            return Err(DomainError::ValidationError(format!(
                "date_from {} is after date_to {}",
                criteria.date_from, criteria.date_to
            )));
        }

        debug!("Getting trainings of trainee {}", criteria.trainee_username);
        self.training_repo.find_by_trainee_criteria(criteria).await
    }

    pub async fn trainer_trainings(
        &self,
        criteria: &TrainerTrainingCriteria,
    ) -> Result<Vec<Training>, DomainError> {
        if criteria.date_from > criteria.date_to {
            return Err(DomainError::ValidationError(format!(
                "date_from {} is after date_to {}",
                criteria.date_from, criteria.date_to
            )));
        }

        debug!("Getting trainings of trainer {}", criteria.trainer_username);
        self.training_repo.find_by_trainer_criteria(criteria).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    use crate::domain::{Trainee, Trainer, TrainingType};
    use crate::repositories::{MockTraineeRepository, MockTrainerRepository, MockTrainingRepository};

    use super::*;

    type Service = TrainingService<MockTrainingRepository, MockTraineeRepository, MockTrainerRepository>;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trainee() -> Trainee {
        Trainee {
            id: 1,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            username: "John.Doe".to_string(),
            password: "hash".to_string(),
            address: None,
            date_of_birth: None,
            is_active: true,
        }
    }

    fn trainer() -> Trainer {
        Trainer {
            id: 2,
            first_name: "Anna".to_string(),
            last_name: "Smith".to_string(),
            username: "Anna.Smith".to_string(),
            password: "hash".to_string(),
            specialization: TrainingType::Yoga,
            is_active: true,
        }
    }

    fn new_training() -> NewTraining {
        NewTraining {
            trainee_username: "John.Doe".to_string(),
            trainer_username: "Anna.Smith".to_string(),
            name: "Morning flow".to_string(),
            training_type: TrainingType::Yoga,
            training_date: date(2024, 5, 1),
            duration_minutes: 60,
        }
    }

    fn service(
        trainings: MockTrainingRepository,
        trainees: MockTraineeRepository,
        trainers: MockTrainerRepository,
    ) -> Service {
        TrainingService::new(Arc::new(trainings), Arc::new(trainees), Arc::new(trainers))
    }

    #[tokio::test]
    async fn test_add_training() {
        let mut trainings = MockTrainingRepository::new();
        let mut trainees = MockTraineeRepository::new();
        let mut trainers = MockTrainerRepository::new();

        trainees
            .expect_find_by_username()
            .with(eq("John.Doe"))
            .times(1)
            .returning(|_| Ok(Some(trainee())));
        trainers
            .expect_find_by_username()
            .with(eq("Anna.Smith"))
            .times(1)
            .returning(|_| Ok(Some(trainer())));
        trainings
            .expect_create()
            .withf(|t| t.trainee_id == 1 && t.trainer_id == 2 && t.training_type == TrainingType::Yoga)
            .times(1)
            .returning(|t| Ok(Training { id: 10, ..t.clone() }));

        let created = service(trainings, trainees, trainers)
            .add(new_training())
            .await
            .unwrap();

        assert_eq!(created.id, 10);
        assert_eq!(created.training_date, date(2024, 5, 1));
    }

    #[tokio::test]
    async fn test_add_training_unknown_trainer() {
        let mut trainings = MockTrainingRepository::new();
        let mut trainees = MockTraineeRepository::new();
        let mut trainers = MockTrainerRepository::new();

        trainees
            .expect_find_by_username()
            .returning(|_| Ok(Some(trainee())));
        trainers.expect_find_by_username().times(1).returning(|_| Ok(None));
        trainings.expect_create().never();

        let result = service(trainings, trainees, trainers).add(new_training()).await;

        assert!(matches!(result, Err(DomainError::TrainerNotFound(name)) if name == "Anna.Smith"));
    }

    #[tokio::test]
    async fn test_add_training_invalid_duration() {
        let mut trainings = MockTrainingRepository::new();
        let mut trainees = MockTraineeRepository::new();
        let mut trainers = MockTrainerRepository::new();

        trainees
            .expect_find_by_username()
            .returning(|_| Ok(Some(trainee())));
        trainers
            .expect_find_by_username()
            .returning(|_| Ok(Some(trainer())));
        trainings.expect_create().never();

        let result = service(trainings, trainees, trainers)
            .add(NewTraining {
                duration_minutes: 0,
                ..new_training()
            })
            .await;

        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let mut trainings = MockTrainingRepository::new();

        trainings.expect_find_by_id().with(eq(99)).times(1).returning(|_| Ok(None));

        let found = service(trainings, MockTraineeRepository::new(), MockTrainerRepository::new())
            .get_by_id(99)
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_trainee_trainings_delegates_criteria() {
        let mut trainings = MockTrainingRepository::new();
        let criteria = TraineeTrainingCriteria {
            trainee_username: "John.Doe".to_string(),
            date_from: date(2024, 5, 1),
            date_to: date(2024, 5, 1),
            trainer_username: "Anna.Smith".to_string(),
            training_type: TrainingType::Yoga,
        };
        let expected = criteria.clone();

        trainings
            .expect_find_by_trainee_criteria()
            .withf(move |c| *c == expected)
            .times(1)
            .returning(|_| {
                Ok(vec![Training {
                    id: 10,
                    trainee_id: 1,
                    trainer_id: 2,
                    name: "Morning flow".to_string(),
                    training_type: TrainingType::Yoga,
                    training_date: date(2024, 5, 1),
                    duration_minutes: 60,
                }])
            });

        let found = service(trainings, MockTraineeRepository::new(), MockTrainerRepository::new())
            .trainee_trainings(&criteria)
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_inverted_range_is_rejected() {
        let mut trainings = MockTrainingRepository::new();
        trainings.expect_find_by_trainer_criteria().never();

        let result = service(trainings, MockTraineeRepository::new(), MockTrainerRepository::new())
            .trainer_trainings(&TrainerTrainingCriteria {
                trainer_username: "Anna.Smith".to_string(),
                date_from: date(2024, 5, 2),
                date_to: date(2024, 5, 1),
                trainee_username: "John.Doe".to_string(),
                training_type: TrainingType::Yoga,
            })
            .await;

        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_add_training_unknown_trainee() {
        let mut trainings = MockTrainingRepository::new();
        let mut trainees = MockTraineeRepository::new();
        let mut trainers = MockTrainerRepository::new();

        trainees
            .expect_find_by_username()
            .with(eq("John.Doe"))
            .times(1)
            .returning(|_| Ok(None));
        trainers.expect_find_by_username().never();
        trainings.expect_create().never();

        let result = service(trainings, trainees, trainers).add(new_training()).await;

        assert!(matches!(result, Err(DomainError::TraineeNotFound(name)) if name == "John.Doe"));
    }

    #[tokio::test]
    async fn test_get_all_and_exists_by_id() {
        let mut trainings = MockTrainingRepository::new();

        trainings.expect_find_all().times(1).returning(|| Ok(Vec::new()));
        trainings
            .expect_exists_by_id()
            .with(eq(10))
            .times(1)
            .returning(|_| Ok(true));

        let service = service(trainings, MockTraineeRepository::new(), MockTrainerRepository::new());

        assert!(service.get_all().await.unwrap().is_empty());
        assert!(service.exists_by_id(10).await.unwrap());
    }

    #[tokio::test]
    async fn test_trainer_trainings_delegates_criteria() {
        let mut trainings = MockTrainingRepository::new();
        let criteria = TrainerTrainingCriteria {
            trainer_username: "Anna.Smith".to_string(),
            date_from: date(2024, 5, 1),
            date_to: date(2024, 5, 31),
            trainee_username: "John.Doe".to_string(),
            training_type: TrainingType::Yoga,
        };
        let expected = criteria.clone();

        trainings.expect_find_by_trainee_criteria().never();
        trainings
            .expect_find_by_trainer_criteria()
            .withf(move |c| *c == expected)
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let found = service(trainings, MockTraineeRepository::new(), MockTrainerRepository::new())
            .trainer_trainings(&criteria)
            .await
            .unwrap();

        assert!(found.is_empty());
    }
}
