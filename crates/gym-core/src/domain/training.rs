// ============================================================================
// Gym Core - Training Entity
// File: crates/gym-core/src/domain/training.rs
// Description: Scheduled training session and its search criteria
// ============================================================================

use chrono::{NaiveDate, NaiveDateTime};
use gym_shared::utils::day_bounds;
use gym_shared::{EntityId, UNSAVED_ID};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::TrainingType;

/// Training entity. Immutable once scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Training {
    pub id: EntityId,
    pub trainee_id: EntityId,
    pub trainer_id: EntityId,

    #[validate(length(min = 1, max = 100, message = "Training name must be between 1 and 100 characters"))]
    pub name: String,

    pub training_type: TrainingType,

    pub training_date: NaiveDate,

    #[validate(range(min = 1, max = 1440, message = "Duration must be between 1 and 1440 minutes"))]
    pub duration_minutes: i32,
}

impl Training {
    pub fn new(
        trainee_id: EntityId,
        trainer_id: EntityId,
        name: String,
        training_type: TrainingType,
        training_date: NaiveDate,
        duration_minutes: i32,
    ) -> Result<Self, validator::ValidationErrors> {
        let training = Self {
            id: UNSAVED_ID,
            trainee_id,
            trainer_id,
            name: name.trim().to_string(),
            training_type,
            training_date,
            duration_minutes,
        };

        training.validate()?;
        Ok(training)
    }
}

/// Scheduling input; participants are addressed by username.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewTraining {
    pub trainee_username: String,
    pub trainer_username: String,
    pub name: String,
    pub training_type: TrainingType,
    pub training_date: NaiveDate,
    pub duration_minutes: i32,
}

/// Trainings of one trainee with one trainer, of one type, within a date range.
///
/// Every field is a mandatory filter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TraineeTrainingCriteria {
    pub trainee_username: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub trainer_username: String,
    pub training_type: TrainingType,
}

impl TraineeTrainingCriteria {
    /// `[date_from 00:00:00, date_to 23:59:59]`
    pub fn bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        day_bounds(self.date_from, self.date_to)
    }
}

/// Same filter as [`TraineeTrainingCriteria`] with the trainer as primary subject.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrainerTrainingCriteria {
    pub trainer_username: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub trainee_username: String,
    pub training_type: TrainingType,
}

impl TrainerTrainingCriteria {
    pub fn bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        day_bounds(self.date_from, self.date_to)
    }
}
