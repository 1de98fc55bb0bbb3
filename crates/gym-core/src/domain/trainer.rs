// ============================================================================
// Gym Core - Trainer Entity
// File: crates/gym-core/src/domain/trainer.rs
// ============================================================================

use gym_shared::{EntityId, UNSAVED_ID};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::TrainingType;

/// Trainer entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Trainer {
    pub id: EntityId,

    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: String,

    pub username: String,

    #[serde(skip_serializing, default)]
    pub password: String,

    pub specialization: TrainingType,

    pub is_active: bool,
}

impl Trainer {
    pub fn new(
        first_name: String,
        last_name: String,
        password_hash: String,
        specialization: TrainingType,
    ) -> Result<Self, validator::ValidationErrors> {
        let trainer = Self {
            id: UNSAVED_ID,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            username: String::new(),
            password: password_hash,
            specialization,
            is_active: true,
        };

        trainer.validate()?;
        Ok(trainer)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

/// Registration input for a trainer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewTrainer {
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub specialization: TrainingType,
}
