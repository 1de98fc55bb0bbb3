// ============================================================================
// Gym Core - Trainee Entity
// File: crates/gym-core/src/domain/trainee.rs
// Description: Gym member attending trainings
// ============================================================================

use chrono::NaiveDate;
use gym_shared::{EntityId, UNSAVED_ID};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Trainee entity
///
/// `id` is assigned by the store; a trainee that was never persisted carries
/// [`UNSAVED_ID`]. Trainings are reached through the training repository and
/// are not owned by the trainee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Trainee {
    pub id: EntityId,

    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: String,

    pub username: String,

    /// Password hash, never plaintext.
    #[serde(skip_serializing, default)]
    pub password: String,

    #[validate(length(max = 255, message = "Address too long"))]
    pub address: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    pub is_active: bool,
}

impl Trainee {
    pub fn new(
        first_name: String,
        last_name: String,
        password_hash: String,
        address: Option<String>,
        date_of_birth: Option<NaiveDate>,
    ) -> Result<Self, validator::ValidationErrors> {
        let trainee = Self {
            id: UNSAVED_ID,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            username: String::new(),
            password: password_hash,
            address: address.map(|a| a.trim().to_string()).filter(|a| !a.is_empty()),
            date_of_birth,
            is_active: true,
        };

        trainee.validate()?;
        Ok(trainee)
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

/// Registration input for a trainee
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewTrainee {
    pub first_name: String,
    pub last_name: String,
    /// Plaintext; hashed before it reaches the store.
    pub password: String,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}
