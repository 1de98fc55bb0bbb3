// ============================================================================
// Gym Core - Training Type
// File: crates/gym-core/src/domain/training_type.rs
// Description: Training category shared by trainings and trainer specializations
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

/// Training category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingType {
    Fitness,
    Yoga,
    Zumba,
    Stretching,
    Resistance,
    Cardio,
}

impl TrainingType {
    pub const ALL: [TrainingType; 6] = [
        TrainingType::Fitness,
        TrainingType::Yoga,
        TrainingType::Zumba,
        TrainingType::Stretching,
        TrainingType::Resistance,
        TrainingType::Cardio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingType::Fitness => "fitness",
            TrainingType::Yoga => "yoga",
            TrainingType::Zumba => "zumba",
            TrainingType::Stretching => "stretching",
            TrainingType::Resistance => "resistance",
            TrainingType::Cardio => "cardio",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fitness" => Some(TrainingType::Fitness),
            "yoga" => Some(TrainingType::Yoga),
            "zumba" => Some(TrainingType::Zumba),
            "stretching" => Some(TrainingType::Stretching),
            "resistance" => Some(TrainingType::Resistance),
            "cardio" => Some(TrainingType::Cardio),
            _ => None,
        }
    }
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
