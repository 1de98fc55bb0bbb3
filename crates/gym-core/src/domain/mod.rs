//! # Gym Core - Domain Module
//! 
//! Domain entities for the gym CRM.

pub mod training_type;
pub mod trainee;
pub mod trainer;
pub mod training;

// Re-export all entities and enums
pub use training_type::TrainingType;
pub use trainee::{NewTrainee, Trainee};
pub use trainer::{NewTrainer, Trainer};
pub use training::{NewTraining, TraineeTrainingCriteria, TrainerTrainingCriteria, Training};
