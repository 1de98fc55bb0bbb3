//! Repository traits (ports)

pub mod trainee_repository;
pub mod trainer_repository;
pub mod training_repository;

pub use trainee_repository::TraineeRepository;
pub use trainer_repository::TrainerRepository;
pub use training_repository::TrainingRepository;

#[cfg(test)]
pub use trainee_repository::MockTraineeRepository;
#[cfg(test)]
pub use trainer_repository::MockTrainerRepository;
#[cfg(test)]
pub use training_repository::MockTrainingRepository;
