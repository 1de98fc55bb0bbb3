//! Wiring of repositories and services

use std::sync::Arc;

use gym_core::services::{TraineeService, TrainerService, TrainingService};
use gym_security::{Argon2PasswordManager, PasswordPolicy};
use gym_shared::config::AppConfig;
use gym_infrastructure::{PgTraineeRepository, PgTrainerRepository, PgTrainingRepository};
use sqlx::PgPool;

pub type Trainees = TraineeService<PgTraineeRepository, Argon2PasswordManager>;
pub type Trainers = TrainerService<PgTrainerRepository, Argon2PasswordManager>;
pub type Trainings = TrainingService<PgTrainingRepository, PgTraineeRepository, PgTrainerRepository>;

pub struct AppState {
    pub pool: PgPool,
    pub passwords: Arc<Argon2PasswordManager>,
    pub trainees: Trainees,
    pub trainers: Trainers,
    pub trainings: Trainings,
}

impl AppState {
    pub fn new(pool: PgPool, config: &AppConfig) -> Self {
        let passwords = Arc::new(Argon2PasswordManager::new(PasswordPolicy::from(&config.password)));
        let trainee_repo = Arc::new(PgTraineeRepository::new(pool.clone()));
        let trainer_repo = Arc::new(PgTrainerRepository::new(pool.clone()));
        let training_repo = Arc::new(PgTrainingRepository::new(pool.clone()));

        Self {
            trainees: TraineeService::new(Arc::clone(&trainee_repo), Arc::clone(&passwords)),
            trainers: TrainerService::new(Arc::clone(&trainer_repo), Arc::clone(&passwords)),
            trainings: TrainingService::new(training_repo, trainee_repo, trainer_repo),
            passwords,
            pool,
        }
    }
}
