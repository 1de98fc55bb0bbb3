//! # Gym Infrastructure
//! 
//! PostgreSQL implementations (adapters) of the gym-core repositories.

pub mod database;

pub use database::{
    create_pool, run_migrations, PgTraineeRepository, PgTrainerRepository, PgTrainingRepository,
};
