//! Command execution

use anyhow::{anyhow, Result};
use gym_core::domain::{
    NewTrainee, NewTrainer, NewTraining, TraineeTrainingCriteria, TrainerTrainingCriteria,
};
use gym_core::error::DomainError;
use gym_infrastructure::run_migrations;
use gym_security::PasswordManager;
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::cli::{Command, TraineeCommand, TrainerCommand, TrainingCommand};
use crate::state::AppState;

pub async fn run(state: &AppState, command: Command) -> Result<()> {
    match command {
        Command::Migrate => {
            run_migrations(&state.pool).await?;
            print_json(&json!({ "migrated": true }))
        }
        Command::Trainee(command) => run_trainee(state, command).await,
        Command::Trainer(command) => run_trainer(state, command).await,
        Command::Training(command) => run_training(state, command).await,
    }
}

async fn run_trainee(state: &AppState, command: TraineeCommand) -> Result<()> {
    let trainees = &state.trainees;

    match command {
        TraineeCommand::Register {
            first_name,
            last_name,
            password,
            address,
            date_of_birth,
        } => {
            let (password, generated) = plaintext_or_generated(state, password);
            let trainee = trainees
                .register(NewTrainee {
                    first_name,
                    last_name,
                    password: password.clone(),
                    address,
                    date_of_birth,
                })
                .await?;

            print_json(&json!({
                "trainee": trainee,
                "password": generated.then_some(password),
            }))
        }
        TraineeCommand::Show { username } => {
            let trainee = trainees
                .get_by_username(&username)
                .await?
                .ok_or_else(|| anyhow!("Trainee not found: {}", username))?;
            print_json(&trainee)
        }
        TraineeCommand::List => print_json(&trainees.get_all().await?),
        TraineeCommand::UpdateAddress { username, address } => {
            let mut trainee = trainees
                .get_by_username(&username)
                .await?
                .ok_or_else(|| anyhow!("Trainee not found: {}", username))?;
            trainee.address = Some(address);
            print_json(&trainees.update(&trainee).await?)
        }
        TraineeCommand::Activate { username } => print_json(&trainees.set_active(&username, true).await?),
        TraineeCommand::Deactivate { username } => {
            print_json(&trainees.set_active(&username, false).await?)
        }
        TraineeCommand::ChangePassword(args) => {
            let mut trainee = trainees
                .get_by_username(&args.username)
                .await?
                .ok_or_else(|| anyhow!("Trainee not found: {}", args.username))?;
            trainees
                .change_password(&mut trainee, &args.old, &args.new)
                .await?;
            info!("Password changed for {}", trainee.username);
            print_json(&json!({ "username": trainee.username, "password_changed": true }))
        }
        TraineeCommand::Delete { username } => {
            trainees.delete_by_username(&username).await?;
            print_json(&json!({ "username": username, "deleted": true }))
        }
    }
}

async fn run_trainer(state: &AppState, command: TrainerCommand) -> Result<()> {
    let trainers = &state.trainers;

    match command {
        TrainerCommand::Register {
            first_name,
            last_name,
            specialization,
            password,
        } => {
            let (password, generated) = plaintext_or_generated(state, password);
            let trainer = trainers
                .register(NewTrainer {
                    first_name,
                    last_name,
                    password: password.clone(),
                    specialization,
                })
                .await?;

            print_json(&json!({
                "trainer": trainer,
                "password": generated.then_some(password),
            }))
        }
        TrainerCommand::Show { username } => {
            let trainer = trainers
                .get_by_username(&username)
                .await?
                .ok_or_else(|| anyhow!("Trainer not found: {}", username))?;
            print_json(&trainer)
        }
        TrainerCommand::List => print_json(&trainers.get_all().await?),
        TrainerCommand::Activate { username } => print_json(&trainers.set_active(&username, true).await?),
        TrainerCommand::Deactivate { username } => {
            print_json(&trainers.set_active(&username, false).await?)
        }
        TrainerCommand::ChangePassword(args) => {
            let mut trainer = trainers
                .get_by_username(&args.username)
                .await?
                .ok_or_else(|| anyhow!("Trainer not found: {}", args.username))?;
            trainers
                .change_password(&mut trainer, &args.old, &args.new)
                .await?;
            print_json(&json!({ "username": trainer.username, "password_changed": true }))
        }
    }
}

async fn run_training(state: &AppState, command: TrainingCommand) -> Result<()> {
    let trainings = &state.trainings;

    match command {
        TrainingCommand::Add {
            trainee,
            trainer,
            name,
            training_type,
            date,
            duration,
        } => {
            let training = trainings
                .add(NewTraining {
                    trainee_username: trainee,
                    trainer_username: trainer,
                    name,
                    training_type,
                    training_date: date,
                    duration_minutes: duration,
                })
                .await?;
            print_json(&training)
        }
        TrainingCommand::Show { id } => {
            let training = trainings
                .get_by_id(id)
                .await?
                .ok_or(DomainError::TrainingNotFound(id))?;
            print_json(&training)
        }
        TrainingCommand::List => print_json(&trainings.get_all().await?),
        TrainingCommand::ForTrainee {
            trainee,
            filter,
            trainer,
        } => {
            let found = trainings
                .trainee_trainings(&TraineeTrainingCriteria {
                    trainee_username: trainee,
                    date_from: filter.from,
                    date_to: filter.to,
                    trainer_username: trainer,
                    training_type: filter.training_type,
                })
                .await?;
            print_json(&found)
        }
        TrainingCommand::ForTrainer {
            trainer,
            filter,
            trainee,
        } => {
            let found = trainings
                .trainer_trainings(&TrainerTrainingCriteria {
                    trainer_username: trainer,
                    date_from: filter.from,
                    date_to: filter.to,
                    trainee_username: trainee,
                    training_type: filter.training_type,
                })
                .await?;
            print_json(&found)
        }
    }
}

/// The given password, or a generated one flagged `true`.
fn plaintext_or_generated(state: &AppState, password: Option<String>) -> (String, bool) {
    match password {
        Some(password) => (password, false),
        None => (state.passwords.generate_password(), true),
    }
}

#[allow(clippy::print_stdout)]
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
