//! Command-line interface definition

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use gym_core::domain::TrainingType;

#[derive(Parser, Debug)]
#[command(name = "gym-admin", version, about = "Gym CRM administration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply pending database migrations
    Migrate,

    /// Manage trainees
    #[command(subcommand)]
    Trainee(TraineeCommand),

    /// Manage trainers
    #[command(subcommand)]
    Trainer(TrainerCommand),

    /// Schedule and query trainings
    #[command(subcommand)]
    Training(TrainingCommand),
}

#[derive(Subcommand, Debug)]
pub enum TraineeCommand {
    /// Register a trainee; a password is generated when none is given
    Register {
        first_name: String,
        last_name: String,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        address: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        date_of_birth: Option<NaiveDate>,
    },
    Show {
        username: String,
    },
    List,
    UpdateAddress {
        username: String,
        address: String,
    },
    Activate {
        username: String,
    },
    Deactivate {
        username: String,
    },
    ChangePassword(ChangePasswordArgs),
    /// Hard delete; a missing username is not an error
    Delete {
        username: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TrainerCommand {
    /// Register a trainer; a password is generated when none is given
    Register {
        first_name: String,
        last_name: String,
        #[arg(long, value_parser = parse_training_type)]
        specialization: TrainingType,
        #[arg(long)]
        password: Option<String>,
    },
    Show {
        username: String,
    },
    List,
    Activate {
        username: String,
    },
    Deactivate {
        username: String,
    },
    ChangePassword(ChangePasswordArgs),
}

#[derive(Subcommand, Debug)]
pub enum TrainingCommand {
    Add {
        #[arg(long)]
        trainee: String,
        #[arg(long)]
        trainer: String,
        #[arg(long)]
        name: String,
        #[arg(long = "type", value_parser = parse_training_type)]
        training_type: TrainingType,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Minutes
        #[arg(long)]
        duration: i32,
    },
    Show {
        id: i64,
    },
    List,
    /// Trainings of a trainee with one trainer and type, both dates inclusive
    ForTrainee {
        trainee: String,
        #[command(flatten)]
        filter: CriteriaArgs,
        #[arg(long)]
        trainer: String,
    },
    /// Trainings of a trainer with one trainee and type, both dates inclusive
    ForTrainer {
        trainer: String,
        #[command(flatten)]
        filter: CriteriaArgs,
        #[arg(long)]
        trainee: String,
    },
}

#[derive(Args, Debug)]
pub struct ChangePasswordArgs {
    pub username: String,
    #[arg(long)]
    pub old: String,
    #[arg(long)]
    pub new: String,
}

#[derive(Args, Debug)]
pub struct CriteriaArgs {
    #[arg(long)]
    pub from: NaiveDate,
    #[arg(long)]
    pub to: NaiveDate,
    #[arg(long = "type", value_parser = parse_training_type)]
    pub training_type: TrainingType,
}

fn parse_training_type(value: &str) -> Result<TrainingType, String> {
    TrainingType::from_str(value).ok_or_else(|| {
        let known: Vec<&str> = TrainingType::ALL.iter().map(TrainingType::as_str).collect();
        format!("unknown training type '{}', expected one of: {}", value, known.join(", "))
    })
}
