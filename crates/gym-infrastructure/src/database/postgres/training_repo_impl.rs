// ============================================================================
// Gym Infrastructure - PostgreSQL Training Repository
// File: crates/gym-infrastructure/src/database/postgres/training_repo_impl.rs
// Description: Training lookups and criteria queries with day-widened ranges
// ============================================================================

use async_trait::async_trait;
use chrono::NaiveDateTime;
use gym_shared::utils::start_of_day;
use gym_shared::EntityId;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, info};

use gym_core::domain::{TraineeTrainingCriteria, TrainerTrainingCriteria, Training, TrainingType};
use gym_core::error::DomainError;
use gym_core::repositories::TrainingRepository;

use super::database_error;

pub struct PgTrainingRepository {
    pool: PgPool,
}

impl PgTrainingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct TrainingRow {
    pub id: i64,
    pub trainee_id: i64,
    pub trainer_id: i64,
    pub training_name: String,
    pub training_type: String,
    pub training_date: NaiveDateTime,
    pub duration_minutes: i32,
}

impl TryFrom<TrainingRow> for Training {
    type Error = DomainError;

    fn try_from(row: TrainingRow) -> Result<Self, Self::Error> {
        let training_type = TrainingType::from_str(&row.training_type).ok_or_else(|| {
            error!("Unknown training type stored for training {}: {}", row.id, row.training_type);
            DomainError::DatabaseError(format!("unknown training type: {}", row.training_type))
        })?;

        Ok(Training {
            id: row.id,
            trainee_id: row.trainee_id,
            trainer_id: row.trainer_id,
            name: row.training_name,
            training_type,
            training_date: row.training_date.date(),
            duration_minutes: row.duration_minutes,
        })
    }
}

fn into_trainings(rows: Vec<TrainingRow>) -> Result<Vec<Training>, DomainError> {
    rows.into_iter().map(Training::try_from).collect()
}

#[async_trait]
impl TrainingRepository for PgTrainingRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Training>, DomainError> {
        debug!("Getting a training by id: {}", id);

        let row: Option<TrainingRow> = sqlx::query_as(
            r#"
            SELECT
                id, trainee_id, trainer_id, training_name,
                training_type, training_date, duration_minutes
            FROM trainings
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("finding training by id"))?;

        row.map(Training::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Training>, DomainError> {
        debug!("Getting a list of all trainings");

        let rows: Vec<TrainingRow> = sqlx::query_as(
            r#"
            SELECT
                id, trainee_id, trainer_id, training_name,
                training_type, training_date, duration_minutes
            FROM trainings
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("listing trainings"))?;

        into_trainings(rows)
    }

    async fn create(&self, training: &Training) -> Result<Training, DomainError> {
        info!(
            "Creating training '{}' on {}",
            training.name, training.training_date
        );

        let row: TrainingRow = sqlx::query_as(
            r#"
            INSERT INTO trainings (
                trainee_id, trainer_id, training_name,
                training_type, training_date, duration_minutes
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id, trainee_id, trainer_id, training_name,
                training_type, training_date, duration_minutes
            "#
        )
        .bind(training.trainee_id)
        .bind(training.trainer_id)
        .bind(&training.name)
        .bind(training.training_type.as_str())
        .bind(start_of_day(training.training_date))
        .bind(training.duration_minutes)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error("creating training"))?;

        info!("Training created successfully: {}", row.id);
        row.try_into()
    }

    async fn exists_by_id(&self, id: EntityId) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM trainings WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error("checking training id"))
    }

    async fn find_by_trainee_criteria(
        &self,
        criteria: &TraineeTrainingCriteria,
    ) -> Result<Vec<Training>, DomainError> {
        debug!("Getting trainings by trainee criteria: {:?}", criteria);
        let (date_from, date_to) = criteria.bounds();

        let rows: Vec<TrainingRow> = sqlx::query_as(
            r#"
            SELECT
                t.id, t.trainee_id, t.trainer_id, t.training_name,
                t.training_type, t.training_date, t.duration_minutes
            FROM trainings t
            JOIN trainees te ON te.id = t.trainee_id
            JOIN trainers tr ON tr.id = t.trainer_id
            WHERE te.username = $1
              AND t.training_date >= $2 AND t.training_date <= $3
              AND tr.username = $4
              AND t.training_type = $5
            "#
        )
        .bind(&criteria.trainee_username)
        .bind(date_from)
        .bind(date_to)
        .bind(&criteria.trainer_username)
        .bind(criteria.training_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("finding trainings by trainee criteria"))?;

        into_trainings(rows)
    }

    async fn find_by_trainer_criteria(
        &self,
        criteria: &TrainerTrainingCriteria,
    ) -> Result<Vec<Training>, DomainError> {
        debug!("Getting trainings by trainer criteria: {:?}", criteria);
        let (date_from, date_to) = criteria.bounds();

        let rows: Vec<TrainingRow> = sqlx::query_as(
            r#"
            SELECT
                t.id, t.trainee_id, t.trainer_id, t.training_name,
                t.training_type, t.training_date, t.duration_minutes
            FROM trainings t
            JOIN trainers tr ON tr.id = t.trainer_id
            JOIN trainees te ON te.id = t.trainee_id
            WHERE tr.username = $1
              AND t.training_date >= $2 AND t.training_date <= $3
              AND te.username = $4
              AND t.training_type = $5
            "#
        )
        .bind(&criteria.trainer_username)
        .bind(date_from)
        .bind(date_to)
        .bind(&criteria.trainee_username)
        .bind(criteria.training_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("finding trainings by trainer criteria"))?;

        into_trainings(rows)
    }
}
