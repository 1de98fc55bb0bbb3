// ============================================================================
// Gym Infrastructure - PostgreSQL Trainer Repository
// File: crates/gym-infrastructure/src/database/postgres/trainer_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use gym_shared::EntityId;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, info};

use gym_core::domain::{Trainer, TrainingType};
use gym_core::error::DomainError;
use gym_core::repositories::TrainerRepository;

use super::{database_error, insert_error};

pub struct PgTrainerRepository {
    pool: PgPool,
}

impl PgTrainerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct TrainerRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub specialization: String,
    pub is_active: bool,
}

impl TryFrom<TrainerRow> for Trainer {
    type Error = DomainError;

    fn try_from(row: TrainerRow) -> Result<Self, Self::Error> {
        let specialization = TrainingType::from_str(&row.specialization).ok_or_else(|| {
            error!("Unknown specialization stored for trainer {}: {}", row.id, row.specialization);
            DomainError::DatabaseError(format!("unknown training type: {}", row.specialization))
        })?;

        Ok(Trainer {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            username: row.username,
            password: row.password,
            specialization,
            is_active: row.is_active,
        })
    }
}

#[async_trait]
impl TrainerRepository for PgTrainerRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Trainer>, DomainError> {
        debug!("Getting a trainer by id: {}", id);

        let row: Option<TrainerRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, username, password, specialization, is_active
            FROM trainers
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("finding trainer by id"))?;

        row.map(Trainer::try_from).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Trainer>, DomainError> {
        debug!("Getting a trainer by username: {}", username);

        let row: Option<TrainerRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, username, password, specialization, is_active
            FROM trainers
            WHERE username = $1
            "#
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("finding trainer by username"))?;

        row.map(Trainer::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Trainer>, DomainError> {
        let rows: Vec<TrainerRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, username, password, specialization, is_active
            FROM trainers
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("listing trainers"))?;

        rows.into_iter().map(Trainer::try_from).collect()
    }

    async fn exists_by_id(&self, id: EntityId) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM trainers WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error("checking trainer id"))
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM trainers WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error("checking trainer username"))
    }

    async fn create(&self, trainer: &Trainer) -> Result<Trainer, DomainError> {
        info!("Creating trainer with username: {}", trainer.username);

        let row: TrainerRow = sqlx::query_as(
            r#"
            INSERT INTO trainers (
                first_name, last_name, username, password, specialization, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, first_name, last_name, username, password, specialization, is_active
            "#
        )
        .bind(&trainer.first_name)
        .bind(&trainer.last_name)
        .bind(&trainer.username)
        .bind(&trainer.password)
        .bind(trainer.specialization.as_str())
        .bind(trainer.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error("creating trainer", &trainer.username))?;

        info!("Trainer created successfully: {}", row.id);
        row.try_into()
    }

    async fn update(&self, trainer: &Trainer) -> Result<Trainer, DomainError> {
        let row: Option<TrainerRow> = sqlx::query_as(
            r#"
            UPDATE trainers
            SET
                first_name = $2,
                last_name = $3,
                username = $4,
                password = $5,
                specialization = $6,
                is_active = $7
            WHERE id = $1
            RETURNING id, first_name, last_name, username, password, specialization, is_active
            "#
        )
        .bind(trainer.id)
        .bind(&trainer.first_name)
        .bind(&trainer.last_name)
        .bind(&trainer.username)
        .bind(&trainer.password)
        .bind(trainer.specialization.as_str())
        .bind(trainer.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(insert_error("updating trainer", &trainer.username))?;

        row.ok_or_else(|| DomainError::TrainerNotFound(trainer.id.to_string()))?
            .try_into()
    }
}
