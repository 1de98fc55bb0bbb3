// ============================================================================
// Gym Infrastructure - PostgreSQL Trainee Repository
// File: crates/gym-infrastructure/src/database/postgres/trainee_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::NaiveDate;
use gym_shared::EntityId;
use sqlx::{FromRow, PgPool};
use tracing::{debug, info};

use gym_core::domain::Trainee;
use gym_core::error::DomainError;
use gym_core::repositories::TraineeRepository;

use super::{database_error, insert_error};

pub struct PgTraineeRepository {
    pool: PgPool,
}

impl PgTraineeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct TraineeRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub is_active: bool,
}

impl From<TraineeRow> for Trainee {
    fn from(row: TraineeRow) -> Self {
        Trainee {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            username: row.username,
            password: row.password,
            address: row.address,
            date_of_birth: row.date_of_birth,
            is_active: row.is_active,
        }
    }
}

#[async_trait]
impl TraineeRepository for PgTraineeRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Trainee>, DomainError> {
        debug!("Getting a trainee by id: {}", id);

        let row: Option<TraineeRow> = sqlx::query_as(
            r#"
            SELECT
                id, first_name, last_name, username, password,
                address, date_of_birth, is_active
            FROM trainees
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("finding trainee by id"))?;

        Ok(row.map(Trainee::from))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Trainee>, DomainError> {
        debug!("Getting a trainee by username: {}", username);

        let row: Option<TraineeRow> = sqlx::query_as(
            r#"
            SELECT
                id, first_name, last_name, username, password,
                address, date_of_birth, is_active
            FROM trainees
            WHERE username = $1
            "#
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("finding trainee by username"))?;

        Ok(row.map(Trainee::from))
    }

    async fn find_all(&self) -> Result<Vec<Trainee>, DomainError> {
        let rows: Vec<TraineeRow> = sqlx::query_as(
            r#"
            SELECT
                id, first_name, last_name, username, password,
                address, date_of_birth, is_active
            FROM trainees
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("listing trainees"))?;

        Ok(rows.into_iter().map(Trainee::from).collect())
    }

    async fn exists_by_id(&self, id: EntityId) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM trainees WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error("checking trainee id"))
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM trainees WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error("checking trainee username"))
    }

    async fn create(&self, trainee: &Trainee) -> Result<Trainee, DomainError> {
        info!("Creating trainee with username: {}", trainee.username);

        let row: TraineeRow = sqlx::query_as(
            r#"
            INSERT INTO trainees (
                first_name, last_name, username, password,
                address, date_of_birth, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING
                id, first_name, last_name, username, password,
                address, date_of_birth, is_active
            "#
        )
        .bind(&trainee.first_name)
        .bind(&trainee.last_name)
        .bind(&trainee.username)
        .bind(&trainee.password)
        .bind(&trainee.address)
        .bind(trainee.date_of_birth)
        .bind(trainee.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error("creating trainee", &trainee.username))?;

        info!("Trainee created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, trainee: &Trainee) -> Result<Trainee, DomainError> {
        let row: Option<TraineeRow> = sqlx::query_as(
            r#"
            UPDATE trainees
            SET
                first_name = $2,
                last_name = $3,
                username = $4,
                password = $5,
                address = $6,
                date_of_birth = $7,
                is_active = $8
            WHERE id = $1
            RETURNING
                id, first_name, last_name, username, password,
                address, date_of_birth, is_active
            "#
        )
        .bind(trainee.id)
        .bind(&trainee.first_name)
        .bind(&trainee.last_name)
        .bind(&trainee.username)
        .bind(&trainee.password)
        .bind(&trainee.address)
        .bind(trainee.date_of_birth)
        .bind(trainee.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(insert_error("updating trainee", &trainee.username))?;

        row.map(Trainee::from)
            .ok_or_else(|| DomainError::TraineeNotFound(trainee.id.to_string()))
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM trainees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error("deleting trainee"))?;

        Ok(())
    }
}
