// ============================================================================
// Gym Core - Trainee Service
// File: crates/gym-core/src/services/trainee_service.rs
// ============================================================================
//! Trainee registration, lookup, activation, password change and removal

use std::sync::Arc;

use gym_security::PasswordManager;
use gym_shared::EntityId;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::domain::{NewTrainee, Trainee};
use crate::error::DomainError;
use crate::repositories::TraineeRepository;
use crate::services::username::generate_username;

pub struct TraineeService<R: TraineeRepository, P: PasswordManager> {
    trainee_repo: Arc<R>,
    password_manager: Arc<P>,
}

impl<R: TraineeRepository, P: PasswordManager> TraineeService<R, P> {
    pub fn new(trainee_repo: Arc<R>, password_manager: Arc<P>) -> Self {
        Self {
            trainee_repo,
            password_manager,
        }
    }

    /// Register a new trainee with a generated username and a hashed password
    pub async fn register(&self, new_trainee: NewTrainee) -> Result<Trainee, DomainError> {
        info!(
            "Registering trainee: {} {}",
            new_trainee.first_name, new_trainee.last_name
        );

        if !self.password_manager.verify(&new_trainee.password) {
            warn!(
                "Rejected weak password for new trainee: {} {}",
                new_trainee.first_name, new_trainee.last_name
            );
            return Err(DomainError::PasswordTooWeak);
        }

        let password_hash = self
            .password_manager
            .hash_password(&new_trainee.password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        let mut trainee = Trainee::new(
            new_trainee.first_name,
            new_trainee.last_name,
            password_hash,
            new_trainee.address,
            new_trainee.date_of_birth,
        )
        .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        trainee.username = self
            .unique_username(&trainee.first_name, &trainee.last_name)
            .await?;

        let created = self.trainee_repo.create(&trainee).await?;

        info!("Trainee registered: {} (id {})", created.username, created.id);
        Ok(created)
    }

    /// Persist a pre-built trainee.
    ///
    /// The password is stored as given. An empty username is generated,
    /// anything else has to be free.
    pub async fn save(&self, mut trainee: Trainee) -> Result<Trainee, DomainError> {
        trainee
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        if trainee.username.trim().is_empty() {
            trainee.username = self
                .unique_username(&trainee.first_name, &trainee.last_name)
                .await?;
        } else if self
            .trainee_repo
            .exists_by_username(&trainee.username)
            .await?
        {
            warn!("Trainee username already taken: {}", trainee.username);
            return Err(DomainError::UsernameAlreadyExists(trainee.username));
        }

        let created = self.trainee_repo.create(&trainee).await?;

        info!("Trainee saved: {} (id {})", created.username, created.id);
        Ok(created)
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<Option<Trainee>, DomainError> {
        debug!("Getting trainee by id: {}", id);
        self.trainee_repo.find_by_id(id).await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<Trainee>, DomainError> {
        debug!("Getting trainee by username: {}", username);
        self.trainee_repo.find_by_username(username).await
    }

    pub async fn get_all(&self) -> Result<Vec<Trainee>, DomainError> {
        self.trainee_repo.find_all().await
    }

    /// Delete the trainee behind `username`. A missing username is not an error.
    pub async fn delete_by_username(&self, username: &str) -> Result<(), DomainError> {
        if !self.trainee_repo.exists_by_username(username).await? {
            warn!("Trainee to delete not found: {}", username);
            return Ok(());
        }

        // Gone between the check and the lookup: same outcome as a miss.
        let Some(trainee) = self.trainee_repo.find_by_username(username).await? else {
            warn!("Trainee to delete disappeared: {}", username);
            return Ok(());
        };

        self.trainee_repo.delete(trainee.id).await?;

        info!("Trainee deleted: {}", username);
        Ok(())
    }

    /// Delete by id without an existence check.
    pub async fn delete(&self, trainee: &Trainee) -> Result<(), DomainError> {
        self.trainee_repo.delete(trainee.id).await?;

        info!("Trainee deleted: {}", trainee.username);
        Ok(())
    }

    pub async fn update(&self, trainee: &Trainee) -> Result<Trainee, DomainError> {
        trainee
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        if !self.trainee_repo.exists_by_id(trainee.id).await? {
            warn!("Trainee to update not found: {}", trainee.id);
            return Err(DomainError::TraineeNotFound(trainee.id.to_string()));
        }

        let updated = self.trainee_repo.update(trainee).await?;

        info!("Trainee updated: {}", updated.username);
        Ok(updated)
    }

    /// In-memory only. Persist with [`Self::update`] or use [`Self::set_active`].
    pub fn activate(&self, trainee: &mut Trainee) {
        trainee.activate();
        debug!("Trainee activated in memory: {}", trainee.username);
    }

    /// In-memory only. Persist with [`Self::update`] or use [`Self::set_active`].
    pub fn deactivate(&self, trainee: &mut Trainee) {
        trainee.deactivate();
        debug!("Trainee deactivated in memory: {}", trainee.username);
    }

    /// Flip the active flag and persist it.
    pub async fn set_active(&self, username: &str, active: bool) -> Result<Trainee, DomainError> {
        let mut trainee = self
            .trainee_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::TraineeNotFound(username.to_string()))?;

        if active {
            self.activate(&mut trainee);
        } else {
            self.deactivate(&mut trainee);
        }

        self.update(&trainee).await
    }

    /// Replace the password after checking the new one against the policy
    /// and the old one against the stored hash.
    pub async fn change_password(
        &self,
        trainee: &mut Trainee,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        if !self.password_manager.verify(new_password) {
            warn!("Rejected weak password for trainee: {}", trainee.username);
            return Err(DomainError::PasswordTooWeak);
        }

        if !self
            .password_manager
            .password_matches(old_password, &trainee.password)
        {
            warn!("Old password mismatch for trainee: {}", trainee.username);
            return Err(DomainError::InvalidCredentials);
        }

        let new_hash = self
            .password_manager
            .hash_password(new_password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        if !self.trainee_repo.exists_by_id(trainee.id).await? {
            return Err(DomainError::TraineeNotFound(trainee.id.to_string()));
        }

        let changed = Trainee {
            password: new_hash,
            ..trainee.clone()
        };
        *trainee = self.update(&changed).await?;

        info!("Password changed for trainee: {}", trainee.username);
        Ok(())
    }

    async fn unique_username(&self, first_name: &str, last_name: &str) -> Result<String, DomainError> {
        let repo = &self.trainee_repo;
        generate_username(first_name, last_name, |candidate| async move {
            repo.exists_by_username(&candidate).await
        })
        .await
    }
}
