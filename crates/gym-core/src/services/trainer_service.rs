// ============================================================================
// Gym Core - Trainer Service
// File: crates/gym-core/src/services/trainer_service.rs
// ============================================================================
//! Trainer registration, lookup, activation and password change

use std::sync::Arc;

use gym_security::PasswordManager;
use gym_shared::EntityId;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::domain::{NewTrainer, Trainer};
use crate::error::DomainError;
use crate::repositories::TrainerRepository;
use crate::services::username::generate_username;

/// Trainer counterpart of [`TraineeService`](super::TraineeService).
/// Trainers are deactivated, never deleted.
pub struct TrainerService<R: TrainerRepository, P: PasswordManager> {
    trainer_repo: Arc<R>,
    password_manager: Arc<P>,
}

impl<R: TrainerRepository, P: PasswordManager> TrainerService<R, P> {
    pub fn new(trainer_repo: Arc<R>, password_manager: Arc<P>) -> Self {
        Self {
            trainer_repo,
            password_manager,
        }
    }

    pub async fn register(&self, new_trainer: NewTrainer) -> Result<Trainer, DomainError> {
        info!(
            "Registering trainer: {} {}",
            new_trainer.first_name, new_trainer.last_name
        );

        if !self.password_manager.verify(&new_trainer.password) {
            warn!(
                "Rejected weak password for new trainer: {} {}",
                new_trainer.first_name, new_trainer.last_name
            );
            return Err(DomainError::PasswordTooWeak);
        }

        let password_hash = self
            .password_manager
            .hash_password(&new_trainer.password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        let mut trainer = Trainer::new(
            new_trainer.first_name,
            new_trainer.last_name,
            password_hash,
            new_trainer.specialization,
        )
        .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        trainer.username = self
            .unique_username(&trainer.first_name, &trainer.last_name)
            .await?;

        let created = self.trainer_repo.create(&trainer).await?;

        info!("Trainer registered: {} (id {})", created.username, created.id);
        Ok(created)
    }

    pub async fn save(&self, mut trainer: Trainer) -> Result<Trainer, DomainError> {
        trainer
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        if trainer.username.trim().is_empty() {
            trainer.username = self
                .unique_username(&trainer.first_name, &trainer.last_name)
                .await?;
        } else if self
            .trainer_repo
            .exists_by_username(&trainer.username)
            .await?
        {
            warn!("Trainer username already taken: {}", trainer.username);
            return Err(DomainError::UsernameAlreadyExists(trainer.username));
        }

        self.trainer_repo.create(&trainer).await
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<Option<Trainer>, DomainError> {
        debug!("Getting trainer by id: {}", id);
        self.trainer_repo.find_by_id(id).await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<Trainer>, DomainError> {
        debug!("Getting trainer by username: {}", username);
        self.trainer_repo.find_by_username(username).await
    }

    pub async fn get_all(&self) -> Result<Vec<Trainer>, DomainError> {
        self.trainer_repo.find_all().await
    }

    pub async fn update(&self, trainer: &Trainer) -> Result<Trainer, DomainError> {
        trainer
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        if !self.trainer_repo.exists_by_id(trainer.id).await? {
            warn!("Trainer to update not found: {}", trainer.id);
            return Err(DomainError::TrainerNotFound(trainer.id.to_string()));
        }

        let updated = self.trainer_repo.update(trainer).await?;

        info!("Trainer updated: {}", updated.username);
        Ok(updated)
    }

    /// In-memory only.
    pub fn activate(&self, trainer: &mut Trainer) {
        trainer.activate();
        debug!("Trainer activated in memory: {}", trainer.username);
    }

    /// In-memory only.
    pub fn deactivate(&self, trainer: &mut Trainer) {
        trainer.deactivate();
        debug!("Trainer deactivated in memory: {}", trainer.username);
    }

    pub async fn set_active(&self, username: &str, active: bool) -> Result<Trainer, DomainError> {
        let mut trainer = self
            .trainer_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::TrainerNotFound(username.to_string()))?;

        if active {
            self.activate(&mut trainer);
        } else {
            self.deactivate(&mut trainer);
        }

        self.update(&trainer).await
    }

    pub async fn change_password(
        &self,
        trainer: &mut Trainer,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        if !self.password_manager.verify(new_password) {
            warn!("Rejected weak password for trainer: {}", trainer.username);
            return Err(DomainError::PasswordTooWeak);
        }

        if !self
            .password_manager
            .password_matches(old_password, &trainer.password)
        {
            warn!("Old password mismatch for trainer: {}", trainer.username);
            return Err(DomainError::InvalidCredentials);
        }

        let new_hash = self
            .password_manager
            .hash_password(new_password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        if !self.trainer_repo.exists_by_id(trainer.id).await? {
            return Err(DomainError::TrainerNotFound(trainer.id.to_string()));
        }

        let changed = Trainer {
            password: new_hash,
            ..trainer.clone()
        };
        *trainer = self.update(&changed).await?;

        info!("Password changed for trainer: {}", trainer.username);
        Ok(())
    }

    async fn unique_username(&self, first_name: &str, last_name: &str) -> Result<String, DomainError> {
        let repo = &self.trainer_repo;
        generate_username(first_name, last_name, |candidate| async move {
            repo.exists_by_username(&candidate).await
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use gym_security::MockPasswordManager;
    use mockall::predicate::eq;

    use crate::domain::TrainingType;
    use crate::repositories::MockTrainerRepository;

    use super::*;

    fn trainer() -> Trainer {
        Trainer {
            id: 3,
            first_name: "Anna".to_string(),
            last_name: "Smith".to_string(),
            username: "Anna.Smith".to_string(),
            password: "hash".to_string(),
            specialization: TrainingType::Yoga,
            is_active: true,
        }
    }

    fn service(
        repo: MockTrainerRepository,
        passwords: MockPasswordManager,
    ) -> TrainerService<MockTrainerRepository, MockPasswordManager> {
        TrainerService::new(Arc::new(repo), Arc::new(passwords))
    }

    #[tokio::test]
    async fn test_register_trainer() {
        let mut repo = MockTrainerRepository::new();
        let mut passwords = MockPasswordManager::new();

        passwords.expect_verify().times(1).returning(|_| true);
        passwords
            .expect_hash_password()
            .times(1)
            .returning(|_| Ok("hash".to_string()));
        repo.expect_exists_by_username()
            .with(eq("Anna.Smith"))
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_create()
            .times(1)
            .returning(|t| Ok(Trainer { id: 3, ..t.clone() }));

        let created = service(repo, passwords)
            .register(NewTrainer {
                first_name: "Anna".to_string(),
                last_name: "Smith".to_string(),
                password: "Str0ng-Enough!".to_string(),
                specialization: TrainingType::Yoga,
            })
            .await
            .unwrap();

        assert_eq!(created, trainer());
    }

    #[tokio::test]
    async fn test_update_missing_trainer() {
        let mut repo = MockTrainerRepository::new();

        repo.expect_exists_by_id().with(eq(3)).times(1).returning(|_| Ok(false));
        repo.expect_update().never();

        let result = service(repo, MockPasswordManager::new()).update(&trainer()).await;

        assert!(matches!(result, Err(DomainError::TrainerNotFound(_))));
    }

    #[test]
    fn test_toggle_without_persistence() {
        let mut repo = MockTrainerRepository::new();
        repo.expect_update().never();

        let service = service(repo, MockPasswordManager::new());
        let mut trainer = trainer();

        service.deactivate(&mut trainer);
        assert!(!trainer.is_active);

        service.activate(&mut trainer);
        assert!(trainer.is_active);
    }

    #[tokio::test]
    async fn test_change_password_single_update() {
        let mut repo = MockTrainerRepository::new();
        let mut passwords = MockPasswordManager::new();

        passwords.expect_verify().times(1).returning(|_| true);
        passwords
            .expect_password_matches()
            .with(eq("old-secret"), eq("hash"))
            .times(1)
            .returning(|_, _| true);
        passwords
            .expect_hash_password()
            .times(1)
            .returning(|_| Ok("new-hash".to_string()));
        repo.expect_exists_by_id().times(2).returning(|_| Ok(true));
        repo.expect_update()
            .withf(|t| t.password == "new-hash")
            .times(1)
            .returning(|t| Ok(t.clone()));

        let mut trainer = trainer();
        service(repo, passwords)
            .change_password(&mut trainer, "old-secret", "N3w-Passphrase!")
            .await
            .unwrap();

        assert_eq!(trainer.password, "new-hash");
    }

    #[tokio::test]
    async fn test_register_rejects_weak_password() {
        let mut repo = MockTrainerRepository::new();
        let mut passwords = MockPasswordManager::new();

        passwords.expect_verify().times(1).returning(|_| false);
        passwords.expect_hash_password().never();
        repo.expect_create().never();

        let result = service(repo, passwords)
            .register(NewTrainer {
                first_name: "Anna".to_string(),
                last_name: "Smith".to_string(),
                password: "abc".to_string(),
                specialization: TrainingType::Yoga,
            })
            .await;

        assert!(matches!(result, Err(DomainError::PasswordTooWeak)));
    }

    #[tokio::test]
    async fn test_save_generates_missing_username() {
        let mut repo = MockTrainerRepository::new();

        repo.expect_exists_by_username()
            .with(eq("Anna.Smith"))
            .times(1)
            .returning(|_| Ok(true));
        repo.expect_exists_by_username()
            .with(eq("Anna.Smith1"))
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_create()
            .withf(|t| t.username == "Anna.Smith1")
            .times(1)
            .returning(|t| Ok(t.clone()));

        let saved = service(repo, MockPasswordManager::new())
            .save(Trainer {
                username: String::new(),
                ..trainer()
            })
            .await
            .unwrap();

        assert_eq!(saved.username, "Anna.Smith1");
    }

    #[tokio::test]
    async fn test_save_rejects_taken_username() {
        let mut repo = MockTrainerRepository::new();

        repo.expect_exists_by_username()
            .with(eq("Anna.Smith"))
            .times(1)
            .returning(|_| Ok(true));
        repo.expect_create().never();

        let result = service(repo, MockPasswordManager::new()).save(trainer()).await;

        assert!(matches!(result, Err(DomainError::UsernameAlreadyExists(name)) if name == "Anna.Smith"));
    }

    #[tokio::test]
    async fn test_lookups_pass_through() {
        let mut repo = MockTrainerRepository::new();

        repo.expect_find_by_id()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(Some(trainer())));
        repo.expect_find_by_username()
            .with(eq("Nobody.Here"))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![trainer()]));

        let service = service(repo, MockPasswordManager::new());

        assert_eq!(service.get_by_id(3).await.unwrap(), Some(trainer()));
        assert!(service.get_by_username("Nobody.Here").await.unwrap().is_none());
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_set_active_persists() {
        let mut repo = MockTrainerRepository::new();

        repo.expect_find_by_username()
            .with(eq("Anna.Smith"))
            .times(1)
            .returning(|_| Ok(Some(Trainer { is_active: false, ..trainer() })));
        repo.expect_exists_by_id().with(eq(3)).times(1).returning(|_| Ok(true));
        repo.expect_update()
            .withf(|t| t.is_active)
            .times(1)
            .returning(|t| Ok(t.clone()));

        let updated = service(repo, MockPasswordManager::new())
            .set_active("Anna.Smith", true)
            .await
            .unwrap();

        assert!(updated.is_active);
    }

    #[tokio::test]
    async fn test_set_active_unknown_username() {
        let mut repo = MockTrainerRepository::new();

        repo.expect_find_by_username().times(1).returning(|_| Ok(None));
        repo.expect_update().never();

        let result = service(repo, MockPasswordManager::new())
            .set_active("Nobody.Here", false)
            .await;

        assert!(matches!(result, Err(DomainError::TrainerNotFound(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_blank_name() {
        let mut repo = MockTrainerRepository::new();

        repo.expect_exists_by_id().never();
        repo.expect_update().never();

        let result = service(repo, MockPasswordManager::new())
            .update(&Trainer {
                last_name: String::new(),
                ..trainer()
            })
            .await;

        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_change_password_failed_update_keeps_old_hash() {
        let mut repo = MockTrainerRepository::new();
        let mut passwords = MockPasswordManager::new();

        passwords.expect_verify().returning(|_| true);
        passwords.expect_password_matches().returning(|_, _| true);
        passwords
            .expect_hash_password()
            .returning(|_| Ok("new-hash".to_string()));
        repo.expect_exists_by_id().times(2).returning(|_| Ok(true));
        repo.expect_update()
            .times(1)
            .returning(|_| Err(DomainError::DatabaseError("connection reset".to_string())));

        let mut trainer = trainer();
        let result = service(repo, passwords)
            .change_password(&mut trainer, "old-secret", "N3w-Passphrase!")
            .await;

        assert!(matches!(result, Err(DomainError::DatabaseError(_))));
        assert_eq!(trainer.password, "hash");
    }
}
