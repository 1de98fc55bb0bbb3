//! Password policy, hashing with Argon2, and random password generation

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use gym_shared::config::PasswordSettings;
use gym_shared::constants::{
    GENERATED_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, MIN_PASSWORD_SCORE,
};
use rand::{distr::Alphanumeric, Rng};
use thiserror::Error;

const GENERATION_ATTEMPTS: usize = 8;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Hash error: {0}")]
    HashError(String),
}

/// Password operations the services depend on.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait PasswordManager: Send + Sync {
    /// Policy check for a candidate plaintext password.
    fn verify(&self, password: &str) -> bool;

    fn hash_password(&self, password: &str) -> Result<String, PasswordError>;

    /// Whether `password` is the plaintext behind `hash`. A malformed hash never matches.
    fn password_matches(&self, password: &str, hash: &str) -> bool;

    fn generate_password(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    /// Minimum zxcvbn score, 0..=4.
    pub min_score: u8,
    pub generated_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            max_length: MAX_PASSWORD_LENGTH,
            min_score: MIN_PASSWORD_SCORE,
            generated_length: GENERATED_PASSWORD_LENGTH,
        }
    }
}

impl From<&PasswordSettings> for PasswordPolicy {
    fn from(settings: &PasswordSettings) -> Self {
        Self {
            min_length: settings.min_length,
            max_length: settings.max_length,
            min_score: settings.min_score,
            generated_length: settings.generated_length,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordManager {
    policy: PasswordPolicy,
}

impl Argon2PasswordManager {
    pub fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    fn random_password(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.policy.generated_length)
            .map(char::from)
            .collect()
    }
}

impl PasswordManager for Argon2PasswordManager {
    fn verify(&self, password: &str) -> bool {
        let length = password.chars().count();
        if length < self.policy.min_length || length > self.policy.max_length {
            return false;
        }

        let score = u8::from(zxcvbn::zxcvbn(password, &[]).score());
        score >= self.policy.min_score
    }

    fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| PasswordError::HashError(e.to_string()))
    }

    fn password_matches(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed_hash) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok(),
            Err(_) => false,
        }
    }

    /// Redraws a bounded number of times until the candidate passes [`Self::verify`].
    fn generate_password(&self) -> String {
        let mut candidate = self.random_password();
        for _ in 1..GENERATION_ATTEMPTS {
            if self.verify(&candidate) {
                break;
            }
            candidate = self.random_password();
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_match() {
        let manager = Argon2PasswordManager::default();
        let hash = manager.hash_password("correct horse battery staple").unwrap();

        assert_ne!(hash, "correct horse battery staple");
        assert!(hash.starts_with("$argon2"));
        assert!(manager.password_matches("correct horse battery staple", &hash));
        assert!(!manager.password_matches("wrong horse", &hash));
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let manager = Argon2PasswordManager::default();

        let first = manager.hash_password("s3cure-Passphrase").unwrap();
        let second = manager.hash_password("s3cure-Passphrase").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        let manager = Argon2PasswordManager::default();

        assert!(!manager.password_matches("password123", "password123"));
        assert!(!manager.password_matches("", ""));
    }

    #[test]
    fn test_policy_rejects_short_and_weak_passwords() {
        let manager = Argon2PasswordManager::default();

        assert!(!manager.verify("Ab1!"));
        assert!(!manager.verify("password"));
        assert!(!manager.verify("12345678"));
    }

    #[test]
    fn test_policy_accepts_strong_password() {
        let manager = Argon2PasswordManager::default();

        assert!(manager.verify("Tr4ining-Season-Starts!"));
    }

    #[test]
    fn test_policy_rejects_overlong_password() {
        let manager = Argon2PasswordManager::new(PasswordPolicy {
            max_length: 16,
            ..PasswordPolicy::default()
        });

        assert!(!manager.verify("Tr4ining-Season-Starts!"));
    }

    #[test]
    fn test_generated_password_has_configured_length() {
        let manager = Argon2PasswordManager::new(PasswordPolicy {
            generated_length: 14,
            ..PasswordPolicy::default()
        });

        let password = manager.generate_password();

        assert_eq!(password.len(), 14);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(password, manager.generate_password());
    }

    #[test]
    fn test_generated_password_passes_default_policy() {
        let manager = Argon2PasswordManager::default();

        for _ in 0..5 {
            assert!(manager.verify(&manager.generate_password()));
        }
    }
}
