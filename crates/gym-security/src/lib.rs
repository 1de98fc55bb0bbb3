//! # Gym Security
//! 
//! Password policy, hashing and verification.

pub mod password;

pub use password::{Argon2PasswordManager, PasswordError, PasswordManager, PasswordPolicy};

#[cfg(any(test, feature = "testing"))]
pub use password::MockPasswordManager;
