//! Username generation

use std::future::Future;

use gym_shared::constants::{MAX_USERNAME_ATTEMPTS, USERNAME_SEPARATOR};
use gym_shared::utils::compact_name;
use tracing::debug;

use crate::error::DomainError;

/// `First.Last` with whitespace removed from both parts.
pub fn base_username(first_name: &str, last_name: &str) -> Result<String, DomainError> {
    let first = compact_name(first_name);
    let last = compact_name(last_name);

    if first.is_empty() || last.is_empty() {
        return Err(DomainError::ValidationError(
            "First and last name are required to build a username".to_string(),
        ));
    }

    Ok(format!("{first}{USERNAME_SEPARATOR}{last}"))
}

/// First free candidate of `First.Last`, `First.Last1`, `First.Last2`, ...
///
/// `exists` is probed once per candidate. Uniqueness is only as strong as
/// the probe; the store's unique constraint has the final word.
pub async fn generate_username<F, Fut>(
    first_name: &str,
    last_name: &str,
    exists: F,
) -> Result<String, DomainError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<bool, DomainError>>,
{
    let base = base_username(first_name, last_name)?;

    for serial in 0..MAX_USERNAME_ATTEMPTS {
        let candidate = if serial == 0 {
            base.clone()
        } else {
            format!("{base}{serial}")
        };

        if !exists(candidate.clone()).await? {
            return Ok(candidate);
        }

        debug!("Username {} is taken", candidate);
    }

    Err(DomainError::UnableToGenerateUniqueName)
}
