//! Argon2id password hashing for employee credentials.

use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::server::error::Error;

static DUMMY_PASSWORD_HASH: OnceLock<String> = OnceLock::new();

/// Hashes a password with a freshly generated salt, returning the PHC string to store.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Checks a password against a stored PHC string.
///
/// A malformed stored hash never verifies.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Runs a full Argon2 verification that always fails.
///
/// Used when no stored hash exists for a login attempt so that unknown functional codes take
/// as long to reject as wrong passwords.
pub fn verify_dummy_password(password: &str) -> bool {
    let Some(dummy_hash) = dummy_password_hash() else {
        return false;
    };

    verify_password(password, dummy_hash);

    false
}

#[cfg(test)]
pub(crate) fn dummy_password_hash_initialized() -> bool {
    DUMMY_PASSWORD_HASH.get().is_some()
}

fn dummy_password_hash() -> Option<&'static str> {
    if let Some(hash) = DUMMY_PASSWORD_HASH.get() {
        return Some(hash);
    }

    match hash_password("carregamento:no-such-employee") {
        Ok(hash) => Some(DUMMY_PASSWORD_HASH.get_or_init(|| hash)),
        Err(e) => {
            tracing::error!("Failed to hash dummy password: {}", e);
            None
        }
    }
}
