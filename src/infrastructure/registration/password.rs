//! Password hashing utilities using Argon2

use argon2::{
    password_hash::{PasswordHasher as Argon2PasswordHasher, SaltString},
    Argon2,
};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for one-way password hashing
///
/// The salt is supplied by the caller and stored alongside the user record,
/// so the hash is deterministic for a given password and salt pair.
pub trait PasswordHasher: Send + Sync + Debug {
    /// Derive a hash from a password and a salt
    fn hash(&self, password: &str, salt: &str) -> Result<String, DomainError>;
}

/// Argon2-based password hasher
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Create a new Argon2 hasher
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str, salt: &str) -> Result<String, DomainError> {
        let salt = SaltString::encode_b64(salt.as_bytes())
            .map_err(|e| DomainError::credential(format!("Failed to encode salt: {}", e)))?;

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::credential(format!("Failed to hash password: {}", e)))
    }
}
