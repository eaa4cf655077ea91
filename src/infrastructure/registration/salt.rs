//! Salt generation for password hashing

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;
use std::fmt::Debug;

/// Trait for generating per-user salts
pub trait SaltGenerator: Send + Sync + Debug {
    /// Generate a fresh random salt
    fn generate(&self) -> String;
}

/// Cryptographically random salt generator
#[derive(Debug, Clone)]
pub struct RandomSaltGenerator {
    /// Number of random bytes per salt
    salt_bytes: usize,
}

impl RandomSaltGenerator {
    /// Create a new salt generator
    pub fn new() -> Self {
        Self { salt_bytes: 16 }
    }

    /// Set the number of random bytes
    pub fn with_salt_bytes(mut self, bytes: usize) -> Self {
        self.salt_bytes = bytes;
        self
    }
}

impl Default for RandomSaltGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SaltGenerator for RandomSaltGenerator {
    fn generate(&self) -> String {
        let mut random_bytes = vec![0u8; self.salt_bytes];
        rand::thread_rng().fill_bytes(&mut random_bytes);

        URL_SAFE_NO_PAD.encode(&random_bytes)
    }
}
