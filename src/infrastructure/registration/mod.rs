//! Registration infrastructure module
//!
//! The registration orchestration core: the service itself plus the
//! credential preparation collaborators (password hashing and salt
//! generation) it is composed with.

mod password;
mod salt;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use salt::{RandomSaltGenerator, SaltGenerator};
pub use service::{messages, RegistrationRequest, RegistrationResult, RegistrationService};
