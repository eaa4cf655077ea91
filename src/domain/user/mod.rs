//! User domain
//!
//! This module provides domain types and traits for registered users,
//! including the user entity and its repository trait.

mod entity;
mod repository;

pub use entity::{User, UserId};
pub use repository::UserRepository;

#[cfg(test)]
pub use repository::mock::MockUserRepository;
