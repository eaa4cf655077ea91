//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::organisation::OrganisationId;
use crate::domain::team::TeamId;

/// Opaque user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID value
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User entity
///
/// Created once during registration. The registering user always belongs to
/// exactly one organisation and one team at creation time; login flows
/// mutate `sign_in_count` / `last_login_at` afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    id: UserId,
    /// Email address, unique across all users
    email: String,
    /// Display name, unique across users and organisation names
    display_name: String,
    /// Salted password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    /// Per-user random salt - never exposed in serialization
    #[serde(skip_serializing)]
    salt: String,
    /// Number of sign-ins, starts at 1 on registration
    sign_in_count: u32,
    /// Last login timestamp, set at registration time
    last_login_at: DateTime<Utc>,
    /// Organisations the user belongs to
    organisations: Vec<OrganisationId>,
    /// Teams the user belongs to
    teams: Vec<TeamId>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with its initial organisation and team membership
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        display_name: impl Into<String>,
        password_hash: impl Into<String>,
        salt: impl Into<String>,
        organisation: OrganisationId,
        team: TeamId,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            email: email.into(),
            display_name: display_name.into(),
            password_hash: password_hash.into(),
            salt: salt.into(),
            sign_in_count: 1,
            last_login_at: now,
            organisations: vec![organisation],
            teams: vec![team],
            created_at: now,
            updated_at: now,
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn sign_in_count(&self) -> u32 {
        self.sign_in_count
    }

    pub fn last_login_at(&self) -> DateTime<Utc> {
        self.last_login_at
    }

    pub fn organisations(&self) -> &[OrganisationId] {
        &self.organisations
    }

    pub fn teams(&self) -> &[TeamId] {
        &self.teams
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Record a login
    pub fn record_login(&mut self) {
        self.sign_in_count += 1;
        self.last_login_at = Utc::now();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
