//! Team entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::organisation::OrganisationId;
use crate::domain::user::UserId;

/// Opaque team identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(Uuid);

impl TeamId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID value
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team entity
///
/// Holds a back-reference to its organisation, not ownership; the
/// organisation's `owners` field points at the owning team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    id: TeamId,
    /// The organisation this team belongs to
    organisation: OrganisationId,
    /// Member user ids
    members: Vec<UserId>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Team {
    /// Create a new team for an organisation
    pub fn new(id: TeamId, organisation: OrganisationId) -> Self {
        let now = Utc::now();

        Self {
            id,
            organisation,
            members: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add an initial member when constructing the team
    pub fn with_member(mut self, user: UserId) -> Self {
        self.members.push(user);
        self
    }

    // Getters

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn organisation(&self) -> &OrganisationId {
        &self.organisation
    }

    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Add a member to the team
    pub fn add_member(&mut self, user: UserId) {
        if !self.members.contains(&user) {
            self.members.push(user);
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
