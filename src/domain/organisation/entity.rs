//! Organisation entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::team::TeamId;

/// Opaque organisation identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganisationId(Uuid);

impl OrganisationId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID value
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for OrganisationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Organisation entity
///
/// The organisation name shares one uniqueness namespace with user display
/// names. `owners` references the organisation's owning team; it is unset at
/// creation and back-patched once the team has been created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organisation {
    /// Unique identifier
    id: OrganisationId,
    /// Organisation name, unique across organisations and user display names
    name: String,
    /// The team that owns this organisation
    #[serde(skip_serializing_if = "Option::is_none")]
    owners: Option<TeamId>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Organisation {
    /// Create a new organisation without an owning team
    pub fn new(id: OrganisationId, name: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id,
            name: name.into(),
            owners: None,
            created_at: now,
            updated_at: now,
        }
    }

    // Getters

    pub fn id(&self) -> &OrganisationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owners(&self) -> Option<&TeamId> {
        self.owners.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Set the owning team
    pub fn set_owners(&mut self, team: TeamId) {
        self.owners = Some(team);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
