//! In-memory team repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::DomainError;

/// In-memory implementation of TeamRepository
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<HashMap<TeamId, Team>>>,
}

impl InMemoryTeamRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.get(id).cloned())
    }

    async fn create(&self, team: Team) -> Result<Team, DomainError> {
        let mut teams = self.teams.write().await;

        let id = *team.id();

        if teams.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "Team with ID '{}' already exists",
                id
            )));
        }

        teams.insert(id, team.clone());

        Ok(team)
    }
}
