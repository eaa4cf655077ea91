//! Team repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Team, TeamId};
use crate::domain::DomainError;

/// Repository trait for team storage
///
/// Registration only ever creates and reads teams; membership changes belong
/// to out-of-scope administrative flows.
#[async_trait]
pub trait TeamRepository: Send + Sync + Debug {
    /// Get a team by its ID
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Create a new team
    async fn create(&self, team: Team) -> Result<Team, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock team repository for testing
    #[derive(Debug, Default)]
    pub struct MockTeamRepository {
        teams: Arc<RwLock<HashMap<TeamId, Team>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockTeamRepository {
        /// Create a new mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl TeamRepository for MockTeamRepository {
        async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
            self.check_should_fail().await?;
            let teams = self.teams.read().await;
            Ok(teams.get(id).cloned())
        }

        async fn create(&self, team: Team) -> Result<Team, DomainError> {
            self.check_should_fail().await?;
            let mut teams = self.teams.write().await;
            teams.insert(*team.id(), team.clone());
            Ok(team)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::organisation::OrganisationId;

        #[tokio::test]
        async fn test_create_and_get() {
            let repo = MockTeamRepository::new();
            let team = Team::new(TeamId::generate(), OrganisationId::generate());

            repo.create(team.clone()).await.unwrap();

            let retrieved = repo.get(team.id()).await.unwrap();
            assert!(retrieved.is_some());
            assert_eq!(retrieved.unwrap().organisation(), team.organisation());
        }

        #[tokio::test]
        async fn test_should_fail() {
            let repo = MockTeamRepository::new();
            repo.set_should_fail(true).await;

            let team = Team::new(TeamId::generate(), OrganisationId::generate());
            let result = repo.create(team).await;
            assert!(result.is_err());
        }
    }
}
