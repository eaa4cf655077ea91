//! Organisation repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Organisation, OrganisationId};
use crate::domain::DomainError;

/// Repository trait for organisation storage
#[async_trait]
pub trait OrganisationRepository: Send + Sync + Debug {
    /// Get an organisation by its ID
    async fn get(&self, id: &OrganisationId) -> Result<Option<Organisation>, DomainError>;

    /// Get an organisation by its name
    async fn find_by_name(&self, name: &str) -> Result<Option<Organisation>, DomainError>;

    /// Create a new organisation
    async fn create(&self, organisation: Organisation) -> Result<Organisation, DomainError>;

    /// Update an existing organisation
    async fn update(&self, organisation: &Organisation) -> Result<Organisation, DomainError>;

    /// Check if an organisation with the given name exists
    async fn name_exists(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_name(name).await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock organisation repository for testing
    #[derive(Debug, Default)]
    pub struct MockOrganisationRepository {
        organisations: Arc<RwLock<HashMap<OrganisationId, Organisation>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockOrganisationRepository {
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
    impl OrganisationRepository for MockOrganisationRepository {
        async fn get(&self, id: &OrganisationId) -> Result<Option<Organisation>, DomainError> {
            self.check_should_fail().await?;
            let organisations = self.organisations.read().await;
            Ok(organisations.get(id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Organisation>, DomainError> {
            self.check_should_fail().await?;
            let organisations = self.organisations.read().await;
            Ok(organisations.values().find(|o| o.name() == name).cloned())
        }

        async fn create(&self, organisation: Organisation) -> Result<Organisation, DomainError> {
            self.check_should_fail().await?;
            let mut organisations = self.organisations.write().await;

            if organisations
                .values()
                .any(|o| o.name() == organisation.name())
            {
                return Err(DomainError::conflict(format!(
                    "Organisation '{}' already exists",
                    organisation.name()
                )));
            }

            organisations.insert(*organisation.id(), organisation.clone());
            Ok(organisation)
        }

        async fn update(&self, organisation: &Organisation) -> Result<Organisation, DomainError> {
            self.check_should_fail().await?;
            let mut organisations = self.organisations.write().await;

            if !organisations.contains_key(organisation.id()) {
                return Err(DomainError::not_found(format!(
                    "Organisation '{}' not found",
                    organisation.id()
                )));
            }

            organisations.insert(*organisation.id(), organisation.clone());
            Ok(organisation.clone())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::team::TeamId;

        #[tokio::test]
        async fn test_create_and_find_by_name() {
            let repo = MockOrganisationRepository::new();
            let org = Organisation::new(OrganisationId::generate(), "myOrg");

            repo.create(org.clone()).await.unwrap();

            let retrieved = repo.find_by_name("myOrg").await.unwrap();
            assert!(retrieved.is_some());
            assert_eq!(retrieved.unwrap().id(), org.id());

            let not_found = repo.find_by_name("someOrgName").await.unwrap();
            assert!(not_found.is_none());
        }

        #[tokio::test]
        async fn test_name_uniqueness() {
            let repo = MockOrganisationRepository::new();

            repo.create(Organisation::new(OrganisationId::generate(), "myOrg"))
                .await
                .unwrap();

            let result = repo
                .create(Organisation::new(OrganisationId::generate(), "myOrg"))
                .await;
            assert!(result.is_err());
        }

        #[tokio::test]
        async fn test_update_owners() {
            let repo = MockOrganisationRepository::new();
            let mut org = Organisation::new(OrganisationId::generate(), "myOrg");

            repo.create(org.clone()).await.unwrap();

            let team = TeamId::generate();
            org.set_owners(team);
            repo.update(&org).await.unwrap();

            let retrieved = repo.get(org.id()).await.unwrap().unwrap();
            assert_eq!(retrieved.owners(), Some(&team));
        }

        #[tokio::test]
        async fn test_update_missing_organisation() {
            let repo = MockOrganisationRepository::new();
            let org = Organisation::new(OrganisationId::generate(), "myOrg");

            let result = repo.update(&org).await;
            assert!(result.is_err());
        }
    }
}
