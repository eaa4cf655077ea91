//! In-memory organisation repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::organisation::{Organisation, OrganisationId, OrganisationRepository};
use crate::domain::DomainError;

/// In-memory implementation of OrganisationRepository
///
/// Enforces name uniqueness on `create`; a lost read-then-act race surfaces
/// as a `Conflict` error.
#[derive(Debug, Default)]
pub struct InMemoryOrganisationRepository {
    organisations: Arc<RwLock<HashMap<OrganisationId, Organisation>>>,
    /// Index for name -> organisation ID lookup
    name_index: Arc<RwLock<HashMap<String, OrganisationId>>>,
}

impl InMemoryOrganisationRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial organisations
    pub fn with_organisations(organisations: Vec<Organisation>) -> Self {
        let mut organisations_map = HashMap::new();
        let mut name_map = HashMap::new();

        for organisation in organisations {
            let id = *organisation.id();
            name_map.insert(organisation.name().to_string(), id);
            organisations_map.insert(id, organisation);
        }

        Self {
            organisations: Arc::new(RwLock::new(organisations_map)),
            name_index: Arc::new(RwLock::new(name_map)),
        }
    }
}

#[async_trait]
impl OrganisationRepository for InMemoryOrganisationRepository {
    async fn get(&self, id: &OrganisationId) -> Result<Option<Organisation>, DomainError> {
        let organisations = self.organisations.read().await;
        Ok(organisations.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Organisation>, DomainError> {
        let name_index = self.name_index.read().await;

        if let Some(org_id) = name_index.get(name) {
            let organisations = self.organisations.read().await;
            return Ok(organisations.get(org_id).cloned());
        }

        Ok(None)
    }

    async fn create(&self, organisation: Organisation) -> Result<Organisation, DomainError> {
        let mut organisations = self.organisations.write().await;
        let mut name_index = self.name_index.write().await;

        let id = *organisation.id();

        if organisations.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "Organisation with ID '{}' already exists",
                id
            )));
        }

        if name_index.contains_key(organisation.name()) {
            return Err(DomainError::conflict(format!(
                "Organisation name '{}' already exists",
                organisation.name()
            )));
        }

        name_index.insert(organisation.name().to_string(), id);
        organisations.insert(id, organisation.clone());

        Ok(organisation)
    }

    async fn update(&self, organisation: &Organisation) -> Result<Organisation, DomainError> {
        let mut organisations = self.organisations.write().await;
        let mut name_index = self.name_index.write().await;

        let id = *organisation.id();

        let old = organisations
            .get(&id)
            .ok_or_else(|| DomainError::not_found(format!("Organisation '{}' not found", id)))?;

        // If the name changed, check uniqueness and update the index
        if old.name() != organisation.name() {
            if name_index.contains_key(organisation.name()) {
                return Err(DomainError::conflict(format!(
                    "Organisation name '{}' already exists",
                    organisation.name()
                )));
            }

            name_index.remove(old.name());
            name_index.insert(organisation.name().to_string(), id);
        }

        organisations.insert(id, organisation.clone());

        Ok(organisation.clone())
    }
}
