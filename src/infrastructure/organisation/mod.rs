//! Organisation infrastructure module

mod repository;

pub use repository::InMemoryOrganisationRepository;
