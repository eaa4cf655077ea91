//! Team infrastructure module

mod repository;

pub use repository::InMemoryTeamRepository;
