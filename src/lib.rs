//! PMP Registration
//!
//! Account-registration core for multi-tenant onboarding. Registers a new
//! user together with a new organisation and the user's initial team
//! membership:
//! - Ordered input validation with a fixed user-facing message catalog
//! - Uniqueness enforcement across the shared namespace of user display
//!   names and organisation names
//! - Credential preparation (per-user random salt + Argon2 hash)
//! - Coordinated creation of user, organisation and owners team with an
//!   owners back-patch once the team id is known
//!
//! Persistence is consumed through repository traits; in-memory reference
//! implementations are provided for embedding and tests. Rejected
//! registrations are normal results carrying a message, never errors; the
//! error channel is reserved for infrastructure failures.

pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

pub use domain::{
    DomainError, Organisation, OrganisationId, OrganisationRepository, Team, TeamId,
    TeamRepository, User, UserId, UserRepository,
};
pub use infrastructure::organisation::InMemoryOrganisationRepository;
pub use infrastructure::registration::{
    messages, Argon2Hasher, PasswordHasher, RandomSaltGenerator, RegistrationRequest,
    RegistrationResult, RegistrationService, SaltGenerator,
};
pub use infrastructure::team::InMemoryTeamRepository;
pub use infrastructure::user::InMemoryUserRepository;

/// Registration service wired with the in-memory repositories
pub type InMemoryRegistrationService = RegistrationService<
    InMemoryUserRepository,
    InMemoryOrganisationRepository,
    InMemoryTeamRepository,
    Argon2Hasher,
    RandomSaltGenerator,
>;

/// Create a registration service backed by fresh in-memory stores
pub fn create_in_memory_registration_service() -> InMemoryRegistrationService {
    RegistrationService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryOrganisationRepository::new()),
        Arc::new(InMemoryTeamRepository::new()),
        Arc::new(Argon2Hasher::new()),
        Arc::new(RandomSaltGenerator::new()),
    )
}
