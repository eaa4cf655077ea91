//! Registration service for onboarding users with their organisation and team

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::organisation::{Organisation, OrganisationId, OrganisationRepository};
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

use super::password::PasswordHasher;
use super::salt::SaltGenerator;

/// User-facing message catalog
///
/// These strings are part of the service contract; validation order decides
/// which one a rejected request receives.
pub mod messages {
    pub const CREDENTIALS_REQUIRED: &str = "Email, username and password are required";
    pub const ORGANISATION_NAME_REQUIRED: &str = "Organisation name is required";
    pub const PASSWORD_MISMATCH: &str = "Password do not match";
    pub const USER_ALREADY_EXISTS: &str = "User already exists";
    pub const ORGANISATION_ALREADY_EXISTS: &str = "Organisation already exists";
    pub const SUCCESSFULLY_REGISTERED: &str = "Successfully registered";
}

/// Request for registering a new user with a new organisation
///
/// Fields arrive as the caller sent them; a field is missing iff it is
/// absent or the empty string.
#[derive(Debug, Clone, Default)]
pub struct RegistrationRequest {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub organisation_name: Option<String>,
}

/// Outcome of a registration attempt
///
/// A rejected request is a normal outcome, reported here with
/// `success: false` and a message from the catalog. The `Err` channel of
/// `register` is reserved for infrastructure failures.
#[derive(Debug, Clone)]
pub struct RegistrationResult {
    pub success: bool,
    pub message: String,
    pub user: Option<User>,
    pub organisation: Option<Organisation>,
}

impl RegistrationResult {
    fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            user: None,
            organisation: None,
        }
    }

    fn success(user: User, organisation: Organisation) -> Self {
        Self {
            success: true,
            message: messages::SUCCESSFULLY_REGISTERED.to_string(),
            user: Some(user),
            organisation: Some(organisation),
        }
    }
}

/// A request field is missing iff it is absent or the empty string.
fn field_value(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

/// Registration service
///
/// Orchestrates one registration as a sequential unit of work: ordered
/// validation, cross-namespace uniqueness checks, credential preparation,
/// then organisation, team, and user creation with an owners back-patch.
/// The uniqueness pre-checks are read-then-act; a concurrent registration
/// racing on the same name can slip past them and surfaces as the store's
/// conflict error instead of a friendly duplicate message.
#[derive(Debug)]
pub struct RegistrationService<U, O, T, H, S>
where
    U: UserRepository,
    O: OrganisationRepository,
    T: TeamRepository,
    H: PasswordHasher,
    S: SaltGenerator,
{
    users: Arc<U>,
    organisations: Arc<O>,
    teams: Arc<T>,
    hasher: Arc<H>,
    salt_generator: Arc<S>,
}

impl<U, O, T, H, S> RegistrationService<U, O, T, H, S>
where
    U: UserRepository,
    O: OrganisationRepository,
    T: TeamRepository,
    H: PasswordHasher,
    S: SaltGenerator,
{
    /// Create a new registration service
    pub fn new(
        users: Arc<U>,
        organisations: Arc<O>,
        teams: Arc<T>,
        hasher: Arc<H>,
        salt_generator: Arc<S>,
    ) -> Self {
        Self {
            users,
            organisations,
            teams,
            hasher,
            salt_generator,
        }
    }

    /// Register a new user together with their organisation and owners team
    ///
    /// Validation short-circuits in a fixed order; the first failed check
    /// decides the message. No writes happen before validation completes.
    /// If team or user creation fails after the organisation was created,
    /// no rollback is attempted and the error propagates.
    pub async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationResult, DomainError> {
        let email = field_value(&request.email);
        let display_name = field_value(&request.display_name);
        let password = field_value(&request.password);
        let confirm_password = field_value(&request.confirm_password);
        let organisation_name = field_value(&request.organisation_name);

        if email.is_empty() || display_name.is_empty() || password.is_empty() {
            debug!("Registration rejected: missing credentials");
            return Ok(RegistrationResult::failure(messages::CREDENTIALS_REQUIRED));
        }

        if organisation_name.is_empty() {
            debug!("Registration rejected: missing organisation name");
            return Ok(RegistrationResult::failure(
                messages::ORGANISATION_NAME_REQUIRED,
            ));
        }

        if password != confirm_password {
            debug!("Registration rejected: password mismatch");
            return Ok(RegistrationResult::failure(messages::PASSWORD_MISMATCH));
        }

        if self.users.email_exists(email).await? {
            debug!(email = %email, "Registration rejected: email taken");
            return Ok(RegistrationResult::failure(messages::USER_ALREADY_EXISTS));
        }

        // The display name must be free in both namespaces; either collision
        // reports the same message.
        if self.check_display_name_exists(display_name).await? {
            debug!(display_name = %display_name, "Registration rejected: display name taken");
            return Ok(RegistrationResult::failure(messages::USER_ALREADY_EXISTS));
        }

        if self.organisations.name_exists(organisation_name).await? {
            debug!(organisation = %organisation_name, "Registration rejected: organisation name taken");
            return Ok(RegistrationResult::failure(
                messages::ORGANISATION_ALREADY_EXISTS,
            ));
        }

        info!(
            email = %email,
            display_name = %display_name,
            organisation = %organisation_name,
            "Registering new user"
        );

        let salt = self.salt_generator.generate();
        let password_hash = self.hasher.hash(password, &salt)?;

        // The user id is minted up front so the owners team can be created
        // with the registering user already in its member list.
        let user_id = UserId::generate();

        let mut organisation = self
            .organisations
            .create(Organisation::new(
                OrganisationId::generate(),
                organisation_name,
            ))
            .await?;

        let team = self
            .teams
            .create(Team::new(TeamId::generate(), *organisation.id()).with_member(user_id))
            .await?;

        // Back-patch the owning team now that its id is known.
        organisation.set_owners(*team.id());
        let organisation = self.organisations.update(&organisation).await?;

        let user = self
            .users
            .create(User::new(
                user_id,
                email,
                display_name,
                password_hash,
                salt,
                *organisation.id(),
                *team.id(),
            ))
            .await?;

        info!(user = %user.id(), organisation = %organisation.id(), "Successfully registered");

        Ok(RegistrationResult::success(user, organisation))
    }

    /// Check whether a display name is taken in either namespace
    ///
    /// A name is taken if any user has it as display name or any
    /// organisation has it as its name.
    pub async fn check_display_name_exists(&self, name: &str) -> Result<bool, DomainError> {
        if self.users.display_name_exists(name).await? {
            return Ok(true);
        }

        self.organisations.name_exists(name).await
    }
}
