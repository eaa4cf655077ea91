//! Team domain
//!
//! Teams group users inside an organisation. Registration creates a single
//! owners team per new organisation with the registering user as its first
//! member.

mod entity;
mod repository;

pub use entity::{Team, TeamId};
pub use repository::TeamRepository;

#[cfg(test)]
pub use repository::mock::MockTeamRepository;
