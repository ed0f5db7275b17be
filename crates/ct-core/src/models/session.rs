use crate::User;

use serde::{Deserialize, Serialize};

/// Authenticated session: bearer token plus the owning user's profile.
///
/// Held in memory by the session manager and mirrored into durable
/// storage; the two copies are kept in sync on every login/register/logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}
