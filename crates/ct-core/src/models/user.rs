//! User profile held client-side for the lifetime of a session.

use serde::{Deserialize, Serialize};

/// Account profile returned by the backend on login/register.
///
/// Ids are opaque backend strings; the client never generates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Preference to omit identity from submitted reports.
    pub is_anonymous: bool,
}
