use serde::{Deserialize, Serialize};

/// Registration form fields. Same contract as login plus the anonymity flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_anonymous: bool,
}
