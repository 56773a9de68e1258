//! User domain types.

use financas_shared::types::UserId;
use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Password hash in PHC string format. Never the raw secret.
    pub password_hash: String,
}

/// Registration input as supplied by the caller: the secret is still raw.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address; must be unique across all users.
    pub email: String,
    /// Raw secret. Hashed by the registry before it reaches storage.
    pub secret: String,
}

/// Registration record ready for persistence: the secret is already hashed.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Password hash in PHC string format.
    pub password_hash: String,
}
