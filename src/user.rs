//! User account record.

use serde::{Deserialize, Serialize};

/// A registered account. The username is unique at registration time and
/// the password is stored and compared verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}
