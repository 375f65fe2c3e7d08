//! Transient payload for account creation and update requests.

use serde::{Deserialize, Serialize};

/// Caller-supplied account data, carrying the plaintext password.
///
/// The plaintext only lives for the duration of a single service call;
/// the service digests it before anything reaches the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl AccountInput {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
