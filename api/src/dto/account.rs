use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roster_core::domain::entities::account::Account;
use roster_core::domain::value_objects::AccountInput;

/// Body for account creation and update requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRequest {
    pub username: String,
    pub email: String,
    /// Plaintext password; digested by the service before persistence
    pub password: String,
}

impl AccountRequest {
    pub fn into_input(self) -> AccountInput {
        AccountInput::new(self.username, self.email, self.password)
    }
}

/// Body for credential verification requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Account representation returned to callers; never carries the digest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            // accounts leaving the service are always persisted
            id: account.id.unwrap_or_default(),
            username: account.username,
            email: account.email,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Confirmation message for registration and removal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Outcome of a credential verification request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticationResponse {
    pub valid: bool,
}
