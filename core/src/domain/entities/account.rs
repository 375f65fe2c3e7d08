//! Account entity representing a registered user account in the Roster system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account entity representing a registered user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, assigned by the store on first save.
    /// `None` for an account that has not been persisted yet.
    pub id: Option<i64>,

    /// Display name chosen by the account holder
    pub username: String,

    /// Contact email, unique across all accounts
    pub email: String,

    /// Opaque password digest. The store never holds plaintext, and the
    /// digest never leaves the process in a serialized payload.
    #[serde(skip_serializing, default)]
    pub password_digest: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account instance with no id assigned yet
    pub fn new(username: String, email: String, password_digest: String) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            username,
            email,
            password_digest,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the username
    pub fn set_username(&mut self, username: String) {
        self.username = username;
        self.updated_at = Utc::now();
    }

    /// Overwrites the email
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Overwrites the stored password digest
    pub fn set_password_digest(&mut self, password_digest: String) {
        self.password_digest = password_digest;
        self.updated_at = Utc::now();
    }

    /// Checks whether the account has been persisted
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_creation() {
        let account = Account::new(
            "newUser".to_string(),
            "newUserEmail".to_string(),
            "digest_abc".to_string(),
        );

        assert_eq!(account.id, None);
        assert_eq!(account.username, "newUser");
        assert_eq!(account.email, "newUserEmail");
        assert_eq!(account.password_digest, "digest_abc");
        assert!(!account.is_persisted());
    }

    #[test]
    fn test_setters_touch_updated_at() {
        let mut account = Account::new(
            "newUser".to_string(),
            "newUserEmail".to_string(),
            "digest_abc".to_string(),
        );
        let created = account.created_at;

        account.set_username("renamed".to_string());
        account.set_email("renamedEmail".to_string());
        account.set_password_digest("digest_def".to_string());

        assert_eq!(account.username, "renamed");
        assert_eq!(account.email, "renamedEmail");
        assert_eq!(account.password_digest, "digest_def");
        assert_eq!(account.created_at, created);
        assert!(account.updated_at >= created);
    }

    #[test]
    fn test_password_digest_never_serialized() {
        let mut account = Account::new(
            "newUser".to_string(),
            "newUserEmail".to_string(),
            "digest_abc".to_string(),
        );
        account.id = Some(1);

        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("password_digest").is_none());
        assert_eq!(json["username"], "newUser");
    }
}
