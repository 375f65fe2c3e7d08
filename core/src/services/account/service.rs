//! Account management service implementation

use std::sync::Arc;

use crate::domain::entities::account::Account;
use crate::domain::value_objects::AccountInput;
use crate::errors::{DomainError, DomainResult, RepositoryError};
use crate::repositories::AccountRepository;

use super::password::{PasswordHashError, PasswordHasher};

/// Message for a duplicate email, shared between the pre-check and the
/// store-constraint translation so both paths read the same to the caller.
const DUPLICATE_EMAIL_MESSAGE: &str = "An account with this email already exists.";

/// Account service orchestrating validation, hashing, and persistence
///
/// Every operation validates its input in a fixed order and stops at the
/// first failing rule. `BadRequest` and `NotFound` outcomes carry the
/// violated rule's message unchanged; anything the rules did not
/// anticipate is logged and surfaced as `Unexpected` with a generic,
/// per-operation message.
pub struct AccountService<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    /// Repository for account persistence
    repository: Arc<R>,
    /// Capability turning plaintext passwords into stored digests
    hasher: Arc<H>,
}

impl<R, H> AccountService<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    /// Create a new account service
    ///
    /// # Arguments
    ///
    /// * `repository` - Repository for account persistence
    /// * `hasher` - Password digest-and-verify capability
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new account
    ///
    /// Validation order: username present, email present, email not taken,
    /// password present. On success the password is digested, the account
    /// persisted with a store-assigned id, and a confirmation message
    /// naming the username returned.
    pub async fn register(&self, input: &AccountInput) -> DomainResult<String> {
        tracing::info!(username = %input.username, "registering new account");

        self.ensure_input_admissible(input, "register a new account")
            .await?;

        let digest = self
            .hasher
            .digest(&input.password)
            .map_err(|err| hasher_fault("register a new account", err))?;

        let account = Account::new(input.username.clone(), input.email.clone(), digest);
        self.repository
            .save(account)
            .await
            .map_err(|err| repository_fault("register a new account", err))?;

        Ok(format!(
            "Account {} registered successfully.",
            input.username
        ))
    }

    /// Check a set of credentials against the stored digest
    ///
    /// An unknown email is a normal `false` outcome, not a failure.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<bool> {
        tracing::info!("verifying account credentials");

        let account = self
            .repository
            .find_by_email(email)
            .await
            .map_err(|err| repository_fault("verify account credentials", err))?;

        match account {
            Some(account) => self
                .hasher
                .verify(password, &account.password_digest)
                .map_err(|err| hasher_fault("verify account credentials", err)),
            None => Ok(false),
        }
    }

    /// List every registered account, in store-defined order
    pub async fn list_all(&self) -> DomainResult<Vec<Account>> {
        tracing::info!("listing registered accounts");

        let accounts = self
            .repository
            .find_all()
            .await
            .map_err(|err| repository_fault("list registered accounts", err))?;

        if accounts.is_empty() {
            return Err(DomainError::not_found("No accounts found."));
        }

        Ok(accounts)
    }

    /// Fetch a single account by id
    pub async fn get_by_id(&self, id: i64) -> DomainResult<Account> {
        tracing::info!(id, "fetching account by id");

        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| repository_fault("fetch an account", err))?
            .ok_or_else(|| DomainError::not_found("Account not found."))
    }

    /// Overwrite an existing account's username, email, and password
    ///
    /// Applies the same validation as registration after the account is
    /// found. The email-uniqueness check runs against the whole store, the
    /// account being updated included, so re-submitting an unchanged email
    /// is rejected as a duplicate.
    pub async fn update(&self, id: i64, input: &AccountInput) -> DomainResult<Account> {
        tracing::info!(id, "updating account");

        let mut account = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|err| repository_fault("update an account", err))?
            .ok_or_else(|| DomainError::not_found("Account not found."))?;

        self.ensure_input_admissible(input, "update an account")
            .await?;

        let digest = self
            .hasher
            .digest(&input.password)
            .map_err(|err| hasher_fault("update an account", err))?;

        account.set_username(input.username.clone());
        account.set_email(input.email.clone());
        account.set_password_digest(digest);

        self.repository
            .save(account)
            .await
            .map_err(|err| repository_fault("update an account", err))
    }

    /// Delete an account permanently
    pub async fn remove(&self, id: i64) -> DomainResult<String> {
        tracing::info!(id, "removing account");

        let account = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|err| repository_fault("remove an account", err))?
            .ok_or_else(|| DomainError::not_found("Account not found."))?;

        self.repository
            .delete_by_id(id)
            .await
            .map_err(|err| repository_fault("remove an account", err))?;

        Ok(format!("Account {} removed.", account.username))
    }

    /// Shared fail-fast validation for register and update.
    ///
    /// Order matters and is part of the contract: username, email,
    /// email uniqueness, password.
    async fn ensure_input_admissible(
        &self,
        input: &AccountInput,
        operation: &str,
    ) -> DomainResult<()> {
        if input.username.is_empty() {
            return Err(DomainError::bad_request("Username is required."));
        }

        if input.email.is_empty() {
            return Err(DomainError::bad_request("Email is required."));
        }

        let email_taken = self
            .repository
            .exists_by_email(&input.email)
            .await
            .map_err(|err| repository_fault(operation, err))?;
        if email_taken {
            return Err(DomainError::bad_request(DUPLICATE_EMAIL_MESSAGE));
        }

        if input.password.is_empty() {
            return Err(DomainError::bad_request("Password is required."));
        }

        Ok(())
    }
}

/// Translate a repository failure into the service taxonomy.
///
/// A uniqueness violation on email is the store backstop for the
/// check-then-act race in `ensure_input_admissible` and folds into the
/// same `BadRequest` the pre-check produces. Everything else is logged
/// with its cause and surfaced as `Unexpected` with a generic message.
fn repository_fault(operation: &str, err: RepositoryError) -> DomainError {
    match err {
        RepositoryError::Duplicate { ref field } if field == "email" => {
            DomainError::bad_request(DUPLICATE_EMAIL_MESSAGE)
        }
        other => {
            tracing::error!(operation, error = %other, "repository failure");
            DomainError::unexpected(format!("Unexpected failure while trying to {operation}."))
        }
    }
}

/// Translate a hashing failure into the service taxonomy.
fn hasher_fault(operation: &str, err: PasswordHashError) -> DomainError {
    tracing::error!(operation, error = %err, "password hashing failure");
    DomainError::unexpected(format!("Unexpected failure while trying to {operation}."))
}
