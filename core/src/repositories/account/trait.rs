//! Account repository trait defining the interface for account persistence.
//!
//! This module defines the repository pattern interface for Account
//! entities. The trait is async-first and uses Result types for proper
//! error handling; the service layer depends on this contract and never on
//! a concrete store.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::RepositoryResult;

/// Repository trait for Account entity persistence operations
///
/// Implementations handle the actual storage operations while maintaining
/// the abstraction boundary between domain and infrastructure layers. A
/// single call is assumed atomic; sequences of calls are not, so the
/// uniqueness of `email` must also be enforced by the store itself (see
/// [`RepositoryError::Duplicate`](crate::errors::RepositoryError)).
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given id
    /// * `Err(RepositoryError)` - Storage fault
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Account>>;

    /// Find an account by its email
    ///
    /// At most one account can match, since email is unique across the
    /// store.
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Account>>;

    /// Fetch every stored account, in store-defined order
    async fn find_all(&self) -> RepositoryResult<Vec<Account>>;

    /// Check whether an account exists with the given email
    async fn exists_by_email(&self, email: &str) -> RepositoryResult<bool>;

    /// Persist an account
    ///
    /// An account with `id: None` is inserted and returned with its
    /// store-assigned id; an account with an id overwrites the stored row.
    ///
    /// # Returns
    /// * `Ok(Account)` - The persisted account, id assigned if new
    /// * `Err(RepositoryError::Duplicate)` - A uniqueness constraint fired
    /// * `Err(RepositoryError::Storage)` - Any other storage fault
    async fn save(&self, account: Account) -> RepositoryResult<Account>;

    /// Delete the account with the given id
    ///
    /// Deleting an id that is not present is not an error; callers that
    /// care check existence first.
    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;
}
