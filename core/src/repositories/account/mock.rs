//! In-memory implementation of AccountRepository for tests and local runs.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::account::Account;
use crate::errors::{RepositoryError, RepositoryResult};

use super::trait_::AccountRepository;

#[derive(Default)]
struct MockState {
    /// Keyed by id; BTreeMap keeps `find_all` in id order
    accounts: BTreeMap<i64, Account>,
    last_id: i64,
}

/// In-memory account repository
///
/// Mirrors the store semantics the service relies on: sequential id
/// assignment, ids never reused, and a uniqueness constraint on email
/// enforced inside `save`.
pub struct MockAccountRepository {
    state: Arc<RwLock<MockState>>,
}

impl MockAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockState::default())),
        }
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Account>> {
        let state = self.state.read().await;
        Ok(state.accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Account>> {
        let state = self.state.read().await;
        Ok(state.accounts.values().find(|a| a.email == email).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Account>> {
        let state = self.state.read().await;
        Ok(state.accounts.values().cloned().collect())
    }

    async fn exists_by_email(&self, email: &str) -> RepositoryResult<bool> {
        let state = self.state.read().await;
        Ok(state.accounts.values().any(|a| a.email == email))
    }

    async fn save(&self, mut account: Account) -> RepositoryResult<Account> {
        let mut state = self.state.write().await;

        let id = match account.id {
            Some(id) => id,
            None => {
                // last_id only grows, so ids are never reused after deletion
                state.last_id += 1;
                state.last_id
            }
        };

        // unique email constraint, the row being overwritten excepted
        if state
            .accounts
            .values()
            .any(|a| a.email == account.email && a.id != Some(id))
        {
            return Err(RepositoryError::duplicate("email"));
        }

        account.id = Some(id);
        state.accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        let mut state = self.state.write().await;
        state.accounts.remove(&id);
        Ok(())
    }
}
