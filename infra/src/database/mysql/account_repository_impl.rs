//! MySQL implementation of the AccountRepository trait.
//!
//! Concrete account persistence using MySQL with SQLx. The `accounts`
//! table carries a unique index on `email` (see `migrations/`); unique
//! violations are reported as [`RepositoryError::Duplicate`] so the
//! service can treat a racing insert like a failed uniqueness pre-check.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use roster_core::domain::entities::account::Account;
use roster_core::errors::{RepositoryError, RepositoryResult};
use roster_core::repositories::AccountRepository;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> RepositoryResult<Account> {
        Ok(Account {
            id: Some(row.try_get::<i64, _>("id").map_err(read_fault)?),
            username: row.try_get("username").map_err(read_fault)?,
            email: row.try_get("email").map_err(read_fault)?,
            password_digest: row.try_get("password_digest").map_err(read_fault)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(read_fault)?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(read_fault)?,
        })
    }

    async fn insert(&self, mut account: Account) -> RepositoryResult<Account> {
        let query = r#"
            INSERT INTO accounts (username, email, password_digest, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.password_digest)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(write_fault)?;

        account.id = Some(result.last_insert_id() as i64);
        Ok(account)
    }

    async fn overwrite(&self, account: Account, id: i64) -> RepositoryResult<Account> {
        let query = r#"
            UPDATE accounts SET
                username = ?,
                email = ?,
                password_digest = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.password_digest)
            .bind(account.updated_at)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(write_fault)?;

        Ok(account)
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Account>> {
        let query = r#"
            SELECT id, username, email, password_digest, created_at, updated_at
            FROM accounts
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_fault)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Account>> {
        let query = r#"
            SELECT id, username, email, password_digest, created_at, updated_at
            FROM accounts
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_fault)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Account>> {
        // id order keeps "store-defined order" deterministic
        let query = r#"
            SELECT id, username, email, password_digest, created_at, updated_at
            FROM accounts
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(read_fault)?;

        rows.iter().map(Self::row_to_account).collect()
    }

    async fn exists_by_email(&self, email: &str) -> RepositoryResult<bool> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM accounts WHERE email = ?
            ) as account_exists
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(read_fault)?;

        let exists: i8 = result.try_get("account_exists").map_err(read_fault)?;
        Ok(exists == 1)
    }

    async fn save(&self, account: Account) -> RepositoryResult<Account> {
        match account.id {
            Some(id) => self.overwrite(account, id).await,
            None => self.insert(account).await,
        }
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        let query = "DELETE FROM accounts WHERE id = ?";

        sqlx::query(query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(write_fault)?;

        Ok(())
    }
}

fn read_fault(err: sqlx::Error) -> RepositoryError {
    RepositoryError::storage(err.to_string())
}

/// Map write errors, surfacing the unique email index as `Duplicate`
fn write_fault(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err {
        if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) {
            return RepositoryError::duplicate("email");
        }
    }
    RepositoryError::storage(err.to_string())
}
