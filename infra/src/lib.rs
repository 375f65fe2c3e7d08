//! # Infrastructure Layer
//!
//! Concrete implementations behind the contracts `roster_core` defines:
//! - **Database**: MySQL account repository using SQLx, plus connection
//!   pool management
//! - **Security**: bcrypt implementation of the password-hashing capability

use thiserror::Error;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Security module - password hashing backends
pub mod security;

pub use database::{connection::DatabasePool, mysql::MySqlAccountRepository};
pub use security::BcryptPasswordHasher;

/// Errors raised while setting up infrastructure services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
