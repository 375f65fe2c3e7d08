//! Account service module
//!
//! This module provides the account management use cases:
//! - Registration with fail-fast input validation
//! - Credential verification
//! - Listing, fetching, updating, and removing accounts

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::{PasswordHashError, PasswordHasher};
pub use service::AccountService;
