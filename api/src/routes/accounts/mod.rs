//! Account route handlers
//!
//! One module per operation:
//! - Registration and credential verification
//! - Listing and fetching accounts
//! - Updating and removing accounts

pub mod authenticate;
pub mod get;
pub mod list;
pub mod register;
pub mod remove;
pub mod update;

use std::sync::Arc;

use roster_core::repositories::AccountRepository;
use roster_core::services::account::{AccountService, PasswordHasher};

/// Application state shared across account handlers
pub struct AppState<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    pub account_service: Arc<AccountService<R, H>>,
}
