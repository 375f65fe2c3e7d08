//! Repository interfaces abstracting the persistence layer.

pub mod account;

pub use account::{AccountRepository, MockAccountRepository};
