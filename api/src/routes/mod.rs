//! Route handlers for the HTTP surface

pub mod accounts;

pub use accounts::AppState;
