//! Shared utilities and common types for the Roster server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response structures for the HTTP surface
//! - Common type definitions

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, ServerConfig};
pub use types::ErrorResponse;
