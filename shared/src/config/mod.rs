//! Configuration module
//!
//! Configuration is read from environment variables, with defaults suitable
//! for local development:
//! - `database` - Database connection and pool configuration
//! - `server` - HTTP server bind configuration

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;
