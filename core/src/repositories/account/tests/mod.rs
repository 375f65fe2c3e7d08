//! Tests for the account repository implementations
