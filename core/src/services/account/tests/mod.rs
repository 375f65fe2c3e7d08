//! Tests for the account service
