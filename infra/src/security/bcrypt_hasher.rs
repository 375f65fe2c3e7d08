//! bcrypt implementation of the password-hashing capability.

use roster_core::services::account::{PasswordHashError, PasswordHasher};

/// Password hasher backed by bcrypt
///
/// The cost factor is configurable so tests can trade hardness for speed;
/// production wiring uses [`bcrypt::DEFAULT_COST`].
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with an explicit cost factor
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn digest(&self, plain: &str) -> Result<String, PasswordHashError> {
        bcrypt::hash(plain, self.cost).map_err(|e| PasswordHashError(e.to_string()))
    }

    fn verify(&self, plain: &str, digest: &str) -> Result<bool, PasswordHashError> {
        bcrypt::verify(plain, digest).map_err(|e| PasswordHashError(e.to_string()))
    }
}
