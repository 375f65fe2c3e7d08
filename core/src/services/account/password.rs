//! Password hashing contract consumed by the account service.

use thiserror::Error;

/// Failure raised by a password hashing backend
#[derive(Error, Debug)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(pub String);

/// Digest-and-verify capability over plaintext passwords.
///
/// The service treats digests as opaque: it stores whatever `digest`
/// produced and later feeds it back to `verify` unchanged. The concrete
/// algorithm lives in the infrastructure layer.
pub trait PasswordHasher: Send + Sync {
    /// Produce an opaque, irreversible digest for a plaintext password
    fn digest(&self, plain: &str) -> Result<String, PasswordHashError>;

    /// Check a plaintext password against a stored digest
    fn verify(&self, plain: &str, digest: &str) -> Result<bool, PasswordHashError>;
}
