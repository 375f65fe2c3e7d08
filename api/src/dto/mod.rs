//! Request and response payloads for the HTTP surface

pub mod account;
pub mod error;

pub use account::{
    AccountRequest, AccountResponse, AuthenticationResponse, CredentialsRequest, MessageResponse,
};
pub use error::ErrorResponse;
