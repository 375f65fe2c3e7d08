use actix_web::{web, HttpResponse};

use roster_core::repositories::AccountRepository;
use roster_core::services::account::PasswordHasher;

use crate::dto::{AccountRequest, MessageResponse};
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Handler for POST /api/v1/accounts
///
/// Registers a new account and answers `201 Created` with a confirmation
/// message naming the registered username.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "newUser",
///     "email": "new.user@example.com",
///     "password": "plaintext"
/// }
/// ```
///
/// # Errors
/// `400 Bad Request` for a missing field or an already-registered email.
pub async fn register<R, H>(
    state: web::Data<AppState<R, H>>,
    request: web::Json<AccountRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    let input = request.into_inner().into_input();

    match state.account_service.register(&input).await {
        Ok(message) => HttpResponse::Created().json(MessageResponse { message }),
        Err(error) => domain_error_response(error),
    }
}
