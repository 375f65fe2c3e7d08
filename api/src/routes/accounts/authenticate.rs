use actix_web::{web, HttpResponse};

use roster_core::repositories::AccountRepository;
use roster_core::services::account::PasswordHasher;

use crate::dto::{AuthenticationResponse, CredentialsRequest};
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Handler for POST /api/v1/accounts/authenticate
///
/// Verifies a set of credentials. A failed match and an unknown email both
/// answer `401 Unauthorized` with `{"valid": false}`; the two cases are
/// indistinguishable to the caller.
pub async fn authenticate<R, H>(
    state: web::Data<AppState<R, H>>,
    request: web::Json<CredentialsRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state
        .account_service
        .authenticate(&request.email, &request.password)
        .await
    {
        Ok(true) => HttpResponse::Ok().json(AuthenticationResponse { valid: true }),
        Ok(false) => HttpResponse::Unauthorized().json(AuthenticationResponse { valid: false }),
        Err(error) => domain_error_response(error),
    }
}
