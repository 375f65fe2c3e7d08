use actix_web::{web, HttpResponse};

use roster_core::repositories::AccountRepository;
use roster_core::services::account::PasswordHasher;

use crate::dto::{AccountRequest, AccountResponse};
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Handler for PUT /api/v1/accounts/{id}
///
/// Overwrites username, email, and password of an existing account and
/// answers with the updated representation.
pub async fn update<R, H>(
    state: web::Data<AppState<R, H>>,
    path: web::Path<i64>,
    request: web::Json<AccountRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    let id = path.into_inner();
    let input = request.into_inner().into_input();

    match state.account_service.update(id, &input).await {
        Ok(account) => HttpResponse::Ok().json(AccountResponse::from(account)),
        Err(error) => domain_error_response(error),
    }
}
