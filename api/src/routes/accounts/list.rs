use actix_web::{web, HttpResponse};

use roster_core::repositories::AccountRepository;
use roster_core::services::account::PasswordHasher;

use crate::dto::AccountResponse;
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Handler for GET /api/v1/accounts
///
/// Lists every registered account in store order. An empty store answers
/// `404 Not Found`.
pub async fn list<R, H>(state: web::Data<AppState<R, H>>) -> HttpResponse
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state.account_service.list_all().await {
        Ok(accounts) => {
            let body: Vec<AccountResponse> =
                accounts.into_iter().map(AccountResponse::from).collect();
            HttpResponse::Ok().json(body)
        }
        Err(error) => domain_error_response(error),
    }
}
