use actix_web::{web, HttpResponse};

use roster_core::repositories::AccountRepository;
use roster_core::services::account::PasswordHasher;

use crate::dto::AccountResponse;
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Handler for GET /api/v1/accounts/{id}
pub async fn get<R, H>(state: web::Data<AppState<R, H>>, path: web::Path<i64>) -> HttpResponse
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    let id = path.into_inner();

    match state.account_service.get_by_id(id).await {
        Ok(account) => HttpResponse::Ok().json(AccountResponse::from(account)),
        Err(error) => domain_error_response(error),
    }
}
