use actix_web::{web, HttpResponse};

use roster_core::repositories::AccountRepository;
use roster_core::services::account::PasswordHasher;

use crate::dto::MessageResponse;
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Handler for DELETE /api/v1/accounts/{id}
///
/// Deletion is permanent; the confirmation message names the removed
/// account's username.
pub async fn remove<R, H>(state: web::Data<AppState<R, H>>, path: web::Path<i64>) -> HttpResponse
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    let id = path.into_inner();

    match state.account_service.remove(id).await {
        Ok(message) => HttpResponse::Ok().json(MessageResponse { message }),
        Err(error) => domain_error_response(error),
    }
}
