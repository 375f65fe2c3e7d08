//! Translation from the domain error taxonomy to HTTP responses.

use actix_web::HttpResponse;

use roster_core::errors::DomainError;

use crate::dto::ErrorResponse;

/// Map a domain failure to its HTTP status and error envelope.
///
/// `BadRequest` and `NotFound` carry the service message verbatim;
/// `Unexpected` carries only the generic message the service chose, so
/// nothing internal leaks past this point.
pub fn domain_error_response(error: DomainError) -> HttpResponse {
    match error {
        DomainError::BadRequest { message } => {
            log::warn!("bad request: {}", message);
            HttpResponse::BadRequest().json(ErrorResponse::new("bad_request", message))
        }
        DomainError::NotFound { message } => {
            log::info!("not found: {}", message);
            HttpResponse::NotFound().json(ErrorResponse::new("not_found", message))
        }
        DomainError::Unexpected { message } => {
            log::error!("unexpected failure: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new("internal_error", message))
        }
    }
}
