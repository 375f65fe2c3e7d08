//! Application factory
//!
//! Builds the Actix-web application from an [`AppState`], wiring
//! middleware, routes, and the default handler.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use roster_core::repositories::AccountRepository;
use roster_core::services::account::PasswordHasher;

use crate::dto::ErrorResponse;
use crate::middleware::cors::create_cors;
use crate::routes::accounts::{
    authenticate::authenticate, get::get, list::list, register::register, remove::remove,
    update::update, AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<R, H>(
    app_state: web::Data<AppState<R, H>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware (logging outermost, then CORS)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/accounts")
                    .route("", web::post().to(register::<R, H>))
                    .route("", web::get().to(list::<R, H>))
                    .route("/authenticate", web::post().to(authenticate::<R, H>))
                    .route("/{id}", web::get().to(get::<R, H>))
                    .route("/{id}", web::put().to(update::<R, H>))
                    .route("/{id}", web::delete().to(remove::<R, H>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "roster-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default handler for unknown routes
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("not_found", "Resource not found."))
}
