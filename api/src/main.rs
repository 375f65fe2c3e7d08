use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;

use roster_core::services::account::AccountService;
use roster_infra::database::{DatabasePool, MySqlAccountRepository};
use roster_infra::security::BcryptPasswordHasher;
use roster_shared::config::{DatabaseConfig, ServerConfig};

mod app;
mod dto;
mod handlers;
mod middleware;
mod routes;

use app::create_app;
use routes::accounts::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Roster API Server");

    // Load configuration
    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Wire the persistence and hashing implementations into the service
    let pool = DatabasePool::new(&database_config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    pool.health_check()
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let repository = Arc::new(MySqlAccountRepository::new(pool.get_pool().clone()));
    let hasher = Arc::new(BcryptPasswordHasher::default());
    let account_service = Arc::new(AccountService::new(repository, hasher));

    let app_state = web::Data::new(AppState { account_service });

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
