//! End-to-end tests for the account HTTP surface.
//!
//! The full app is exercised over the in-memory repository and the bcrypt
//! hasher, so these tests cover the route wiring, the DTO mapping, and the
//! error-to-status translation in one pass.

use std::sync::Arc;

use actix_web::{test, web};
use serde_json::{json, Value};

use roster_api::app::create_app;
use roster_api::routes::accounts::AppState;
use roster_core::repositories::MockAccountRepository;
use roster_core::services::account::AccountService;
use roster_infra::security::BcryptPasswordHasher;

fn app_state() -> web::Data<AppState<MockAccountRepository, BcryptPasswordHasher>> {
    // minimum bcrypt cost keeps the suite fast
    let service = AccountService::new(
        Arc::new(MockAccountRepository::new()),
        Arc::new(BcryptPasswordHasher::with_cost(4)),
    );
    web::Data::new(AppState {
        account_service: Arc::new(service),
    })
}

fn register_request(username: &str, email: &str, password: &str) -> actix_web::test::TestRequest {
    test::TestRequest::post()
        .uri("/api/v1/accounts")
        .set_json(json!({
            "username": username,
            "email": email,
            "password": password,
        }))
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(create_app(app_state())).await;

    let response = test::call_service(&app, test::TestRequest::get().uri("/health").to_request())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_register_returns_created_with_confirmation() {
    let app = test::init_service(create_app(app_state())).await;

    let response = test::call_service(
        &app,
        register_request("newUser", "newUserEmail", "newUserPassword").to_request(),
    )
    .await;
    assert_eq!(response.status(), 201);

    let body: Value = test::read_body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("newUser"));
}

#[actix_web::test]
async fn test_register_duplicate_email_is_bad_request() {
    let app = test::init_service(create_app(app_state())).await;

    let response = test::call_service(
        &app,
        register_request("newUser", "newUserEmail", "newUserPassword").to_request(),
    )
    .await;
    assert_eq!(response.status(), 201);

    let response = test::call_service(
        &app,
        register_request("otherUser", "newUserEmail", "otherPassword").to_request(),
    )
    .await;
    assert_eq!(response.status(), 400);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "bad_request");
    assert!(body["message"].as_str().unwrap().contains("email"));
}

#[actix_web::test]
async fn test_register_empty_username_is_bad_request() {
    let app = test::init_service(create_app(app_state())).await;

    let response = test::call_service(
        &app,
        register_request("", "newUserEmail", "newUserPassword").to_request(),
    )
    .await;
    assert_eq!(response.status(), 400);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Username is required.");
}

#[actix_web::test]
async fn test_authenticate_outcomes() {
    let app = test::init_service(create_app(app_state())).await;
    test::call_service(
        &app,
        register_request("newUser", "newUserEmail", "newUserPassword").to_request(),
    )
    .await;

    let credentials = |email: &str, password: &str| {
        test::TestRequest::post()
            .uri("/api/v1/accounts/authenticate")
            .set_json(json!({ "email": email, "password": password }))
            .to_request()
    };

    // correct credentials
    let response = test::call_service(&app, credentials("newUserEmail", "newUserPassword")).await;
    assert_eq!(response.status(), 200);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["valid"], true);

    // wrong password
    let response = test::call_service(&app, credentials("newUserEmail", "wrongPassword")).await;
    assert_eq!(response.status(), 401);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["valid"], false);

    // unknown email is unauthorized, not an error
    let response = test::call_service(&app, credentials("missingEmail", "whatever")).await;
    assert_eq!(response.status(), 401);
}

#[actix_web::test]
async fn test_list_empty_store_is_not_found() {
    let app = test::init_service(create_app(app_state())).await;

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/accounts").to_request(),
    )
    .await;
    assert_eq!(response.status(), 404);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "No accounts found.");
}

#[actix_web::test]
async fn test_list_returns_accounts_without_digests() {
    let app = test::init_service(create_app(app_state())).await;
    test::call_service(
        &app,
        register_request("newUser", "newUserEmail", "newUserPassword").to_request(),
    )
    .await;

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/accounts").to_request(),
    )
    .await;
    assert_eq!(response.status(), 200);

    let body: Value = test::read_body_json(response).await;
    let accounts = body.as_array().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0]["username"], "newUser");
    assert_eq!(accounts[0]["email"], "newUserEmail");
    assert!(accounts[0].get("password").is_none());
    assert!(accounts[0].get("password_digest").is_none());
}

#[actix_web::test]
async fn test_get_by_id() {
    let app = test::init_service(create_app(app_state())).await;
    test::call_service(
        &app,
        register_request("newUser", "newUserEmail", "newUserPassword").to_request(),
    )
    .await;

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/accounts/1").to_request(),
    )
    .await;
    assert_eq!(response.status(), 200);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["username"], "newUser");

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/accounts/42").to_request(),
    )
    .await;
    assert_eq!(response.status(), 404);
}

#[actix_web::test]
async fn test_update_overwrites_account() {
    let app = test::init_service(create_app(app_state())).await;
    test::call_service(
        &app,
        register_request("newUser", "newUserEmail", "newUserPassword").to_request(),
    )
    .await;

    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/v1/accounts/1")
            .set_json(json!({
                "username": "renamed",
                "email": "renamedEmail",
                "password": "renamedPassword",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), 200);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["username"], "renamed");
    assert_eq!(body["email"], "renamedEmail");
}

#[actix_web::test]
async fn test_update_with_own_email_is_rejected() {
    let app = test::init_service(create_app(app_state())).await;
    test::call_service(
        &app,
        register_request("newUser", "newUserEmail", "newUserPassword").to_request(),
    )
    .await;

    // the uniqueness check runs against the whole store, self included
    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/v1/accounts/1")
            .set_json(json!({
                "username": "renamed",
                "email": "newUserEmail",
                "password": "renamedPassword",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), 400);
}

#[actix_web::test]
async fn test_remove_account() {
    let app = test::init_service(create_app(app_state())).await;
    test::call_service(
        &app,
        register_request("newUser", "newUserEmail", "newUserPassword").to_request(),
    )
    .await;

    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/v1/accounts/1")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), 200);
    let body: Value = test::read_body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("newUser"));

    // the account is gone
    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/accounts/1").to_request(),
    )
    .await;
    assert_eq!(response.status(), 404);

    // removing it again fails the same way
    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/v1/accounts/1")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), 404);
}

#[actix_web::test]
async fn test_unknown_route_gets_error_envelope() {
    let app = test::init_service(create_app(app_state())).await;

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v2/nothing").to_request(),
    )
    .await;
    assert_eq!(response.status(), 404);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "not_found");
}
