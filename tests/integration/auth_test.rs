//! Integration tests for registration, sign-in, product keys, and the
//! access-control guard.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{PASSWORD, TestApp};
use realty_entity::user::UserRole;

#[tokio::test]
async fn test_buyer_sign_up_and_me() {
    let app = TestApp::new();
    let token = app.sign_up("ana@example.com", UserRole::User).await;

    let response = app.request("GET", "/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["email"], "ana@example.com");
    assert_eq!(response.data()["role"], "USER");
    assert!(response.data().get("passwordHash").is_none());
}

#[tokio::test]
async fn test_realtor_sign_up_requires_product_key() {
    let app = TestApp::new();
    let body = json!({
        "name": "Rita",
        "email": "rita@example.com",
        "password": PASSWORD,
    });

    let response = app
        .request("POST", "/auth/signup/realtor", Some(body), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "POST",
            "/auth/signin",
            Some(json!({ "email": "rita@example.com", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_product_key_for_other_role_rejected() {
    let app = TestApp::new();
    let key = app.product_key("rita@example.com", UserRole::Realtor);
    let body = json!({
        "name": "Rita",
        "email": "rita@example.com",
        "password": PASSWORD,
        "productKey": key,
    });

    let response = app
        .request("POST", "/auth/signup/admin", Some(body), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.sign_up("ana@example.com", UserRole::User).await;

    let body = json!({
        "name": "Other",
        "email": "ana@example.com",
        "password": PASSWORD,
    });
    let response = app
        .request("POST", "/auth/signup/user", Some(body), None)
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_sign_in_mismatch_is_bad_request() {
    let app = TestApp::new();
    app.sign_up("ana@example.com", UserRole::User).await;

    let response = app
        .request(
            "POST",
            "/auth/signin",
            Some(json!({ "email": "ana@example.com", "password": "Wr0ng!!1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "INVALID_CREDENTIALS");

    let response = app
        .request(
            "POST",
            "/auth/signin",
            Some(json!({ "email": "ana@example.com", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data()["token"].is_string());
}

#[tokio::test]
async fn test_weak_password_is_validation_error() {
    let app = TestApp::new();
    let body = json!({
        "name": "Ana",
        "email": "ana@example.com",
        "password": "password",
    });

    let response = app
        .request("POST", "/auth/signup/user", Some(body), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "VALIDATION");
}

#[tokio::test]
async fn test_unknown_role_segment() {
    let app = TestApp::new();
    let body = json!({
        "name": "Ana",
        "email": "ana@example.com",
        "password": PASSWORD,
    });

    let response = app
        .request("POST", "/auth/signup/owner", Some(body), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_product_key_endpoint_requires_admin() {
    let app = TestApp::new();
    let body = json!({ "email": "new@example.com", "role": "REALTOR" });

    let response = app
        .request("POST", "/auth/key", Some(body.clone()), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let realtor = app.sign_up("rita@example.com", UserRole::Realtor).await;
    let response = app
        .request("POST", "/auth/key", Some(body.clone()), Some(&realtor))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let admin = app.sign_up("root@example.com", UserRole::Admin).await;
    let response = app
        .request("POST", "/auth/key", Some(body), Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let key = response.data()["productKey"].as_str().unwrap().to_string();

    let signup = json!({
        "name": "New",
        "email": "new@example.com",
        "password": PASSWORD,
        "productKey": key,
    });
    let response = app
        .request("POST", "/auth/signup/REALTOR", Some(signup), None)
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_garbage_token_is_anonymous() {
    let app = TestApp::new();

    let response = app.request("GET", "/auth/me", None, Some("garbage")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Public routes still work with an unusable token.
    let response = app.request("GET", "/home", None, Some("garbage")).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["database"], "connected");
}
