//! Integration tests for buyer inquiries and the realtor inbox.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;
use realty_core::types::HomeId;
use realty_entity::user::UserRole;

#[tokio::test]
async fn test_buyer_inquires_and_owner_reads() {
    let app = TestApp::new();
    let owner = app.sign_up("owner@example.com", UserRole::Realtor).await;
    let buyer = app.sign_up("ben@example.com", UserRole::User).await;
    let id = app.create_home(&owner, "Oslo", 1.0, &[]).await;

    for text in ["Is it still available?", "Can I visit on Sunday?"] {
        let response = app
            .request(
                "POST",
                &format!("/home/{id}/inquire"),
                Some(json!({ "message": text })),
                Some(&buyer),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.data()["homeId"], id);
    }

    let response = app
        .request("GET", &format!("/home/{id}/messages"), None, Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let messages = response.data().as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["message"], "Is it still available?");
    assert_eq!(messages[0]["sender"]["email"], "ben@example.com");
    assert_eq!(messages[0]["sender"]["phone"], "+1 555 0100");
}

#[tokio::test]
async fn test_only_buyers_inquire() {
    let app = TestApp::new();
    let owner = app.sign_up("owner@example.com", UserRole::Realtor).await;
    let id = app.create_home(&owner, "Oslo", 1.0, &[]).await;
    let path = format!("/home/{id}/inquire");

    let response = app
        .request("POST", &path, Some(json!({ "message": "hi" })), Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("POST", &path, Some(json!({ "message": "hi" })), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_inquiry_about_missing_home() {
    let app = TestApp::new();
    let buyer = app.sign_up("ben@example.com", UserRole::User).await;

    let response = app
        .request(
            "POST",
            "/home/9999/inquire",
            Some(json!({ "message": "hello" })),
            Some(&buyer),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inbox_is_owner_only() {
    let app = TestApp::new();
    let owner = app.sign_up("owner@example.com", UserRole::Realtor).await;
    let rival = app.sign_up("rival@example.com", UserRole::Realtor).await;
    let admin = app.sign_up("root@example.com", UserRole::Admin).await;
    let buyer = app.sign_up("ben@example.com", UserRole::User).await;
    let id = app.create_home(&owner, "Oslo", 1.0, &[]).await;
    let path = format!("/home/{id}/messages");

    for token in [&rival, &admin, &buyer] {
        let response = app.request("GET", &path, None, Some(token)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn test_delete_also_removes_inquiries() {
    let app = TestApp::new();
    let owner = app.sign_up("owner@example.com", UserRole::Realtor).await;
    let buyer = app.sign_up("ben@example.com", UserRole::User).await;
    let id = app.create_home(&owner, "Oslo", 1.0, &["a.jpg"]).await;

    app.request(
        "POST",
        &format!("/home/{id}/inquire"),
        Some(json!({ "message": "Offer?" })),
        Some(&buyer),
    )
    .await;
    assert_eq!(app.store.message_count(HomeId(id)).await, 1);

    let response = app
        .request("DELETE", &format!("/home/{id}"), None, Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(app.store.message_count(HomeId(id)).await, 0);
}

#[tokio::test]
async fn test_empty_inquiry_rejected() {
    let app = TestApp::new();
    let owner = app.sign_up("owner@example.com", UserRole::Realtor).await;
    let buyer = app.sign_up("ben@example.com", UserRole::User).await;
    let id = app.create_home(&owner, "Oslo", 1.0, &[]).await;

    let response = app
        .request(
            "POST",
            &format!("/home/{id}/inquire"),
            Some(json!({ "message": "" })),
            Some(&buyer),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.message_count(HomeId(id)).await, 0);
}
