//! Integration tests for listing search and management.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;
use realty_core::types::HomeId;
use realty_entity::user::UserRole;

#[tokio::test]
async fn test_search_filters_and_first_image() {
    let app = TestApp::new();
    let realtor = app.sign_up("rita@example.com", UserRole::Realtor).await;

    let cheap = app
        .create_home(&realtor, "Berlin", 100_000.0, &["cheap-1.jpg", "cheap-2.jpg"])
        .await;
    let upper = app.create_home(&realtor, "Berlin", 300_000.0, &[]).await;
    app.create_home(&realtor, "Berlin", 300_001.0, &["x.jpg"]).await;
    app.create_home(&realtor, "Munich", 200_000.0, &["y.jpg"]).await;

    let response = app
        .request(
            "GET",
            "/home?city=Berlin&minPrice=100000&maxPrice=300000",
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let results = response.data().as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["id"], cheap);
    assert_eq!(results[0]["image"], "cheap-1.jpg");
    assert_eq!(results[1]["id"], upper);
    assert!(results[1]["image"].is_null());
    assert!(results.iter().all(|h| h["city"] == "Berlin"));
}

#[tokio::test]
async fn test_search_no_match_is_empty_list() {
    let app = TestApp::new();
    let response = app
        .request("GET", "/home?propertyType=CONDO", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data(), &json!([]));
}

#[tokio::test]
async fn test_search_rejects_bad_query() {
    let app = TestApp::new();
    let response = app.request("GET", "/home?minPrice=cheap", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_home_and_realtor() {
    let app = TestApp::new();
    let realtor = app.sign_up("rita@example.com", UserRole::Realtor).await;
    let id = app
        .create_home(&realtor, "Oslo", 500_000.0, &["a.jpg", "b.jpg"])
        .await;

    let response = app.request("GET", &format!("/home/{id}"), None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["images"], json!(["a.jpg", "b.jpg"]));
    assert_eq!(response.data()["numberOfBathrooms"], 2.5);

    let response = app
        .request("GET", &format!("/home/{id}/realtor"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["email"], "rita@example.com");

    let response = app.request("GET", "/home/9999", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_buyer_cannot_create() {
    let app = TestApp::new();
    let buyer = app.sign_up("ben@example.com", UserRole::User).await;
    let body = json!({
        "address": "1 Main St",
        "city": "Oslo",
        "numberOfBedrooms": 1,
        "numberOfBathrooms": 1.0,
        "price": 1.0,
        "landSize": 1.0,
        "type": "CONDO",
        "images": [],
    });

    let response = app.request("POST", "/home", Some(body.clone()), None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("POST", "/home", Some(body), Some(&buyer))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_validates_body() {
    let app = TestApp::new();
    let realtor = app.sign_up("rita@example.com", UserRole::Realtor).await;
    let body = json!({
        "address": "1 Main St",
        "city": "Oslo",
        "numberOfBedrooms": 2,
        "numberOfBathrooms": 1.0,
        "price": -5.0,
        "landSize": 1.0,
        "type": "CONDO",
    });

    let response = app
        .request("POST", "/home", Some(body), Some(&realtor))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "VALIDATION");
}

#[tokio::test]
async fn test_update_by_owner_and_non_owner() {
    let app = TestApp::new();
    let owner = app.sign_up("owner@example.com", UserRole::Realtor).await;
    let rival = app.sign_up("rival@example.com", UserRole::Realtor).await;
    let id = app.create_home(&owner, "Oslo", 400_000.0, &[]).await;
    let path = format!("/home/{id}");

    let response = app
        .request("PUT", &path, Some(json!({ "price": 1.0 })), Some(&rival))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("PUT", &path, Some(json!({ "price": 380000.0 })), Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["price"], 380_000.0);
    assert_eq!(response.data()["city"], "Oslo");

    let admin = app.sign_up("root@example.com", UserRole::Admin).await;
    let response = app
        .request("PUT", &path, Some(json!({ "city": "Bergen" })), Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["city"], "Bergen");

    let response = app
        .request("PUT", "/home/9999", Some(json!({ "price": 1.0 })), Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_by_non_owner_rejected() {
    let app = TestApp::new();
    let owner = app.sign_up("owner@example.com", UserRole::Realtor).await;
    let rival = app.sign_up("rival@example.com", UserRole::Realtor).await;
    let id = app.create_home(&owner, "Oslo", 1.0, &["a.jpg"]).await;

    let response = app
        .request("DELETE", &format!("/home/{id}"), None, Some(&rival))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.request("GET", &format!("/home/{id}"), None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_removes_home_and_images() {
    let app = TestApp::new();
    let owner = app.sign_up("owner@example.com", UserRole::Realtor).await;
    let id = app
        .create_home(&owner, "Oslo", 1.0, &["a.jpg", "b.jpg", "c.jpg"])
        .await;
    let other = app.create_home(&owner, "Oslo", 2.0, &["d.jpg"]).await;

    let response = app
        .request("DELETE", &format!("/home/{id}"), None, Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    assert_eq!(app.store.image_count(HomeId(id)).await, 0);
    assert_eq!(app.store.image_count(HomeId(other)).await, 1);

    let response = app.request("GET", &format!("/home/{id}"), None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_failed_delete_keeps_everything() {
    let app = TestApp::new();
    let owner = app.sign_up("owner@example.com", UserRole::Realtor).await;
    let id = app
        .create_home(&owner, "Oslo", 1.0, &["a.jpg", "b.jpg"])
        .await;

    app.store.fail_next_commit();
    let response = app
        .request("DELETE", &format!("/home/{id}"), None, Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], "Internal server error");

    assert_eq!(app.store.image_count(HomeId(id)).await, 2);
    let response = app.request("GET", &format!("/home/{id}"), None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_accepts_type_and_image_sources() {
    let app = TestApp::new();
    let realtor = app.sign_up("rita@example.com", UserRole::Realtor).await;
    let body = json!({
        "address": "12 Canal St",
        "city": "Amsterdam",
        "numberOfBedrooms": 2,
        "numberOfBathrooms": 1.0,
        "price": 250000.0,
        "landSize": 80.0,
        "type": "CONDO",
        "images": [{ "source": "front.jpg" }, { "source": "kitchen.jpg" }],
    });

    let response = app
        .request("POST", "/home", Some(body), Some(&realtor))
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.data()["propertyType"], "CONDO");
    assert_eq!(response.data()["images"], json!(["front.jpg", "kitchen.jpg"]));

    let id = response.data()["id"].as_i64().unwrap();
    assert_eq!(app.store.image_count(HomeId(id)).await, 2);
}

#[tokio::test]
async fn test_empty_update_is_rejected() {
    let app = TestApp::new();
    let owner = app.sign_up("owner@example.com", UserRole::Realtor).await;
    let id = app.create_home(&owner, "Oslo", 1.0, &[]).await;

    let response = app
        .request("PUT", &format!("/home/{id}"), Some(json!({})), Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "VALIDATION");
}
