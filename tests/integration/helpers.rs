//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use realty_api::AppState;
use realty_core::config::{AppConfig, AuthConfig, DatabaseConfig, DatabaseProvider};
use realty_database::{Gateway, MemoryStore};
use realty_entity::user::UserRole;

/// Password that satisfies the sign-up rules.
pub const PASSWORD: &str = "Secr3t!9";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The in-memory store behind the router
    pub store: Arc<MemoryStore>,
    /// Shared state, for issuing product keys directly
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let mut auth = AuthConfig::with_secrets("integration-jwt", "integration-product");
        auth.hash_memory_kib = 1024;
        auth.hash_iterations = 1;

        let config = AppConfig {
            server: Default::default(),
            database: DatabaseConfig {
                provider: DatabaseProvider::Memory,
                ..DatabaseConfig::default()
            },
            auth,
            logging: Default::default(),
        };

        let store = Arc::new(MemoryStore::new());
        let state = realty_api::build_state(config, Gateway::memory(Arc::clone(&store)))
            .expect("Failed to build state");
        let router = realty_api::build_app(state.clone());

        Self {
            router,
            store,
            state,
        }
    }

    /// Issue a product key for `email` and `role`
    pub fn product_key(&self, email: &str, role: UserRole) -> String {
        self.state
            .auth_service
            .generate_product_key(email, role)
            .expect("Failed to issue product key")
    }

    /// Register an account and return its token
    pub async fn sign_up(&self, email: &str, role: UserRole) -> String {
        let key = role
            .is_elevated()
            .then(|| self.product_key(email, role));
        let body = json!({
            "name": email.split('@').next().unwrap_or(email),
            "phone": "+1 555 0100",
            "email": email,
            "password": PASSWORD,
            "productKey": key,
        });

        let path = format!("/auth/signup/{}", role.as_str().to_lowercase());
        let response = self.request("POST", &path, Some(body), None).await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Sign-up failed: {:?}",
            response.body
        );
        response.data()["token"]
            .as_str()
            .expect("No token in sign-up response")
            .to_string()
    }

    /// Create a listing and return its id
    pub async fn create_home(&self, token: &str, city: &str, price: f64, images: &[&str]) -> i64 {
        let images: Vec<Value> = images.iter().map(|url| json!({ "source": url })).collect();
        let body = json!({
            "address": "7 Harbour Rd",
            "city": city,
            "numberOfBedrooms": 3,
            "numberOfBathrooms": 2.5,
            "price": price,
            "landSize": 450.0,
            "type": "RESIDENTIAL",
            "images": images,
        });

        let response = self.request("POST", "/home", Some(body), Some(token)).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create home failed: {:?}",
            response.body
        );
        response.data()["id"].as_i64().expect("No id in response")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of a success envelope
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The `error` code of an error body
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
