#![expect(clippy::expect_used, reason = "Test setup failures are fatal")]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Creating a test Salvo service backed by its own in-memory store
//! - Making HTTP requests
//! - Asserting on responses
//!
//! ## Store Isolation
//! Every call to `create_test_service` builds a fresh store, so tests can run
//! in parallel without seeing each other's series.

use std::sync::Arc;

use salvo::http::header::HeaderName;
use salvo::http::{Method, ReqBody, StatusCode};
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};
use serde_json::{Value, json};

use cadence_test::component::config::{
    ConfigHandler, LoggingConfig, SeriesConfig, ServerConfig, Settings,
};
use cadence_test::component::store::{InMemorySessionStore, SessionStore, SessionStoreHandler};

pub use cadence_test::component::constants::{SERIES_PREVIEW_ROUTE, SERIES_ROUTE_PREFIX};

/// Test configuration - static struct instead of loading from file.
#[must_use]
pub fn test_config() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
            serve_origin: None,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        series: SeriesConfig {
            max_weeks: 52,
            max_patterns: 14,
        },
    }
}

/// A service together with the store it writes to.
pub struct TestService {
    pub service: Service,
    pub store: Arc<InMemorySessionStore>,
}

/// Creates a test Salvo service instance for integration testing.
///
/// ## Summary
/// Builds the full API router (matching main.rs setup) over a fresh
/// in-memory store.
///
/// ## Panics
/// Panics if the routes cannot be created.
#[must_use]
pub fn create_test_service() -> TestService {
    create_test_service_with(test_config())
}

/// Creates a test service using the given settings.
///
/// ## Panics
/// Panics if the routes cannot be created.
#[must_use]
pub fn create_test_service_with(settings: Settings) -> TestService {
    let store = Arc::new(InMemorySessionStore::new());
    let shared: Arc<dyn SessionStore> = store.clone();

    let router = Router::new()
        .hoop(SessionStoreHandler { store: shared })
        .hoop(ConfigHandler { settings })
        .push(cadence_test::app::api::routes().expect("API routes should be valid"));

    TestService {
        service: Service::new(router),
        store,
    }
}

/// Test request builder for constructing HTTP requests.
pub struct TestRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl TestRequest {
    /// Creates a new test request with the given method and path.
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a new GET request.
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a new POST request.
    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    /// Creates a new DELETE request.
    #[must_use]
    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the Content-Type header.
    #[must_use]
    pub fn content_type(self, content_type: &str) -> Self {
        self.header("Content-Type", content_type)
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn json_body(self, value: &Value) -> Self {
        self.content_type("application/json; charset=utf-8")
            .body(value.to_string().into_bytes())
    }

    /// Sends the request to the test service and returns the response.
    pub async fn send(self, service: &TestService) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method.as_str() {
            "POST" => TestClient::post(&url),
            "DELETE" => TestClient::delete(&url),
            _ => TestClient::get(&url),
        };

        for (name, value) in self.headers {
            if let Ok(header_name) = HeaderName::try_from(name.as_str()) {
                client = client.add_header(header_name, value, true);
            }
        }

        if let Some(body_bytes) = self.body {
            client = client.body(ReqBody::Once(body_bytes.into()));
        }

        let mut response = client.send(&service.service).await;

        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

        TestResponse { status, body }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {expected} but got {}: {}",
            self.status,
            self.body_string()
        );
        self
    }

    /// Asserts that the response body contains the expected substring.
    #[must_use]
    pub fn assert_body_contains(self, expected: &str) -> Self {
        let body = String::from_utf8_lossy(&self.body);
        assert!(
            body.contains(expected),
            "Expected body to contain '{expected}' but got:\n{body}"
        );
        self
    }

    /// Asserts that the response carries a JSON error of the given kind.
    #[must_use]
    pub fn assert_error_kind(self, kind: &str) -> Self {
        let json = self.json();
        assert_eq!(
            json["kind"], kind,
            "Expected error kind '{kind}' but got:\n{json}"
        );
        self
    }

    /// Returns the body as a UTF-8 string.
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parses the body as JSON.
    ///
    /// ## Panics
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body should be JSON")
    }
}

/// Path of a single series resource.
#[must_use]
pub fn series_path(series_id: &str) -> String {
    format!("{SERIES_ROUTE_PREFIX}/{series_id}")
}

/// A valid base session starting Monday 2024-03-04 at 09:00 for one hour.
#[must_use]
pub fn sample_base() -> Value {
    json!({
        "startsAt": "2024-03-04T09:00",
        "endsAt": "2024-03-04T10:00",
        "activityType": "yoga",
        "stylistId": "stylist-1",
        "serviceId": "service-1",
        "capacityMax": 12,
        "priceDecimal": "25.00",
        "notes": "Bring a mat"
    })
}

/// Wraps a base session and repeat settings into a request body.
#[must_use]
pub fn series_body(base: Value, weeks: i64, patterns: Value) -> Value {
    json!({
        "base": base,
        "repeat": {
            "enabled": true,
            "weeks": weeks,
            "patterns": patterns
        }
    })
}
