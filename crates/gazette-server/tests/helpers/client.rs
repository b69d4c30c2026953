//! In-process HTTP client for router tests.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use gazette_server::{AppState, cache::CacheConfig, create_router, metrics::setup::detached_handle};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::fake_source::FakeSource;

/// Envia requests al router sin abrir sockets.
///
/// El router se clona por request; el estado (y por lo tanto el cache) es
/// compartido entre todas las requests del mismo cliente.
pub struct TestClient {
    app: Router,
}

impl TestClient {
    pub fn new(app: Router) -> Self {
        Self { app }
    }

    /// GET sin headers extra.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.get_with_headers(uri, Vec::new()).await
    }

    /// GET con headers extra.
    pub async fn get_with_headers(&self, uri: &str, headers: Vec<(&str, &str)>) -> TestResponse {
        let request = headers
            .into_iter()
            .fold(Request::get(uri), |builder, (name, value)| {
                builder.header(name, value)
            })
            .body(Body::empty())
            .expect("invalid test request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("failed to read body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Respuesta ya leida completa.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("body is not JSON ({}): {}", e, self.text()))
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status,
            expected,
            "unexpected status, body: {}",
            self.text()
        );
        self
    }

    pub fn assert_content_type_contains(&self, expected: &str) -> &Self {
        let content_type = self.header("content-type").unwrap_or_default();
        assert!(
            content_type.contains(expected),
            "content-type '{}' does not contain '{}'",
            content_type,
            expected
        );
        self
    }

    pub fn assert_header_exists(&self, name: &str) -> &Self {
        assert!(self.headers.contains_key(name), "missing header '{}'", name);
        self
    }

    pub fn assert_header(&self, name: &str, expected: &str) -> &Self {
        assert_eq!(self.header(name), Some(expected), "header '{}'", name);
        self
    }
}

/// Cliente sobre una fuente sin articulos.
pub fn client() -> TestClient {
    client_with(Arc::new(FakeSource::new(Vec::new())))
}

/// Cliente sobre la fuente dada, con un cache nuevo.
pub fn client_with(source: Arc<FakeSource>) -> TestClient {
    let state = AppState::from_source(source, CacheConfig::default());
    TestClient::new(create_router(state, detached_handle()))
}
