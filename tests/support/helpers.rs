// tests/support/helpers.rs
use std::sync::Arc;

use axum::body;
use axum::http::StatusCode;
use serde_json::Value;
use storefront_core::application::{
    ports::{
        security::AdminAuthenticator,
        time::Clock,
        util::{IdGenerator, SlugGenerator},
    },
    services::{ApplicationServices, ServiceSettings},
};
use storefront_core::domain::{
    action::ActionLogRepository,
    order::OrderReadRepository,
    product::{ProductImageRepository, ProductReadRepository, ProductWriteRepository},
};
use storefront_core::presentation::http::{
    routes::{RouterSettings, build_router},
    state::HttpState,
};

use super::mocks;

/// Services wired to in-memory repositories, plus handles for inspecting them.
pub struct TestContext {
    pub catalog: Arc<mocks::InMemoryCatalog>,
    pub orders: Arc<mocks::InMemoryOrders>,
    pub services: Arc<ApplicationServices>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_settings(ServiceSettings::default())
    }

    pub fn with_settings(settings: ServiceSettings) -> Self {
        let catalog = Arc::new(mocks::InMemoryCatalog::new());
        let orders = Arc::new(mocks::InMemoryOrders::default());

        let product_read: Arc<dyn ProductReadRepository> = catalog.clone();
        let product_write: Arc<dyn ProductWriteRepository> = catalog.clone();
        let image_repo: Arc<dyn ProductImageRepository> = catalog.clone();
        let action_repo: Arc<dyn ActionLogRepository> = catalog.clone();
        let order_repo: Arc<dyn OrderReadRepository> = orders.clone();
        let authenticator: Arc<dyn AdminAuthenticator> = Arc::new(mocks::StaticTokenAuthenticator);
        let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);
        let ids: Arc<dyn IdGenerator> = Arc::new(mocks::SequentialIds::default());
        let slugger: Arc<dyn SlugGenerator> = Arc::new(mocks::DummySlug);

        let services = Arc::new(ApplicationServices::new(
            product_read,
            product_write,
            image_repo,
            action_repo,
            order_repo,
            authenticator,
            clock,
            ids,
            slugger,
            settings,
        ));

        Self {
            catalog,
            orders,
            services,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &RouterSettings::default())
    }
}

pub async fn make_test_router() -> axum::Router {
    TestContext::new().router()
}

pub fn bearer() -> String {
    format!("Bearer {}", mocks::TEST_TOKEN)
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Assert that a response is an `ErrorResponse` with the expected status, reason and code.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
    expected_code: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let json = body_json(resp).await;
    assert_eq!(json["error"], expected_error, "unexpected body: {json}");
    assert_eq!(json["code"], expected_code, "unexpected body: {json}");
    let message = json["message"].as_str().unwrap_or("");
    assert!(!message.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
