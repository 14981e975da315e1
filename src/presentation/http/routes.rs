// src/presentation/http/routes.rs
use crate::presentation::http::middleware::rate_limit::{RateLimitSettings, rate_limit_layer};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{actions, media, orders, products, tools},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, patch, post, put},
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

/// Router-level knobs that come from configuration rather than services.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub allowed_origins: Vec<String>,
    /// `None` disables rate limiting.
    pub rate_limit: Option<RateLimitSettings>,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:5173".into(),
                "http://localhost:3000".into(),
            ],
            rate_limit: None,
        }
    }
}

pub fn build_router(state: HttpState, settings: &RouterSettings) -> Router {
    let mut public = Router::new()
        .route("/api/products", get(products::list_products))
        .route("/api/products/search", get(products::search_products))
        .route("/api/products/validate-cart", post(products::validate_cart))
        .route("/api/products/{slug}", get(products::get_product_by_slug));

    if let Some(limits) = settings.rate_limit {
        match rate_limit_layer(limits) {
            Some(layer) => public = public.layer(layer),
            None => tracing::warn!(?limits, "invalid rate limit settings; limiter disabled"),
        }
    }

    let admin = Router::new()
        .route(
            "/api/admin/products",
            get(products::list_all_products).post(products::create_product),
        )
        .route("/api/admin/products/low-stock", get(products::low_stock))
        .route(
            "/api/admin/products/{id}",
            put(products::update_product).delete(products::deactivate_product),
        )
        .route("/api/tools/update-price", post(tools::update_price))
        .route("/api/tools/restock", post(tools::restock))
        .route("/api/media/commit", post(media::commit_media))
        .route(
            "/api/actions",
            get(actions::list_actions).post(actions::create_action),
        )
        .route("/api/actions/{id}", get(actions::get_action))
        .route("/api/actions/{id}/status", patch(actions::transition_action))
        .route("/api/orders", get(orders::list_orders))
        .route("/api/orders/dashboard", get(orders::dashboard))
        .route("/api/orders/stats", get(orders::stats))
        .route("/api/orders/{id}", get(orders::get_order));

    Router::new()
        .merge(openapi::docs_router())
        .route("/api/health", get(health))
        .merge(public)
        .merge(admin)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
