use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use storefront_core::presentation::http::openapi::{ApiDoc, docs_router};
use tower::ServiceExt; // for oneshot
use utoipa::OpenApi;

mod support;

#[tokio::test]
async fn docs_router_serves_openapi_json() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = support::body_json(resp).await;
    assert!(json["paths"]["/api/tools/restock"]["post"].is_object());
    assert!(json["components"]["securitySchemes"]["bearerAuth"].is_object());
}

#[tokio::test]
async fn full_router_exposes_docs() {
    let app = support::make_test_router().await;

    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[test]
fn every_route_is_documented() {
    let doc = ApiDoc::openapi();
    for path in [
        "/api/health",
        "/api/products",
        "/api/products/search",
        "/api/products/validate-cart",
        "/api/products/{slug}",
        "/api/admin/products",
        "/api/admin/products/low-stock",
        "/api/admin/products/{id}",
        "/api/tools/update-price",
        "/api/tools/restock",
        "/api/media/commit",
        "/api/actions",
        "/api/actions/{id}",
        "/api/actions/{id}/status",
        "/api/orders",
        "/api/orders/dashboard",
        "/api/orders/stats",
        "/api/orders/{id}",
    ] {
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
