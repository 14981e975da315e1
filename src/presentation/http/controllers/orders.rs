// src/presentation/http/controllers/orders.rs
use crate::application::{
    dto::{OrderDashboardDto, OrderDetailDto, OrderDto, OrderStatsDto, Page},
    queries::orders::ListOrdersQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OrderListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(OrderListParams),
    responses(
        (status = 200, description = "Orders, newest first.", body = Page<OrderDto>),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Orders"
)]
pub async fn list_orders(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    Query(params): Query<OrderListParams>,
) -> HttpResult<Json<Page<OrderDto>>> {
    state
        .services
        .order_queries
        .list_orders(ListOrdersQuery {
            page: params.page,
            page_size: params.page_size,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/orders/dashboard",
    responses(
        (status = 200, description = "Order totals and paid revenue.", body = OrderDashboardDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Orders"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
) -> HttpResult<Json<OrderDashboardDto>> {
    state
        .services
        .order_queries
        .dashboard()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/orders/stats",
    responses(
        (status = 200, description = "Order count and total per status.", body = OrderStatsDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Orders"
)]
pub async fn stats(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
) -> HttpResult<Json<OrderStatsDto>> {
    state
        .services
        .order_queries
        .stats()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = String, Path, description = "Order id (UUID)")),
    responses(
        (status = 200, description = "The order and its items.", body = OrderDetailDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Order not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<OrderDetailDto>> {
    state
        .services
        .order_queries
        .get_order(&id)
        .await
        .into_http()
        .map(Json)
}
