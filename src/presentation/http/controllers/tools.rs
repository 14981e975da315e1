// src/presentation/http/controllers/tools.rs
use crate::application::{
    commands::tools::{RestockCommand, UpdatePriceCommand},
    dto::{PriceChangeResultDto, RestockResultDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{AdminAuthenticated, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePriceRequest {
    pub product_id: String,
    pub new_price_cents: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestockRequest {
    pub product_id: String,
    pub quantity: i64,
}

#[utoipa::path(
    post,
    path = "/api/tools/update-price",
    request_body = UpdatePriceRequest,
    responses(
        (status = 200, description = "Price replaced; one executed action and its change were recorded.", body = PriceChangeResultDto),
        (status = 400, description = "Invalid product id or price.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Product not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent writes kept winning.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Tools"
)]
pub async fn update_price(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(admin): AdminAuthenticated,
    JsonBody(payload): JsonBody<UpdatePriceRequest>,
) -> HttpResult<Json<PriceChangeResultDto>> {
    tracing::debug!(actor = %admin.subject, product_id = %payload.product_id, "update_price requested");
    state
        .services
        .tool_commands
        .update_price(UpdatePriceCommand {
            product_id: payload.product_id,
            new_price_cents: payload.new_price_cents,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/tools/restock",
    request_body = RestockRequest,
    responses(
        (status = 200, description = "Stock increased; one executed action and its change were recorded.", body = RestockResultDto),
        (status = 400, description = "Invalid product id or quantity.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Product not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent writes kept winning.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Tools"
)]
pub async fn restock(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(admin): AdminAuthenticated,
    JsonBody(payload): JsonBody<RestockRequest>,
) -> HttpResult<Json<RestockResultDto>> {
    tracing::debug!(actor = %admin.subject, product_id = %payload.product_id, "restock requested");
    state
        .services
        .tool_commands
        .restock(RestockCommand {
            product_id: payload.product_id,
            quantity: payload.quantity,
        })
        .await
        .into_http()
        .map(Json)
}
