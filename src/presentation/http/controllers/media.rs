// src/presentation/http/controllers/media.rs
use crate::application::{commands::media::CommitImageCommand, dto::ProductImageDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{AdminAuthenticated, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommitMediaRequest {
    pub product_id: String,
    pub url: String,
    #[serde(default)]
    pub sort_order: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/api/media/commit",
    request_body = CommitMediaRequest,
    responses(
        (status = 201, description = "Image attached to the product.", body = ProductImageDto),
        (status = 400, description = "Invalid product id, URL or sort order.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Product not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Media"
)]
pub async fn commit_media(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(admin): AdminAuthenticated,
    JsonBody(payload): JsonBody<CommitMediaRequest>,
) -> HttpResult<(StatusCode, Json<ProductImageDto>)> {
    let image = state
        .services
        .media_commands
        .commit_image(
            &admin,
            CommitImageCommand {
                product_id: payload.product_id,
                url: payload.url,
                sort_order: payload.sort_order,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(image)))
}
