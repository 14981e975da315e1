// src/presentation/http/controllers/actions.rs
use crate::application::{
    commands::actions::{CreateActionCommand, TransitionActionCommand},
    dto::{ActionDetailDto, ActionLogDto, CursorPage},
    queries::actions::ListActionsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{AdminAuthenticated, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActionListParams {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateActionRequest {
    /// `human` or `ai`.
    pub actor_type: String,
    pub actor_id: Option<String>,
    /// `web`, `telegram` or `slack`.
    pub channel: String,
    pub intent: String,
    pub prompt: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub tool_calls: Option<Value>,
    /// Initial status; `proposed` when omitted.
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ActionStatusRequest {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/api/actions",
    params(ActionListParams),
    responses(
        (status = 200, description = "Actions, newest first.", body = CursorPage<ActionLogDto>),
        (status = 400, description = "Invalid cursor.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Actions"
)]
pub async fn list_actions(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    Query(params): Query<ActionListParams>,
) -> HttpResult<Json<CursorPage<ActionLogDto>>> {
    state
        .services
        .action_queries
        .list_actions(ListActionsQuery {
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/actions/{id}",
    params(("id" = String, Path, description = "Action id (UUID)")),
    responses(
        (status = 200, description = "The action and its recorded changes.", body = ActionDetailDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Action not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Actions"
)]
pub async fn get_action(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ActionDetailDto>> {
    state
        .services
        .action_queries
        .get_action(&id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/actions",
    request_body = CreateActionRequest,
    responses(
        (status = 201, description = "Action recorded.", body = ActionLogDto),
        (status = 400, description = "Invalid action.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Actions"
)]
pub async fn create_action(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    JsonBody(payload): JsonBody<CreateActionRequest>,
) -> HttpResult<(StatusCode, Json<ActionLogDto>)> {
    let command = CreateActionCommand {
        actor_type: payload.actor_type,
        actor_id: payload.actor_id,
        channel: payload.channel,
        intent: payload.intent,
        prompt: payload.prompt,
        tool_calls: payload.tool_calls,
        status: payload.status,
    };

    let action = state
        .services
        .action_commands
        .create_action(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(action)))
}

#[utoipa::path(
    patch,
    path = "/api/actions/{id}/status",
    params(("id" = String, Path, description = "Action id (UUID)")),
    request_body = ActionStatusRequest,
    responses(
        (status = 200, description = "Status changed.", body = ActionLogDto),
        (status = 400, description = "Unknown status.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Action not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Transition not allowed from the current status.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Actions"
)]
pub async fn transition_action(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ActionStatusRequest>,
) -> HttpResult<Json<ActionLogDto>> {
    state
        .services
        .action_commands
        .transition_action(TransitionActionCommand {
            id,
            status: payload.status,
        })
        .await
        .into_http()
        .map(Json)
}
