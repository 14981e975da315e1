// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::products::list_products,
        crate::presentation::http::controllers::products::search_products,
        crate::presentation::http::controllers::products::get_product_by_slug,
        crate::presentation::http::controllers::products::validate_cart,
        crate::presentation::http::controllers::products::list_all_products,
        crate::presentation::http::controllers::products::low_stock,
        crate::presentation::http::controllers::products::create_product,
        crate::presentation::http::controllers::products::update_product,
        crate::presentation::http::controllers::products::deactivate_product,
        crate::presentation::http::controllers::tools::update_price,
        crate::presentation::http::controllers::tools::restock,
        crate::presentation::http::controllers::media::commit_media,
        crate::presentation::http::controllers::actions::list_actions,
        crate::presentation::http::controllers::actions::get_action,
        crate::presentation::http::controllers::actions::create_action,
        crate::presentation::http::controllers::actions::transition_action,
        crate::presentation::http::controllers::orders::list_orders,
        crate::presentation::http::controllers::orders::dashboard,
        crate::presentation::http::controllers::orders::stats,
        crate::presentation::http::controllers::orders::get_order
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::products::CartLineRequest,
            crate::presentation::http::controllers::products::ValidateCartRequest,
            crate::presentation::http::controllers::products::CreateProductRequest,
            crate::presentation::http::controllers::products::UpdateProductRequest,
            crate::presentation::http::controllers::tools::UpdatePriceRequest,
            crate::presentation::http::controllers::tools::RestockRequest,
            crate::presentation::http::controllers::media::CommitMediaRequest,
            crate::presentation::http::controllers::actions::CreateActionRequest,
            crate::presentation::http::controllers::actions::ActionStatusRequest,
            crate::application::dto::ProductDto,
            crate::application::dto::ProductImageDto,
            crate::application::dto::ProductDetailDto,
            crate::application::dto::LowStockDto,
            crate::application::dto::CartValidationDto,
            crate::application::dto::ValidatedCartLineDto,
            crate::application::dto::PriceChangeDto,
            crate::application::dto::PriceChangeResultDto,
            crate::application::dto::RestockChangeDto,
            crate::application::dto::RestockResultDto,
            crate::application::dto::ActionLogDto,
            crate::application::dto::ActionChangeDto,
            crate::application::dto::ActionDetailDto,
            crate::application::dto::OrderDto,
            crate::application::dto::OrderItemDto,
            crate::application::dto::OrderDetailDto,
            crate::application::dto::OrderDashboardDto,
            crate::application::dto::OrderStatusStatDto,
            crate::application::dto::OrderStatsDto
        )
    ),
    tags(
        (name = "Products", description = "Public storefront catalog and cart validation"),
        (name = "Admin", description = "Catalog administration"),
        (name = "Tools", description = "Audited mutations invoked by AI agents"),
        (name = "Media", description = "Product image metadata"),
        (name = "Actions", description = "Agent action log"),
        (name = "Orders", description = "Order reporting"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Storefront Core API",
        description = "Storefront catalog, cart validation and audited agent tools",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            servers.push(Server::new("http://localhost:8080"));
        } else {
            servers.extend(urls.into_iter().map(Server::new));
        }
    }
}

pub fn docs_router() -> Router {
    // SwaggerUi serves its own copy of the document at /openapi.json.
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Path the snapshot binary writes to; `OPENAPI_SNAPSHOT_PATH` overrides it.
pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
