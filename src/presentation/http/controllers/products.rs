// src/presentation/http/controllers/products.rs
use crate::application::{
    commands::products::{CreateProductCommand, DeactivateProductCommand, UpdateProductCommand},
    dto::{CartValidationDto, LowStockDto, Page, ProductDetailDto, ProductDto},
    queries::{
        cart::{CartLineInput, ValidateCartQuery},
        products::{
            GetProductBySlugQuery, ListAllProductsQuery, ListProductsQuery, LowStockQuery,
            SearchProductsQuery,
        },
    },
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
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// `newest` (default), `price_asc`, `price_desc` or `name_asc`.
    pub sort: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AdminProductListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LowStockParams {
    pub threshold: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CartLineRequest {
    pub sku: String,
    pub quantity: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateCartRequest {
    pub items: Vec<CartLineRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub slug: Option<String>,
    pub sku: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub compare_at_price_cents: Option<i64>,
    pub stock_quantity: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub sku: Option<String>,
    /// An empty string clears the description.
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub compare_at_price_cents: Option<i64>,
    pub stock_quantity: Option<i64>,
    pub is_active: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductListParams),
    responses(
        (status = 200, description = "Active products.", body = Page<ProductDto>),
        (status = 400, description = "Invalid paging.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ProductListParams>,
) -> HttpResult<Json<Page<ProductDto>>> {
    state
        .services
        .product_queries
        .list_products(ListProductsQuery {
            page: params.page,
            page_size: params.page_size,
            sort: params.sort,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/products/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Active products whose name matches.", body = [ProductDto])
    ),
    tag = "Products"
)]
pub async fn search_products(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<Vec<ProductDto>>> {
    state
        .services
        .product_queries
        .search_products(SearchProductsQuery { q: params.q })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/products/{slug}",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "The product with its images ordered by sort order.", body = ProductDetailDto),
        (status = 404, description = "No active product with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ProductDetailDto>> {
    state
        .services
        .product_queries
        .get_product_by_slug(GetProductBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/products/validate-cart",
    request_body = ValidateCartRequest,
    responses(
        (status = 200, description = "Per-line availability; shortfalls are reported in `errors`.", body = CartValidationDto),
        (status = 400, description = "Malformed cart.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn validate_cart(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ValidateCartRequest>,
) -> HttpResult<Json<CartValidationDto>> {
    let query = ValidateCartQuery {
        items: payload
            .items
            .into_iter()
            .map(|line| CartLineInput {
                sku: line.sku,
                quantity: line.quantity,
            })
            .collect(),
    };

    state
        .services
        .cart_queries
        .validate_cart(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/admin/products",
    params(AdminProductListParams),
    responses(
        (status = 200, description = "All products including inactive ones.", body = Page<ProductDto>),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn list_all_products(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    Query(params): Query<AdminProductListParams>,
) -> HttpResult<Json<Page<ProductDto>>> {
    state
        .services
        .product_queries
        .list_all_products(ListAllProductsQuery {
            page: params.page,
            page_size: params.page_size,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/admin/products/low-stock",
    params(LowStockParams),
    responses(
        (status = 200, description = "Active products below the threshold, lowest stock first.", body = LowStockDto),
        (status = 400, description = "Negative threshold.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn low_stock(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    Query(params): Query<LowStockParams>,
) -> HttpResult<Json<LowStockDto>> {
    state
        .services
        .product_queries
        .low_stock(LowStockQuery {
            threshold: params.threshold,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created.", body = ProductDto),
        (status = 400, description = "Invalid product.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "SKU or slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(admin): AdminAuthenticated,
    JsonBody(payload): JsonBody<CreateProductRequest>,
) -> HttpResult<(StatusCode, Json<ProductDto>)> {
    let command = CreateProductCommand {
        name: payload.name,
        slug: payload.slug,
        sku: payload.sku,
        description: payload.description,
        price_cents: payload.price_cents,
        compare_at_price_cents: payload.compare_at_price_cents,
        stock_quantity: payload.stock_quantity,
        is_active: payload.is_active,
    };

    let product = state
        .services
        .product_commands
        .create_product(&admin, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    params(("id" = String, Path, description = "Product id (UUID)")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated.", body = ProductDto),
        (status = 400, description = "Invalid or empty patch.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Product not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent edit or duplicate SKU/slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(admin): AdminAuthenticated,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateProductRequest>,
) -> HttpResult<Json<ProductDto>> {
    let command = UpdateProductCommand {
        id,
        name: payload.name,
        slug: payload.slug,
        sku: payload.sku,
        description: payload.description,
        price_cents: payload.price_cents,
        compare_at_price_cents: payload.compare_at_price_cents,
        stock_quantity: payload.stock_quantity,
        is_active: payload.is_active,
    };

    state
        .services
        .product_commands
        .update_product(&admin, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    params(("id" = String, Path, description = "Product id (UUID)")),
    responses(
        (status = 200, description = "Product deactivated.", body = ProductDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Product not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn deactivate_product(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(admin): AdminAuthenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_commands
        .deactivate_product(&admin, DeactivateProductCommand { id })
        .await
        .into_http()
        .map(Json)
}
