use crate::domain::product::{Product, ProductImage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub sku: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_cents: i64,
    #[serde(default)]
    pub compare_at_price_cents: Option<i64>,
    pub stock_quantity: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            name: product.name.into_inner(),
            slug: product.slug.into_inner(),
            sku: product.sku.into_inner(),
            description: product.description,
            price_cents: product.price.value(),
            compare_at_price_cents: product.compare_at_price.map(|p| p.value()),
            stock_quantity: product.stock.value(),
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductImageDto {
    pub id: Uuid,
    pub product_id: Uuid,
    pub url: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ProductImage> for ProductImageDto {
    fn from(image: ProductImage) -> Self {
        Self {
            id: image.id.into(),
            product_id: image.product_id.into(),
            url: image.url.into_inner(),
            sort_order: image.sort_order.value(),
            created_at: image.created_at,
        }
    }
}

/// Storefront product page: the product fields plus its ordered images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailDto {
    #[serde(flatten)]
    pub product: ProductDto,
    pub images: Vec<ProductImageDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LowStockDto {
    pub items: Vec<ProductDto>,
    pub threshold: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceChangeDto {
    pub old_price_cents: i64,
    pub new_price_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PriceChangeResultDto {
    pub product: ProductDto,
    pub change: PriceChangeDto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestockChangeDto {
    pub old_quantity: i64,
    pub added_quantity: i64,
    pub new_quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestockResultDto {
    pub product: ProductDto,
    pub change: RestockChangeDto,
}
