// src/infrastructure/repositories/postgres_product_image.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::{
    ImageUrl, NewProductImage, ProductId, ProductImage, ProductImageId, ProductImageRepository,
    SortOrder,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const IMAGE_COLUMNS: &str = "id, product_id, url, sort_order, created_at";

#[derive(Clone)]
pub struct PostgresProductImageRepository {
    pool: PgPool,
}

impl PostgresProductImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductImageRow {
    id: Uuid,
    product_id: Uuid,
    url: String,
    sort_order: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductImageRow> for ProductImage {
    type Error = DomainError;

    fn try_from(row: ProductImageRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductImageId::new(row.id),
            product_id: ProductId::new(row.product_id),
            url: ImageUrl::new(row.url)?,
            sort_order: SortOrder::new(i64::from(row.sort_order))?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ProductImageRepository for PostgresProductImageRepository {
    async fn insert(&self, image: NewProductImage) -> DomainResult<ProductImage> {
        let row = sqlx::query_as::<_, ProductImageRow>(&format!(
            "INSERT INTO product_images (id, product_id, url, sort_order, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {IMAGE_COLUMNS}"
        ))
        .bind(image.id.as_uuid())
        .bind(image.product_id.as_uuid())
        .bind(image.url.as_str())
        .bind(image.sort_order.value())
        .bind(image.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ProductImage::try_from(row)
    }

    async fn list_for_product(&self, product_id: ProductId) -> DomainResult<Vec<ProductImage>> {
        sqlx::query_as::<_, ProductImageRow>(&format!(
            "SELECT {IMAGE_COLUMNS} FROM product_images WHERE product_id = $1
             ORDER BY sort_order ASC, created_at ASC, id ASC"
        ))
        .bind(product_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(ProductImage::try_from)
        .collect()
    }
}
