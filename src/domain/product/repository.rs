use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::product::entity::{NewProduct, Product, ProductSort, ProductUpdate};
use crate::domain::product::image::{NewProductImage, ProductImage};
use crate::domain::product::mutation::AuditedMutation;
use crate::domain::product::value_objects::{ProductId, ProductSlug, Sku};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ProductWriteRepository: Send + Sync {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product>;

    /// Fails with `Conflict` when the row's `updated_at` no longer matches
    /// `update.original_updated_at`.
    async fn update(&self, update: ProductUpdate) -> DomainResult<Product>;

    async fn deactivate(&self, id: ProductId, at: DateTime<Utc>) -> DomainResult<Product>;

    /// Write the governed field and insert the audit pair atomically.
    ///
    /// The write is a compare-and-swap against `planned.before`; a lost race
    /// yields `Conflict` and nothing is written. A missing product yields
    /// `NotFound`.
    async fn apply_audited(&self, mutation: AuditedMutation) -> DomainResult<Product>;
}

#[async_trait]
pub trait ProductReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn find_by_sku(&self, sku: &Sku) -> DomainResult<Option<Product>>;
    async fn find_by_slug(&self, slug: &ProductSlug) -> DomainResult<Option<Product>>;

    /// Returns the page of products and the total count matching the filter.
    async fn list_page(
        &self,
        active_only: bool,
        sort: ProductSort,
        page: PageRequest,
    ) -> DomainResult<(Vec<Product>, u64)>;

    async fn search_active(&self, query: &str, limit: u32) -> DomainResult<Vec<Product>>;

    /// Active products with stock strictly below `threshold`, lowest first.
    async fn low_stock(&self, threshold: i64) -> DomainResult<Vec<Product>>;
}

#[async_trait]
pub trait ProductImageRepository: Send + Sync {
    /// A missing product yields `NotFound`.
    async fn insert(&self, image: NewProductImage) -> DomainResult<ProductImage>;

    /// Images of one product by `sort_order`, then insertion time.
    async fn list_for_product(&self, product_id: ProductId) -> DomainResult<Vec<ProductImage>>;
}
