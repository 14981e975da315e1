// src/domain/product/entity.rs
use crate::domain::product::value_objects::{
    PriceCents, ProductId, ProductName, ProductSlug, Sku, StockQuantity,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub slug: ProductSlug,
    pub sku: Sku,
    pub description: Option<String>,
    pub price: PriceCents,
    pub compare_at_price: Option<PriceCents>,
    pub stock: StockQuantity,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: ProductName,
    pub slug: ProductSlug,
    pub sku: Sku,
    pub description: Option<String>,
    pub price: PriceCents,
    pub compare_at_price: Option<PriceCents>,
    pub stock: StockQuantity,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Partial admin edit of a product.
///
/// `original_updated_at` is the timestamp the caller read; the write only
/// applies if the stored row still carries it.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub name: Option<ProductName>,
    pub slug: Option<ProductSlug>,
    pub sku: Option<Sku>,
    pub description: Option<Option<String>>,
    pub price: Option<PriceCents>,
    pub compare_at_price: Option<Option<PriceCents>>,
    pub stock: Option<StockQuantity>,
    pub is_active: Option<bool>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductUpdate {
    pub const fn new(
        id: ProductId,
        original_updated_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            sku: None,
            description: None,
            price: None,
            compare_at_price: None,
            stock: None,
            is_active: None,
            original_updated_at,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: ProductName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: ProductSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_sku(mut self, sku: Sku) -> Self {
        self.sku = Some(sku);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub const fn with_price(mut self, price: PriceCents) -> Self {
        self.price = Some(price);
        self
    }

    pub const fn with_compare_at_price(mut self, price: Option<PriceCents>) -> Self {
        self.compare_at_price = Some(price);
        self
    }

    pub const fn with_stock(mut self, stock: StockQuantity) -> Self {
        self.stock = Some(stock);
        self
    }

    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.slug.is_none()
            && self.sku.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.compare_at_price.is_none()
            && self.stock.is_none()
            && self.is_active.is_none()
    }

    /// Apply the edit to an in-memory copy of the product.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(slug) = &self.slug {
            product.slug = slug.clone();
        }
        if let Some(sku) = &self.sku {
            product.sku = sku.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(compare_at) = self.compare_at_price {
            product.compare_at_price = compare_at;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(is_active) = self.is_active {
            product.is_active = is_active;
        }
        product.updated_at = self.updated_at;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    NameAsc,
    /// Admin ordering; not selectable from the storefront.
    RecentlyUpdated,
}

impl ProductSort {
    /// Unknown sort keys fall back to newest first.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("price_asc") => Self::PriceAsc,
            Some("price_desc") => Self::PriceDesc,
            Some("name_asc") => Self::NameAsc,
            _ => Self::Newest,
        }
    }
}
