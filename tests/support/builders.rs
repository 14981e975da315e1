// tests/support/builders.rs
use storefront_core::domain::product::{
    PriceCents, Product, ProductId, ProductName, ProductSlug, Sku, StockQuantity,
};
use uuid::Uuid;

use super::mocks::fixed_now;

pub struct ProductBuilder {
    id: Uuid,
    name: String,
    slug: Option<String>,
    sku: String,
    price_cents: i64,
    stock: i64,
    active: bool,
}

impl ProductBuilder {
    pub fn new(sku: impl Into<String>) -> Self {
        let sku = sku.into();
        Self {
            id: Uuid::new_v4(),
            name: format!("Product {sku}"),
            slug: None,
            sku,
            price_cents: 1000,
            stock: 10,
            active: true,
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn price(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn build(self) -> Product {
        let slug = self
            .slug
            .unwrap_or_else(|| self.name.to_lowercase().replace(' ', "-"));
        Product {
            id: ProductId::new(self.id),
            name: ProductName::new(self.name).unwrap(),
            slug: ProductSlug::new(slug).unwrap(),
            sku: Sku::new(self.sku).unwrap(),
            description: None,
            price: PriceCents::new(self.price_cents).unwrap(),
            compare_at_price: None,
            stock: StockQuantity::new(self.stock).unwrap(),
            is_active: self.active,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
