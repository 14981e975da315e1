// src/application/commands/products/create.rs
use super::ProductCommandService;
use crate::{
    application::{
        dto::{AdminPrincipal, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::{
        NewProduct, PriceCents, ProductId, ProductName, ProductSlug, Sku, StockQuantity,
    },
};

pub struct CreateProductCommand {
    pub name: String,
    pub slug: Option<String>,
    pub sku: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub compare_at_price_cents: Option<i64>,
    pub stock_quantity: Option<i64>,
    pub is_active: Option<bool>,
}

impl ProductCommandService {
    pub async fn create_product(
        &self,
        actor: &AdminPrincipal,
        command: CreateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let name = ProductName::new(command.name)?;
        let slug = match command.slug {
            Some(slug) => ProductSlug::new(slug)?,
            None => ProductSlug::new(self.slugger.slugify(name.as_str())).map_err(|_| {
                ApplicationError::validation("slug could not be derived from name; provide one")
            })?,
        };
        let sku = Sku::new(command.sku)?;
        let price = PriceCents::new(command.price_cents)
            .map_err(|_| ApplicationError::validation("priceCents must be a positive integer"))?;
        let compare_at_price = command
            .compare_at_price_cents
            .map(PriceCents::new)
            .transpose()
            .map_err(|_| {
                ApplicationError::validation("compareAtPriceCents must be a positive integer")
            })?;
        let stock = StockQuantity::new(command.stock_quantity.unwrap_or(0)).map_err(|_| {
            ApplicationError::validation("stockQuantity must be a non-negative integer")
        })?;
        let description = command.description.filter(|d| !d.trim().is_empty());

        let new_product = NewProduct {
            id: ProductId::new(self.ids.next_id()),
            name,
            slug,
            sku,
            description,
            price,
            compare_at_price,
            stock,
            is_active: command.is_active.unwrap_or(true),
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_product).await?;
        tracing::info!(
            actor = %actor.subject,
            product_id = %created.id,
            sku = %created.sku,
            "product created"
        );
        Ok(created.into())
    }
}
