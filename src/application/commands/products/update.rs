// src/application/commands/products/update.rs
use super::ProductCommandService;
use crate::{
    application::{
        dto::{AdminPrincipal, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::{
        PriceCents, ProductId, ProductName, ProductSlug, ProductUpdate, Sku, StockQuantity,
    },
};

/// Partial product edit. An empty `description` clears it.
#[derive(Default)]
pub struct UpdateProductCommand {
    pub id: String,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub compare_at_price_cents: Option<i64>,
    pub stock_quantity: Option<i64>,
    pub is_active: Option<bool>,
}

struct ParsedFields {
    name: Option<ProductName>,
    slug: Option<ProductSlug>,
    sku: Option<Sku>,
    description: Option<Option<String>>,
    price: Option<PriceCents>,
    compare_at_price: Option<PriceCents>,
    stock: Option<StockQuantity>,
    is_active: Option<bool>,
}

impl ProductCommandService {
    pub async fn update_product(
        &self,
        actor: &AdminPrincipal,
        command: UpdateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let id = ProductId::parse(&command.id)?;
        let fields = parse_fields(command)?;

        let product = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let mut update = ProductUpdate::new(id, product.updated_at, self.clock.now());
        if let Some(name) = fields.name {
            update = update.with_name(name);
        }
        if let Some(slug) = fields.slug {
            update = update.with_slug(slug);
        }
        if let Some(sku) = fields.sku {
            update = update.with_sku(sku);
        }
        if let Some(description) = fields.description {
            update = update.with_description(description);
        }
        if let Some(price) = fields.price {
            update = update.with_price(price);
        }
        if let Some(compare_at) = fields.compare_at_price {
            update = update.with_compare_at_price(Some(compare_at));
        }
        if let Some(stock) = fields.stock {
            update = update.with_stock(stock);
        }
        if let Some(is_active) = fields.is_active {
            update = update.with_active(is_active);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(actor = %actor.subject, product_id = %updated.id, "product updated");
        Ok(updated.into())
    }
}

fn parse_fields(command: UpdateProductCommand) -> ApplicationResult<ParsedFields> {
    let fields = ParsedFields {
        name: command.name.map(ProductName::new).transpose()?,
        slug: command.slug.map(ProductSlug::new).transpose()?,
        sku: command.sku.map(Sku::new).transpose()?,
        description: command
            .description
            .map(|d| if d.trim().is_empty() { None } else { Some(d) }),
        price: command
            .price_cents
            .map(PriceCents::new)
            .transpose()
            .map_err(|_| ApplicationError::validation("priceCents must be a positive integer"))?,
        compare_at_price: command
            .compare_at_price_cents
            .map(PriceCents::new)
            .transpose()
            .map_err(|_| {
                ApplicationError::validation("compareAtPriceCents must be a positive integer")
            })?,
        stock: command
            .stock_quantity
            .map(StockQuantity::new)
            .transpose()
            .map_err(|_| {
                ApplicationError::validation("stockQuantity must be a non-negative integer")
            })?,
        is_active: command.is_active,
    };

    let empty = fields.name.is_none()
        && fields.slug.is_none()
        && fields.sku.is_none()
        && fields.description.is_none()
        && fields.price.is_none()
        && fields.compare_at_price.is_none()
        && fields.stock.is_none()
        && fields.is_active.is_none();
    if empty {
        return Err(ApplicationError::validation("no fields to update"));
    }

    Ok(fields)
}
