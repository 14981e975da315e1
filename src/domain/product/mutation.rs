// src/domain/product/mutation.rs
use crate::domain::action::{NewActionChange, NewActionLog};
use crate::domain::errors::DomainResult;
use crate::domain::product::entity::Product;
use crate::domain::product::value_objects::{PriceCents, ProductId, Quantity, StockQuantity};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

/// Scalar product fields that agent tools are allowed to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GovernedField {
    PriceCents,
    StockQuantity,
}

impl GovernedField {
    /// Key used in the before/after audit documents.
    pub const fn key(self) -> &'static str {
        match self {
            Self::PriceCents => "priceCents",
            Self::StockQuantity => "stockQuantity",
        }
    }

    pub const fn read(self, product: &Product) -> i64 {
        match self {
            Self::PriceCents => product.price.value(),
            Self::StockQuantity => product.stock.value(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMutation {
    SetPrice(PriceCents),
    AddStock(Quantity),
}

impl FieldMutation {
    pub const fn field(self) -> GovernedField {
        match self {
            Self::SetPrice(_) => GovernedField::PriceCents,
            Self::AddStock(_) => GovernedField::StockQuantity,
        }
    }

    /// Operation name recorded as the action intent.
    pub const fn intent(self) -> &'static str {
        match self {
            Self::SetPrice(_) => "update_price",
            Self::AddStock(_) => "restock",
        }
    }

    /// Compute the after-value against the current state of `product`.
    pub fn plan(self, product: &Product) -> DomainResult<PlannedMutation> {
        let field = self.field();
        let before = field.read(product);
        let after = match self {
            Self::SetPrice(price) => price.value(),
            Self::AddStock(delta) => product.stock.add(delta)?.value(),
        };

        Ok(PlannedMutation {
            product_id: product.id,
            field,
            before,
            after,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMutation {
    pub product_id: ProductId,
    pub field: GovernedField,
    pub before: i64,
    pub after: i64,
}

impl PlannedMutation {
    pub fn before_json(&self) -> Value {
        json!({ self.field.key(): self.before })
    }

    pub fn after_json(&self) -> Value {
        json!({ self.field.key(): self.after })
    }

    /// True when `product` still holds the value this plan was computed from.
    pub const fn matches(&self, product: &Product) -> bool {
        self.field.read(product) == self.before
    }

    pub fn apply_to(&self, product: &mut Product, at: DateTime<Utc>) -> DomainResult<()> {
        match self.field {
            GovernedField::PriceCents => product.price = PriceCents::new(self.after)?,
            GovernedField::StockQuantity => product.stock = StockQuantity::new(self.after)?,
        }
        product.updated_at = at;
        Ok(())
    }
}

/// A governed-field write together with the audit pair that must commit with it.
#[derive(Debug, Clone)]
pub struct AuditedMutation {
    pub planned: PlannedMutation,
    pub updated_at: DateTime<Utc>,
    pub action: NewActionLog,
    pub change: NewActionChange,
}
