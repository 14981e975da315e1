// src/domain/cart/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::{ProductId, Quantity, Sku};

/// A requested line. The SKU is kept exactly as the client sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub sku: String,
    pub quantity: Quantity,
}

impl CartLine {
    /// The catalog key this line can match, if any.
    ///
    /// A SKU that could never be stored (padded or over-long) matches
    /// nothing and is reported as not found.
    pub fn lookup_key(&self) -> Option<Sku> {
        Sku::exact(&self.sku)
    }
}

/// A non-empty, fully validated list of cart lines in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRequest {
    lines: Vec<CartLine>,
}

impl CartRequest {
    /// Validate raw `(sku, quantity)` pairs, reporting every offending field.
    pub fn from_raw<I, S>(raw: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut lines = Vec::new();
        let mut problems = Vec::new();

        for (index, (sku, quantity)) in raw.into_iter().enumerate() {
            let sku: String = sku.into();
            let quantity = Quantity::new(quantity);
            let blank = sku.trim().is_empty();
            if blank {
                problems.push(format!("items[{index}].sku must not be blank"));
            }
            match quantity {
                Ok(quantity) if !blank => lines.push(CartLine { sku, quantity }),
                Ok(_) => {}
                Err(_) => {
                    problems.push(format!("items[{index}].quantity must be a positive integer"));
                }
            }
        }

        if !problems.is_empty() {
            return Err(DomainError::Validation(problems.join("; ")));
        }
        if lines.is_empty() {
            return Err(DomainError::validation("items must contain at least one line"));
        }
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }
}

/// Snapshot of a catalog product as seen while validating a cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCartLine {
    pub sku: Sku,
    pub available: i64,
    pub unit_price_cents: i64,
    pub product_id: ProductId,
    pub product_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartValidation {
    pub items: Vec<ValidatedCartLine>,
    pub errors: Vec<String>,
}

impl CartValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
