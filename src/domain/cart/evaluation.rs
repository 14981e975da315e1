use crate::domain::cart::entity::{CartLine, CartValidation, ValidatedCartLine};
use crate::domain::product::Product;

/// What a single cart line contributes to the validation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Missing { error: String },
    Unavailable { error: String },
    Short { line: ValidatedCartLine, error: String },
    Ok(ValidatedCartLine),
}

/// Check one requested line against the product found for its SKU, if any.
pub fn evaluate_line(line: &CartLine, product: Option<&Product>) -> LineOutcome {
    let Some(product) = product else {
        return LineOutcome::Missing {
            error: format!("Product with SKU {} not found", line.sku),
        };
    };

    if !product.is_active {
        return LineOutcome::Unavailable {
            error: format!("Product {} is not available", product.name),
        };
    }

    let validated = ValidatedCartLine {
        sku: product.sku.clone(),
        available: product.stock.value(),
        unit_price_cents: product.price.value(),
        product_id: product.id,
        product_name: product.name.as_str().to_string(),
    };

    if product.stock.covers(line.quantity) {
        LineOutcome::Ok(validated)
    } else {
        LineOutcome::Short {
            error: format!(
                "Insufficient stock for {}. Available: {}",
                product.name, product.stock
            ),
            line: validated,
        }
    }
}

/// Accumulates line outcomes in request order.
#[derive(Debug, Default)]
pub struct CartValidationBuilder {
    items: Vec<ValidatedCartLine>,
    errors: Vec<String>,
}

impl CartValidationBuilder {
    pub fn push(&mut self, outcome: LineOutcome) {
        match outcome {
            LineOutcome::Missing { error } | LineOutcome::Unavailable { error } => {
                self.errors.push(error);
            }
            LineOutcome::Short { line, error } => {
                self.items.push(line);
                self.errors.push(error);
            }
            LineOutcome::Ok(line) => self.items.push(line),
        }
    }

    pub fn finish(self) -> CartValidation {
        CartValidation {
            items: self.items,
            errors: self.errors,
        }
    }
}
