use crate::domain::cart::{CartValidation, ValidatedCartLine};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedCartLineDto {
    pub sku: String,
    pub available: i64,
    pub unit_price_cents: i64,
    pub product_id: Uuid,
    pub product_name: String,
}

impl From<ValidatedCartLine> for ValidatedCartLineDto {
    fn from(line: ValidatedCartLine) -> Self {
        Self {
            sku: line.sku.into_inner(),
            available: line.available,
            unit_price_cents: line.unit_price_cents,
            product_id: line.product_id.into(),
            product_name: line.product_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartValidationDto {
    pub is_valid: bool,
    pub items: Vec<ValidatedCartLineDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl From<CartValidation> for CartValidationDto {
    fn from(result: CartValidation) -> Self {
        let is_valid = result.is_valid();
        let errors = (!result.errors.is_empty()).then_some(result.errors);
        Self {
            is_valid,
            items: result.items.into_iter().map(Into::into).collect(),
            errors,
        }
    }
}
