use super::CartQueryService;
use crate::{
    application::{dto::CartValidationDto, error::ApplicationResult},
    domain::cart::{CartRequest, CartValidationBuilder, evaluate_line},
};

pub struct CartLineInput {
    pub sku: String,
    pub quantity: i64,
}

pub struct ValidateCartQuery {
    pub items: Vec<CartLineInput>,
}

impl CartQueryService {
    /// Check every requested line against current stock and price.
    ///
    /// Unfulfillable lines are reported in the result, never as an error.
    /// Nothing is reserved: the answer only holds for the moment it was read.
    pub async fn validate_cart(&self, query: ValidateCartQuery) -> ApplicationResult<CartValidationDto> {
        let request = CartRequest::from_raw(
            query
                .items
                .into_iter()
                .map(|line| (line.sku, line.quantity)),
        )?;

        let mut builder = CartValidationBuilder::default();
        for line in request.lines() {
            let product = match line.lookup_key() {
                Some(sku) => self.read_repo.find_by_sku(&sku).await?,
                None => None,
            };
            builder.push(evaluate_line(line, product.as_ref()));
        }

        let result = builder.finish();
        tracing::debug!(
            lines = request.lines().len(),
            items = result.items.len(),
            errors = result.errors.len(),
            "cart validated"
        );
        Ok(result.into())
    }
}
