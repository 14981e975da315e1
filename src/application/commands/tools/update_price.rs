// src/application/commands/tools/update_price.rs
use super::ToolCommandService;
use crate::{
    application::{
        dto::{PriceChangeDto, PriceChangeResultDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::{FieldMutation, PriceCents, ProductId},
};

pub struct UpdatePriceCommand {
    pub product_id: String,
    pub new_price_cents: i64,
}

impl ToolCommandService {
    pub async fn update_price(
        &self,
        command: UpdatePriceCommand,
    ) -> ApplicationResult<PriceChangeResultDto> {
        let product_id = ProductId::parse(&command.product_id)?;
        let price = PriceCents::new(command.new_price_cents).map_err(|_| {
            ApplicationError::validation("newPriceCents must be a positive integer")
        })?;

        let (planned, product) = self
            .execute_audited(product_id, FieldMutation::SetPrice(price))
            .await?;

        Ok(PriceChangeResultDto {
            product: product.into(),
            change: PriceChangeDto {
                old_price_cents: planned.before,
                new_price_cents: planned.after,
            },
        })
    }
}
