// src/application/commands/tools/restock.rs
use super::ToolCommandService;
use crate::{
    application::{
        dto::{RestockChangeDto, RestockResultDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::{FieldMutation, ProductId, Quantity},
};

pub struct RestockCommand {
    pub product_id: String,
    pub quantity: i64,
}

impl ToolCommandService {
    /// Additive restock: the stored quantity grows by `quantity`.
    pub async fn restock(&self, command: RestockCommand) -> ApplicationResult<RestockResultDto> {
        let product_id = ProductId::parse(&command.product_id)?;
        let quantity = Quantity::new(command.quantity)
            .map_err(|_| ApplicationError::validation("quantity must be a positive integer"))?;

        let (planned, product) = self
            .execute_audited(product_id, FieldMutation::AddStock(quantity))
            .await?;

        Ok(RestockResultDto {
            product: product.into(),
            change: RestockChangeDto {
                old_quantity: planned.before,
                added_quantity: quantity.value(),
                new_quantity: planned.after,
            },
        })
    }
}
