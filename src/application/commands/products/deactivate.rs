// src/application/commands/products/deactivate.rs
use super::ProductCommandService;
use crate::{
    application::{
        dto::{AdminPrincipal, ProductDto},
        error::ApplicationResult,
    },
    domain::product::ProductId,
};

pub struct DeactivateProductCommand {
    pub id: String,
}

impl ProductCommandService {
    /// Soft delete: the row stays, the product stops being sellable.
    pub async fn deactivate_product(
        &self,
        actor: &AdminPrincipal,
        command: DeactivateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let id = ProductId::parse(&command.id)?;
        let product = self.write_repo.deactivate(id, self.clock.now()).await?;
        tracing::info!(actor = %actor.subject, product_id = %product.id, "product deactivated");
        Ok(product.into())
    }
}
