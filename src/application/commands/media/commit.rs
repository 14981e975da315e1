// src/application/commands/media/commit.rs
use super::MediaCommandService;
use crate::{
    application::{
        dto::{AdminPrincipal, ProductImageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::{ImageUrl, NewProductImage, ProductId, ProductImageId, SortOrder},
};

pub struct CommitImageCommand {
    pub product_id: String,
    pub url: String,
    pub sort_order: Option<i64>,
}

impl MediaCommandService {
    /// Attach an already uploaded image to a product.
    ///
    /// Only the metadata is stored; the file itself lives wherever `url`
    /// points. Inactive products accept images too.
    pub async fn commit_image(
        &self,
        actor: &AdminPrincipal,
        command: CommitImageCommand,
    ) -> ApplicationResult<ProductImageDto> {
        let product_id = ProductId::parse(&command.product_id)?;
        let url = ImageUrl::new(command.url)?;
        let sort_order = SortOrder::new(command.sort_order.unwrap_or(0))?;

        if self.read_repo.find_by_id(product_id).await?.is_none() {
            return Err(ApplicationError::not_found("product not found"));
        }

        let image = self
            .image_repo
            .insert(NewProductImage {
                id: ProductImageId::new(self.ids.next_id()),
                product_id,
                url,
                sort_order,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(
            actor = %actor.subject,
            product_id = %image.product_id,
            sort_order = image.sort_order.value(),
            "product image committed"
        );
        Ok(image.into())
    }
}
