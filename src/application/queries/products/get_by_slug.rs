use super::ProductQueryService;
use crate::{
    application::{
        dto::{ProductDetailDto, ProductImageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::ProductSlug,
};

pub struct GetProductBySlugQuery {
    pub slug: String,
}

impl ProductQueryService {
    /// Inactive products are hidden from the storefront and reported as missing.
    pub async fn get_product_by_slug(
        &self,
        query: GetProductBySlugQuery,
    ) -> ApplicationResult<ProductDetailDto> {
        let slug = ProductSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("product not found"))?;
        let product = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|product| product.is_active)
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let images = self
            .image_repo
            .list_for_product(product.id)
            .await?
            .into_iter()
            .map(ProductImageDto::from)
            .collect();

        Ok(ProductDetailDto {
            product: product.into(),
            images,
        })
    }
}
