use super::ProductQueryService;
use crate::{
    application::{
        dto::{Page, ProductDto},
        error::ApplicationResult,
    },
    domain::{pagination::PageRequest, product::ProductSort},
};

pub struct ListProductsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort: Option<String>,
}

pub struct ListAllProductsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ProductQueryService {
    /// Storefront listing: active products only.
    pub async fn list_products(&self, query: ListProductsQuery) -> ApplicationResult<Page<ProductDto>> {
        let page = PageRequest::new(query.page, query.page_size)?;
        let sort = ProductSort::from_param(query.sort.as_deref());
        self.fetch_page(true, sort, page).await
    }

    /// Admin listing: every product, most recently edited first.
    pub async fn list_all_products(
        &self,
        query: ListAllProductsQuery,
    ) -> ApplicationResult<Page<ProductDto>> {
        let page = PageRequest::new(query.page, query.page_size)?;
        self.fetch_page(false, ProductSort::RecentlyUpdated, page).await
    }

    async fn fetch_page(
        &self,
        active_only: bool,
        sort: ProductSort,
        page: PageRequest,
    ) -> ApplicationResult<Page<ProductDto>> {
        let (records, total) = self.read_repo.list_page(active_only, sort, page).await?;
        Ok(Page {
            items: records.into_iter().map(Into::into).collect(),
            page: page.page,
            page_size: page.page_size,
            total,
        })
    }
}
