use super::OrderQueryService;
use crate::{
    application::{
        dto::{OrderDto, Page},
        error::ApplicationResult,
    },
    domain::pagination::PageRequest,
};

pub struct ListOrdersQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl OrderQueryService {
    pub async fn list_orders(&self, query: ListOrdersQuery) -> ApplicationResult<Page<OrderDto>> {
        let page = PageRequest::new(query.page, query.page_size)?;
        let (records, total) = self.repo.list_page(page).await?;
        Ok(Page {
            items: records.into_iter().map(Into::into).collect(),
            page: page.page,
            page_size: page.page_size,
            total,
        })
    }
}
