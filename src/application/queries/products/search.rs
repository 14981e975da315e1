use super::ProductQueryService;
use crate::application::{dto::ProductDto, error::ApplicationResult};

const SEARCH_LIMIT: u32 = 20;

pub struct SearchProductsQuery {
    pub q: Option<String>,
}

impl ProductQueryService {
    pub async fn search_products(&self, query: SearchProductsQuery) -> ApplicationResult<Vec<ProductDto>> {
        let term = query.q.as_deref().map(str::trim).unwrap_or_default();
        let records = self.read_repo.search_active(term, SEARCH_LIMIT).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
