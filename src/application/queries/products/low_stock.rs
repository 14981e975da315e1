use super::ProductQueryService;
use crate::application::{
    dto::LowStockDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct LowStockQuery {
    pub threshold: Option<i64>,
}

impl ProductQueryService {
    pub async fn low_stock(&self, query: LowStockQuery) -> ApplicationResult<LowStockDto> {
        let threshold = query.threshold.unwrap_or(self.default_low_stock_threshold);
        if threshold < 0 {
            return Err(ApplicationError::validation(
                "threshold must be a non-negative integer",
            ));
        }

        let records = self.read_repo.low_stock(threshold).await?;
        Ok(LowStockDto {
            items: records.into_iter().map(Into::into).collect(),
            threshold,
        })
    }
}
