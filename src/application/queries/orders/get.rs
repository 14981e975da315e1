use super::OrderQueryService;
use crate::{
    application::{
        dto::OrderDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::order::OrderId,
};

impl OrderQueryService {
    pub async fn get_order(&self, id: &str) -> ApplicationResult<OrderDetailDto> {
        let id = OrderId::parse(id)?;
        let found = self
            .repo
            .find_with_items(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("order not found"))?;
        Ok(found.into())
    }
}
