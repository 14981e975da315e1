use super::OrderQueryService;
use crate::application::{
    dto::{OrderDashboardDto, OrderStatsDto},
    error::ApplicationResult,
};

impl OrderQueryService {
    pub async fn dashboard(&self) -> ApplicationResult<OrderDashboardDto> {
        let dashboard = self.repo.dashboard().await?;
        Ok(OrderDashboardDto::new(dashboard, self.clock.now()))
    }

    pub async fn stats(&self) -> ApplicationResult<OrderStatsDto> {
        let by_status = self
            .repo
            .stats_by_status()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(OrderStatsDto {
            by_status,
            timestamp: self.clock.now(),
        })
    }
}
