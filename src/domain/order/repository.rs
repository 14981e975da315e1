use crate::domain::errors::DomainResult;
use crate::domain::order::entity::{
    Order, OrderDashboard, OrderId, OrderStatusStat, OrderWithItems,
};
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;

#[async_trait]
pub trait OrderReadRepository: Send + Sync {
    async fn list_page(&self, page: PageRequest) -> DomainResult<(Vec<Order>, u64)>;
    async fn find_with_items(&self, id: OrderId) -> DomainResult<Option<OrderWithItems>>;
    async fn dashboard(&self) -> DomainResult<OrderDashboard>;
    async fn stats_by_status(&self) -> DomainResult<Vec<OrderStatusStat>>;
}
