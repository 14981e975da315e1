// tests/support/mocks/orders.rs
use async_trait::async_trait;
use std::sync::Mutex;
use storefront_core::domain::{
    errors::DomainResult,
    order::{
        Order, OrderDashboard, OrderId, OrderItem, OrderReadRepository, OrderStatus,
        OrderStatusStat, OrderWithItems,
    },
    pagination::PageRequest,
};

#[derive(Default)]
pub struct InMemoryOrders {
    orders: Mutex<Vec<OrderWithItems>>,
}

impl InMemoryOrders {
    pub fn seed(&self, order: Order, items: Vec<OrderItem>) {
        self.orders
            .lock()
            .unwrap()
            .push(OrderWithItems { order, items });
    }
}

#[async_trait]
impl OrderReadRepository for InMemoryOrders {
    async fn list_page(&self, page: PageRequest) -> DomainResult<(Vec<Order>, u64)> {
        let orders = self.orders.lock().unwrap();
        let mut all: Vec<Order> = orders.iter().map(|o| o.order.clone()).collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((items, total))
    }

    async fn find_with_items(&self, id: OrderId) -> DomainResult<Option<OrderWithItems>> {
        let orders = self.orders.lock().unwrap();
        Ok(orders.iter().find(|o| o.order.id == id).cloned())
    }

    async fn dashboard(&self) -> DomainResult<OrderDashboard> {
        let orders = self.orders.lock().unwrap();
        let paid: Vec<&Order> = orders
            .iter()
            .map(|o| &o.order)
            .filter(|o| o.status == OrderStatus::Paid)
            .collect();
        Ok(OrderDashboard {
            total_orders: orders.len() as u64,
            paid_orders: paid.len() as u64,
            total_revenue_cents: paid.iter().map(|o| o.total_amount_cents).sum(),
        })
    }

    async fn stats_by_status(&self) -> DomainResult<Vec<OrderStatusStat>> {
        let orders = self.orders.lock().unwrap();
        let mut stats: Vec<OrderStatusStat> = Vec::new();
        for order in orders.iter().map(|o| &o.order) {
            let status = order.status.as_str();
            match stats.iter_mut().find(|s| s.status == status) {
                Some(stat) => {
                    stat.count += 1;
                    stat.total_cents += order.total_amount_cents;
                }
                None => stats.push(OrderStatusStat {
                    status: status.to_string(),
                    count: 1,
                    total_cents: order.total_amount_cents,
                }),
            }
        }
        stats.sort_by(|a, b| a.status.cmp(&b.status));
        Ok(stats)
    }
}
