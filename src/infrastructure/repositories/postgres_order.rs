// src/infrastructure/repositories/postgres_order.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::order::{
    Order, OrderDashboard, OrderId, OrderItem, OrderReadRepository, OrderStatusStat,
    OrderWithItems,
};
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const ORDER_COLUMNS: &str = "id, stripe_session_id, customer_email, customer_name, currency, \
     total_amount_cents, status, shipping_address, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct OrderRow {
    id: Uuid,
    stripe_session_id: Option<String>,
    customer_email: String,
    customer_name: Option<String>,
    currency: String,
    total_amount_cents: i64,
    status: String,
    shipping_address: Option<Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: OrderId::new(row.id),
            stripe_session_id: row.stripe_session_id,
            customer_email: row.customer_email,
            customer_name: row.customer_name,
            currency: row.currency,
            total_amount_cents: row.total_amount_cents,
            status: row.status.parse()?,
            shipping_address: row.shipping_address,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct OrderItemRow {
    id: Uuid,
    order_id: Uuid,
    product_id: Uuid,
    sku: String,
    product_name: String,
    quantity: i64,
    unit_price_cents: i64,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        Self {
            id: row.id,
            order_id: OrderId::new(row.order_id),
            product_id: row.product_id,
            sku: row.sku,
            product_name: row.product_name,
            quantity: row.quantity,
            unit_price_cents: row.unit_price_cents,
        }
    }
}

#[derive(Debug, FromRow)]
struct DashboardRow {
    total_orders: i64,
    paid_orders: i64,
    total_revenue_cents: i64,
}

#[derive(Debug, FromRow)]
struct StatusStatRow {
    status: String,
    count: i64,
    total_cents: i64,
}

fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

#[async_trait]
impl OrderReadRepository for PostgresOrderRepository {
    async fn list_page(&self, page: PageRequest) -> DomainResult<(Vec<Order>, u64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let orders = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(Order::try_from)
        .collect::<Result<Vec<_>, _>>()?;

        Ok((orders, to_count(total)))
    }

    async fn find_with_items(&self, id: OrderId) -> DomainResult<Option<OrderWithItems>> {
        let Some(row) = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, OrderItemRow>(
            "SELECT id, order_id, product_id, sku, product_name, quantity, unit_price_cents
             FROM order_items WHERE order_id = $1 ORDER BY id",
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(OrderItem::from)
        .collect();

        Ok(Some(OrderWithItems {
            order: Order::try_from(row)?,
            items,
        }))
    }

    async fn dashboard(&self) -> DomainResult<OrderDashboard> {
        let row = sqlx::query_as::<_, DashboardRow>(
            "SELECT COUNT(*) AS total_orders,
                    COUNT(*) FILTER (WHERE status = 'paid') AS paid_orders,
                    COALESCE(SUM(total_amount_cents) FILTER (WHERE status = 'paid'), 0)::BIGINT
                        AS total_revenue_cents
             FROM orders",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(OrderDashboard {
            total_orders: to_count(row.total_orders),
            paid_orders: to_count(row.paid_orders),
            total_revenue_cents: row.total_revenue_cents,
        })
    }

    async fn stats_by_status(&self) -> DomainResult<Vec<OrderStatusStat>> {
        let rows = sqlx::query_as::<_, StatusStatRow>(
            "SELECT status, COUNT(*) AS count,
                    COALESCE(SUM(total_amount_cents), 0)::BIGINT AS total_cents
             FROM orders GROUP BY status ORDER BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|row| OrderStatusStat {
                status: row.status,
                count: to_count(row.count),
                total_cents: row.total_cents,
            })
            .collect())
    }
}
