use crate::domain::order::{Order, OrderDashboard, OrderItem, OrderStatusStat, OrderWithItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: Uuid,
    #[serde(default)]
    pub stripe_session_id: Option<String>,
    pub customer_email: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub currency: String,
    pub total_amount_cents: i64,
    pub status: String,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub shipping_address: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.as_uuid(),
            stripe_session_id: order.stripe_session_id,
            customer_email: order.customer_email,
            customer_name: order.customer_name,
            currency: order.currency,
            total_amount_cents: order.total_amount_cents,
            status: order.status.as_str().to_string(),
            shipping_address: order.shipping_address,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub sku: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

impl From<OrderItem> for OrderItemDto {
    fn from(item: OrderItem) -> Self {
        let line_total_cents = item.line_total_cents();
        Self {
            id: item.id,
            order_id: item.order_id.as_uuid(),
            product_id: item.product_id,
            sku: item.sku,
            product_name: item.product_name,
            quantity: item.quantity,
            unit_price_cents: item.unit_price_cents,
            line_total_cents,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailDto {
    #[serde(flatten)]
    pub order: OrderDto,
    pub items: Vec<OrderItemDto>,
}

impl From<OrderWithItems> for OrderDetailDto {
    fn from(value: OrderWithItems) -> Self {
        Self {
            order: value.order.into(),
            items: value.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDashboardDto {
    pub total_orders: u64,
    pub paid_orders: u64,
    pub total_revenue_cents: i64,
    pub timestamp: DateTime<Utc>,
}

impl OrderDashboardDto {
    pub const fn new(dashboard: OrderDashboard, timestamp: DateTime<Utc>) -> Self {
        Self {
            total_orders: dashboard.total_orders,
            paid_orders: dashboard.paid_orders,
            total_revenue_cents: dashboard.total_revenue_cents,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusStatDto {
    pub status: String,
    pub count: u64,
    pub total_cents: i64,
}

impl From<OrderStatusStat> for OrderStatusStatDto {
    fn from(stat: OrderStatusStat) -> Self {
        Self {
            status: stat.status,
            count: stat.count,
            total_cents: stat.total_cents,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatsDto {
    pub by_status: Vec<OrderStatusStatDto>,
    pub timestamp: DateTime<Utc>,
}
