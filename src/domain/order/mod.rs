pub mod entity;
pub mod repository;

pub use entity::{
    Order, OrderDashboard, OrderId, OrderItem, OrderStatus, OrderStatusStat, OrderWithItems,
};
pub use repository::OrderReadRepository;
