// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_action_log;
mod postgres_order;
mod postgres_product;
mod postgres_product_image;

pub(crate) use error::map_sqlx;
pub use postgres_action_log::PostgresActionLogRepository;
pub use postgres_order::PostgresOrderRepository;
pub use postgres_product::{PostgresProductReadRepository, PostgresProductWriteRepository};
pub use postgres_product_image::PostgresProductImageRepository;
