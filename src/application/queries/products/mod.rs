mod get_by_slug;
mod list;
mod low_stock;
mod search;
mod service;

pub use get_by_slug::GetProductBySlugQuery;
pub use list::{ListAllProductsQuery, ListProductsQuery};
pub use low_stock::LowStockQuery;
pub use search::SearchProductsQuery;
pub use service::ProductQueryService;
