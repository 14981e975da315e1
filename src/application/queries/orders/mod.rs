mod get;
mod list;
mod service;
mod stats;

pub use list::ListOrdersQuery;
pub use service::OrderQueryService;
