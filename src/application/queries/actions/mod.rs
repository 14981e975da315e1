mod get;
mod list;
mod service;

pub use list::ListActionsQuery;
pub use service::ActionQueryService;
