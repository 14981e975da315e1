// src/application/commands/tools/mod.rs
//! Governed mutations invoked by AI agent tools.
//!
//! Every successful call writes the product and one executed action with a
//! single before/after change, all in the same transaction.
mod audited;
mod restock;
mod service;
mod update_price;

pub use restock::RestockCommand;
pub use service::ToolCommandService;
pub use update_price::UpdatePriceCommand;
