// src/application/commands/products/mod.rs
mod create;
mod deactivate;
mod service;
mod update;

pub use create::CreateProductCommand;
pub use deactivate::DeactivateProductCommand;
pub use service::ProductCommandService;
pub use update::UpdateProductCommand;
