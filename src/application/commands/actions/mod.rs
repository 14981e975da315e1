// src/application/commands/actions/mod.rs
mod create;
mod service;
mod transition;

pub use create::CreateActionCommand;
pub use service::ActionCommandService;
pub use transition::TransitionActionCommand;
