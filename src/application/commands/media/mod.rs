// src/application/commands/media/mod.rs
mod commit;
mod service;

pub use commit::CommitImageCommand;
pub use service::MediaCommandService;
