// src/application/commands/tools/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::IdGenerator},
    domain::product::{ProductReadRepository, ProductWriteRepository},
};

pub(super) const DEFAULT_MAX_ATTEMPTS: u32 = 3;

pub struct ToolCommandService {
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
    pub(super) write_repo: Arc<dyn ProductWriteRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) ids: Arc<dyn IdGenerator>,
    pub(super) max_attempts: u32,
}

impl ToolCommandService {
    pub fn new(
        read_repo: Arc<dyn ProductReadRepository>,
        write_repo: Arc<dyn ProductWriteRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            clock,
            ids,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Attempts per call when the compare-and-swap loses a race. Zero is
    /// treated as one.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }
}
