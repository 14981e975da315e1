// src/application/commands/actions/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::IdGenerator},
    domain::action::ActionLogRepository,
};

pub struct ActionCommandService {
    pub(super) repo: Arc<dyn ActionLogRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) ids: Arc<dyn IdGenerator>,
}

impl ActionCommandService {
    pub fn new(
        repo: Arc<dyn ActionLogRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { repo, clock, ids }
    }
}
