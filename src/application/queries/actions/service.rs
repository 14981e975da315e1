use std::sync::Arc;

use crate::domain::action::ActionLogRepository;

pub struct ActionQueryService {
    pub(super) repo: Arc<dyn ActionLogRepository>,
}

impl ActionQueryService {
    pub fn new(repo: Arc<dyn ActionLogRepository>) -> Self {
        Self { repo }
    }
}
