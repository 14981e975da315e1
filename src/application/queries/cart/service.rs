use std::sync::Arc;

use crate::domain::product::ProductReadRepository;

/// Read-only cart checks against the live catalog.
pub struct CartQueryService {
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
}

impl CartQueryService {
    pub fn new(read_repo: Arc<dyn ProductReadRepository>) -> Self {
        Self { read_repo }
    }
}
