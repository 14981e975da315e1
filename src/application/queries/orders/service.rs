use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::order::OrderReadRepository};

pub struct OrderQueryService {
    pub(super) repo: Arc<dyn OrderReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl OrderQueryService {
    pub fn new(repo: Arc<dyn OrderReadRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
