// src/application/commands/media/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::IdGenerator},
    domain::product::{ProductImageRepository, ProductReadRepository},
};

pub struct MediaCommandService {
    pub(super) image_repo: Arc<dyn ProductImageRepository>,
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
    pub(super) ids: Arc<dyn IdGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl MediaCommandService {
    pub fn new(
        image_repo: Arc<dyn ProductImageRepository>,
        read_repo: Arc<dyn ProductReadRepository>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            image_repo,
            read_repo,
            ids,
            clock,
        }
    }
}
