use std::sync::Arc;

use crate::domain::product::{ProductImageRepository, ProductReadRepository};

pub struct ProductQueryService {
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
    pub(super) image_repo: Arc<dyn ProductImageRepository>,
    pub(super) default_low_stock_threshold: i64,
}

impl ProductQueryService {
    pub fn new(
        read_repo: Arc<dyn ProductReadRepository>,
        image_repo: Arc<dyn ProductImageRepository>,
        default_low_stock_threshold: i64,
    ) -> Self {
        Self {
            read_repo,
            image_repo,
            default_low_stock_threshold,
        }
    }
}
