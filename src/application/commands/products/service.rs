// src/application/commands/products/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{
        time::Clock,
        util::{IdGenerator, SlugGenerator},
    },
    domain::product::{ProductReadRepository, ProductWriteRepository},
};

pub struct ProductCommandService {
    pub(super) write_repo: Arc<dyn ProductWriteRepository>,
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) ids: Arc<dyn IdGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProductCommandService {
    pub fn new(
        write_repo: Arc<dyn ProductWriteRepository>,
        read_repo: Arc<dyn ProductReadRepository>,
        slugger: Arc<dyn SlugGenerator>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slugger,
            ids,
            clock,
        }
    }
}
