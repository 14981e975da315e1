// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            actions::ActionCommandService, media::MediaCommandService,
            products::ProductCommandService, tools::ToolCommandService,
        },
        dto::AdminPrincipal,
        ports::{
            security::AdminAuthenticator,
            time::Clock,
            util::{IdGenerator, SlugGenerator},
        },
        queries::{
            actions::ActionQueryService, cart::CartQueryService, orders::OrderQueryService,
            products::ProductQueryService,
        },
    },
    domain::{
        action::ActionLogRepository,
        order::OrderReadRepository,
        product::{ProductImageRepository, ProductReadRepository, ProductWriteRepository},
    },
};

/// Tunables that services read at construction time.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    pub tool_max_attempts: u32,
    pub low_stock_threshold: i64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            tool_max_attempts: 3,
            low_stock_threshold: 10,
        }
    }
}

pub struct ApplicationServices {
    pub product_queries: Arc<ProductQueryService>,
    pub cart_queries: Arc<CartQueryService>,
    pub action_queries: Arc<ActionQueryService>,
    pub order_queries: Arc<OrderQueryService>,
    pub product_commands: Arc<ProductCommandService>,
    pub tool_commands: Arc<ToolCommandService>,
    pub action_commands: Arc<ActionCommandService>,
    pub media_commands: Arc<MediaCommandService>,
    authenticator: Arc<dyn AdminAuthenticator>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product_read_repo: Arc<dyn ProductReadRepository>,
        product_write_repo: Arc<dyn ProductWriteRepository>,
        image_repo: Arc<dyn ProductImageRepository>,
        action_repo: Arc<dyn ActionLogRepository>,
        order_repo: Arc<dyn OrderReadRepository>,
        authenticator: Arc<dyn AdminAuthenticator>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        slugger: Arc<dyn SlugGenerator>,
        settings: ServiceSettings,
    ) -> Self {
        let product_queries = Arc::new(ProductQueryService::new(
            Arc::clone(&product_read_repo),
            Arc::clone(&image_repo),
            settings.low_stock_threshold,
        ));
        let cart_queries = Arc::new(CartQueryService::new(Arc::clone(&product_read_repo)));
        let action_queries = Arc::new(ActionQueryService::new(Arc::clone(&action_repo)));
        let order_queries = Arc::new(OrderQueryService::new(order_repo, Arc::clone(&clock)));

        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&product_write_repo),
            Arc::clone(&product_read_repo),
            slugger,
            Arc::clone(&ids),
            Arc::clone(&clock),
        ));
        let tool_commands = Arc::new(
            ToolCommandService::new(
                Arc::clone(&product_read_repo),
                Arc::clone(&product_write_repo),
                Arc::clone(&clock),
                Arc::clone(&ids),
            )
            .with_max_attempts(settings.tool_max_attempts),
        );
        let media_commands = Arc::new(MediaCommandService::new(
            image_repo,
            Arc::clone(&product_read_repo),
            Arc::clone(&ids),
            Arc::clone(&clock),
        ));
        let action_commands = Arc::new(ActionCommandService::new(action_repo, clock, ids));

        Self {
            product_queries,
            cart_queries,
            action_queries,
            order_queries,
            product_commands,
            tool_commands,
            action_commands,
            media_commands,
            authenticator,
        }
    }

    pub fn authenticator(&self) -> Arc<dyn AdminAuthenticator> {
        Arc::clone(&self.authenticator)
    }

    /// Verify a raw bearer token presented on an admin or tool route.
    pub fn authenticate_admin(&self, token: &str) -> ApplicationResult<AdminPrincipal> {
        self.authenticator.authenticate(token)
    }
}
