// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Per-client-IP token bucket for the public storefront routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub per_second: u32,
    pub burst: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            per_second: 10,
            burst: 20,
        }
    }
}

impl RateLimitSettings {
    /// Interval between replenished requests.
    fn replenish_interval_ms(self) -> u64 {
        (1000 / u64::from(self.per_second.max(1))).max(1)
    }
}

/// Returns `None` when the settings cannot form a valid limiter.
pub fn rate_limit_layer(
    settings: RateLimitSettings,
) -> Option<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(settings.replenish_interval_ms());
    builder.burst_size(settings.burst.max(1));
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
