// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use storefront_core::application::ports::{
    time::Clock,
    util::{IdGenerator, SlugGenerator},
};
use uuid::Uuid;

#[derive(Clone)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Lowercases and replaces spaces with dashes.
#[derive(Clone)]
pub struct DummySlug;

impl SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        s.trim().to_lowercase().replace(' ', "-")
    }
}

/// Hands out `00000000-0000-0000-0000-000000000001`, `...02` and so on.
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> Uuid {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        Uuid::from_u128(u128::from(n))
    }
}
