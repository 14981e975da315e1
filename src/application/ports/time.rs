// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now". Mutations read it once per call.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
