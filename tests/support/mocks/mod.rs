// tests/support/mocks/mod.rs
pub mod catalog;
pub mod orders;
pub mod security;
pub mod time;
pub mod util;

pub use catalog::InMemoryCatalog;
pub use orders::InMemoryOrders;
pub use security::{StaticTokenAuthenticator, TEST_TOKEN};
pub use time::fixed_now;
pub use util::{DummyClock, DummySlug, SequentialIds};
