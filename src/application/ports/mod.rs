// src/application/ports/mod.rs
pub mod security;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type AdminAuthenticatorPort = dyn security::AdminAuthenticator;
pub type ClockPort = dyn time::Clock;
pub type IdGeneratorPort = dyn util::IdGenerator;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
