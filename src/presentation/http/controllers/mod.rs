// src/presentation/http/controllers/mod.rs
pub mod actions;
pub mod media;
pub mod orders;
pub mod products;
pub mod tools;
