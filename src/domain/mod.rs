// src/domain/mod.rs
pub mod action;
pub mod cart;
pub mod errors;
pub mod order;
pub mod pagination;
pub mod product;
