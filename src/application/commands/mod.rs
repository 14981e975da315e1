pub mod actions;
pub mod media;
pub mod products;
pub mod tools;
