mod service;
mod validate;

pub use service::CartQueryService;
pub use validate::{CartLineInput, ValidateCartQuery};
