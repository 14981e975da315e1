pub mod entity;
pub mod evaluation;

pub use entity::{CartLine, CartRequest, CartValidation, ValidatedCartLine};
pub use evaluation::{CartValidationBuilder, LineOutcome, evaluate_line};
