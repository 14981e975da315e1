// src/infrastructure/util.rs
use crate::application::ports::util::{IdGenerator, SlugGenerator};
use slug::slugify;
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// Random v4 identifiers for products, actions and changes.
#[derive(Default, Clone)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
