pub mod entity;
pub mod image;
pub mod mutation;
pub mod repository;
pub mod value_objects;

pub use entity::{NewProduct, Product, ProductSort, ProductUpdate};
pub use image::{ImageUrl, NewProductImage, ProductImage, ProductImageId, SortOrder};
pub use mutation::{AuditedMutation, FieldMutation, GovernedField, PlannedMutation};
pub use repository::{ProductImageRepository, ProductReadRepository, ProductWriteRepository};
pub use value_objects::{PriceCents, ProductId, ProductName, ProductSlug, Quantity, Sku, StockQuantity};
