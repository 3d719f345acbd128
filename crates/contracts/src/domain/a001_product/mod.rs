pub mod aggregate;
pub mod sku;

pub use aggregate::{Product, ProductField, ProductId, ProductSort};
pub use sku::SkuIds;
