pub mod aggregate;

pub use aggregate::{Category, CategoryField, CategoryId};
