pub mod a001_product;
pub mod a002_vendor;
pub mod a003_category;
