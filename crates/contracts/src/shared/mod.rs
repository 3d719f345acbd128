pub mod config;
pub mod csv;
pub mod layout;
pub mod navigation;
