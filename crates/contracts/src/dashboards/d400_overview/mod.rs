//! Static analytics overview shown after login

pub mod chart;
pub mod data;

pub use chart::{ChartGeometry, ChartPoint};
pub use data::{Kpi, PendingVendor, SalesPoint, TopProduct};
