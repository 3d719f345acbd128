pub mod aggregate;

pub use aggregate::{Vendor, VendorField, VendorId, VendorStatus};
