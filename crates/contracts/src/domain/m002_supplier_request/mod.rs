pub mod aggregate;

pub use aggregate::{CreateSupplierRequestDto, SupplierRequest, UpdateRequestStatusDto};
