pub mod aggregate;

pub use aggregate::PurchaseRequisition;
