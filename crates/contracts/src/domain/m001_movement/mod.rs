pub mod aggregate;

pub use aggregate::MovementRecord;
