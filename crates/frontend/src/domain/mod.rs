pub mod m001_movement;
pub mod m002_supplier_request;
pub mod m003_purchase_requisition;
