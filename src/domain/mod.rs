pub mod customer;
pub mod language;
pub mod loan;
pub mod offer;
pub mod ports;
