//! Domain model types

pub mod ledger;
pub mod vehicle;

pub use ledger::{LedgerSummary, TaxLedger};
pub use vehicle::{Vehicle, VehicleDetails};
