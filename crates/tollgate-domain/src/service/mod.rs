//! Domain services

pub mod report;
pub mod toll_collector;

pub use report::{generate_ledger_report, generate_rate_table, CategoryCount};
pub use toll_collector::{pass_without_paying, pay_tax};
