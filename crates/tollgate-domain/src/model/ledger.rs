//! Aggregate tax statistics for the session

use rust_decimal::Decimal;
use tollgate_types::format_currency;

/// Running counters for every vehicle seen at the toll point.
///
/// Counters only grow. `tax_paying + non_tax_paying <= total_vehicles`
/// holds at all times because a vehicle is counted on entry and settled
/// at most once afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxLedger {
    total_vehicles: u64,
    tax_paying: u64,
    non_tax_paying: u64,
    total_collected: Decimal,
}

impl TaxLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a newly admitted vehicle, whatever its tax outcome
    pub fn record_entry(&mut self) {
        self.total_vehicles += 1;
    }

    pub(crate) fn record_payment(&mut self, amount: Decimal) {
        self.total_collected += amount;
        self.tax_paying += 1;
    }

    pub(crate) fn record_pass(&mut self) {
        self.non_tax_paying += 1;
    }

    pub fn total_vehicles(&self) -> u64 {
        self.total_vehicles
    }

    pub fn total_tax_collected(&self) -> Decimal {
        self.total_collected
    }

    pub fn total_tax_paying_vehicles(&self) -> u64 {
        self.tax_paying
    }

    pub fn total_non_tax_paying_vehicles(&self) -> u64 {
        self.non_tax_paying
    }

    /// Vehicles admitted but not yet settled either way
    pub fn pending_vehicles(&self) -> u64 {
        self.summary().pending()
    }

    /// Total collected rendered as currency
    pub fn formatted_tax_collected(&self, currency_symbol: &str) -> String {
        format_currency(self.total_collected, currency_symbol)
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            total_vehicles: self.total_vehicles,
            tax_paying: self.tax_paying,
            non_tax_paying: self.non_tax_paying,
            total_collected: self.total_collected,
        }
    }
}

/// Point-in-time copy of the ledger counters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerSummary {
    pub total_vehicles: u64,
    pub tax_paying: u64,
    pub non_tax_paying: u64,
    pub total_collected: Decimal,
}

impl LedgerSummary {
    /// Admitted but unsettled vehicles, zero if the counters are inconsistent
    pub fn pending(&self) -> u64 {
        self.total_vehicles
            .saturating_sub(self.tax_paying)
            .saturating_sub(self.non_tax_paying)
    }
}
