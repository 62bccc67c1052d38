//! Output formatting module

use tollgate_domain::model::TaxLedger;

pub fn total_vehicles_line(ledger: &TaxLedger) -> String {
    format!("Total Vehicles: {}", ledger.total_vehicles())
}

pub fn total_tax_collected_line(ledger: &TaxLedger, currency_symbol: &str) -> String {
    format!(
        "Total Tax Collected: {}",
        ledger.formatted_tax_collected(currency_symbol)
    )
}

pub fn tax_paying_line(ledger: &TaxLedger) -> String {
    format!("Total Tax Paying Vehicles: {}", ledger.total_tax_paying_vehicles())
}

pub fn non_tax_paying_line(ledger: &TaxLedger) -> String {
    format!(
        "Total Non-Tax Paying Vehicles: {}",
        ledger.total_non_tax_paying_vehicles()
    )
}
