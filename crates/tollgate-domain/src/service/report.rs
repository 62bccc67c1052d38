//! Plain-text ledger report

use tollgate_types::{format_currency, VehicleCategory};

use crate::model::{LedgerSummary, Vehicle};

/// Number of vehicles admitted for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: VehicleCategory,
    pub count: usize,
}

/// Generate a summary report of the session
///
/// Contains the four ledger counters, the pending count, a per-category
/// breakdown and one line per admitted vehicle.
pub fn generate_ledger_report(
    summary: &LedgerSummary,
    breakdown: &[CategoryCount],
    vehicles: &[Vehicle],
    currency_symbol: &str,
) -> String {
    let pending = summary.pending();

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("  Toll Ledger Report\n");
    report.push_str("==================================================\n\n");

    report.push_str(&format!("Total Vehicles:                {}\n", summary.total_vehicles));
    report.push_str(&format!(
        "Total Tax Collected:           {}\n",
        format_currency(summary.total_collected, currency_symbol)
    ));
    report.push_str(&format!("Total Tax Paying Vehicles:     {}\n", summary.tax_paying));
    report.push_str(&format!("Total Non-Tax Paying Vehicles: {}\n", summary.non_tax_paying));
    if pending > 0 {
        report.push_str(&format!("Pending Vehicles:              {}\n", pending));
    }

    if !breakdown.is_empty() {
        report.push_str("\n--------------------------------------------------\n");
        report.push_str("By category:\n");
        for entry in breakdown {
            report.push_str(&format!("  {:<15} {}\n", entry.category.label(), entry.count));
        }
    }

    if !vehicles.is_empty() {
        report.push_str("\n--------------------------------------------------\n");
        report.push_str("Vehicles:\n");
        for vehicle in vehicles {
            report.push_str(&format!("  {}\n", vehicle));
        }
    }

    report.push_str("==================================================\n");
    report
}

/// Flat tax table, one category per line
pub fn generate_rate_table(currency_symbol: &str) -> String {
    VehicleCategory::ALL
        .iter()
        .map(|c| format!("{:<15} {}\n", c.label(), format_currency(c.flat_tax(), currency_symbol)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TaxLedger, VehicleDetails};
    use crate::service::pay_tax;
    use rust_decimal::Decimal;

    #[test]
    fn test_generate_report() {
        let summary = LedgerSummary {
            total_vehicles: 3,
            tax_paying: 2,
            non_tax_paying: 0,
            total_collected: Decimal::new(6, 0),
        };
        let breakdown = [
            CategoryCount { category: VehicleCategory::Car, count: 2 },
            CategoryCount { category: VehicleCategory::HeavyVehicle, count: 1 },
        ];
        let report = generate_ledger_report(&summary, &breakdown, &[], "$");
        assert!(report.contains("Toll Ledger Report"));
        assert!(report.contains("Total Tax Collected:           $6.00"));
        assert!(report.contains("Pending Vehicles:              1"));
        assert!(report.contains("Heavy Vehicle"));
    }

    #[test]
    fn test_report_omits_pending_when_all_settled() {
        let summary = LedgerSummary {
            total_vehicles: 1,
            tax_paying: 0,
            non_tax_paying: 1,
            total_collected: Decimal::ZERO,
        };
        let report = generate_ledger_report(&summary, &[], &[], "$");
        assert!(!report.contains("Pending"));
        assert!(!report.contains("By category"));
        assert!(!report.contains("\nVehicles:\n"));
        assert!(report.contains("Total Non-Tax Paying Vehicles: 1"));
    }

    #[test]
    fn test_report_survives_inconsistent_summary() {
        let summary = LedgerSummary {
            total_vehicles: 0,
            tax_paying: 1,
            non_tax_paying: 0,
            total_collected: Decimal::new(2, 0),
        };
        let report = generate_ledger_report(&summary, &[], &[], "$");
        assert!(!report.contains("Pending"));
        assert!(report.contains("Total Tax Paying Vehicles:     1"));
    }

    #[test]
    fn test_report_lists_vehicles_with_entry_time() {
        let mut ledger = TaxLedger::new();
        let mut car = Vehicle::new(
            1,
            VehicleCategory::Car,
            VehicleDetails::new("ABC1", "X", "Y", Decimal::new(10000, 0)),
        );
        ledger.record_entry();
        pay_tax(&mut car, &mut ledger).unwrap();
        let bike = Vehicle::new(
            2,
            VehicleCategory::Bike,
            VehicleDetails::new("B1", "M", "N", Decimal::new(800, 0)),
        );
        ledger.record_entry();

        let vehicles = [car, bike];
        let report = generate_ledger_report(&ledger.summary(), &[], &vehicles, "$");
        assert!(report.contains("\nVehicles:\n"));
        assert!(report.contains(&format!(
            "  #1 Car ABC1 Y X (paid) entered {}",
            vehicles[0].entered_at.format("%H:%M:%S")
        )));
        assert!(report.contains("  #2 Bike B1 N M (pending) entered"));
    }

    #[test]
    fn test_rate_table() {
        let table = generate_rate_table("$");
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("Car             $2.00"));
        assert!(table.contains("Bike            $1.00"));
        assert!(table.contains("Heavy Vehicle   $4.00"));
    }
}
