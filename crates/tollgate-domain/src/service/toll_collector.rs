//! Settling a vehicle's toll against the ledger
//!
//! A vehicle is settled exactly once: either it pays the flat tax of its
//! category or it passes without paying. Both paths reject a vehicle that
//! has already been settled and leave the ledger untouched in that case.

use rust_decimal::Decimal;
use tollgate_types::{Error, Result, TaxStatus};

use crate::model::{TaxLedger, Vehicle};

/// Charge the category's flat tax and mark the vehicle as paid.
///
/// Returns the amount charged.
pub fn pay_tax(vehicle: &mut Vehicle, ledger: &mut TaxLedger) -> Result<Decimal> {
    ensure_pending(vehicle)?;

    let amount = vehicle.category().flat_tax();
    ledger.record_payment(amount);
    vehicle.settle(TaxStatus::Paid);

    tracing::debug!(
        vehicle_id = vehicle.id(),
        category = %vehicle.category(),
        amount = %amount,
        "tax paid"
    );
    Ok(amount)
}

/// Let the vehicle through without charging and count it as non-paying
pub fn pass_without_paying(vehicle: &mut Vehicle, ledger: &mut TaxLedger) -> Result<()> {
    ensure_pending(vehicle)?;

    ledger.record_pass();
    vehicle.settle(TaxStatus::Unpaid);

    tracing::debug!(
        vehicle_id = vehicle.id(),
        category = %vehicle.category(),
        "passed without paying"
    );
    Ok(())
}

fn ensure_pending(vehicle: &Vehicle) -> Result<()> {
    if vehicle.is_settled() {
        tracing::warn!(
            vehicle_id = vehicle.id(),
            status = vehicle.status().label(),
            "settlement rejected"
        );
        return Err(Error::AlreadySettled(vehicle.id()));
    }
    Ok(())
}
