//! Toll booth use cases
//!
//! A `TollBooth` owns the session's registry and ledger. Every mutation of
//! the ledger goes through it, so callers hold one instance and pass it
//! down instead of sharing global counters.

use rust_decimal::Decimal;
use tollgate_domain::model::{LedgerSummary, TaxLedger, Vehicle, VehicleDetails};
use tollgate_domain::service::{self, generate_ledger_report, CategoryCount};
use tollgate_store::VehicleRegistry;
use tollgate_types::{Error, Result, VehicleCategory, VehicleId};

#[derive(Debug, Default)]
pub struct TollBooth {
    registry: VehicleRegistry,
    ledger: TaxLedger,
}

impl TollBooth {
    pub fn new() -> Self {
        Self {
            registry: VehicleRegistry::new(),
            ledger: TaxLedger::new(),
        }
    }

    /// Register a vehicle entering the toll point and count it
    pub fn admit(&mut self, category: VehicleCategory, details: VehicleDetails) -> VehicleId {
        let VehicleDetails {
            reg_no,
            model,
            brand,
            base_price,
        } = details;
        let id = self
            .registry
            .add_vehicle(category, reg_no, model, brand, base_price)
            .id();
        self.ledger.record_entry();
        tracing::info!(vehicle_id = id, category = %category, "vehicle admitted");
        id
    }

    /// Charge the flat tax for an admitted vehicle
    pub fn pay_tax(&mut self, id: VehicleId) -> Result<Decimal> {
        let vehicle = self
            .registry
            .get_mut(id)
            .ok_or_else(|| Error::VehicleNotFound(format!("#{}", id)))?;
        service::pay_tax(vehicle, &mut self.ledger)
    }

    /// Let an admitted vehicle pass without paying
    pub fn pass_without_paying(&mut self, id: VehicleId) -> Result<()> {
        let vehicle = self
            .registry
            .get_mut(id)
            .ok_or_else(|| Error::VehicleNotFound(format!("#{}", id)))?;
        service::pass_without_paying(vehicle, &mut self.ledger)
    }

    /// Mark the first vehicle of the named category as passed without paying.
    ///
    /// The lookup is by category only, so it always targets the earliest
    /// vehicle of that category. Once that vehicle is settled the call fails
    /// with [`Error::AlreadySettled`] and the ledger is not touched.
    pub fn pass_without_paying_by_category(&mut self, label: &str) -> Result<&Vehicle> {
        let vehicle = self
            .registry
            .find_first_by_category_mut(label)
            .ok_or_else(|| Error::VehicleNotFound(label.trim().to_string()))?;
        service::pass_without_paying(vehicle, &mut self.ledger)?;
        Ok(&*vehicle)
    }

    pub fn registry(&self) -> &VehicleRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &TaxLedger {
        &self.ledger
    }

    pub fn summary(&self) -> LedgerSummary {
        self.ledger.summary()
    }

    /// Admitted vehicles per category, skipping empty categories
    pub fn breakdown(&self) -> Vec<CategoryCount> {
        VehicleCategory::ALL
            .into_iter()
            .map(|category| CategoryCount {
                category,
                count: self.registry.vehicles_by_category(category).len(),
            })
            .filter(|c| c.count > 0)
            .collect()
    }

    pub fn report(&self, currency_symbol: &str) -> String {
        generate_ledger_report(
            &self.summary(),
            &self.breakdown(),
            self.registry.all(),
            currency_symbol,
        )
    }
}
