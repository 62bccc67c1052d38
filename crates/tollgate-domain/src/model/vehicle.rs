//! Vehicle record for a single toll transaction

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tollgate_types::{TaxStatus, VehicleCategory, VehicleId};

/// Operator-entered attributes of a vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleDetails {
    /// Registration number (free text)
    pub reg_no: String,
    pub model: String,
    pub brand: String,
    /// Base price, never negative
    pub base_price: Decimal,
}

impl VehicleDetails {
    pub fn new(
        reg_no: impl Into<String>,
        model: impl Into<String>,
        brand: impl Into<String>,
        base_price: Decimal,
    ) -> Self {
        Self {
            reg_no: reg_no.into(),
            model: model.into(),
            brand: brand.into(),
            base_price,
        }
    }
}

/// A vehicle that entered the toll point.
///
/// The category is fixed at construction. The tax status starts as
/// [`TaxStatus::Pending`] and is written at most once.
#[derive(Debug, Clone)]
pub struct Vehicle {
    id: VehicleId,
    category: VehicleCategory,
    status: TaxStatus,
    pub details: VehicleDetails,
    pub entered_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn new(id: VehicleId, category: VehicleCategory, details: VehicleDetails) -> Self {
        Self {
            id,
            category,
            status: TaxStatus::Pending,
            details,
            entered_at: Utc::now(),
        }
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    pub fn status(&self) -> TaxStatus {
        self.status
    }

    pub fn is_settled(&self) -> bool {
        self.status.is_settled()
    }

    pub(crate) fn settle(&mut self, status: TaxStatus) {
        self.status = status;
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} {} {} {} ({}) entered {}",
            self.id,
            self.category,
            self.details.reg_no,
            self.details.brand,
            self.details.model,
            self.status.label(),
            self.entered_at.format("%H:%M:%S")
        )
    }
}
