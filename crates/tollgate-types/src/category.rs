//! Vehicle categories and their flat toll tax

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::Error;

/// Vehicle category at the toll point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleCategory {
    Car,
    Bike,
    HeavyVehicle,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::Car,
        VehicleCategory::Bike,
        VehicleCategory::HeavyVehicle,
    ];

    /// Flat tax charged when a vehicle of this category pays
    pub fn flat_tax(&self) -> Decimal {
        match self {
            VehicleCategory::Car => Decimal::new(200, 2),
            VehicleCategory::Bike => Decimal::new(100, 2),
            VehicleCategory::HeavyVehicle => Decimal::new(400, 2),
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "Car",
            VehicleCategory::Bike => "Bike",
            VehicleCategory::HeavyVehicle => "Heavy Vehicle",
        }
    }

    /// Case-insensitive label match. Spaces, hyphens and underscores are ignored,
    /// so "heavy vehicle", "HeavyVehicle" and "heavy-vehicle" are all equivalent.
    pub fn matches_label(&self, label: &str) -> bool {
        normalize_label(label) == normalize_label(self.label())
    }
}

fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for VehicleCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleCategory::ALL
            .into_iter()
            .find(|c| c.matches_label(s))
            .ok_or_else(|| Error::UnknownCategory(s.trim().to_string()))
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Tax resolution of a single vehicle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaxStatus {
    /// Admitted, not yet settled
    #[default]
    Pending,
    Paid,
    Unpaid,
}

impl TaxStatus {
    pub fn is_settled(&self) -> bool {
        !matches!(self, TaxStatus::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaxStatus::Pending => "pending",
            TaxStatus::Paid => "paid",
            TaxStatus::Unpaid => "unpaid",
        }
    }
}
