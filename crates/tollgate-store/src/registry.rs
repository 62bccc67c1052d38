//! Vehicle registry, ordered by admission

use rust_decimal::Decimal;
use tollgate_domain::model::{Vehicle, VehicleDetails};
use tollgate_types::{VehicleCategory, VehicleId};

/// Append-only list of vehicles for the current session
#[derive(Debug)]
pub struct VehicleRegistry {
    vehicles: Vec<Vehicle>,
    next_id: VehicleId,
}

impl VehicleRegistry {
    pub fn new() -> Self {
        Self {
            vehicles: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a new vehicle with the next sequential ID
    pub fn add_vehicle(
        &mut self,
        category: VehicleCategory,
        reg_no: impl Into<String>,
        model: impl Into<String>,
        brand: impl Into<String>,
        base_price: Decimal,
    ) -> &mut Vehicle {
        let id = self.next_id;
        self.next_id += 1;

        let details = VehicleDetails::new(reg_no, model, brand, base_price);
        let index = self.vehicles.len();
        self.vehicles.push(Vehicle::new(id, category, details));
        &mut self.vehicles[index]
    }

    /// First vehicle in admission order whose category matches the label
    pub fn find_first_by_category(&self, label: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.category().matches_label(label))
    }

    pub fn find_first_by_category_mut(&mut self, label: &str) -> Option<&mut Vehicle> {
        self.vehicles
            .iter_mut()
            .find(|v| v.category().matches_label(label))
    }

    /// Get a vehicle by ID
    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id() == id)
    }

    pub fn get_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.id() == id)
    }

    /// All vehicles in admission order
    pub fn all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Get vehicles by category
    pub fn vehicles_by_category(&self, category: VehicleCategory) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| v.category() == category)
            .collect()
    }

    /// Get total vehicle count
    pub fn count(&self) -> usize {
        self.vehicles.len()
    }
}

impl Default for VehicleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tollgate_types::TaxStatus;

    fn price(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    #[test]
    fn test_sequential_ids_follow_insertion() {
        let mut registry = VehicleRegistry::new();
        let a = registry.add_vehicle(VehicleCategory::Car, "ABC1", "X", "Y", price(10000)).id();
        let b = registry.add_vehicle(VehicleCategory::Bike, "B2", "M", "N", price(500)).id();
        let c = registry.add_vehicle(VehicleCategory::Car, "ABC1", "X", "Y", price(10000)).id();
        assert_eq!((a, b, c), (1, 2, 3));

        let ids: Vec<_> = registry.all().iter().map(|v| v.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_default_registry_starts_at_one() {
        let mut registry = VehicleRegistry::default();
        let id = registry.add_vehicle(VehicleCategory::Bike, "B1", "M", "N", price(1)).id();
        assert_eq!(id, 1);
    }

    #[test]
    fn test_duplicate_reg_no_allowed() {
        let mut registry = VehicleRegistry::new();
        registry.add_vehicle(VehicleCategory::Car, "SAME", "X", "Y", price(1));
        registry.add_vehicle(VehicleCategory::Car, "SAME", "X", "Y", price(1));
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn test_new_vehicle_is_pending() {
        let mut registry = VehicleRegistry::new();
        let vehicle = registry.add_vehicle(VehicleCategory::HeavyVehicle, "H1", "FH", "Volvo", price(90000));
        assert_eq!(vehicle.status(), TaxStatus::Pending);
        assert_eq!(vehicle.details.reg_no, "H1");
        assert_eq!(vehicle.details.base_price, price(90000));
    }

    #[test]
    fn test_find_first_by_category() {
        let mut registry = VehicleRegistry::new();
        registry.add_vehicle(VehicleCategory::Bike, "B1", "M", "N", price(1));
        registry.add_vehicle(VehicleCategory::HeavyVehicle, "H1", "M", "N", price(1));
        registry.add_vehicle(VehicleCategory::HeavyVehicle, "H2", "M", "N", price(1));

        let found = registry.find_first_by_category("HEAVY VEHICLE").unwrap();
        assert_eq!(found.details.reg_no, "H1");
        assert_eq!(registry.find_first_by_category("bike").unwrap().id(), 1);
    }

    #[test]
    fn test_find_first_by_category_not_found() {
        let mut registry = VehicleRegistry::new();
        assert!(registry.find_first_by_category("car").is_none());

        registry.add_vehicle(VehicleCategory::Bike, "B1", "M", "N", price(1));
        assert!(registry.find_first_by_category("car").is_none());
        assert!(registry.find_first_by_category("boat").is_none());
    }

    #[test]
    fn test_get_and_filter() {
        let mut registry = VehicleRegistry::new();
        registry.add_vehicle(VehicleCategory::Car, "C1", "M", "N", price(1));
        registry.add_vehicle(VehicleCategory::Bike, "B1", "M", "N", price(1));
        registry.add_vehicle(VehicleCategory::Car, "C2", "M", "N", price(1));

        assert_eq!(registry.get(2).unwrap().details.reg_no, "B1");
        assert!(registry.get(4).is_none());
        assert_eq!(registry.vehicles_by_category(VehicleCategory::Car).len(), 2);
        assert!(registry.vehicles_by_category(VehicleCategory::HeavyVehicle).is_empty());
    }
}
