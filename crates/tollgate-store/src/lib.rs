//! In-memory registry of vehicles seen at the toll point

mod registry;

pub use registry::VehicleRegistry;
