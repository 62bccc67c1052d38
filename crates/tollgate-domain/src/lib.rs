//! Domain models and tax services for the toll registry

pub mod model;
pub mod service;
