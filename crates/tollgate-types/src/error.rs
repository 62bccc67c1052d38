//! Error types for tollgate

use thiserror::Error;

use crate::VehicleId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Invalid base price: {0}")]
    InvalidPrice(String),

    #[error("Unknown vehicle category: {0}")]
    UnknownCategory(String),

    #[error("No vehicle found for: {0}")]
    VehicleNotFound(String),

    #[error("Vehicle #{0} has already been settled")]
    AlreadySettled(VehicleId),
}

pub type Result<T> = std::result::Result<T, Error>;
