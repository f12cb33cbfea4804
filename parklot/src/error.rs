//! Error types for the parking lot model

use crate::record::VehicleRecord;
use thiserror::Error;

/// Error returned when a vehicle cannot be parked
///
/// The rejected record is handed back so the caller decides whether to drop
/// it or retry later.
#[derive(Debug, Clone, Error)]
pub enum ParkError {
    /// Every spot is occupied
    #[error("Lot is full, cannot park {}", .0.plate())]
    LotFull(VehicleRecord),
}

impl ParkError {
    /// Recover the rejected record
    pub fn into_record(self) -> VehicleRecord {
        match self {
            ParkError::LotFull(record) => record,
        }
    }
}

/// Error returned when a vehicle cannot be removed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoveError {
    /// No occupied spot holds a vehicle with this plate
    #[error("Vehicle {0} not found")]
    NotFound(String),
    /// The matching record was already marked as exited
    #[error("Vehicle {0} has already exited")]
    AlreadyExited(String),
}

/// Error type for lot operations
#[derive(Debug, Clone, Error)]
pub enum LotError {
    /// Parking failed
    #[error("Park error: {0}")]
    Park(#[from] ParkError),
    /// Removal failed
    #[error("Remove error: {0}")]
    Remove(#[from] RemoveError),
}
