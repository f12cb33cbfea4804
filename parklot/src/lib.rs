//! Parking Lot Model
//!
//! A fixed-capacity parking lot that assigns vehicles to spots first-fit and
//! tracks entry and exit times per vehicle.
//!
//! # Overview
//!
//! This library provides:
//! - [`VehicleRecord`]: plate, display token and entry/exit timestamps
//! - [`Lot`]: an ordered, fixed-size collection of [`Spot`]s
//! - Structured results for every operation, leaving formatting to the caller
//!
//! # Quick Example
//!
//! ```
//! use parklot::{Lot, ParkError};
//!
//! let mut lot = Lot::new(2);
//!
//! for plate in ["AAA", "BBB"] {
//!     let record = lot.admit(plate);
//!     lot.park(record).unwrap();
//! }
//!
//! // Third vehicle is rejected and handed back
//! let record = lot.admit("CCC");
//! let Err(ParkError::LotFull(rejected)) = lot.park(record) else {
//!     panic!("lot should be full");
//! };
//! assert_eq!(rejected.plate(), "CCC");
//!
//! // Freeing spot 1 makes it the next one assigned
//! lot.remove("AAA").unwrap();
//! let spot = lot.park(rejected).unwrap();
//! assert_eq!(spot.get(), 1);
//!
//! let plates: Vec<_> = lot.list_occupied().map(|(_, r)| r.plate()).collect();
//! assert_eq!(plates, ["CCC", "BBB"]);
//! ```
//!
//! # Key Concepts
//!
//! ## First-fit assignment
//!
//! [`Lot::park`] scans spots in ascending number and takes the first free one.
//! [`Lot::remove`] resolves a plate to the lowest-numbered spot holding it.
//!
//! ## Ownership
//!
//! A spot owns its record while parked. Removal moves the record out inside a
//! [`Departure`]; a rejected park hands it back inside [`ParkError::LotFull`].
//!
//! ## Tokens
//!
//! Each lot owns a [`TokenCounter`]. [`Lot::admit`] stamps new records with the
//! next token, starting at zero. Tokens are for display only.

mod error;
mod lot;
mod record;

// Re-export public API
pub use error::{LotError, ParkError, RemoveError};
pub use lot::{Departure, Lot, Spot, SpotNumber};
pub use record::{Token, TokenCounter, VehicleRecord};
