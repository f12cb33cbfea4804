//! Fixed-capacity lot with first-fit spot assignment

use crate::error::{ParkError, RemoveError};
use crate::record::{TokenCounter, VehicleRecord};
use chrono::{DateTime, Utc};
use std::fmt;

/// 1-based spot number, fixed when the lot is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpotNumber(usize);

impl SpotNumber {
    /// Raw 1-based value
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for SpotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single parking slot
///
/// `occupant` is `None` exactly when the spot is available.
#[derive(Debug, Clone)]
pub struct Spot {
    number: SpotNumber,
    occupant: Option<VehicleRecord>,
}

impl Spot {
    fn empty(number: SpotNumber) -> Self {
        Self {
            number,
            occupant: None,
        }
    }

    pub fn number(&self) -> SpotNumber {
        self.number
    }

    pub fn occupant(&self) -> Option<&VehicleRecord> {
        self.occupant.as_ref()
    }

    pub fn is_available(&self) -> bool {
        self.occupant.is_none()
    }
}

/// A vehicle moved out of its spot by [`Lot::remove`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// The spot that was freed
    pub spot: SpotNumber,
    /// The record, now carrying its exit time
    pub record: VehicleRecord,
}

impl Departure {
    /// Exit time stamped during removal
    pub fn exit_time(&self) -> Option<DateTime<Utc>> {
        self.record.exit_time()
    }
}

/// Fixed-size ordered collection of spots
///
/// Spots are created once in [`Lot::new`] and numbered `1..=capacity`; their
/// order drives both the first-fit scan and display order. The lot also owns
/// the token counter used by [`Lot::admit`].
///
/// # Example
///
/// ```
/// use parklot::{Lot, RemoveError};
///
/// let mut lot = Lot::new(2);
/// let car = lot.admit("AAA");
/// let spot = lot.park(car).unwrap();
/// assert_eq!(spot.get(), 1);
/// assert_eq!(lot.available_count(), 1);
///
/// let departure = lot.remove("AAA").unwrap();
/// assert!(departure.record.is_exited());
/// assert_eq!(lot.remove("AAA"), Err(RemoveError::NotFound("AAA".into())));
/// ```
#[derive(Debug, Clone)]
pub struct Lot {
    spots: Vec<Spot>,
    tokens: TokenCounter,
}

impl Lot {
    /// Build a lot with `capacity` empty spots
    ///
    /// A capacity of zero gives a lot that rejects every park request.
    pub fn new(capacity: usize) -> Self {
        let spots = (1..=capacity).map(|n| Spot::empty(SpotNumber(n))).collect();
        Self {
            spots,
            tokens: TokenCounter::new(),
        }
    }

    /// Create a record for `plate` with the next token, entering now
    pub fn admit(&mut self, plate: impl Into<String>) -> VehicleRecord {
        self.admit_at(plate, Utc::now())
    }

    /// Create a record for `plate` with the next token and an explicit entry time
    pub fn admit_at(&mut self, plate: impl Into<String>, at: DateTime<Utc>) -> VehicleRecord {
        VehicleRecord::new(plate, self.tokens.next_token(), at)
    }

    /// Park a record in the lowest-numbered free spot
    ///
    /// # Returns
    /// * `Ok(SpotNumber)` - The spot now holding the record
    /// * `Err(ParkError::LotFull)` - No free spot; the record is handed back
    pub fn park(&mut self, record: VehicleRecord) -> Result<SpotNumber, ParkError> {
        match self.spots.iter_mut().find(|spot| spot.is_available()) {
            Some(spot) => {
                spot.occupant = Some(record);
                Ok(spot.number)
            }
            None => Err(ParkError::LotFull(record)),
        }
    }

    /// Remove the vehicle with `plate`, stamping the current time as its exit
    pub fn remove(&mut self, plate: &str) -> Result<Departure, RemoveError> {
        self.remove_at(plate, Utc::now())
    }

    /// Remove the vehicle with `plate`, stamping `at` as its exit time
    ///
    /// Resolves to the lowest-numbered spot holding the plate. Plates are not
    /// required to be unique.
    ///
    /// # Returns
    /// * `Ok(Departure)` - The freed spot and the exited record
    /// * `Err(RemoveError::NotFound)` - No occupied spot holds the plate
    /// * `Err(RemoveError::AlreadyExited)` - The occupant was already marked exited
    pub fn remove_at(&mut self, plate: &str, at: DateTime<Utc>) -> Result<Departure, RemoveError> {
        for spot in &mut self.spots {
            let Some(mut record) = spot.occupant.take_if(|record| record.plate() == plate) else {
                continue;
            };
            if let Err(err) = record.mark_exited(at) {
                spot.occupant = Some(record);
                return Err(err);
            }
            return Ok(Departure {
                spot: spot.number,
                record,
            });
        }
        Err(RemoveError::NotFound(plate.to_string()))
    }

    /// Number of free spots, recounted on every call
    pub fn available_count(&self) -> usize {
        self.spots.iter().filter(|spot| spot.is_available()).count()
    }

    /// Number of occupied spots
    pub fn occupied_count(&self) -> usize {
        self.capacity() - self.available_count()
    }

    pub fn capacity(&self) -> usize {
        self.spots.len()
    }

    pub fn is_full(&self) -> bool {
        self.available_count() == 0
    }

    /// All spots in number order
    pub fn spots(&self) -> impl Iterator<Item = &Spot> {
        self.spots.iter()
    }

    /// Occupied spots with their records, in ascending spot number
    pub fn list_occupied(&self) -> impl Iterator<Item = (SpotNumber, &VehicleRecord)> {
        self.spots
            .iter()
            .filter_map(|spot| spot.occupant.as_ref().map(|record| (spot.number, record)))
    }

    /// First spot holding `plate`, if any
    pub fn find(&self, plate: &str) -> Option<(SpotNumber, &VehicleRecord)> {
        self.list_occupied().find(|(_, record)| record.plate() == plate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn park_plate(lot: &mut Lot, plate: &str) -> Result<SpotNumber, ParkError> {
        let record = lot.admit_at(plate, at(0));
        lot.park(record)
    }

    fn occupied_plates(lot: &Lot) -> Vec<(usize, String)> {
        lot.list_occupied()
            .map(|(n, r)| (n.get(), r.plate().to_string()))
            .collect()
    }

    #[test]
    fn test_new_lot_numbering() {
        let lot = Lot::new(4);
        let numbers: Vec<usize> = lot.spots().map(|s| s.number().get()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(lot.capacity(), 4);
        assert_eq!(lot.available_count(), 4);
        assert_eq!(lot.list_occupied().count(), 0);
    }

    #[test]
    fn test_zero_capacity_rejects() {
        let mut lot = Lot::new(0);
        assert!(lot.is_full());
        let err = park_plate(&mut lot, "AAA").unwrap_err();
        assert_eq!(err.into_record().plate(), "AAA");
    }

    #[test]
    fn test_capacity_two_scenario() {
        let mut lot = Lot::new(2);

        assert_eq!(park_plate(&mut lot, "AAA").unwrap().get(), 1);
        assert_eq!(park_plate(&mut lot, "BBB").unwrap().get(), 2);

        let rejected = park_plate(&mut lot, "CCC").unwrap_err().into_record();
        assert_eq!(rejected.plate(), "CCC");
        assert_eq!(occupied_plates(&lot), vec![(1, "AAA".into()), (2, "BBB".into())]);

        let departure = lot.remove_at("AAA", at(60)).unwrap();
        assert_eq!(departure.spot.get(), 1);
        assert_eq!(departure.exit_time(), Some(at(60)));
        assert!(departure.record.is_exited());

        assert_eq!(park_plate(&mut lot, "CCC").unwrap().get(), 1);
        assert_eq!(lot.available_count(), 0);
    }

    #[test]
    fn test_capacity_one_double_remove() {
        let mut lot = Lot::new(1);

        assert_eq!(park_plate(&mut lot, "XYZ").unwrap().get(), 1);
        assert_eq!(lot.available_count(), 0);

        assert!(lot.remove("XYZ").is_ok());
        assert_eq!(lot.available_count(), 1);

        assert_eq!(
            lot.remove("XYZ"),
            Err(RemoveError::NotFound("XYZ".to_string()))
        );
        assert_eq!(lot.available_count(), 1);
    }

    #[test]
    fn test_first_fit_fills_gap() {
        let mut lot = Lot::new(3);
        for plate in ["A", "B", "C"] {
            park_plate(&mut lot, plate).unwrap();
        }
        lot.remove("C").unwrap();

        assert_eq!(park_plate(&mut lot, "D").unwrap().get(), 3);
    }

    #[test]
    fn test_list_occupied_in_spot_order() {
        let mut lot = Lot::new(4);
        for plate in ["A", "B", "C", "D"] {
            park_plate(&mut lot, plate).unwrap();
        }
        lot.remove("A").unwrap();
        lot.remove("C").unwrap();
        park_plate(&mut lot, "E").unwrap();

        assert_eq!(
            occupied_plates(&lot),
            vec![(1, "E".into()), (2, "B".into()), (4, "D".into())]
        );
        // Listing has no side effects
        assert_eq!(occupied_plates(&lot).len(), 3);
    }

    #[test]
    fn test_duplicate_plate_resolves_lowest() {
        let mut lot = Lot::new(3);
        park_plate(&mut lot, "X").unwrap();
        park_plate(&mut lot, "Y").unwrap();
        assert_eq!(park_plate(&mut lot, "X").unwrap().get(), 3);

        assert_eq!(lot.remove("X").unwrap().spot.get(), 1);
        assert_eq!(lot.find("X").map(|(n, _)| n.get()), Some(3));
        assert_eq!(lot.remove("X").unwrap().spot.get(), 3);
    }

    #[test]
    fn test_already_exited_occupant_left_in_place() {
        let mut lot = Lot::new(2);
        let mut counter = TokenCounter::new();
        let mut stale = VehicleRecord::new("OLD", counter.next_token(), at(0));
        stale.mark_exited(at(10)).unwrap();
        lot.spots[0].occupant = Some(stale);

        assert_eq!(
            lot.remove("OLD"),
            Err(RemoveError::AlreadyExited("OLD".to_string()))
        );
        assert!(!lot.spots[0].is_available());
        assert_eq!(lot.spots[0].occupant().and_then(|r| r.exit_time()), Some(at(10)));
    }

    #[test]
    fn test_remove_stops_at_first_matching_spot() {
        let mut lot = Lot::new(3);
        let mut stale = lot.admit_at("DUP", at(0));
        stale.mark_exited(at(5)).unwrap();
        lot.spots[0].occupant = Some(stale);
        park_plate(&mut lot, "OTHER").unwrap();
        park_plate(&mut lot, "DUP").unwrap();

        assert_eq!(
            lot.remove_at("DUP", at(20)),
            Err(RemoveError::AlreadyExited("DUP".to_string()))
        );
        assert_eq!(
            occupied_plates(&lot),
            vec![(1, "DUP".into()), (2, "OTHER".into()), (3, "DUP".into())]
        );
        assert!(lot.find("OTHER").is_some_and(|(_, r)| !r.is_exited()));
    }

    #[test]
    fn test_tokens_issued_for_rejected_records() {
        let mut lot = Lot::new(1);
        let first = lot.admit("A");
        let second = lot.admit("B");
        lot.park(first).unwrap();
        let rejected = lot.park(second).unwrap_err().into_record();

        assert_eq!(rejected.token().get(), 1);
        assert_eq!(lot.admit("C").token().get(), 2);
    }
}
