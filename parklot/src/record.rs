//! Vehicle records and token generation

use crate::error::RemoveError;
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Display-only sequential identifier handed to each admitted vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(u64);

impl Token {
    /// Raw token value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic token generator
///
/// Owned by a [`Lot`](crate::Lot) so that every lot numbers its vehicles
/// independently, starting from zero.
#[derive(Debug, Clone, Default)]
pub struct TokenCounter {
    next: u64,
}

impl TokenCounter {
    /// Create a counter whose first token is `0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next token
    pub fn next_token(&mut self) -> Token {
        let token = Token(self.next);
        self.next += 1;
        token
    }

    /// Peek at the token the next call will issue
    pub fn peek(&self) -> Token {
        Token(self.next)
    }
}

/// A tracked vehicle: plate, token and entry/exit timestamps
///
/// The exited flag is derived from `exit_time`, so a record is exited
/// exactly when it carries an exit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleRecord {
    plate: String,
    token: Token,
    entry_time: DateTime<Utc>,
    exit_time: Option<DateTime<Utc>>,
}

impl VehicleRecord {
    /// Create an active record
    ///
    /// # Arguments
    /// * `plate` - License plate, not validated for format
    /// * `token` - Token issued by a [`TokenCounter`]
    /// * `entry_time` - When the vehicle arrived
    pub fn new(plate: impl Into<String>, token: Token, entry_time: DateTime<Utc>) -> Self {
        Self {
            plate: plate.into(),
            token,
            entry_time,
            exit_time: None,
        }
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }

    pub fn token(&self) -> Token {
        self.token
    }

    pub fn entry_time(&self) -> DateTime<Utc> {
        self.entry_time
    }

    pub fn exit_time(&self) -> Option<DateTime<Utc>> {
        self.exit_time
    }

    /// Whether the vehicle has left the lot
    pub fn is_exited(&self) -> bool {
        self.exit_time.is_some()
    }

    /// Time spent in the lot, once exited
    pub fn parked_duration(&self) -> Option<TimeDelta> {
        self.exit_time.map(|exit| exit - self.entry_time)
    }

    /// Transition from active to exited
    ///
    /// A second call fails with [`RemoveError::AlreadyExited`] and keeps the
    /// first exit time.
    pub(crate) fn mark_exited(&mut self, at: DateTime<Utc>) -> Result<(), RemoveError> {
        if self.is_exited() {
            return Err(RemoveError::AlreadyExited(self.plate.clone()));
        }
        self.exit_time = Some(at);
        Ok(())
    }
}
