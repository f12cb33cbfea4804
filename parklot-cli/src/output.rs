//! Output formatting for menu results

use crate::menu::MenuChoice;
use chrono::{DateTime, Local, TimeDelta, Utc};
use parklot::{Departure, SpotNumber, Token, VehicleRecord};
use std::io::{self, Write};

/// Separator printed after each listed vehicle
const SEPARATOR: &str = "++++++++++++++++++++++++++++++++++++++++++++++++++++++++++++++++";

/// Writes menu, prompts and results to an injected sink
///
/// In quiet mode the menu and prompts are skipped and only result lines are
/// written.
pub struct OutputFormatter<W: Write> {
    out: W,
    quiet: bool,
}

impl<W: Write> OutputFormatter<W> {
    /// Create a new output formatter
    pub fn new(out: W, quiet: bool) -> Self {
        Self { out, quiet }
    }

    /// Recover the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the numbered menu followed by the choice prompt
    pub fn print_menu(&mut self) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        for choice in MenuChoice::ALL {
            writeln!(self.out, "{}. {}", choice.number(), choice.label())?;
        }
        self.prompt("Choose an option: ")
    }

    /// Print a prompt without a trailing newline
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn print_parked(&mut self, spot: SpotNumber, token: Token) -> io::Result<()> {
        writeln!(self.out, "Car added at spot {} (token {}).", spot, token)
    }

    pub fn print_lot_full(&mut self) -> io::Result<()> {
        writeln!(self.out, "No spots are available.")
    }

    pub fn print_empty_plate(&mut self) -> io::Result<()> {
        writeln!(self.out, "License plate cannot be empty.")
    }

    /// Print every occupied spot in order, or a notice when none are
    pub fn print_vehicles<'a, I>(&mut self, vehicles: I) -> io::Result<()>
    where
        I: IntoIterator<Item = (SpotNumber, &'a VehicleRecord)>,
    {
        let mut vehicles = vehicles.into_iter().peekable();
        if vehicles.peek().is_none() {
            return writeln!(self.out, "No cars entered yet.");
        }

        writeln!(self.out, "Entered cars till now:")?;
        for (spot, record) in vehicles {
            writeln!(self.out, "Spot: {}", spot)?;
            writeln!(self.out, "License Plate: {}", record.plate())?;
            writeln!(self.out, "Token: {}", record.token())?;
            writeln!(self.out, "Entry Time: {}", format_time(record.entry_time()))?;
            writeln!(self.out, "{}", SEPARATOR)?;
        }
        Ok(())
    }

    pub fn print_available(&mut self, count: usize) -> io::Result<()> {
        writeln!(self.out, "Total Available Spots: {}", count)
    }

    pub fn print_departure(&mut self, departure: &Departure) -> io::Result<()> {
        let record = &departure.record;
        let exited_at = departure
            .exit_time()
            .map(format_time)
            .unwrap_or_default();
        let parked = record
            .parked_duration()
            .map(format_duration)
            .unwrap_or_default();
        writeln!(
            self.out,
            "Car with {} exited at {} (parked {}).",
            record.plate(),
            exited_at,
            parked
        )
    }

    pub fn print_not_found(&mut self) -> io::Result<()> {
        writeln!(self.out, "Car not found")
    }

    pub fn print_already_exited(&mut self, plate: &str) -> io::Result<()> {
        writeln!(self.out, "Car with {} has already exited", plate)
    }

    pub fn print_invalid_option(&mut self) -> io::Result<()> {
        writeln!(self.out, "Invalid option. Please try again.")
    }

    pub fn print_goodbye(&mut self) -> io::Result<()> {
        writeln!(self.out, "Exiting the system.")
    }
}

/// Format a timestamp in local time, ctime layout
fn format_time(t: DateTime<Utc>) -> String {
    t.with_timezone(&Local)
        .format("%a %b %e %H:%M:%S %Y")
        .to_string()
}

/// Format a TimeDelta to whole seconds, e.g. `1h 2m 5s`
fn format_duration(d: TimeDelta) -> String {
    let secs = d.num_seconds().max(0) as u64;
    humantime::format_duration(std::time::Duration::from_secs(secs)).to_string()
}
