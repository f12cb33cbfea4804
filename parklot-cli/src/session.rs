//! Interactive menu session driving a lot

use crate::error::CliError;
use crate::menu::MenuChoice;
use crate::output::OutputFormatter;
use parklot::{Lot, LotError, ParkError, RemoveError};
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use tracing::{debug, info, warn};

/// Reads menu choices line by line and applies them to a lot
///
/// Input and output are injected, so the same session runs against stdin, a
/// script file or an in-memory buffer.
pub struct Session<R, W: Write> {
    lot: Lot,
    input: R,
    output: OutputFormatter<W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(lot: Lot, input: R, output: OutputFormatter<W>) -> Self {
        Self { lot, input, output }
    }

    /// Run until the operator quits or input ends
    pub fn run(&mut self) -> Result<(), CliError> {
        debug!(capacity = self.lot.capacity(), "session started");

        loop {
            self.output.print_menu()?;
            let Some(line) = self.read_line()? else {
                debug!("input closed");
                break;
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(e) => {
                    warn!(error = %e, "rejected menu input");
                    self.output.print_invalid_option()?;
                    ControlFlow::Continue(())
                }
            };
            if flow.is_break() {
                break;
            }
        }

        debug!("session ended");
        Ok(())
    }

    /// Consume the session, returning the lot and the output sink
    pub fn into_parts(self) -> (Lot, W) {
        (self.lot, self.output.into_inner())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>, CliError> {
        match choice {
            MenuChoice::AddVehicle => self.add_vehicle(),
            MenuChoice::ListVehicles => {
                self.output.print_vehicles(self.lot.list_occupied())?;
                Ok(ControlFlow::Continue(()))
            }
            MenuChoice::ShowAvailable => {
                self.output.print_available(self.lot.available_count())?;
                Ok(ControlFlow::Continue(()))
            }
            MenuChoice::RemoveVehicle => self.remove_vehicle(),
            MenuChoice::Quit => {
                self.output.print_goodbye()?;
                Ok(ControlFlow::Break(()))
            }
        }
    }

    fn add_vehicle(&mut self) -> Result<ControlFlow<()>, CliError> {
        self.output.prompt("Enter the car's license plate: ")?;
        let Some(plate) = self.read_line()? else {
            return Ok(ControlFlow::Break(()));
        };
        if plate.is_empty() {
            self.output.print_empty_plate()?;
            return Ok(ControlFlow::Continue(()));
        }

        if let Some((spot, _)) = self.lot.find(&plate) {
            warn!(plate = %plate, %spot, "plate is already parked");
        }

        let record = self.lot.admit(plate.as_str());
        let token = record.token();
        match self.lot.park(record) {
            Ok(spot) => {
                info!(plate = %plate, %spot, %token, "vehicle parked");
                self.output.print_parked(spot, token)?;
            }
            Err(e) => self.report(e.into())?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn remove_vehicle(&mut self) -> Result<ControlFlow<()>, CliError> {
        self.output.prompt("Enter the Car License Plate number: ")?;
        let Some(plate) = self.read_line()? else {
            return Ok(ControlFlow::Break(()));
        };

        match self.lot.remove(&plate) {
            Ok(departure) => {
                info!(plate = %plate, spot = %departure.spot, "vehicle exited");
                self.output.print_departure(&departure)?;
            }
            Err(e) => self.report(e.into())?,
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Log and print a rejected lot operation
    fn report(&mut self, err: LotError) -> Result<(), CliError> {
        warn!(error = %err, "lot operation rejected");
        match err {
            LotError::Park(ParkError::LotFull(_)) => self.output.print_lot_full()?,
            LotError::Remove(RemoveError::NotFound(_)) => self.output.print_not_found()?,
            LotError::Remove(RemoveError::AlreadyExited(plate)) => {
                self.output.print_already_exited(&plate)?
            }
        }
        Ok(())
    }

    /// Next input line with surrounding whitespace removed, None at end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than failing the read.
    fn read_line(&mut self) -> Result<Option<String>, CliError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}
