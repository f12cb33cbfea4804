//! Numbered menu options

use crate::error::MenuError;
use std::str::FromStr;

/// One of the five menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1: prompt for a plate and park it
    AddVehicle,
    /// 2: list parked vehicles
    ListVehicles,
    /// 3: show the free spot count
    ShowAvailable,
    /// 4: prompt for a plate and remove it
    RemoveVehicle,
    /// 5: leave the session
    Quit,
}

impl MenuChoice {
    /// All options in menu order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddVehicle,
        MenuChoice::ListVehicles,
        MenuChoice::ShowAvailable,
        MenuChoice::RemoveVehicle,
        MenuChoice::Quit,
    ];

    /// Number typed to select this option
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::AddVehicle => 1,
            MenuChoice::ListVehicles => 2,
            MenuChoice::ShowAvailable => 3,
            MenuChoice::RemoveVehicle => 4,
            MenuChoice::Quit => 5,
        }
    }

    /// Menu line text
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddVehicle => "Add a new car",
            MenuChoice::ListVehicles => "Display all cars",
            MenuChoice::ShowAvailable => "Display the count of available spots.",
            MenuChoice::RemoveVehicle => "Exit the car",
            MenuChoice::Quit => "Exit the terminal",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s
            .trim()
            .parse()
            .map_err(|_| MenuError::InvalidChoice(s.to_string()))?;
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or_else(|| MenuError::InvalidChoice(s.to_string()))
    }
}
