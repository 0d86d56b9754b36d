use std::error::Error;
use std::fmt;

/// Errors surfaced by the checked storage write paths.
///
/// The identity key has no error: its accessor initializes on first use,
/// so an uninitialized read cannot be observed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StorageError {
    /// A value outside what the field's bit width and enum can represent
    /// was offered to a checked setter. The record is left unchanged.
    InvalidStyleValue {
        field: &'static str,
        value: u8,
        max: u8,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStyleValue { field, value, max } => {
                write!(formatter, "invalid style value {value} for {field} (max {max})")
            }
        }
    }
}

impl Error for StorageError {}
