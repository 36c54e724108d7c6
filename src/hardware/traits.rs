use embassy_time::Instant;

use crate::clock::DateTimeFields;

pub trait Button {
    /// Returns `true` once per detected press.
    fn is_pressed(&mut self, now: Instant) -> bool;
}

/// Battery-backed real-time clock.
pub trait RealTimeClock {
    type Error;

    fn now(&mut self) -> Result<DateTimeFields, Self::Error>;
    fn adjust(&mut self, fields: &DateTimeFields) -> Result<(), Self::Error>;
}

/// Fixed grid character display. Text is written from the cursor, left to
/// right, without wrapping.
pub trait CharDisplay {
    type Error;

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error>;
    fn print(&mut self, text: &str) -> Result<(), Self::Error>;
}
