//! Compile-time configuration shared by the library and the board binary.

use embassy_time::Duration;

/// Minimum time between two accepted level changes of a button.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(30);

/// Half period of the blinking field while setting the time.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(600);

/// Character LCD geometry (HD44780, 16x2).
pub const LCD_COLUMNS: u8 = 16;
pub const LCD_ROWS: u8 = 2;

/// 7-bit address of the PCF8574 backpack driving the LCD.
pub const LCD_I2C_ADDR: u8 = 0x27;

/// Both I2C buses run in standard mode.
pub const I2C_FREQUENCY_HZ: u32 = 100_000;
