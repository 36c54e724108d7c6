//! HD44780 character LCD behind a PCF8574 I2C backpack, driven in 4-bit mode.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::traits::CharDisplay;
use crate::config::{LCD_COLUMNS, LCD_I2C_ADDR, LCD_ROWS};

// PCF8574 pin mapping: P0=RS, P1=RW, P2=E, P3=Backlight, P4-P7=Data
const LCD_BACKLIGHT: u8 = 0x08;
const LCD_ENABLE: u8 = 0x04;
const LCD_RS: u8 = 0x01;

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x06; // increment cursor, no shift
const CMD_DISPLAY_ON: u8 = 0x0C; // display on, cursor off, blink off
const CMD_FUNCTION_SET: u8 = 0x28; // 4-bit, 2 lines, 5x8 font
const CMD_SET_DDRAM: u8 = 0x80;

const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

pub struct Lcd1602<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D, E> Lcd1602<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    /// LCD at the usual backpack address (0x27). Call [`Lcd1602::init`]
    /// before writing.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, LCD_I2C_ADDR)
    }

    /// LCD at a custom backpack address (some boards use 0x3F).
    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
        }
    }

    /// Power-on sequence: switch the controller to 4-bit mode, two lines,
    /// display on, cleared.
    pub fn init(&mut self) -> Result<(), E> {
        self.delay.delay_ms(50);

        self.write_nibble(0x03, false)?;
        self.delay.delay_ms(5);
        self.write_nibble(0x03, false)?;
        self.delay.delay_us(150);
        self.write_nibble(0x03, false)?;
        self.write_nibble(0x02, false)?;

        self.command(CMD_FUNCTION_SET)?;
        self.command(CMD_DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE)
    }

    pub fn clear(&mut self) -> Result<(), E> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn command(&mut self, byte: u8) -> Result<(), E> {
        self.write_byte(byte, false)
    }

    fn write_byte(&mut self, byte: u8, rs: bool) -> Result<(), E> {
        self.write_nibble(byte >> 4, rs)?;
        self.write_nibble(byte & 0x0F, rs)
    }

    fn write_nibble(&mut self, nibble: u8, rs: bool) -> Result<(), E> {
        let rs_bit = if rs { LCD_RS } else { 0 };
        let data = (nibble << 4) | LCD_BACKLIGHT | rs_bit;

        self.i2c.write(self.address, &[data | LCD_ENABLE])?;
        self.delay.delay_us(1);
        self.i2c.write(self.address, &[data])?;
        self.delay.delay_us(50);
        Ok(())
    }
}

impl<I2C, D, E> CharDisplay for Lcd1602<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    type Error = E;

    /// Columns past the right edge and rows past the bottom are clamped.
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), E> {
        let row = row.min(LCD_ROWS - 1) as usize;
        let col = col.min(LCD_COLUMNS - 1);
        self.command(CMD_SET_DDRAM | (ROW_OFFSETS[row] + col))
    }

    /// Writes ASCII text at the cursor. Non-ASCII characters show as `?`.
    fn print(&mut self, text: &str) -> Result<(), E> {
        for ch in text.chars() {
            let byte = if ch.is_ascii() { ch as u8 } else { b'?' };
            self.write_byte(byte, true)?;
        }
        Ok(())
    }
}
