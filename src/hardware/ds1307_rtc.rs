use ds1307::{DateTimeAccess, Ds1307, Error};
use embedded_hal::i2c::I2c;

use super::traits::RealTimeClock;
use crate::clock::DateTimeFields;

/// Years the DS1307 calendar registers can hold.
pub const SUPPORTED_YEARS: core::ops::RangeInclusive<u16> = 2000..=2099;

/// DS1307 real-time clock on an I2C bus.
pub struct Ds1307Rtc<I2C> {
    rtc: Ds1307<I2C>,
}

impl<I2C, E> Ds1307Rtc<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self {
            rtc: Ds1307::new(i2c),
        }
    }

    /// Checks the chip answers on the bus and that its oscillator runs.
    ///
    /// A DS1307 with a fresh battery powers up halted; it is started here,
    /// keeping whatever time the registers hold.
    ///
    /// # Returns
    /// - `Ok(())`: the chip is present and counting
    /// - `Err(Error<E>)`: no chip answered, or the bus failed
    pub fn probe(&mut self) -> Result<(), Error<E>> {
        if !self.rtc.running()? {
            #[cfg(feature = "defmt")]
            defmt::warn!("DS1307 oscillator was halted, starting it");
            self.rtc.set_running()?;
        }
        Ok(())
    }
}

impl<I2C, E> RealTimeClock for Ds1307Rtc<I2C>
where
    I2C: I2c<Error = E>,
{
    type Error = Error<E>;

    fn now(&mut self) -> Result<DateTimeFields, Self::Error> {
        self.rtc.datetime().map(DateTimeFields::from)
    }

    /// Writes all fields in one burst.
    ///
    /// A day past the end of its month is pulled back to the month's last
    /// day; years outside [`SUPPORTED_YEARS`] are rejected and the chip keeps
    /// its time.
    ///
    /// The clamp exists only because the driver takes a `NaiveDateTime`,
    /// which cannot hold an impossible date. The setting menu itself still
    /// lets the day run 1..=31 in any month.
    fn adjust(&mut self, fields: &DateTimeFields) -> Result<(), Self::Error> {
        if !SUPPORTED_YEARS.contains(&fields.year) {
            #[cfg(feature = "defmt")]
            defmt::warn!("year {} out of DS1307 range", fields.year);
            return Err(Error::InvalidInputData);
        }
        let datetime = match fields.to_naive() {
            Some(datetime) => datetime,
            None => {
                let clamped = fields.clamp_day().ok_or(Error::InvalidInputData)?;
                #[cfg(feature = "defmt")]
                defmt::warn!("day {} past end of month, using {}", fields.day, clamped.day);
                clamped.to_naive().ok_or(Error::InvalidInputData)?
            }
        };
        self.rtc.set_datetime(&datetime)
    }
}
