//! RTC-backed digital clock on a 16x2 character LCD, with a four-button
//! menu for setting the date and time.
//!
//! The library is hardware independent: buttons are `embedded-hal` input
//! pins, the RTC and the LCD sit behind the traits in [`hardware::traits`].
//! The board binary (`src/bin/lcd_clock.rs`, feature `board`) wires them to
//! an STM32F103 "Blue Pill".

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod config;
pub mod hardware;
