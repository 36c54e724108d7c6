//! STM32F103 Blue Pill RTC Clock with 16x2 Character LCD
//! =============================================================================================
//!
//! This firmware implements a desk clock using:
//! - DS1307 real-time clock via I2C2 (battery backed)
//! - HD44780 16x2 character LCD with PCF8574 backpack via I2C1
//! - Four push buttons for setting the date and time
//!
//! Hardware Connections:
//!   LCD backpack -> Blue Pill
//!      GND  -> GND
//!      VCC  -> 5V
//!      SDA  -> PB7 (I2C1)
//!      SCL  -> PB6 (I2C1)
//!
//!   DS1307 -> Blue Pill
//!      GND  -> GND
//!      VCC  -> 5V
//!      SDA  -> PB11 (I2C2)
//!      SCL  -> PB10 (I2C2)
//!
//!   Buttons (to GND, internal pull-up):
//!      SETTING -> PB12
//!      UP      -> PB13
//!      OK      -> PB14
//!      CANCEL  -> PB15
//!
//! Operation:
//! 1. Row 0 shows `Day:YYYY/MM/DD`, row 1 shows `Time:HH:MM:SS`
//! 2. SETTING opens the menu on the year; the selected field blinks
//! 3. UP steps the selected field, OK moves to the next one
//! 4. OK on the seconds writes the new time to the RTC, CANCEL drops it

#![no_std]
#![no_main]

use defmt::{Debug2Format, error, info, warn};
use defmt_rtt as _; // Global logger
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_stm32::{
    gpio::{Input, Pull},
    i2c,
    time::Hertz,
};
use embassy_time::{Delay, Instant, Timer};
use lcd_clock::{
    clock::{Buttons, ClockController},
    config::I2C_FREQUENCY_HZ,
    hardware::{ds1307_rtc::Ds1307Rtc, gpio_button::GpioButton, lcd1602::Lcd1602},
};
use panic_probe as _; // Panic handler

/// Main application entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    // 8 MHz HSE crystal, PLL x9 to 72 MHz
    let mut config = embassy_stm32::Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            mode: HseMode::Oscillator,
        });
        config.rcc.pll = Some(Pll {
            src: PllSource::HSE,
            prediv: PllPreDiv::DIV1,
            mul: PllMul::MUL9,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV2;
        config.rcc.apb2_pre = APBPrescaler::DIV1;
    }
    let p = embassy_stm32::init(config);
    info!("LCD clock starting");

    // RTC on I2C2 (PB10: SCL, PB11: SDA)
    let rtc_i2c = i2c::I2c::new_blocking(
        p.I2C2,
        p.PB10,
        p.PB11,
        Hertz(I2C_FREQUENCY_HZ),
        Default::default(),
    );
    let mut rtc = Ds1307Rtc::new(rtc_i2c);
    if let Err(e) = rtc.probe() {
        error!("Couldn't find RTC: {}", Debug2Format(&e));
        // Give the host time to drain the log before halting.
        Timer::after_secs(1).await;
        defmt::panic!("RTC initialization failed");
    }

    // LCD on I2C1 (PB6: SCL, PB7: SDA)
    let lcd_i2c = i2c::I2c::new_blocking(
        p.I2C1,
        p.PB6,
        p.PB7,
        Hertz(I2C_FREQUENCY_HZ),
        Default::default(),
    );
    let mut lcd = Lcd1602::new(lcd_i2c, Delay);
    if let Err(e) = lcd.init() {
        warn!("LCD init failed: {}", Debug2Format(&e));
    }

    let buttons = Buttons {
        setting: GpioButton::new(Input::new(p.PB12, Pull::Up)),
        up: GpioButton::new(Input::new(p.PB13, Pull::Up)),
        ok: GpioButton::new(Input::new(p.PB14, Pull::Up)),
        cancel: GpioButton::new(Input::new(p.PB15, Pull::Up)),
    };

    let mut clock = ClockController::new(buttons, rtc, lcd);
    info!("Clock running");

    // Polling loop: one controller step per pass, never waits on a timer
    loop {
        if let Err(e) = clock.step(Instant::now()) {
            warn!("clock step failed: {}", Debug2Format(&e));
        }
        yield_now().await;
    }
}
