pub mod ds1307_rtc;
pub mod gpio_button;
pub mod lcd1602;
pub mod traits;
