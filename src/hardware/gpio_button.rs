use core::convert::Infallible;

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

use super::traits::Button;
use crate::config::DEBOUNCE_INTERVAL;

/// Active-low push button with time-based debouncing.
///
/// The pin is sampled only once the debounce interval has passed since the
/// last accepted level change; anything faster is ignored, not queued. A
/// press is reported on the accepted high-to-low edge.
pub struct GpioButton<P> {
    pin: P,
    debounce: Duration,
    last_low: bool,
    last_change: Instant,
}

impl<P> GpioButton<P>
where
    P: InputPin<Error = Infallible>,
{
    pub fn new(pin: P) -> Self {
        Self::with_debounce(pin, DEBOUNCE_INTERVAL)
    }

    pub fn with_debounce(pin: P, debounce: Duration) -> Self {
        Self {
            pin,
            debounce,
            last_low: false,
            last_change: Instant::from_ticks(0),
        }
    }
}

impl<P> Button for GpioButton<P>
where
    P: InputPin<Error = Infallible>,
{
    fn is_pressed(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_change) < self.debounce {
            return false;
        }
        let low = self.pin.is_low().unwrap_or_else(|never| match never {});
        if low == self.last_low {
            return false;
        }
        self.last_low = low;
        self.last_change = now;
        low
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use embedded_hal::digital::ErrorType;

    use super::*;

    struct FakePin(Rc<Cell<bool>>);

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.0.get())
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.0.get())
        }
    }

    fn button() -> (GpioButton<FakePin>, Rc<Cell<bool>>) {
        let level = Rc::new(Cell::new(true));
        (GpioButton::new(FakePin(level.clone())), level)
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn one_event_per_press() {
        let (mut button, level) = button();
        assert!(!button.is_pressed(at(100)));

        level.set(false);
        assert!(button.is_pressed(at(200)));
        assert!(!button.is_pressed(at(300)));
        assert!(!button.is_pressed(at(400)));

        level.set(true);
        assert!(!button.is_pressed(at(500)));
        level.set(false);
        assert!(button.is_pressed(at(600)));
    }

    #[test]
    fn bouncing_contact_reports_at_most_once() {
        let (mut button, level) = button();
        let mut presses = 0;
        // Contact chatters every 5 ms for 25 ms after the first edge.
        for i in 0..=5u64 {
            level.set(i % 2 == 1);
            if button.is_pressed(at(1_000 + i * 5)) {
                presses += 1;
            }
        }
        assert!(presses <= 1);
    }

    #[test]
    fn edges_inside_the_window_are_dropped() {
        let (mut button, level) = button();
        level.set(false);
        assert!(button.is_pressed(at(1_000)));

        // Released and pressed again before the window closes.
        level.set(true);
        assert!(!button.is_pressed(at(1_010)));
        level.set(false);
        assert!(!button.is_pressed(at(1_020)));

        // Level at the end of the window matches the accepted one.
        assert!(!button.is_pressed(at(1_040)));
    }

    #[test]
    fn nothing_is_read_during_the_first_window_after_boot() {
        let (mut button, level) = button();
        level.set(false);
        assert!(!button.is_pressed(at(10)));
        assert!(button.is_pressed(at(30)));
    }
}
