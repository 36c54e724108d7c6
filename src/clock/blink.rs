use embassy_time::{Duration, Instant};

use super::Field;
use crate::config::BLINK_INTERVAL;

/// Visibility of the field under the editing cursor.
///
/// A single flag is shared by all fields: only the field under the cursor
/// ever blinks, every other field is always shown.
#[derive(Clone, Copy, Debug)]
pub struct BlinkState {
    visible: bool,
    last_toggle: Instant,
    interval: Duration,
}

impl BlinkState {
    pub const fn new() -> Self {
        Self::with_interval(BLINK_INTERVAL)
    }

    pub const fn with_interval(interval: Duration) -> Self {
        Self {
            visible: true,
            last_toggle: Instant::from_ticks(0),
            interval,
        }
    }

    /// Queries one field and advances the blink clock.
    ///
    /// `cursor` is `None` outside setting mode. Querying any field that is
    /// not under the cursor forces the shared flag back to visible, so the
    /// next blinking field starts from a visible phase.
    pub fn visible(&mut self, now: Instant, field: Field, cursor: Option<Field>) -> bool {
        if cursor != Some(field) {
            self.visible = true;
            return true;
        }
        self.update(now, cursor);
        self.visible
    }

    /// Advances the blink clock once per frame.
    pub fn update(&mut self, now: Instant, cursor: Option<Field>) {
        if cursor.is_none() {
            self.visible = true;
        } else if now.saturating_duration_since(self.last_toggle) >= self.interval {
            self.visible = !self.visible;
            self.last_toggle = now;
        }
    }

    /// Starts a new visible phase at `now`.
    pub fn restart(&mut self, now: Instant) {
        self.visible = true;
        self.last_toggle = now;
    }

    /// Whether `field` is drawn this frame. Does not touch the blink clock.
    pub fn shows(&self, field: Field, cursor: Option<Field>) -> bool {
        cursor != Some(field) || self.visible
    }

    /// The field to blank this frame, if any.
    pub fn hidden(&self, cursor: Option<Field>) -> Option<Field> {
        cursor.filter(|&field| !self.shows(field, cursor))
    }
}

impl Default for BlinkState {
    fn default() -> Self {
        Self::new()
    }
}
