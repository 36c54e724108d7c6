use core::fmt;

use embassy_time::Instant;

use super::{BlinkState, DateTimeFields, Frame, TimeSetting, render};
use crate::hardware::traits::{Button, CharDisplay, RealTimeClock};

/// The four front-panel buttons.
pub struct Buttons<B> {
    pub setting: B,
    pub up: B,
    pub ok: B,
    pub cancel: B,
}

/// Button events, in the priority order they are dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    Setting,
    Cancel,
    Up,
    Ok,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error<R, D> {
    Rtc(R),
    Display(D),
    Format,
}

impl<R, D> From<fmt::Error> for Error<R, D> {
    fn from(_: fmt::Error) -> Self {
        Error::Format
    }
}

/// Application context: owns every piece of clock state and the devices it
/// talks to. The main loop calls [`ClockController::step`] once per
/// iteration.
pub struct ClockController<B, R, D> {
    buttons: Buttons<B>,
    rtc: R,
    display: D,
    setting: TimeSetting,
    blink: BlinkState,
}

impl<B, R, D> ClockController<B, R, D>
where
    B: Button,
    R: RealTimeClock,
    D: CharDisplay,
{
    pub fn new(buttons: Buttons<B>, rtc: R, display: D) -> Self {
        Self {
            buttons,
            rtc,
            display,
            setting: TimeSetting::new(),
            blink: BlinkState::new(),
        }
    }

    pub fn setting(&self) -> &TimeSetting {
        &self.setting
    }

    pub fn rtc(&self) -> &R {
        &self.rtc
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// One loop iteration: poll buttons, dispatch at most one event, render.
    ///
    /// Rendering always runs; if both the event and the render fail, the
    /// event's error is returned.
    pub fn step(&mut self, now: Instant) -> Result<(), Error<R::Error, D::Error>> {
        let handled = match self.poll_buttons(now) {
            Some(event) => self.handle(event, now),
            None => Ok(()),
        };
        // The frame is drawn even when the event failed.
        let shown = self.show(now);
        handled.and(shown)
    }

    /// Polls all four buttons so each keeps its debounce state current, and
    /// returns the event to act on this iteration.
    fn poll_buttons(&mut self, now: Instant) -> Option<Event> {
        let setting = self.buttons.setting.is_pressed(now);
        let cancel = self.buttons.cancel.is_pressed(now);
        let up = self.buttons.up.is_pressed(now);
        let ok = self.buttons.ok.is_pressed(now);

        if !self.setting.is_editing() {
            return setting.then_some(Event::Setting);
        }
        [(cancel, Event::Cancel), (up, Event::Up), (ok, Event::Ok)]
            .into_iter()
            .find_map(|(pressed, event)| pressed.then_some(event))
    }

    /// Applies one button event to the state machine.
    pub fn handle(&mut self, event: Event, now: Instant) -> Result<(), Error<R::Error, D::Error>> {
        match event {
            Event::Setting => {
                if self.setting.is_editing() {
                    return Ok(());
                }
                let snapshot = self.rtc.now().map_err(Error::Rtc)?;
                self.setting.enter(snapshot);
                self.blink.restart(now);
                #[cfg(feature = "defmt")]
                defmt::info!("setting mode: {}", snapshot);
            }
            Event::Cancel => {
                if self.setting.cancel() {
                    #[cfg(feature = "defmt")]
                    defmt::info!("setting cancelled");
                }
            }
            Event::Up => self.setting.up(),
            Event::Ok => match self.setting.ok() {
                Some(fields) => self.commit(&fields)?,
                None => self.blink.restart(now),
            },
        }
        Ok(())
    }

    fn commit(&mut self, fields: &DateTimeFields) -> Result<(), Error<R::Error, D::Error>> {
        #[cfg(feature = "defmt")]
        defmt::info!("writing {} to RTC", fields);
        self.rtc.adjust(fields).map_err(Error::Rtc)
    }

    /// Renders pending fields while editing, the live RTC otherwise.
    fn show(&mut self, now: Instant) -> Result<(), Error<R::Error, D::Error>> {
        let cursor = self.setting.editing_cursor();
        self.blink.update(now, cursor);

        let fields = match self.setting.pending() {
            Some(pending) => *pending,
            None => self.rtc.now().map_err(Error::Rtc)?,
        };
        let frame = render(&fields, self.blink.hidden(cursor))?;
        self.push(&frame).map_err(Error::Display)
    }

    fn push(&mut self, frame: &Frame) -> Result<(), D::Error> {
        self.display.set_cursor(0, 0)?;
        self.display.print(&frame.date)?;
        self.display.set_cursor(0, 1)?;
        self.display.print(&frame.time)
    }
}
