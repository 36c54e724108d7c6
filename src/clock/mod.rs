//! Clock application logic: field model, blinking, the time-setting state
//! machine, rendering and the controller that ties them to the hardware.

pub mod blink;
pub mod controller;
pub mod fields;
pub mod render;
pub mod setting;

pub use blink::BlinkState;
pub use controller::{Buttons, ClockController, Error, Event};
pub use fields::{DateTimeFields, Field};
pub use render::{Frame, render};
pub use setting::{Mode, TimeSetting};
