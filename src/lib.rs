#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Debounced`**: Settle-timer filter state for one input, advanced by `debounce`
//! - **`InputSnapshot`**: Debounced state of all six digital inputs and the potentiometer
//! - **`InputPanel`**: Owns the filters and captures snapshots from raw pin reads
//! - **`accept`**: Change gate comparing a snapshot with the last accepted one
//! - **`ActuatorCommand`**: Stepper directions and speeds plus four servo channels
//! - **`derive`**: Maps an accepted snapshot to an actuator command
//! - **`encode`**: Frames a command as `#d1,s1,d2,s2,a1,a2,a3,a4*`
//! - **`Controller`**: Runs the poll loop and owns the last accepted snapshot
//! - **`DigitalInput`** / **`AnalogInput`**: Traits to implement for your pins
//! - **`Transport`**: Trait to implement for your serial link
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`Quirks`**: Switches for reference behaviours that may be kept or corrected

pub mod command;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod frame;
pub mod pins;
pub mod snapshot;
pub mod time;
pub mod transport;
pub mod types;

pub use command::{ActuatorCommand, ServoCommand, StepperCommand, derive, direction, speed_level};
pub use config::Quirks;
pub use controller::{
    Controller, ControllerError, ControllerState, DISPATCH_NOTICE, DispatchError, PollOutcome,
};
pub use debounce::{Debounced, debounce};
pub use frame::{Frame, FrameError, encode};
pub use pins::{ActiveHigh, ActiveLow, AnalogInput, DigitalInput, PanelPins};
pub use snapshot::{CaptureError, InputPanel, InputSnapshot, accept};
pub use time::{Millis, MillisDuration, TimeDuration, TimeInstant, TimeSource};
pub use transport::{LineWriter, Transport};
pub use types::{Direction, InputId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_command_encodes_to_all_zero_frame() {
        let frame = encode(&ActuatorCommand::default()).unwrap();
        assert_eq!(frame.as_str(), "#0,0,0,0,0,0,0,0*");
    }
}
