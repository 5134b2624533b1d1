//! Text framing of actuator commands for the serial link.
//!
//! A frame is one ASCII line:
//!
//! ```text
//! #<left dir>,<left speed>,<right dir>,<right speed>,<servo1>,<servo2>,<servo3>,<servo4>*
//! ```
//!
//! Every field is a byte written in decimal. Servo fields carry the angle
//! only. There is no escaping, checksum or length prefix.

use core::fmt::Write;

use heapless::String;

use crate::command::ActuatorCommand;

/// Marks the start of a frame.
pub const OPENING_MARKER: char = '#';

/// Marks the end of a frame.
pub const CLOSING_MARKER: char = '*';

/// Separates fields inside a frame.
pub const FIELD_DELIMITER: char = ',';

/// Number of fields in a frame.
pub const FIELD_COUNT: usize = 8;

/// Length of the longest possible frame: two markers, eight three-digit
/// fields and seven delimiters.
pub const FRAME_CAPACITY: usize = 2 + FIELD_COUNT * 3 + (FIELD_COUNT - 1);

/// An encoded frame, without line terminator.
pub type Frame = String<FRAME_CAPACITY>;

/// Frame encoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// The frame did not fit its buffer.
    CapacityExceeded,
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::CapacityExceeded => write!(f, "frame capacity exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FrameError {}

/// Returns the frame fields in wire order.
pub fn fields(command: &ActuatorCommand) -> [u8; FIELD_COUNT] {
    let [servo1, servo2, servo3, servo4] = command.servos;
    [
        command.left_stepper.direction.as_u8(),
        command.left_stepper.speed_level,
        command.right_stepper.direction.as_u8(),
        command.right_stepper.speed_level,
        servo1.angle,
        servo2.angle,
        servo3.angle,
        servo4.angle,
    ]
}

/// Encodes `command` into a frame.
pub fn encode(command: &ActuatorCommand) -> Result<Frame, FrameError> {
    let mut frame = Frame::new();
    write_frame(&mut frame, command).map_err(|_| FrameError::CapacityExceeded)?;
    Ok(frame)
}

/// Writes the frame for `command` into any formatter sink.
pub fn write_frame<W: Write>(out: &mut W, command: &ActuatorCommand) -> core::fmt::Result {
    out.write_char(OPENING_MARKER)?;
    for (index, value) in fields(command).iter().enumerate() {
        if index > 0 {
            out.write_char(FIELD_DELIMITER)?;
        }
        write!(out, "{}", value)?;
    }
    out.write_char(CLOSING_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{ServoCommand, StepperCommand};
    use crate::types::Direction;

    #[test]
    fn widest_frame_fits_with_room_to_spare() {
        let command = ActuatorCommand {
            left_stepper: StepperCommand {
                direction: Direction::Forward,
                speed_level: 255,
            },
            right_stepper: StepperCommand {
                direction: Direction::Forward,
                speed_level: 255,
            },
            servos: [ServoCommand {
                angle: 255,
                speed: 255,
            }; 4],
        };

        let frame = encode(&command).unwrap();
        assert_eq!(frame.len(), FRAME_CAPACITY - 4);
        assert_eq!(frame.as_str(), "#1,255,1,255,255,255,255,255*");
    }

    #[test]
    fn servo_speed_is_not_on_the_wire() {
        let mut command = ActuatorCommand::default();
        command.servos[2].speed = 90;
        assert_eq!(encode(&command).unwrap().as_str(), "#0,0,0,0,0,0,0,0*");
    }
}
