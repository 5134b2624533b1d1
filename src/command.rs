//! Actuator commands and how they are derived from a snapshot.

use crate::config::{
    POTENTIOMETER_MAX, POTENTIOMETER_MIN, Quirks, SERVO_COUNT, SPEED_LEVEL_MAX, SPEED_LEVEL_MIN,
};
use crate::snapshot::InputSnapshot;
use crate::types::Direction;

/// Requested state of one stepper motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepperCommand {
    pub direction: Direction,
    /// Speed level, `0..=5` for calibrated potentiometer readings.
    pub speed_level: u8,
}

/// Requested state of one servo.
///
/// No rule sets servo fields yet; they travel as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoCommand {
    pub angle: u8,
    /// Not carried on the wire.
    pub speed: u8,
}

/// Everything the actuator board is told in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorCommand {
    pub left_stepper: StepperCommand,
    pub right_stepper: StepperCommand,
    pub servos: [ServoCommand; SERVO_COUNT],
}

/// Derives the actuator command for an accepted snapshot.
///
/// A stepper is only given a direction and speed while its button is held.
/// With [`Quirks::right_speed_aliases_left`] set, the right button's speed
/// lands in the left stepper and the right stepper's speed stays zero.
pub fn derive(snapshot: &InputSnapshot, quirks: &Quirks) -> ActuatorCommand {
    let mut command = ActuatorCommand::default();

    if snapshot.left_button {
        command.left_stepper.direction = direction(snapshot);
        command.left_stepper.speed_level = speed_level(snapshot.potentiometer);
    }

    if snapshot.right_button {
        command.right_stepper.direction = direction(snapshot);
        let speed = speed_level(snapshot.potentiometer);
        if quirks.right_speed_aliases_left {
            command.left_stepper.speed_level = speed;
        } else {
            command.right_stepper.speed_level = speed;
        }
    }

    command
}

/// Picks the stepper direction from the first two switches.
///
/// Switch 2 alone selects reverse; every other combination, including both
/// or neither engaged, selects forward.
pub fn direction(snapshot: &InputSnapshot) -> Direction {
    match (snapshot.switch1, snapshot.switch2) {
        (true, false) => Direction::Forward,
        (false, true) => Direction::Reverse,
        _ => Direction::Forward,
    }
}

/// Maps a potentiometer reading onto the stepper speed levels.
///
/// Readings above the calibrated maximum are not clamped and scale past
/// [`SPEED_LEVEL_MAX`]; the result is narrowed to a byte like the wire value.
pub fn speed_level(potentiometer: u16) -> u8 {
    let level = map_range(
        potentiometer as i32,
        POTENTIOMETER_MIN,
        POTENTIOMETER_MAX,
        SPEED_LEVEL_MIN,
        SPEED_LEVEL_MAX,
    );
    level as u8
}

/// Linearly re-maps `value` from one integer range to another.
///
/// Uses integer arithmetic that truncates toward zero and does not clamp,
/// so values outside the input range map outside the output range. A
/// degenerate input range maps everything to `out_min`.
///
/// Intermediate values are computed in `i64`; a result that does not fit
/// an `i32` saturates at its bounds.
pub fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    let span = i64::from(in_max) - i64::from(in_min);
    if span == 0 {
        return out_min;
    }
    let scaled = (i64::from(value) - i64::from(in_min))
        .saturating_mul(i64::from(out_max) - i64::from(out_min))
        .saturating_div(span)
        .saturating_add(i64::from(out_min));
    scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_truncates_toward_zero() {
        assert_eq!(map_range(465, 0, 930, 0, 5), 2);
        assert_eq!(map_range(-1, 0, 930, 0, 5), 0);
        assert_eq!(map_range(-200, 0, 930, 0, 5), -1);
    }

    #[test]
    fn map_range_handles_inverted_and_degenerate_ranges() {
        assert_eq!(map_range(0, 0, 10, 100, 0), 100);
        assert_eq!(map_range(10, 0, 10, 100, 0), 0);
        assert_eq!(map_range(7, 3, 3, 1, 9), 1);
    }

    #[test]
    fn map_range_survives_extreme_inputs() {
        assert_eq!(map_range(i32::MAX, 0, 930, 0, 5), 11_545_611);
        assert_eq!(map_range(i32::MIN, 0, 930, 0, 5), -11_545_611);
        assert_eq!(map_range(i32::MAX, 0, 1, 0, i32::MAX), i32::MAX);
        assert_eq!(map_range(i32::MIN, i32::MAX, i32::MIN, 0, i32::MAX), i32::MAX);
    }
}
