//! Core types shared across the input and command sides.

/// Identifies one physical input on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputId {
    /// First toggle switch; selects forward when engaged alone.
    Switch1,
    /// Second toggle switch; selects reverse when engaged alone.
    Switch2,
    /// Third toggle switch.
    Switch3,
    /// Fourth toggle switch.
    Switch4,
    /// Momentary button enabling the left stepper.
    LeftButton,
    /// Momentary button enabling the right stepper.
    RightButton,
    /// Speed potentiometer.
    Potentiometer,
}

impl InputId {
    /// The digital inputs, in the order they are sampled each cycle.
    pub const DIGITAL: [InputId; 6] = [
        InputId::Switch1,
        InputId::Switch2,
        InputId::Switch3,
        InputId::Switch4,
        InputId::LeftButton,
        InputId::RightButton,
    ];
}

impl core::fmt::Display for InputId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            InputId::Switch1 => "switch 1",
            InputId::Switch2 => "switch 2",
            InputId::Switch3 => "switch 3",
            InputId::Switch4 => "switch 4",
            InputId::LeftButton => "left button",
            InputId::RightButton => "right button",
            InputId::Potentiometer => "potentiometer",
        };
        f.write_str(name)
    }
}

/// Stepper rotation direction, carried on the wire as `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    /// Wire value `0`. Also what a stepper carries when its button is released.
    #[default]
    Reverse = 0,

    /// Wire value `1`.
    Forward = 1,
}

impl Direction {
    /// Returns the wire value.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.as_u8()
    }
}
