//! Pin boundary: traits for reading raw input levels.
//!
//! The controller never talks to GPIO or ADC peripherals directly. Digital
//! inputs are read through [`DigitalInput`] and the potentiometer through
//! [`AnalogInput`]; both return `Result` so a board binding can report read
//! failures instead of inventing a level.
//!
//! [`ActiveHigh`] and [`ActiveLow`] adapt any `embedded_hal` input pin.

use embedded_hal::digital::InputPin;

use crate::types::InputId;

/// A switch or button that is either engaged or not.
pub trait DigitalInput {
    /// Error type returned by failed reads.
    type Error;

    /// Returns true when the input is currently engaged.
    fn is_engaged(&mut self) -> Result<bool, Self::Error>;
}

/// A 10-bit analog input.
pub trait AnalogInput {
    /// Error type returned by failed conversions.
    type Error;

    /// Returns the raw converter value, `0..=1023`.
    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

/// An input pin that reads high when engaged.
#[derive(Debug)]
pub struct ActiveHigh<P>(pub P);

impl<P: InputPin> DigitalInput for ActiveHigh<P> {
    type Error = P::Error;

    fn is_engaged(&mut self) -> Result<bool, Self::Error> {
        self.0.is_high()
    }
}

/// An input pin that reads low when engaged, e.g. a button to ground with a
/// pull-up.
#[derive(Debug)]
pub struct ActiveLow<P>(pub P);

impl<P: InputPin> DigitalInput for ActiveLow<P> {
    type Error = P::Error;

    fn is_engaged(&mut self) -> Result<bool, Self::Error> {
        self.0.is_low()
    }
}

/// Every raw input of the panel.
///
/// All digital inputs share one type, which on real hardware is usually an
/// erased pin wrapped in [`ActiveHigh`] or [`ActiveLow`].
#[derive(Debug)]
pub struct PanelPins<D, A> {
    pub switch1: D,
    pub switch2: D,
    pub switch3: D,
    pub switch4: D,
    pub left_button: D,
    pub right_button: D,
    pub potentiometer: A,
}

impl<D: DigitalInput, A: AnalogInput> PanelPins<D, A> {
    /// Returns the digital pin behind `input`, or `None` for the
    /// potentiometer.
    pub fn digital(&mut self, input: InputId) -> Option<&mut D> {
        match input {
            InputId::Switch1 => Some(&mut self.switch1),
            InputId::Switch2 => Some(&mut self.switch2),
            InputId::Switch3 => Some(&mut self.switch3),
            InputId::Switch4 => Some(&mut self.switch4),
            InputId::LeftButton => Some(&mut self.left_button),
            InputId::RightButton => Some(&mut self.right_button),
            InputId::Potentiometer => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    struct FixedPin(bool);

    impl ErrorType for FixedPin {
        type Error = Infallible;
    }

    impl InputPin for FixedPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[test]
    fn active_low_inverts_the_level() {
        assert_eq!(ActiveHigh(FixedPin(true)).is_engaged(), Ok(true));
        assert_eq!(ActiveLow(FixedPin(true)).is_engaged(), Ok(false));
        assert_eq!(ActiveLow(FixedPin(false)).is_engaged(), Ok(true));
    }
}
