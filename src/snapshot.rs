//! Input snapshots and the change gate.
//!
//! [`InputPanel`] owns one debounce filter per input and turns a round of raw
//! pin reads into an [`InputSnapshot`]. [`accept`] decides whether a new
//! snapshot differs from the last accepted one.

use crate::debounce::Debounced;
use crate::pins::{AnalogInput, DigitalInput, PanelPins};
use crate::time::TimeInstant;
use crate::types::InputId;

/// The debounced state of every input at one instant.
///
/// The default snapshot has every switch and button disengaged and the
/// potentiometer at zero, which is also what the controller assumes before
/// the first capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSnapshot {
    pub switch1: bool,
    pub switch2: bool,
    pub switch3: bool,
    pub switch4: bool,
    pub left_button: bool,
    pub right_button: bool,
    /// Debounced potentiometer reading, `0..=1023`.
    pub potentiometer: u16,
}

impl InputSnapshot {
    /// Returns the value of a digital input, or `None` for the potentiometer.
    pub fn digital(&self, input: InputId) -> Option<bool> {
        match input {
            InputId::Switch1 => Some(self.switch1),
            InputId::Switch2 => Some(self.switch2),
            InputId::Switch3 => Some(self.switch3),
            InputId::Switch4 => Some(self.switch4),
            InputId::LeftButton => Some(self.left_button),
            InputId::RightButton => Some(self.right_button),
            InputId::Potentiometer => None,
        }
    }

    fn set_digital(&mut self, input: InputId, engaged: bool) {
        match input {
            InputId::Switch1 => self.switch1 = engaged,
            InputId::Switch2 => self.switch2 = engaged,
            InputId::Switch3 => self.switch3 = engaged,
            InputId::Switch4 => self.switch4 = engaged,
            InputId::LeftButton => self.left_button = engaged,
            InputId::RightButton => self.right_button = engaged,
            InputId::Potentiometer => {}
        }
    }
}

/// Returns true if `candidate` differs from `previous` in any field.
///
/// Comparison is exact: a one-count move of the potentiometer is a change.
#[inline]
pub fn accept(previous: &InputSnapshot, candidate: &InputSnapshot) -> bool {
    previous != candidate
}

/// Errors from reading the raw inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureError<D, A> {
    /// A switch or button could not be read.
    Digital {
        /// The input whose read failed.
        input: InputId,
        /// The pin's error.
        error: D,
    },
    /// The potentiometer could not be read.
    Analog(A),
}

impl<D: core::fmt::Debug, A: core::fmt::Debug> core::fmt::Display for CaptureError<D, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CaptureError::Digital { input, error } => {
                write!(f, "failed to read {}: {:?}", input, error)
            }
            CaptureError::Analog(error) => {
                write!(f, "failed to read potentiometer: {:?}", error)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<D: core::fmt::Debug, A: core::fmt::Debug> std::error::Error for CaptureError<D, A> {}

/// Debounce state for every input of the panel.
///
/// Created once at startup and updated on every capture.
#[derive(Clone)]
pub struct InputPanel<I: TimeInstant> {
    digital: [Debounced<bool, I>; 6],
    potentiometer: Debounced<u16, I>,
    truncate_potentiometer: bool,
}

impl<I: TimeInstant> InputPanel<I> {
    /// Creates the filters, all starting from the low level at `started`.
    pub fn new(started: I) -> Self {
        Self {
            digital: InputId::DIGITAL.map(|input| Debounced::new(input, started)),
            potentiometer: Debounced::new(InputId::Potentiometer, started),
            truncate_potentiometer: false,
        }
    }

    /// Narrows raw potentiometer readings to their low byte before they are
    /// debounced, as 8-bit storage of the converter value would.
    pub fn with_truncated_potentiometer(mut self, enabled: bool) -> Self {
        self.truncate_potentiometer = enabled;
        self
    }

    /// Reads every pin, updates the filters and returns the stable values.
    ///
    /// Inputs are sampled in [`InputId::DIGITAL`] order followed by the
    /// potentiometer. On a failed read the error is returned and no snapshot
    /// is produced; filters updated earlier in the round keep their update.
    pub fn capture<D, A>(
        &mut self,
        pins: &mut PanelPins<D, A>,
        now: I,
    ) -> Result<InputSnapshot, CaptureError<D::Error, A::Error>>
    where
        D: DigitalInput,
        A: AnalogInput,
    {
        let mut snapshot = InputSnapshot::default();

        for filter in self.digital.iter_mut() {
            let input = filter.input();
            let engaged = match pins.digital(input) {
                Some(pin) => pin
                    .is_engaged()
                    .map_err(|error| CaptureError::Digital { input, error })?,
                None => continue,
            };
            snapshot.set_digital(input, filter.update(engaged, now));
        }

        let mut raw = pins.potentiometer.read_raw().map_err(CaptureError::Analog)?;
        if self.truncate_potentiometer {
            raw &= 0x00ff;
        }
        snapshot.potentiometer = self.potentiometer.update(raw, now);

        Ok(snapshot)
    }

    /// Returns the current stable values without reading any pins.
    pub fn stable(&self) -> InputSnapshot {
        let mut snapshot = InputSnapshot::default();
        for filter in &self.digital {
            snapshot.set_digital(filter.input(), filter.read());
        }
        snapshot.potentiometer = self.potentiometer.read();
        snapshot
    }
}

impl<I> core::fmt::Debug for InputPanel<I>
where
    I: TimeInstant + core::fmt::Debug,
    I::Duration: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InputPanel")
            .field("digital", &self.digital)
            .field("potentiometer", &self.potentiometer)
            .field("truncate_potentiometer", &self.truncate_potentiometer)
            .finish()
    }
}
