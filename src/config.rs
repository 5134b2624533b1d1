//! Build-time constants and construction-time behaviour options.

/// How long a raw reading must stay unchanged before it becomes stable.
pub const SETTLE_WINDOW_MS: u64 = 50;

/// Largest raw value the 10-bit analog converter reports.
pub const ANALOG_MAX: u16 = 1023;

/// Potentiometer reading mapped to the lowest speed level.
pub const POTENTIOMETER_MIN: i32 = 0;

/// Potentiometer reading mapped to the highest speed level.
///
/// The pot never quite reaches full scale on the reference hardware, so the
/// calibrated top of the travel sits below [`ANALOG_MAX`].
pub const POTENTIOMETER_MAX: i32 = 930;

/// Lowest stepper speed level.
pub const SPEED_LEVEL_MIN: i32 = 0;

/// Highest stepper speed level for readings inside the calibrated range.
pub const SPEED_LEVEL_MAX: i32 = 5;

/// Number of servo channels carried by every command.
pub const SERVO_COUNT: usize = 4;

/// Behaviour switches for reproducing, or correcting, reference quirks.
///
/// The defaults keep the observable behaviour of the deployed controller
/// except where the full potentiometer range is needed:
///
/// | option                           | default |
/// |----------------------------------|---------|
/// | `right_speed_aliases_left`       | `true`  |
/// | `truncate_potentiometer_to_byte` | `false` |
/// | `dispatch_notice`                | `true`  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Quirks {
    /// The right button writes its speed level into the left stepper.
    pub right_speed_aliases_left: bool,

    /// Narrow raw potentiometer readings to their low byte before debouncing.
    pub truncate_potentiometer_to_byte: bool,

    /// Follow every frame with a `Dispatched` line.
    pub dispatch_notice: bool,
}

impl Quirks {
    /// Every quirk of the reference controller enabled.
    pub const fn faithful() -> Self {
        Self {
            right_speed_aliases_left: true,
            truncate_potentiometer_to_byte: true,
            dispatch_notice: true,
        }
    }

    /// Behavioural quirks disabled: each button drives its own stepper and the
    /// potentiometer keeps its full resolution.
    pub const fn corrected() -> Self {
        Self {
            right_speed_aliases_left: false,
            truncate_potentiometer_to_byte: false,
            dispatch_notice: true,
        }
    }

    /// Sets whether the right button's speed lands in the left stepper.
    pub const fn right_speed_aliases_left(mut self, enabled: bool) -> Self {
        self.right_speed_aliases_left = enabled;
        self
    }

    /// Sets whether raw potentiometer readings are narrowed to a byte.
    pub const fn truncate_potentiometer_to_byte(mut self, enabled: bool) -> Self {
        self.truncate_potentiometer_to_byte = enabled;
        self
    }

    /// Sets whether a `Dispatched` line follows each frame.
    pub const fn dispatch_notice(mut self, enabled: bool) -> Self {
        self.dispatch_notice = enabled;
        self
    }
}

impl Default for Quirks {
    fn default() -> Self {
        Self {
            right_speed_aliases_left: true,
            truncate_potentiometer_to_byte: false,
            dispatch_notice: true,
        }
    }
}
