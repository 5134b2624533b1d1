//! Time abstraction traits for platform-agnostic timing.
//!
//! The debouncer only needs to know how long a reading has been present, so
//! the traits are limited to measuring elapsed milliseconds between instants.
//! [`Millis`] is a ready-made instant for the usual free-running `u32`
//! millisecond tick counter.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
///
/// Instants must come from a monotonic clock. Implementations backed by a
/// wrapping counter should make [`TimeInstant::duration_since`] wrap too.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Millisecond duration measured by a [`Millis`] counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisDuration(pub u32);

impl TimeDuration for MillisDuration {
    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        MillisDuration(millis.min(u32::MAX as u64) as u32)
    }
}

/// Milliseconds since startup, read from a free-running `u32` counter.
///
/// The counter wraps after ~49.7 days; elapsed time is computed with
/// wrapping subtraction so debouncing keeps working across the wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    /// The instant the counter starts from.
    pub const STARTUP: Millis = Millis(0);
}

impl TimeInstant for Millis {
    type Duration = MillisDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        MillisDuration(self.0.wrapping_sub(earlier.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_elapsed_survives_counter_wrap() {
        let before = Millis(u32::MAX - 9);
        let after = Millis(20);
        assert_eq!(after.duration_since(before), MillisDuration(30));
    }

    #[test]
    fn millis_duration_from_large_value_saturates() {
        assert_eq!(
            MillisDuration::from_millis(u64::MAX),
            MillisDuration(u32::MAX)
        );
    }
}
