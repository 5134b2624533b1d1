//! Time-based debouncing shared by the digital and analog inputs.
//!
//! A [`Debounced`] record holds the filter state for one input and
//! [`debounce`] advances it by one raw reading. Nothing here touches hardware:
//! the caller supplies the reading and the instant, so the filter can be
//! driven by synthetic time in tests.
//!
//! The filter is a plain settle timer, not a hysteresis debouncer. The newest
//! raw reading becomes stable once it has been the latest reading for longer
//! than the settle window, however often the input changed before that. A
//! signal that keeps chattering is therefore never accepted while it
//! chatters, but whatever value it rests on is accepted one window later.

use crate::config::SETTLE_WINDOW_MS;
use crate::time::{TimeDuration, TimeInstant};
use crate::types::InputId;

/// Debounce state for a single input.
///
/// `V` is the reading type: `bool` for switches and buttons, `u16` for the
/// potentiometer. The stable value starts at `V::default()` (the "low"
/// level) and only changes inside [`debounce`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debounced<V, I: TimeInstant> {
    input: InputId,
    stable: V,
    last_reading: V,
    pending_since: I,
    settle_window: I::Duration,
}

impl<V, I> Debounced<V, I>
where
    V: Copy + PartialEq + Default,
    I: TimeInstant,
{
    /// Creates the filter for `input`, treating `started` as the moment the
    /// low level was last seen.
    pub fn new(input: InputId, started: I) -> Self {
        Self {
            input,
            stable: V::default(),
            last_reading: V::default(),
            pending_since: started,
            settle_window: I::Duration::from_millis(SETTLE_WINDOW_MS),
        }
    }

    /// Feeds one raw reading and returns the stable value afterwards.
    #[inline]
    pub fn update(&mut self, raw: V, now: I) -> V {
        *self = debounce(*self, raw, now);
        self.stable
    }

    /// Returns the stable value.
    #[inline]
    pub fn read(&self) -> V {
        self.stable
    }

    /// Returns the input this filter belongs to.
    pub fn input(&self) -> InputId {
        self.input
    }

    /// Returns the most recent raw reading.
    pub fn last_reading(&self) -> V {
        self.last_reading
    }

    /// Returns when the most recent raw reading first appeared.
    pub fn pending_since(&self) -> I {
        self.pending_since
    }

    /// Returns how long a reading must persist before it becomes stable.
    pub fn settle_window(&self) -> I::Duration {
        self.settle_window
    }

    /// Returns true while the latest raw reading differs from the stable value.
    pub fn is_settling(&self) -> bool {
        self.last_reading != self.stable
    }
}

/// Advances `state` by one raw reading taken at `now`.
///
/// A reading that differs from the previous one restarts the settle timer.
/// Independently, once strictly more than the settle window has passed since
/// the timer last restarted, the reading becomes the stable value.
pub fn debounce<V, I>(state: Debounced<V, I>, raw: V, now: I) -> Debounced<V, I>
where
    V: Copy + PartialEq,
    I: TimeInstant,
{
    let mut next = state;

    if raw != next.last_reading {
        next.pending_since = now;
    }

    if now.duration_since(next.pending_since) > next.settle_window {
        next.stable = raw;
    }

    next.last_reading = raw;
    next
}
