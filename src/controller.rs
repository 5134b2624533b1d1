//! The poll loop: capture, gate, derive, encode, dispatch.
//!
//! [`Controller`] owns the debounce filters and the last accepted snapshot.
//! Call [`Controller::poll`] once per main-loop iteration; it never blocks
//! and dispatches at most one frame per call.

use crate::command::{self, ActuatorCommand};
use crate::config::Quirks;
use crate::frame::{FrameError, encode};
use crate::pins::{AnalogInput, DigitalInput, PanelPins};
use crate::snapshot::{CaptureError, InputPanel, InputSnapshot, accept};
use crate::time::{TimeInstant, TimeSource};
use crate::transport::Transport;

/// Informational line written after every frame.
pub const DISPATCH_NOTICE: &str = "Dispatched";

/// Where the controller is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerState {
    /// No accepted change is waiting to be sent.
    Idle,
    /// A change was accepted and its command has not been written yet.
    DispatchPending,
}

/// Result of one poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// Inputs match the last accepted snapshot; nothing was sent.
    Unchanged,
    /// A frame for this command was written to the transport.
    Dispatched(ActuatorCommand),
}

/// Errors that can occur during a poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerError<D, A, T> {
    /// Reading the inputs failed. Nothing was accepted.
    Capture(CaptureError<D, A>),
    /// The command could not be framed. The command is dropped.
    Frame(FrameError),
    /// Writing the frame failed. The command stays pending.
    Transport(T),
    /// The frame was written but the dispatch notice was not.
    Notice(T),
}

impl<D, A, T> From<CaptureError<D, A>> for ControllerError<D, A, T> {
    fn from(err: CaptureError<D, A>) -> Self {
        ControllerError::Capture(err)
    }
}

impl<D, A, T> From<FrameError> for ControllerError<D, A, T> {
    fn from(err: FrameError) -> Self {
        ControllerError::Frame(err)
    }
}

impl<D, A, T> From<DispatchError<T>> for ControllerError<D, A, T> {
    fn from(err: DispatchError<T>) -> Self {
        match err {
            DispatchError::Frame(err) => ControllerError::Frame(err),
            DispatchError::Transport(err) => ControllerError::Transport(err),
            DispatchError::Notice(err) => ControllerError::Notice(err),
        }
    }
}

impl<D, A, T> core::fmt::Display for ControllerError<D, A, T>
where
    D: core::fmt::Debug,
    A: core::fmt::Debug,
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ControllerError::Capture(err) => write!(f, "capture error: {}", err),
            ControllerError::Frame(err) => write!(f, "frame error: {}", err),
            ControllerError::Transport(err) => write!(f, "transport error: {:?}", err),
            ControllerError::Notice(err) => {
                write!(f, "frame sent, notice write failed: {:?}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<D, A, T> std::error::Error for ControllerError<D, A, T>
where
    D: core::fmt::Debug,
    A: core::fmt::Debug,
    T: core::fmt::Debug,
{
}

/// Errors from writing a pending command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchError<T> {
    /// The command could not be framed. The command is dropped.
    Frame(FrameError),
    /// Writing the frame failed. The command stays pending.
    Transport(T),
    /// The frame was written but the dispatch notice was not.
    Notice(T),
}

impl<T> From<FrameError> for DispatchError<T> {
    fn from(err: FrameError) -> Self {
        DispatchError::Frame(err)
    }
}

/// Translates panel inputs into actuator frames.
///
/// # Type Parameters
/// * `I` - Time instant type used for debouncing
pub struct Controller<I: TimeInstant> {
    panel: InputPanel<I>,
    last_accepted: InputSnapshot,
    pending: Option<ActuatorCommand>,
    state: ControllerState,
    quirks: Quirks,
}

impl<I: TimeInstant> Controller<I> {
    /// Creates an idle controller with default [`Quirks`].
    ///
    /// `started` is the instant the inputs are first assumed to be low.
    pub fn new(started: I) -> Self {
        Self::with_quirks(started, Quirks::default())
    }

    /// Creates an idle controller with the given quirks.
    pub fn with_quirks(started: I, quirks: Quirks) -> Self {
        Self {
            panel: InputPanel::new(started)
                .with_truncated_potentiometer(quirks.truncate_potentiometer_to_byte),
            last_accepted: InputSnapshot::default(),
            pending: None,
            state: ControllerState::Idle,
            quirks,
        }
    }

    /// Runs one cycle at instant `now`.
    ///
    /// If a previous dispatch failed on the transport, that command is retried
    /// first and no new capture happens this cycle. Otherwise the inputs are
    /// captured and, if they differ from the last accepted snapshot, the new
    /// command is derived and written.
    ///
    /// # Returns
    /// * `Ok(PollOutcome::Unchanged)` - Inputs unchanged, controller stays `Idle`
    /// * `Ok(PollOutcome::Dispatched(command))` - Frame written, back to `Idle`
    /// * `Err(ControllerError::Transport)` - Frame write failed, retried next poll
    /// * `Err(ControllerError::Notice)` - Frame written, only the notice failed;
    ///   the controller is already back to `Idle`
    /// * `Err` - Pin or framing failure otherwise
    pub fn poll<D, A, T>(
        &mut self,
        pins: &mut PanelPins<D, A>,
        transport: &mut T,
        now: I,
    ) -> Result<PollOutcome, ControllerError<D::Error, A::Error, T::Error>>
    where
        D: DigitalInput,
        A: AnalogInput,
        T: Transport,
    {
        if self.state == ControllerState::DispatchPending {
            return Ok(self.dispatch(transport)?);
        }

        let candidate = self.panel.capture(pins, now)?;
        if !self.submit(candidate) {
            #[cfg(feature = "defmt")]
            defmt::trace!("inputs unchanged");
            return Ok(PollOutcome::Unchanged);
        }

        Ok(self.dispatch(transport)?)
    }

    /// Runs one cycle, reading the instant from `clock`.
    pub fn poll_with<D, A, T, C>(
        &mut self,
        pins: &mut PanelPins<D, A>,
        transport: &mut T,
        clock: &C,
    ) -> Result<PollOutcome, ControllerError<D::Error, A::Error, T::Error>>
    where
        D: DigitalInput,
        A: AnalogInput,
        T: Transport,
        C: TimeSource<I>,
    {
        self.poll(pins, transport, clock.now())
    }

    /// Offers a snapshot to the change gate.
    ///
    /// When it differs from the last accepted snapshot it becomes the new
    /// last accepted snapshot, its command is derived and the controller
    /// moves to `DispatchPending`. A command still pending from an earlier
    /// submission is replaced, never queued.
    ///
    /// Returns true if the snapshot was accepted.
    pub fn submit(&mut self, candidate: InputSnapshot) -> bool {
        if !accept(&self.last_accepted, &candidate) {
            return false;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("accepted {}", candidate);

        self.last_accepted = candidate;
        self.pending = Some(command::derive(&candidate, &self.quirks));
        self.state = ControllerState::DispatchPending;
        true
    }

    /// Encodes and writes the pending command, if any.
    ///
    /// A failed frame write leaves the command pending for the next call. Once
    /// the frame is out the controller returns to `Idle`, even if writing the
    /// dispatch notice afterwards fails.
    pub fn dispatch<T: Transport>(
        &mut self,
        transport: &mut T,
    ) -> Result<PollOutcome, DispatchError<T::Error>> {
        let Some(command) = self.pending else {
            self.state = ControllerState::Idle;
            return Ok(PollOutcome::Unchanged);
        };

        let frame = match encode(&command) {
            Ok(frame) => frame,
            Err(err) => {
                self.pending = None;
                self.state = ControllerState::Idle;
                return Err(err.into());
            }
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("dispatching {}", frame.as_str());

        if let Err(err) = transport.write_line(&frame) {
            #[cfg(feature = "defmt")]
            defmt::warn!("frame write failed, will retry");
            return Err(DispatchError::Transport(err));
        }

        self.pending = None;
        self.state = ControllerState::Idle;

        if self.quirks.dispatch_notice {
            if let Err(err) = transport.write_line(DISPATCH_NOTICE) {
                #[cfg(feature = "defmt")]
                defmt::warn!("frame sent, notice write failed");
                return Err(DispatchError::Notice(err));
            }
        }

        Ok(PollOutcome::Dispatched(command))
    }

    /// Returns the current state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Returns the most recently accepted snapshot.
    pub fn last_accepted(&self) -> &InputSnapshot {
        &self.last_accepted
    }

    /// Returns the command waiting to be written, if any.
    pub fn pending(&self) -> Option<&ActuatorCommand> {
        self.pending.as_ref()
    }

    /// Returns the debounce state of the inputs.
    pub fn panel(&self) -> &InputPanel<I> {
        &self.panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Millis;
    use crate::transport::LineWriter;

    type Sink = LineWriter<heapless::String<128>>;

    #[test]
    fn submit_moves_to_dispatch_pending_until_dispatched() {
        let mut controller = Controller::new(Millis::STARTUP);
        let mut sink = Sink::new(heapless::String::new());

        let changed = InputSnapshot {
            switch1: true,
            left_button: true,
            potentiometer: 930,
            ..Default::default()
        };
        assert!(controller.submit(changed));
        assert_eq!(controller.state(), ControllerState::DispatchPending);
        assert!(controller.pending().is_some());

        let outcome = controller.dispatch(&mut sink).unwrap();
        assert!(matches!(outcome, PollOutcome::Dispatched(_)));
        assert_eq!(controller.state(), ControllerState::Idle);
        assert_eq!(sink.inner().as_str(), "#1,5,0,0,0,0,0,0*\r\nDispatched\r\n");
    }

    #[test]
    fn resubmitting_the_same_snapshot_is_rejected() {
        let mut controller = Controller::new(Millis::STARTUP);
        let changed = InputSnapshot {
            switch4: true,
            ..Default::default()
        };
        assert!(controller.submit(changed));
        assert!(!controller.submit(changed));
        assert_eq!(controller.last_accepted(), &changed);
    }

    #[test]
    fn dispatch_with_nothing_pending_is_a_no_op() {
        let mut controller = Controller::new(Millis::STARTUP);
        let mut sink = Sink::new(heapless::String::new());
        let outcome = controller.dispatch(&mut sink).unwrap();
        assert_eq!(outcome, PollOutcome::Unchanged);
        assert!(sink.inner().is_empty());
    }
}
