//! Shared test infrastructure for control-panel integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use control_panel::{AnalogInput, DigitalInput, Millis, PanelPins, TimeSource, Transport};
use heapless::{String, Vec};

// ============================================================================
// Mock Pins
// ============================================================================

/// Error reported by a mock pin set to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

/// Mock digital input with a settable level
#[derive(Debug, Default)]
pub struct MockSwitch {
    pub engaged: bool,
    pub faulty: bool,
}

impl DigitalInput for MockSwitch {
    type Error = PinFault;

    fn is_engaged(&mut self) -> Result<bool, Self::Error> {
        if self.faulty {
            Err(PinFault)
        } else {
            Ok(self.engaged)
        }
    }
}

/// Mock analog input with a settable raw value
#[derive(Debug, Default)]
pub struct MockPot {
    pub raw: u16,
    pub faulty: bool,
}

impl AnalogInput for MockPot {
    type Error = PinFault;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        if self.faulty {
            Err(PinFault)
        } else {
            Ok(self.raw)
        }
    }
}

pub type MockPins = PanelPins<MockSwitch, MockPot>;

/// All switches and buttons released, potentiometer at zero
pub fn released_pins() -> MockPins {
    PanelPins {
        switch1: MockSwitch::default(),
        switch2: MockSwitch::default(),
        switch3: MockSwitch::default(),
        switch4: MockSwitch::default(),
        left_button: MockSwitch::default(),
        right_button: MockSwitch::default(),
        potentiometer: MockPot::default(),
    }
}

// ============================================================================
// Mock Transport
// ============================================================================

/// Error reported by a transport set to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkDown;

/// Transport that records every line written to it
#[derive(Debug, Default)]
pub struct RecordingTransport {
    lines: Vec<String<40>, 32>,
    /// Number of upcoming writes that should fail
    pub fail_next: usize,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String<40>] {
        &self.lines
    }

    /// Only the frame lines, without the dispatch notices
    pub fn frames(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(|line| line.as_str())
            .filter(|line| line.starts_with('#'))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Transport for RecordingTransport {
    type Error = LinkDown;

    fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        if self.fail_next > 0 {
            self.fail_next -= 1;
            return Err(LinkDown);
        }
        let mut owned = String::new();
        owned.push_str(line).expect("line too long for test buffer");
        self.lines.push(owned).expect("too many lines for test buffer");
        Ok(())
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<Millis>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(Millis::STARTUP),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time.set(Millis(current.0.wrapping_add(millis)));
    }

    pub fn set_time(&self, time: Millis) {
        self.current_time.set(time);
    }
}

impl TimeSource<Millis> for MockTimeSource {
    fn now(&self) -> Millis {
        self.current_time.get()
    }
}
