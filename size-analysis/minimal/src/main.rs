#![no_std]
#![no_main]

use core::convert::Infallible;

use cortex_m_rt::entry;
use panic_halt as _;
use control_panel::{
    AnalogInput, Controller, DigitalInput, Millis, PanelPins, Quirks, TimeSource, Transport,
};

// ============================================================================
// Minimal Pin Implementations
// ============================================================================

/// Zero-size switch that never engages
pub struct MinimalSwitch;

impl DigitalInput for MinimalSwitch {
    type Error = Infallible;

    fn is_engaged(&mut self) -> Result<bool, Self::Error> {
        Ok(core::hint::black_box(false))
    }
}

/// Zero-size potentiometer
pub struct MinimalPot;

impl AnalogInput for MinimalPot {
    type Error = Infallible;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        Ok(core::hint::black_box(0))
    }
}

// ============================================================================
// Minimal Transport Implementation
// ============================================================================

/// Transport that discards every line, measuring library overhead only
pub struct MinimalTransport;

impl Transport for MinimalTransport {
    type Error = Infallible;

    fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        core::hint::black_box(line);
        Ok(())
    }
}

// ============================================================================
// Minimal TimeSource Implementation
// ============================================================================

pub struct MinimalTimeSource;

impl TimeSource<Millis> for MinimalTimeSource {
    fn now(&self) -> Millis {
        Millis(core::hint::black_box(0))
    }
}

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn run_cycles() {
    let clock = MinimalTimeSource;
    let mut pins = PanelPins {
        switch1: MinimalSwitch,
        switch2: MinimalSwitch,
        switch3: MinimalSwitch,
        switch4: MinimalSwitch,
        left_button: MinimalSwitch,
        right_button: MinimalSwitch,
        potentiometer: MinimalPot,
    };
    let mut transport = MinimalTransport;

    let mut controller = Controller::with_quirks(clock.now(), Quirks::corrected());
    for _ in 0..4 {
        let _ = controller.poll_with(&mut pins, &mut transport, &clock);
    }
    core::hint::black_box(controller);
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    run_cycles();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
