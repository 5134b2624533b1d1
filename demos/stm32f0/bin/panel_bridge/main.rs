#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};

use control_panel::{Controller, ControllerError, PollOutcome, TimeSource};
use stm32f0_demos::time_source::HalTimeSource;

mod hardware_setup;

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    stm32f0_demos::time_source::tick();
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Control Panel Bridge ===");

    let hw = hardware_setup::init_hardware();
    let mut pins = hw.pins;
    let mut uplink = hw.uplink;

    let time_source = HalTimeSource::new();
    let mut controller = Controller::new(time_source.now());

    rprintln!("=== System Ready ===");

    loop {
        match controller.poll_with(&mut pins, &mut uplink, &time_source) {
            Ok(PollOutcome::Unchanged) => {}
            Ok(PollOutcome::Dispatched(command)) => {
                rprintln!(
                    "Sent left {}/{} right {}/{}",
                    command.left_stepper.direction.as_u8(),
                    command.left_stepper.speed_level,
                    command.right_stepper.direction.as_u8(),
                    command.right_stepper.speed_level
                );
            }
            Err(ControllerError::Transport(_)) => rprintln!("Uplink write failed, retrying"),
            Err(err) => rprintln!("Poll failed: {:?}", err),
        }
    }
}
