use cortex_m::peripheral::SYST;
use rtt_target::rprintln;
use stm32f0xx_hal::{
    adc::{Adc, AdcPrecision},
    gpio::{gpioa, Analog, Floating, Input, Pin},
    pac,
    prelude::*,
    serial::Serial,
};

use control_panel::{LineWriter, PanelPins};
use stm32f0_demos::panel_pins::{AdcPotentiometer, HalSwitch};

/// Panel switch or button on an erased floating input
pub type Switch = HalSwitch<Pin<Input<Floating>>>;

/// Potentiometer on A1 (PA1)
pub type Potentiometer = AdcPotentiometer<gpioa::PA1<Analog>>;

pub type Pins = PanelPins<Switch, Potentiometer>;

/// ST-LINK virtual COM port (USART2 on PA2/PA3)
pub type Uplink = LineWriter<
    Serial<
        pac::USART2,
        gpioa::PA2<stm32f0xx_hal::gpio::Alternate<stm32f0xx_hal::gpio::AF1>>,
        gpioa::PA3<stm32f0xx_hal::gpio::Alternate<stm32f0xx_hal::gpio::AF1>>,
    >,
>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub pins: Pins,
    pub uplink: Uplink,
}

/// Initialize all hardware peripherals
///
/// Inputs sit on the Nucleo's Arduino header, matching the panel wiring:
/// - Switches 1-4: D2 (PA10), D3 (PB3), D4 (PB5), D5 (PB4)
/// - Left/right button: D6 (PB10), D7 (PA8)
/// - Potentiometer: A1 (PA1)
///
/// Switches and buttons have external pull-downs and read high when engaged.
pub fn init_hardware() -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    let mut rcc = dp.RCC.configure().freeze(&mut dp.FLASH);
    rprintln!("System clock configured: {} Hz", rcc.clocks.sysclk().0);
    configure_systick(&rcc, &mut cp.SYST);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpiob = dp.GPIOB.split(&mut rcc);

    let (pot_pin, tx, rx) = cortex_m::interrupt::free(|cs| {
        (
            gpioa.pa1.into_analog(cs),
            gpioa.pa2.into_alternate_af1(cs),
            gpioa.pa3.into_alternate_af1(cs),
        )
    });

    let mut adc = Adc::new(dp.ADC, &mut rcc);
    adc.set_precision(AdcPrecision::B_10);

    let pins = PanelPins {
        switch1: HalSwitch(gpioa.pa10.downgrade()),
        switch2: HalSwitch(gpiob.pb3.downgrade()),
        switch3: HalSwitch(gpiob.pb5.downgrade()),
        switch4: HalSwitch(gpiob.pb4.downgrade()),
        left_button: HalSwitch(gpiob.pb10.downgrade()),
        right_button: HalSwitch(gpioa.pa8.downgrade()),
        potentiometer: AdcPotentiometer::new(adc, pot_pin),
    };
    rprintln!("Panel inputs configured on D2-D7 and A1");

    let serial = Serial::usart2(dp.USART2, (tx, rx), 9_600.bps(), &mut rcc);
    rprintln!("Uplink configured on USART2 at 9600 baud");

    HardwareContext {
        pins,
        uplink: LineWriter::new(serial),
    }
}

/// Configure SysTick timer for 1ms interrupts
fn configure_systick(rcc: &stm32f0xx_hal::rcc::Rcc, syst: &mut SYST) {
    let sysclk_freq = rcc.clocks.sysclk();

    syst.set_clock_source(cortex_m::peripheral::syst::SystClkSource::Core);
    syst.set_reload((sysclk_freq.0 / 1_000) - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();
}
