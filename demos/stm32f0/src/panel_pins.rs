use control_panel::{AnalogInput, DigitalInput};
use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::digital::v2::InputPin;
use stm32f0xx_hal::adc::Adc;

/// Active-high panel input on an `embedded-hal` 0.2 pin.
///
/// The control-panel crate adapts `embedded-hal` 1.0 pins directly; this HAL
/// still implements the 0.2 traits, so the board binding is done here.
pub struct HalSwitch<P>(pub P);

impl<P: InputPin> DigitalInput for HalSwitch<P> {
    type Error = P::Error;

    fn is_engaged(&mut self) -> Result<bool, Self::Error> {
        self.0.is_high()
    }
}

/// Potentiometer read through the on-chip ADC.
///
/// The ADC must be set to 10-bit precision so readings match the
/// `0..=1023` range the speed calibration expects.
pub struct AdcPotentiometer<P> {
    adc: Adc,
    pin: P,
}

impl<P> AdcPotentiometer<P>
where
    P: Channel<Adc, ID = u8>,
{
    pub fn new(adc: Adc, pin: P) -> Self {
        Self { adc, pin }
    }
}

impl<P> AnalogInput for AdcPotentiometer<P>
where
    P: Channel<Adc, ID = u8>,
{
    type Error = ();

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        nb::block!(self.adc.read(&mut self.pin))
    }
}
