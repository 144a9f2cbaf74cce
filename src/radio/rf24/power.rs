use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{
    prelude::{RadioPower, RadioRegisters},
    Radio, RadioError,
};
use crate::types::Mode;

use super::{mnemonics, Register};

/// Tpd2stby with an external crystal is 1.5 ms.
const POWER_UP_DELAY_US: u32 = 1500;

impl<SPI, DO, DELAY> RadioPower for Radio<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PowerErrorType = RadioError<SPI::Error, DO::Error>;

    /// In full power down mode (a sleep state), the radio will consume approximately
    /// 900nA (.0009mA). In standby mode it consumes about 26uA.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        self._ce_pin.set_low().map_err(RadioError::Gpo)?; // Guarantee CE is low on powerDown
        let config = self.read_byte(Register::Config)?;
        self.spi_write_byte(Register::Config, config & !mnemonics::PWR_UP)?;
        self._mode = Mode::PowerDown;
        trace!("mode: {}", self._mode);
        Ok(())
    }

    fn power_up(&mut self, delay: Option<u32>) -> Result<(), Self::PowerErrorType> {
        let config = self.read_byte(Register::Config)?;
        // if not powered up then power up and wait for the oscillator to start
        if config & mnemonics::PWR_UP == 0 {
            self.spi_write_byte(Register::Config, config | mnemonics::PWR_UP)?;
            let delay = delay.unwrap_or(POWER_UP_DELAY_US);
            if delay > 0 {
                self._delay_impl.delay_us(delay);
            }
        }
        if self._mode == Mode::PowerDown {
            self._mode = Mode::StandbyI;
            trace!("mode: {}", self._mode);
        }
        Ok(())
    }

    fn is_powered(&self) -> bool {
        self._mode != Mode::PowerDown
    }
}
