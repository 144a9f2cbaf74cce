use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{
    prelude::{RadioPaLevel, RadioRegisters},
    Radio, RadioError,
};
use crate::PaLevel;

use super::Register;

impl<SPI, DO, DELAY> RadioPaLevel for Radio<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PaLevelErrorType = RadioError<SPI::Error, DO::Error>;

    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType> {
        let rf_setup = self.read_byte(Register::RfSetup)?;
        Ok(PaLevel::from_bits(rf_setup))
    }

    /// The LNA bit is left untouched; see [`Radio::set_lna()`].
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType> {
        let rf_setup = self.read_byte(Register::RfSetup)?;
        self.spi_write_byte(
            Register::RfSetup,
            rf_setup & !PaLevel::MASK | pa_level.into_bits(),
        )
    }
}
