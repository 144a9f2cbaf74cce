use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{
    prelude::{RadioCrcLength, RadioRegisters},
    Radio, RadioError,
};
use crate::CrcLength;

use super::Register;

impl<SPI, DO, DELAY> RadioCrcLength for Radio<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type CrcLengthErrorType = RadioError<SPI::Error, DO::Error>;

    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType> {
        let config = self.read_byte(Register::Config)?;
        Ok(CrcLength::from_bits(config))
    }

    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType> {
        let config = self.read_byte(Register::Config)?;
        self.spi_write_byte(
            Register::Config,
            config & !CrcLength::MASK | crc_length.into_bits(),
        )
    }
}
