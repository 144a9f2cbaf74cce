use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{
    prelude::{RadioAutoAck, RadioRegisters},
    Radio, RadioError,
};
use crate::AutoRetries;

use super::Register;

impl<SPI, DO, DELAY> RadioAutoAck for Radio<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type AutoAckErrorType = RadioError<SPI::Error, DO::Error>;

    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        self.spi_write_byte(Register::EnAa, 0x3F * enable as u8)
    }

    fn set_auto_ack_pipe(&mut self, pipe: u8, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        if pipe > 5 {
            warn!("pipe {} is not in range [0, 5]", pipe);
            return Err(RadioError::InvalidPipe(pipe));
        }
        if enable {
            self.set_bits(Register::EnAa, 1 << pipe)
        } else {
            self.clear_bits(Register::EnAa, 1 << pipe)
        }
    }

    fn get_auto_ack(&mut self) -> Result<u8, Self::AutoAckErrorType> {
        Ok(self.read_byte(Register::EnAa)? & 0x3F)
    }

    fn set_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType> {
        let retries = AutoRetries::with_policy(delay, count);
        self.spi_write_byte(Register::SetupRetr, retries.into_bits())
    }

    fn get_retries(&mut self) -> Result<AutoRetries, Self::AutoAckErrorType> {
        Ok(AutoRetries::from_bits(self.read_byte(Register::SetupRetr)?))
    }
}
