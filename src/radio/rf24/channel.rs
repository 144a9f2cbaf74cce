use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{
    prelude::{RadioChannel, RadioRegisters},
    Radio, RadioError,
};

use super::Register;

impl<SPI, DO, DELAY> RadioChannel for Radio<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ChannelErrorType = RadioError<SPI::Error, DO::Error>;

    /// The nRF24L01 support 128 channels. The specified `channel` is
    /// clamped to the range [0, 127].
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        self.spi_write_byte(Register::RfCh, channel.min(127))
    }

    /// See also [`RadioChannel::set_channel()`].
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        Ok(self.read_byte(Register::RfCh)? & 0x7F)
    }
}
