use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{
    prelude::{RadioPipe, RadioRegisters},
    Radio, RadioError,
};

use super::Register;

fn check_address<SPI, DO>(address: &[u8]) -> Result<(), RadioError<SPI, DO>> {
    if !(3..=5).contains(&address.len()) {
        warn!("rejected an address of {} bytes", address.len());
        return Err(RadioError::InvalidArgument);
    }
    Ok(())
}

impl<SPI, DO, DELAY> RadioPipe for Radio<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PipeErrorType = RadioError<SPI::Error, DO::Error>;

    fn open_reading_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        let (Some(addr_reg), Some(pw_reg)) = (Register::rx_addr(pipe), Register::rx_pw(pipe)) else {
            warn!("pipe {} is not in range [0, 5]", pipe);
            return Err(RadioError::InvalidPipe(pipe));
        };
        check_address(address)?;

        self.set_bits(Register::EnRxAddr, 1 << pipe)?;
        // pipes 2 - 5 only take the LSB
        let len = addr_reg.width().min(address.len());
        self.write_register(addr_reg, &address[..len])?;
        self.spi_write_byte(pw_reg, self._payload_length)?;
        debug!("opened reading pipe {}", pipe);
        Ok(())
    }

    fn open_writing_pipe(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        check_address(address)?;
        // pipe 0 receives the auto-ACK packets
        self.write_register(Register::RxAddrP0, address)?;
        self.write_register(Register::TxAddr, address)?;
        self.spi_write_byte(Register::RxPwP0, self._payload_length)
    }

    fn close_reading_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType> {
        if pipe > 5 {
            warn!("pipe {} is not in range [0, 5]", pipe);
            return Err(RadioError::InvalidPipe(pipe));
        }
        self.clear_bits(Register::EnRxAddr, 1 << pipe)
    }

    fn set_address_width(&mut self, width: u8) -> Result<(), Self::PipeErrorType> {
        let width = if (3..=5).contains(&width) { width } else { 5 };
        self.spi_write_byte(Register::SetupAw, width - 2)
    }

    fn get_address_width(&mut self) -> Result<u8, Self::PipeErrorType> {
        match self.read_byte(Register::SetupAw)? & 3 {
            0 => Err(RadioError::BinaryCorruption),
            value => Ok(value + 2),
        }
    }
}
