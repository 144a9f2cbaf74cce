use core::fmt::{Debug, Display, Formatter};

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
mod auto_ack;
pub(crate) mod bit_fields;
mod channel;
mod constants;
mod crc_length;
mod data_rate;
mod fifo;
mod init;
mod pa_level;
mod payload_length;
mod pipe;
mod power;
mod radio;
mod status;
pub use constants::{commands, mnemonics, Command, Register};

use super::prelude::{RadioPower, RadioRegisters};
use crate::types::Mode;

/// The number of microseconds to wait after every SPI transaction by default.
pub const DEFAULT_SPI_SETTLE_US: u32 = 1000;

/// An collection of error types to describe hardware malfunctions
/// and rejected arguments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadioError<SPI, DO> {
    /// The SPI device failed.
    Spi(SPI),
    /// The CE pin failed.
    Gpo(DO),
    /// The RF_SETUP register read back as `0x00` or `0xFF` during
    /// [`init()`](fn@crate::radio::prelude::RadioInit::init).
    ChipNotPresent,
    /// A pipe number outside the range [0, 5].
    InvalidPipe(u8),
    /// A buffer or address with a length the radio cannot handle.
    InvalidArgument,
    /// A register held a value the chip never produces, usually a sign of a noisy MISO line.
    BinaryCorruption,
}

impl<SPI: Debug, DO: Debug> Display for RadioError<SPI, DO> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            RadioError::Spi(e) => write!(f, "SPI transaction failed: {e:?}"),
            RadioError::Gpo(e) => write!(f, "CE pin failed: {e:?}"),
            RadioError::ChipNotPresent => write!(f, "no radio responded on the SPI bus"),
            RadioError::InvalidPipe(pipe) => write!(f, "pipe {pipe} is not in range [0, 5]"),
            RadioError::InvalidArgument => write!(f, "invalid argument"),
            RadioError::BinaryCorruption => write!(f, "binary corruption"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<SPI, DO> defmt::Format for RadioError<SPI, DO> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            RadioError::Spi(_) => defmt::write!(fmt, "SPI transaction failed"),
            RadioError::Gpo(_) => defmt::write!(fmt, "CE pin failed"),
            RadioError::ChipNotPresent => defmt::write!(fmt, "no radio responded on the SPI bus"),
            RadioError::InvalidPipe(pipe) => {
                defmt::write!(fmt, "pipe {=u8} is not in range [0, 5]", pipe)
            }
            RadioError::InvalidArgument => defmt::write!(fmt, "invalid argument"),
            RadioError::BinaryCorruption => defmt::write!(fmt, "binary corruption"),
        }
    }
}

/// An nRF24L01(+) on a [`SpiDevice`] with its CE line on an [`OutputPin`].
///
/// The API lives in the [`Radio*` traits](mod@crate::radio::prelude).
pub struct Radio<SPI, DO, DELAY> {
    /// The delay (in microseconds) observed after every SPI transaction.
    ///
    /// Defaults to [`DEFAULT_SPI_SETTLE_US`]. This also paces the status polling in
    /// [`RadioLink::write()`](fn@crate::radio::prelude::RadioLink::write),
    /// so a value of 0 makes that loop poll every 10 microseconds.
    /// Its 500 ms budget counts only these delays, not the time spent in SPI
    /// transfers, so the real time `write()` takes is at least that long.
    pub spi_settle_us: u32,
    _spi: SPI,
    _ce_pin: DO,
    _delay_impl: DELAY,
    _buf: [u8; 33],
    _mode: Mode,
    _payload_length: u8,
    _dynamic_payloads: bool,
}

impl<SPI, DO, DELAY> Radio<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Bind the driver to its transport. CSN is managed by the `spi` device,
    /// which must use [`SPI_MODE`](crate::SPI_MODE).
    ///
    /// Nothing is sent to the radio until
    /// [`init()`](fn@crate::radio::prelude::RadioInit::init) is called.
    pub fn new(ce_pin: DO, spi: SPI, delay_impl: DELAY) -> Radio<SPI, DO, DELAY> {
        Radio {
            spi_settle_us: DEFAULT_SPI_SETTLE_US,
            _spi: spi,
            _ce_pin: ce_pin,
            _delay_impl: delay_impl,
            _buf: [0u8; 33],
            _mode: Mode::PowerDown,
            _payload_length: 32,
            _dynamic_payloads: false,
        }
    }

    /// Power down the radio and hand back the SPI device, CE pin and delay.
    pub fn terminate(mut self) -> Result<(SPI, DO, DELAY), RadioError<SPI::Error, DO::Error>> {
        self.power_down()?;
        debug!("radio terminated");
        Ok((self._spi, self._ce_pin, self._delay_impl))
    }

    fn settle(&mut self) {
        if self.spi_settle_us > 0 {
            self._delay_impl.delay_us(self.spi_settle_us);
        }
    }

    /// Clock out the first `len` bytes of the internal buffer.
    ///
    /// The buffer holds the response (STATUS byte first) afterward.
    fn spi_transfer(&mut self, len: usize) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self._spi
            .transfer_in_place(&mut self._buf[..len])
            .map_err(RadioError::Spi)?;
        self.settle();
        Ok(())
    }

    /// Send `command` followed by `len` zero bytes. With `len == 0` this issues a
    /// bare command, leaving only STATUS in `_buf[0]`.
    fn spi_read(
        &mut self,
        len: usize,
        command: Command,
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self._buf[0] = command.opcode();
        self._buf[1..=len].fill(0);
        self.spi_transfer(len + 1)
    }

    fn spi_write_byte(
        &mut self,
        register: Register,
        byte: u8,
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self._buf[0] = Command::WriteRegister(register).opcode();
        self._buf[1] = byte;
        self.spi_transfer(2)
    }

    fn spi_write_buf(
        &mut self,
        command: Command,
        buf: &[u8],
    ) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        self._buf[0] = command.opcode();
        let buf_len = buf.len();
        self._buf[1..(buf_len + 1)].copy_from_slice(buf);
        self.spi_transfer(buf_len + 1)
    }

    /// Control the LNA gain bit of the RF_SETUP register.
    ///
    /// This only has an effect on older non-plus nRF24L01 modules and Si24R1 clones.
    /// It is disabled by [`reset()`](fn@crate::radio::prelude::RadioInit::reset).
    pub fn set_lna(&mut self, enable: bool) -> Result<(), RadioError<SPI::Error, DO::Error>> {
        if enable {
            self.set_bits(Register::RfSetup, 1)
        } else {
            self.clear_bits(Register::RfSetup, 1)
        }
    }
}

fn check_len<SPI, DO>(len: usize) -> Result<(), RadioError<SPI, DO>> {
    if len == 0 || len > 32 {
        warn!("rejected a transfer of {} bytes", len);
        return Err(RadioError::InvalidArgument);
    }
    Ok(())
}

impl<SPI, DO, DELAY> RadioRegisters for Radio<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type RegisterErrorType = RadioError<SPI::Error, DO::Error>;

    fn read_register(
        &mut self,
        register: Register,
        buf: &mut [u8],
    ) -> Result<(), Self::RegisterErrorType> {
        let len = buf.len();
        check_len(len)?;
        self.spi_read(len, Command::ReadRegister(register))?;
        buf.copy_from_slice(&self._buf[1..=len]);
        Ok(())
    }

    fn write_register(&mut self, register: Register, buf: &[u8]) -> Result<(), Self::RegisterErrorType> {
        check_len(buf.len())?;
        self.spi_write_buf(Command::WriteRegister(register), buf)
    }

    fn read_byte(&mut self, register: Register) -> Result<u8, Self::RegisterErrorType> {
        self.spi_read(1, Command::ReadRegister(register))?;
        Ok(self._buf[1])
    }

    fn write_byte(&mut self, register: Register, value: u8) -> Result<(), Self::RegisterErrorType> {
        self.spi_write_byte(register, value)
    }

    fn set_bits(&mut self, register: Register, mask: u8) -> Result<(), Self::RegisterErrorType> {
        let value = self.read_byte(register)?;
        self.spi_write_byte(register, value | mask)
    }

    fn clear_bits(&mut self, register: Register, mask: u8) -> Result<(), Self::RegisterErrorType> {
        let value = self.read_byte(register)?;
        self.spi_write_byte(register, value & !mask)
    }
}
