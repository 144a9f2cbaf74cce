use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{mnemonics, Command, Radio, RadioError, Register};
use crate::{
    radio::prelude::{RadioFifo, RadioLink, RadioPower, RadioRegisters, RadioStatus},
    types::{Mode, WriteOutcome},
    StatusFlags,
};

/// The longest time [`RadioLink::write()`] waits for the radio to report an outcome.
const WRITE_TIMEOUT_US: u32 = 500_000;

/// Time to settle into TX mode (130 us minimum).
const TX_SETTLE_US: u32 = 150;

/// How long CE is held high to start a transmission (10 us minimum).
const CE_PULSE_US: u32 = 20;

/// The shortest interval between two status polls in [`RadioLink::write()`].
const MIN_POLL_US: u32 = 10;

impl<SPI, DO, DELAY> RadioLink for Radio<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type LinkErrorType = RadioError<SPI::Error, DO::Error>;

    fn start_listening(&mut self) -> Result<(), Self::LinkErrorType> {
        self.set_bits(Register::Config, mnemonics::PWR_UP | mnemonics::PRIM_RX)?;
        self.clear_status_flags(StatusFlags::new())?;
        self._ce_pin.set_high().map_err(RadioError::Gpo)?;
        self._mode = Mode::ListeningRx;
        trace!("mode: {}", self._mode);
        Ok(())
    }

    fn stop_listening(&mut self) -> Result<(), Self::LinkErrorType> {
        self._ce_pin.set_low().map_err(RadioError::Gpo)?;
        if self._mode != Mode::PowerDown {
            self._mode = Mode::StandbyI;
        }
        trace!("mode: {}", self._mode);
        Ok(())
    }

    fn start_write(&mut self, buf: &[u8]) -> Result<(), Self::LinkErrorType> {
        let buf_len = buf.len();
        let len = if self._dynamic_payloads {
            buf_len
        } else {
            self._payload_length as usize
        };
        if buf_len == 0 || buf_len > len || len > 32 {
            warn!("rejected a payload of {} bytes", buf_len);
            return Err(RadioError::InvalidArgument);
        }

        let config = self.read_byte(Register::Config)?;
        self.spi_write_byte(
            Register::Config,
            (config | mnemonics::PWR_UP) & !mnemonics::PRIM_RX,
        )?;
        self._delay_impl.delay_us(TX_SETTLE_US);

        self._buf[0] = Command::WriteTxPayload.opcode();
        self._buf[1..=buf_len].copy_from_slice(buf);
        // pad statically sized payloads with zeros
        self._buf[buf_len + 1..=len].fill(0);
        self.spi_transfer(len + 1)?;

        self._ce_pin.set_high().map_err(RadioError::Gpo)?;
        self._delay_impl.delay_us(CE_PULSE_US);
        self._ce_pin.set_low().map_err(RadioError::Gpo)?;
        self._mode = Mode::TransmittingTx;
        trace!("mode: {}", self._mode);
        Ok(())
    }

    /// The 500 ms budget is drained by the delays this function observes:
    /// each poll of the STATUS byte costs
    /// `max(spi_settle_us, 10)` microseconds. Time spent in the SPI transfers
    /// is not counted, so 500 ms is a lower bound on how long a `Timeout` takes.
    fn write(&mut self, buf: &[u8]) -> Result<WriteOutcome, Self::LinkErrorType> {
        self._ce_pin.set_low().map_err(RadioError::Gpo)?;
        self.start_write(buf)?;

        let poll_cost = self.spi_settle_us.max(MIN_POLL_US);
        let mut budget = WRITE_TIMEOUT_US;
        let (outcome, flags) = loop {
            let flags = self.status()?;
            if flags.tx_ds() {
                break (WriteOutcome::Success, flags);
            }
            if flags.tx_df() {
                break (WriteOutcome::MaxRetriesExceeded, flags);
            }
            budget = budget.saturating_sub(poll_cost);
            if budget == 0 {
                break (WriteOutcome::Timeout, flags);
            }
            if self.spi_settle_us < MIN_POLL_US {
                self._delay_impl.delay_us(MIN_POLL_US - self.spi_settle_us);
            }
        };

        self.clear_status_flags(flags.with_tx_ds(true).with_tx_df(true))?;
        if !outcome.is_success() {
            // don't leave the payload for the next CE pulse
            self.flush_tx()?;
        }
        self.power_down()?;
        debug!("write: {}", outcome);
        Ok(outcome)
    }

    fn available(&mut self) -> Result<bool, Self::LinkErrorType> {
        let flags = self.status()?;
        if flags.rx_dr() {
            self.clear_status_flags(StatusFlags::default().with_rx_dr(true))?;
            return Ok(true);
        }
        let fifo = self.read_byte(Register::FifoStatus)?;
        Ok(fifo & mnemonics::RX_EMPTY == 0)
    }

    fn available_pipe(&mut self) -> Result<Option<u8>, Self::LinkErrorType> {
        let pipe = self.status()?.rx_pipe();
        if pipe < 6 {
            Ok(Some(pipe))
        } else {
            Ok(None)
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<bool, Self::LinkErrorType> {
        let len = buf.len();
        let valid = if self._dynamic_payloads {
            (1..=32).contains(&len)
        } else {
            len == self._payload_length as usize
        };
        if !valid {
            warn!("rejected a read of {} bytes", len);
            return Err(RadioError::InvalidArgument);
        }
        self.spi_read(len, Command::ReadRxPayload)?;
        buf.copy_from_slice(&self._buf[1..=len]);
        self.clear_status_flags(StatusFlags::default().with_rx_dr(true))?;
        let fifo = self.read_byte(Register::FifoStatus)?;
        Ok(fifo & mnemonics::RX_EMPTY == 0)
    }

    fn mode(&self) -> Mode {
        self._mode
    }
}
