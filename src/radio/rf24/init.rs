use super::{mnemonics, Command, Radio, RadioError, Register};
use crate::{
    radio::{
        prelude::{
            RadioChannel, RadioFifo, RadioInit, RadioLink, RadioPipe, RadioPower, RadioRegisters,
            RadioStatus,
        },
        RadioConfig,
    },
    types::Mode,
    StatusFlags,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

/// The power-on values written by [`RadioInit::reset()`], in order.
const RESET_VALUES: [(Register, u8); 16] = [
    // 8 bit CRC, all IRQ events enabled, powered down
    (Register::Config, 0x08),
    (Register::EnAa, 0x3F),
    (Register::EnRxAddr, 0x03),
    // 5 byte addresses
    (Register::SetupAw, 0x03),
    // 250 us delay, 3 retries
    (Register::SetupRetr, 0x03),
    (Register::RfCh, 0x02),
    // 2 Mbps, 0 dBm
    (Register::RfSetup, 0x0E),
    (Register::Status, StatusFlags::IRQ_MASK),
    (Register::RxPwP0, 32),
    (Register::RxPwP1, 32),
    (Register::RxPwP2, 0),
    (Register::RxPwP3, 0),
    (Register::RxPwP4, 0),
    (Register::RxPwP5, 0),
    (Register::Dynpd, 0),
    (Register::Feature, 0),
];

impl<SPI, DO, DELAY> RadioInit for Radio<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ConfigErrorType = RadioError<SPI::Error, DO::Error>;

    /// Initialize the radio's hardware using the [`SpiDevice`] and [`OutputPin`] given
    /// to [`Radio::new()`].
    ///
    /// Returns [`RadioError::ChipNotPresent`] if the RF_SETUP register reads back
    /// as all zeros or all ones (a floating or shorted MISO line).
    fn init(&mut self) -> Result<(), Self::ConfigErrorType> {
        self._ce_pin.set_low().map_err(RadioError::Gpo)?;

        let rf_setup = self.read_byte(Register::RfSetup)?;
        if rf_setup == 0 || rf_setup == 0xFF {
            warn!("radio not detected (RF_SETUP = {})", rf_setup);
            return Err(RadioError::ChipNotPresent);
        }
        debug!("radio detected (RF_SETUP = {})", rf_setup);

        self.reset()?;
        self._dynamic_payloads = self.read_byte(Register::Feature)? & mnemonics::EN_DPL > 0;
        self.flush_rx()?;
        self.start_listening()
    }

    fn reset(&mut self) -> Result<(), Self::ConfigErrorType> {
        self.flush_tx()?;
        self.flush_rx()?;
        for (register, value) in RESET_VALUES {
            self.spi_write_byte(register, value)?;
        }
        self._dynamic_payloads = false;
        self.power_down()?;
        debug!("registers reset");
        Ok(())
    }

    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        self._ce_pin.set_low().map_err(RadioError::Gpo)?;
        // CRC length, IRQ masks, powered down as PRX = 0
        self.spi_write_byte(Register::Config, config.config_reg.into_bits())?;
        self._mode = Mode::PowerDown;
        self.clear_status_flags(StatusFlags::new())?;

        // Flush buffers
        self.flush_rx()?;
        self.flush_tx()?;

        let width = config.address_width();
        self.set_address_width(width)?;
        self.spi_write_byte(Register::SetupRetr, config.auto_retries.into_bits())?;
        self.spi_write_byte(Register::EnAa, config.auto_ack())?;
        self.spi_write_byte(Register::Dynpd, 0)?;
        self.spi_write_byte(Register::Feature, 0)?;
        self._dynamic_payloads = false;
        self.spi_write_byte(Register::RfSetup, config.rf_setup.into_bits())?;
        self.set_channel(config.channel())?;

        self._payload_length = config.payload_length();
        let width = width as usize;
        let mut address = [0; 5];
        config.tx_address(&mut address);
        self.spi_write_buf(Command::WriteRegister(Register::TxAddr), &address[..width])?;
        for pipe in 0..6 {
            let (Some(addr_reg), Some(pw_reg)) = (Register::rx_addr(pipe), Register::rx_pw(pipe))
            else {
                continue;
            };
            config.rx_address(pipe, &mut address);
            // pipes 2 - 5 only own their first byte
            let len = addr_reg.width().min(width);
            self.spi_write_buf(Command::WriteRegister(addr_reg), &address[..len])?;
            let payload_width = if config.is_rx_pipe_enabled(pipe) {
                self._payload_length
            } else {
                0
            };
            self.spi_write_byte(pw_reg, payload_width)?;
        }
        self.spi_write_byte(Register::EnRxAddr, config.rx_pipes_enabled())?;
        debug!("configuration applied");
        Ok(())
    }
}
