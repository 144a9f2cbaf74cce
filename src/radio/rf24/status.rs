use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::{
    radio::{
        prelude::{RadioRegisters, RadioStatus},
        Radio, RadioError,
    },
    types::StatusFlags,
};

use super::{Command, Register};

impl<SPI, DO, DELAY> RadioStatus for Radio<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type StatusErrorType = RadioError<SPI::Error, DO::Error>;

    fn status(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.spi_read(0, Command::Nop)?;
        Ok(StatusFlags::from_bits(self._buf[0]))
    }

    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.spi_write_byte(Register::Status, flags.irq_bits())
    }

    fn observe_tx(&mut self) -> Result<(u8, u8), Self::StatusErrorType> {
        let value = self.read_byte(Register::ObserveTx)?;
        Ok((value >> 4, value & 0xF))
    }

    fn rpd(&mut self) -> Result<bool, Self::StatusErrorType> {
        Ok(self.read_byte(Register::Rpd)? & 1 == 1)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use crate::radio::{commands, prelude::*, Register};
    use crate::{spi_test_expects, test::mk_radio, StatusFlags};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn status() {
        let spi_expectations = spi_test_expects![(vec![commands::NOP], vec![0x6Cu8]),];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let flags = radio.status().unwrap();
        assert!(flags.rx_dr());
        assert!(flags.tx_ds());
        assert!(!flags.tx_df());
        assert_eq!(flags.rx_pipe(), 6);
        assert!(!flags.tx_full());
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn clear_status_flags() {
        let spi_expectations = spi_test_expects![
            (
                vec![Register::Status as u8 | commands::W_REGISTER, 0x70u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![Register::Status as u8 | commands::W_REGISTER, 0x10u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.clear_status_flags(StatusFlags::new()).unwrap();
        // RX_P_NO and TX_FULL are read-only, so they are never written
        radio
            .clear_status_flags(StatusFlags::from_bits(0x1F))
            .unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn observe_tx() {
        let spi_expectations = spi_test_expects![
            (vec![Register::ObserveTx as u8, 0u8], vec![0xEu8, 0xF3u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.observe_tx().unwrap(), (15, 3));
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn rpd() {
        let spi_expectations = spi_test_expects![
            // get the RPD register value
            (vec![Register::Rpd as u8, 0u8], vec![0xEu8, 0xFFu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(radio.rpd().unwrap());
        spi.done();
        ce_pin.done();
    }
}
