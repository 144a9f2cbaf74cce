use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{
    prelude::{RadioDataRate, RadioRegisters},
    Radio, RadioError,
};
use crate::DataRate;

use super::Register;

impl<SPI, DO, DELAY> RadioDataRate for Radio<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DataRateErrorType = RadioError<SPI::Error, DO::Error>;

    /// Both `RF_DR_LOW` and `RF_DR_HIGH` set is a reserved combination,
    /// reported as [`RadioError::BinaryCorruption`].
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        let rf_setup = self.read_byte(Register::RfSetup)?;
        if rf_setup & DataRate::MASK == DataRate::MASK {
            return Err(RadioError::BinaryCorruption);
        }
        Ok(DataRate::from_bits(rf_setup))
    }

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        let rf_setup = self.read_byte(Register::RfSetup)?;
        self.spi_write_byte(
            Register::RfSetup,
            rf_setup & !DataRate::MASK | data_rate.into_bits(),
        )
    }
}
