use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::RadioPayload, Radio};
use crate::MAX_PAYLOAD_SIZE;

impl<SPI, DO, DELAY> RadioPayload for Radio<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    fn set_payload_size(&mut self, size: u8) {
        self._payload_length = if size == 0 || size > MAX_PAYLOAD_SIZE {
            MAX_PAYLOAD_SIZE
        } else {
            size
        };
    }

    fn get_payload_size(&self) -> u8 {
        self._payload_length
    }

    fn dynamic_payloads_enabled(&self) -> bool {
        self._dynamic_payloads
    }
}
