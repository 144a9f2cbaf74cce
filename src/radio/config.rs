use crate::radio::rf24::bit_fields::{Config, RfSetup};
use crate::{AutoRetries, CrcLength, DataRate, PaLevel, MAX_PAYLOAD_SIZE};

/// Pipe addresses as they will be written to the radio.
///
/// Addresses are stored LSB first. Pipes 2 - 5 keep only their first byte;
/// the chip fills in the rest from pipe 1.
#[derive(Debug, Clone, Copy)]
struct AddressBook {
    tx: [u8; 5],
    full: [[u8; 5]; 2],
    lsb: [u8; 4],
    open: u8,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self {
            tx: [0xE7; 5],
            full: [[0xE7; 5], [0xC2; 5]],
            lsb: [0xC3, 0xC4, 0xC5, 0xC6],
            open: 0b11,
        }
    }
}

fn copy_prefix(dst: &mut [u8], src: &[u8]) {
    let len = dst.len().min(src.len()).min(5);
    dst[..len].copy_from_slice(&src[..len]);
}

impl AddressBook {
    fn store(&mut self, pipe: u8, address: &[u8]) {
        let Some(&first) = address.first() else {
            return;
        };
        match pipe {
            0 | 1 => copy_prefix(&mut self.full[pipe as usize], address),
            2..=5 => self.lsb[pipe as usize - 2] = first,
            _ => return,
        }
        self.open |= 1 << pipe;
    }

    fn load(&self, pipe: u8, address: &mut [u8]) {
        match pipe {
            0 | 1 => copy_prefix(address, &self.full[pipe as usize]),
            2..=5 => {
                copy_prefix(address, &self.full[1]);
                if let Some(first) = address.first_mut() {
                    *first = self.lsb[pipe as usize - 2];
                }
            }
            _ => (),
        }
    }
}

/// A complete set of radio settings, applied at once with
/// [`RadioInit::with_config()`](fn@crate::radio::prelude::RadioInit::with_config).
///
/// Build one from [`RadioConfig::default()`] (the chip's power-on state) and chain
/// `with_*()` calls. Out-of-range values are clamped exactly like the runtime setters do.
/// ```
/// use rf24_driver::{radio::RadioConfig, PaLevel};
/// let config = RadioConfig::default()
///     .with_channel(76)
///     .with_payload_length(4)
///     .with_pa_level(PaLevel::Low)
///     .with_tx_address(b"SND01")
///     .with_rx_address(1, b"RCV01");
/// assert_eq!(config.channel(), 76);
/// assert!(config.is_rx_pipe_enabled(1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RadioConfig {
    pub(crate) config_reg: Config,
    pub(crate) rf_setup: RfSetup,
    pub(crate) auto_retries: AutoRetries,
    address_width: u8,
    channel: u8,
    payload_length: u8,
    auto_ack: u8,
    addresses: AddressBook,
}

impl Default for RadioConfig {
    /// The register values the radio has after a power-on reset:
    ///
    /// - channel 2, 5 byte addresses, 32 byte payloads
    /// - 8 bit CRC, 2 Mbps, [`PaLevel::Max`], LNA off
    /// - auto-ACK on every pipe, 3 retries spaced 250 us apart
    /// - TX address `[0xE7; 5]`
    /// - pipe 0 open at `[0xE7; 5]`, pipe 1 open at `[0xC2; 5]`
    /// - pipes 2 - 5 closed, with first bytes `0xC3` - `0xC6`
    fn default() -> Self {
        Self {
            config_reg: Config::default(),
            rf_setup: RfSetup::default(),
            auto_retries: AutoRetries::from_bits(0x03),
            address_width: 5,
            channel: 2,
            payload_length: MAX_PAYLOAD_SIZE,
            auto_ack: 0x3F,
            addresses: AddressBook::default(),
        }
    }
}

impl RadioConfig {
    pub const fn crc_length(&self) -> CrcLength {
        self.config_reg.crc_length()
    }

    /// See [`RadioCrcLength::set_crc_length()`](fn@crate::radio::prelude::RadioCrcLength::set_crc_length).
    pub fn with_crc_length(self, length: CrcLength) -> Self {
        Self {
            config_reg: self.config_reg.with_crc_length(length),
            ..self
        }
    }

    pub const fn data_rate(&self) -> DataRate {
        self.rf_setup.data_rate()
    }

    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self {
            rf_setup: self.rf_setup.with_data_rate(data_rate),
            ..self
        }
    }

    pub const fn pa_level(&self) -> PaLevel {
        self.rf_setup.pa_level()
    }

    pub fn with_pa_level(self, level: PaLevel) -> Self {
        Self {
            rf_setup: self.rf_setup.with_pa_level(level),
            ..self
        }
    }

    pub const fn lna_enable(&self) -> bool {
        self.rf_setup.lna_enable()
    }

    /// Only older non-plus nRF24L01 modules and Si24R1 clones have a LNA gain bit.
    pub fn with_lna_enable(self, enable: bool) -> Self {
        Self {
            rf_setup: self.rf_setup.with_lna_enable(enable),
            ..self
        }
    }

    pub const fn address_width(&self) -> u8 {
        self.address_width
    }

    /// Widths other than 3, 4 or 5 bytes fall back to 5.
    pub fn with_address_width(self, width: u8) -> Self {
        Self {
            address_width: if (3..=5).contains(&width) { width } else { 5 },
            ..self
        }
    }

    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// The RF channel, capped at 127. The carrier sits at `2400 + channel` MHz.
    pub fn with_channel(self, channel: u8) -> Self {
        Self {
            channel: channel.min(127),
            ..self
        }
    }

    pub const fn auto_retries(&self) -> AutoRetries {
        self.auto_retries
    }

    /// See [`RadioAutoAck::set_retries()`](fn@crate::radio::prelude::RadioAutoAck::set_retries).
    pub fn with_auto_retries(self, delay: u8, count: u8) -> Self {
        Self {
            auto_retries: AutoRetries::with_policy(delay, count),
            ..self
        }
    }

    pub const fn auto_ack(&self) -> u8 {
        self.auto_ack
    }

    /// A mask with one bit per pipe (bit `n` for pipe `n`). Bits 6 and 7 are dropped.
    ///
    /// Auto-ACK on pipes 0 and 3 only:
    /// ```
    /// use rf24_driver::radio::RadioConfig;
    /// let config = RadioConfig::default().with_auto_ack(0b1001);
    /// assert_eq!(config.auto_ack(), 9);
    /// ```
    pub fn with_auto_ack(self, mask: u8) -> Self {
        Self {
            auto_ack: mask & 0x3F,
            ..self
        }
    }

    pub const fn payload_length(&self) -> u8 {
        self.payload_length
    }

    /// Static payload size. Anything outside [1, 32] becomes 32.
    pub fn with_payload_length(self, length: u8) -> Self {
        let payload_length = match length {
            1..=MAX_PAYLOAD_SIZE => length,
            _ => MAX_PAYLOAD_SIZE,
        };
        Self {
            payload_length,
            ..self
        }
    }

    /// Stop a pipe from receiving. Pipe numbers above 5 are ignored.
    pub fn close_rx_pipe(mut self, pipe: u8) -> Self {
        if pipe < 6 {
            self.addresses.open &= !(1 << pipe);
        }
        self
    }

    pub fn is_rx_pipe_enabled(&self, pipe: u8) -> bool {
        pipe < 6 && self.addresses.open & (1 << pipe) != 0
    }

    pub(crate) const fn rx_pipes_enabled(&self) -> u8 {
        self.addresses.open
    }

    /// Copy the address of `pipe` into `address` (up to 5 bytes).
    ///
    /// For pipes 2 - 5 the bytes after the first are those of pipe 1.
    pub fn rx_address(&self, pipe: u8, address: &mut [u8]) {
        self.addresses.load(pipe, address);
    }

    /// Open `pipe` for receiving on `address`.
    ///
    /// Only the first byte is kept for pipes 2 - 5. An empty address or a
    /// pipe above 5 leaves the config unchanged.
    pub fn with_rx_address(mut self, pipe: u8, address: &[u8]) -> Self {
        self.addresses.store(pipe, address);
        self
    }

    pub fn tx_address(&self, address: &mut [u8]) {
        copy_prefix(address, &self.addresses.tx);
    }

    /// Set the address payloads are sent to.
    ///
    /// Pipe 0 is opened on the same address so the chip can hear the
    /// auto-ACK. A later `with_rx_address(0, ..)` or `close_rx_pipe(0)`
    /// overrides that.
    pub fn with_tx_address(mut self, address: &[u8]) -> Self {
        copy_prefix(&mut self.addresses.tx, address);
        self.addresses.store(0, address);
        self
    }
}
