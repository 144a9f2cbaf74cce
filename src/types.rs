//! Value types shared by the radio traits and [`RadioConfig`](crate::radio::RadioConfig).

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// Transmit power, as output power relative to 1 mW.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaLevel {
    /// -18 dBm
    Min,
    /// -12 dBm
    Low,
    /// -6 dBm
    High,
    /// 0 dBm
    Max,
}

impl PaLevel {
    pub(crate) const MASK: u8 = 0b110;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PaLevel::Min => 0,
            PaLevel::Low => 2,
            PaLevel::High => 4,
            PaLevel::Max => 6,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 => PaLevel::Min,
            2 => PaLevel::Low,
            4 => PaLevel::High,
            _ => PaLevel::Max,
        }
    }
}

impl Display for PaLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PaLevel::Min => write!(f, "Min"),
            PaLevel::Low => write!(f, "Low"),
            PaLevel::High => write!(f, "High"),
            PaLevel::Max => write!(f, "Max"),
        }
    }
}

/// Over the air bit rate. Both ends of a link must agree on it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    Mbps1,
    Mbps2,
    /// Longest range. Not supported by the non-plus nRF24L01.
    Kbps250,
}

impl DataRate {
    /// The `RF_DR_LOW` (bit 5) and `RF_DR_HIGH` (bit 3) flags of the RF_SETUP register.
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0x8 => DataRate::Mbps2,
            0x20 => DataRate::Kbps250,
            _ => DataRate::Mbps1,
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// Size of the checksum appended to every packet.
///
/// The chip forces CRC on while auto-ACK is enabled on any pipe.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CrcLength {
    Disabled,
    Bit8,
    Bit16,
}

impl CrcLength {
    /// The `EN_CRC` (bit 3) and `CRCO` (bit 2) flags of the CONFIG register.
    pub(crate) const MASK: u8 = 0b1100;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            CrcLength::Disabled => 0,
            CrcLength::Bit8 => 8,
            CrcLength::Bit16 => 12,
        }
    }

    /// `CRCO` is meaningless while `EN_CRC` is clear.
    pub(crate) const fn from_bits(value: u8) -> Self {
        if value & 8 == 0 {
            CrcLength::Disabled
        } else if value & 4 == 0 {
            CrcLength::Bit8
        } else {
            CrcLength::Bit16
        }
    }

    /// The checksum length in bytes.
    pub const fn bytes(self) -> u8 {
        match self {
            CrcLength::Disabled => 0,
            CrcLength::Bit8 => 1,
            CrcLength::Bit16 => 2,
        }
    }
}

impl Display for CrcLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CrcLength::Disabled => write!(f, "disabled"),
            CrcLength::Bit8 => write!(f, "8 bit"),
            CrcLength::Bit16 => write!(f, "16 bit"),
        }
    }
}

/// Fill level of one of the radio's 3-level FIFOs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoState {
    Full,
    Empty,
    /// Holds 1 or 2 payloads.
    Occupied,
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FifoState::Empty => write!(f, "Empty"),
            FifoState::Full => write!(f, "Full"),
            FifoState::Occupied => write!(f, "Occupied"),
        }
    }
}

/// The logical operating mode of the radio, as driven by the CE pin and
/// the `PWR_UP`/`PRIM_RX` flags of the CONFIG register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// `PWR_UP` is clear and CE is low. About 900 nA.
    PowerDown,
    /// `PWR_UP` is set and CE is low.
    StandbyI,
    /// `PWR_UP` and `PRIM_RX` are set and CE is held high.
    ListeningRx,
    /// `PWR_UP` is set, `PRIM_RX` is clear, and a payload was pushed to the TX FIFO.
    TransmittingTx,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Mode::PowerDown => write!(f, "Power Down"),
            Mode::StandbyI => write!(f, "Standby-I"),
            Mode::ListeningRx => write!(f, "RX"),
            Mode::TransmittingTx => write!(f, "TX"),
        }
    }
}

/// The result of a blocking transmission.
///
/// Losing the radio link is an expected outcome, so it is reported here
/// rather than as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteOutcome {
    /// The payload was sent (and acknowledged if auto-ack is enabled).
    Success,
    /// The radio gave up after the configured number of auto-retries.
    MaxRetriesExceeded,
    /// Neither the "data sent" nor the "max retries" event occurred in time.
    Timeout,
}

impl WriteOutcome {
    /// Is this [`WriteOutcome::Success`]?
    pub const fn is_success(self) -> bool {
        matches!(self, WriteOutcome::Success)
    }
}

impl Display for WriteOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            WriteOutcome::Success => write!(f, "OK"),
            WriteOutcome::MaxRetriesExceeded => write!(f, "FAILED - max retries"),
            WriteOutcome::Timeout => write!(f, "FAILED - timeout"),
        }
    }
}

/// The auto-retransmit policy as stored in the SETUP_RETR register.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct AutoRetries {
    /// The delay between attempts, in units of 250 microseconds (`0` means 250 us).
    #[bits(4)]
    pub delay: u8,

    /// The maximum number of retransmissions (`0` disables auto-retransmit).
    #[bits(4)]
    pub count: u8,
}

#[cfg(feature = "defmt")]
impl defmt::Format for AutoRetries {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Delay: {=u16} us, Auto retransmit count: {=u8}",
            self.delay_us(),
            self.count()
        )
    }
}

impl AutoRetries {
    /// Create a policy, clamping both parameters to the range [0, 15].
    pub fn with_policy(delay: u8, count: u8) -> Self {
        Self::new().with_delay(delay.min(15)).with_count(count.min(15))
    }

    /// The delay between attempts in microseconds.
    pub const fn delay_us(&self) -> u16 {
        (self.delay() as u16 + 1) * 250
    }
}

impl Display for AutoRetries {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "Delay: {} us, Auto retransmit count: {}",
            self.delay_us(),
            self.count()
        )
    }
}

/// A struct used to describe the STATUS register.
///
/// The radio returns this byte at the start of every SPI transaction.
/// It is never cached by the driver; see
/// [`RadioStatus::status()`](fn@crate::radio::prelude::RadioStatus::status).
///
/// Select which interrupt flags to clear:
/// ```
/// use rf24_driver::StatusFlags;
/// let flags = StatusFlags::default().with_tx_ds(true).with_tx_df(true);
/// assert!(!flags.rx_dr());
/// ```
#[bitfield(u8, new = false, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// `RX_DR`: a payload arrived.
    pub rx_dr: bool,

    /// `TX_DS`: a payload was sent (and acknowledged when auto-ACK is on).
    pub tx_ds: bool,

    /// `MAX_RT`: the auto-retransmit limit was reached.
    pub tx_df: bool,

    /// The pipe number of the payload at the top of the RX FIFO (7 means empty).
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// Is the TX FIFO full?
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "RX_DR: {=bool}, TX_DS: {=bool}, MAX_RT: {=bool}, RX_P_NO: {=u8}, TX_FULL: {=bool}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df(),
            self.rx_pipe(),
            self.tx_full()
        )
    }
}

impl StatusFlags {
    /// `RX_DR`, `TX_DS` and `MAX_RT` (bits 6:4), in STATUS as well as CONFIG.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// All three interrupt flags set. Passing this to
    /// [`RadioStatus::clear_status_flags()`](fn@crate::radio::prelude::RadioStatus::clear_status_flags)
    /// clears every pending event.
    pub fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// The IRQ flags only, suitable for a write-1-to-clear of the STATUS register.
    pub(crate) const fn irq_bits(&self) -> u8 {
        self.into_bits() & Self::IRQ_MASK
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "RX_DR: {}, TX_DS: {}, MAX_RT: {}, RX_P_NO: {}, TX_FULL: {}",
            self.rx_dr() as u8,
            self.tx_ds() as u8,
            self.tx_df() as u8,
            self.rx_pipe(),
            self.tx_full() as u8
        )
    }
}
