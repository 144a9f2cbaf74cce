//! The radio's API, split into one trait per concern.
//!
//! Each trait has its own associated error type. Glob-import them all:
//!
//! ```
//! use rf24_driver::radio::prelude::*;
//! ```

use crate::types::{AutoRetries, CrcLength, DataRate, FifoState, Mode, PaLevel, StatusFlags, WriteOutcome};

use super::{RadioConfig, Register};

/// Raw access to the radio's registers.
///
/// Every call is one SPI transaction (command byte plus data bytes),
/// except [`RadioRegisters::set_bits()`] and [`RadioRegisters::clear_bits()`]
/// which read the register and write it back in two transactions.
pub trait RadioRegisters {
    type RegisterErrorType;

    /// Read a register into `buf`. The buffer length (1 to 32 bytes) decides how
    /// many bytes are clocked in.
    fn read_register(
        &mut self,
        register: Register,
        buf: &mut [u8],
    ) -> Result<(), Self::RegisterErrorType>;

    /// Write the bytes of `buf` (1 to 32 bytes) to a register.
    fn write_register(&mut self, register: Register, buf: &[u8]) -> Result<(), Self::RegisterErrorType>;

    /// Read a single byte register.
    fn read_byte(&mut self, register: Register) -> Result<u8, Self::RegisterErrorType>;

    /// Write a single byte register.
    fn write_byte(&mut self, register: Register, value: u8) -> Result<(), Self::RegisterErrorType>;

    /// Set the bits of `mask` in a register, leaving the others untouched.
    fn set_bits(&mut self, register: Register, mask: u8) -> Result<(), Self::RegisterErrorType>;

    /// Clear the bits of `mask` in a register, leaving the others untouched.
    fn clear_bits(&mut self, register: Register, mask: u8) -> Result<(), Self::RegisterErrorType>;
}

/// RX pipes, the TX address, and the address width.
pub trait RadioPipe {
    type PipeErrorType;

    /// Listen on `address` with `pipe` (0 to 5). Addresses are 3 to 5 bytes, LSB first.
    ///
    /// Pipes 0 and 1 hold a whole address. Pipes 2 to 5 only hold the first
    /// byte and match on pipe 1's remaining bytes:
    /// ```ignore
    /// radio.open_reading_pipe(1, b"ANode")?; // listens on "ANode"
    /// radio.open_reading_pipe(2, b"B")?;     // rejected, too short
    /// radio.open_reading_pipe(2, b"Bxxxx")?; // listens on "BNode"
    /// ```
    ///
    /// The pipe's RX width is set to the current payload size.
    fn open_reading_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Set the address used for transmitting.
    ///
    /// Pipe 0 listens on the same address, so that auto-ACK packets are received.
    /// This means a reading pipe 0 must be opened again after calling this.
    fn open_writing_pipe(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Stop `pipe` from accepting payloads.
    fn close_reading_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType>;

    /// Set the address width (applies to all pipes).
    ///
    /// Valid widths are 3, 4 and 5. Any other value defaults to 5.
    fn set_address_width(&mut self, width: u8) -> Result<(), Self::PipeErrorType>;

    /// The address width shared by all pipes.
    fn get_address_width(&mut self) -> Result<u8, Self::PipeErrorType>;
}

/// The RF channel.
pub trait RadioChannel {
    type ChannelErrorType;

    /// Tune to `2400 + channel` MHz. Values above 127 are clamped to 127.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent the STATUS byte and the other read-only
/// diagnostic registers.
pub trait RadioStatus {
    type StatusErrorType;

    /// Fetch the STATUS byte with a NOP command.
    fn status(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Clear the radio's IRQ status flags.
    ///
    /// Set any member of [`StatusFlags`] to `true` to clear the corresponding
    /// interrupt event. Members set to `false` are left untouched.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;

    /// Get the OBSERVE_TX counters as `(lost_packets, retries)`.
    ///
    /// `lost_packets` saturates at 15 and is reset by writing RF_CH.
    /// `retries` counts the retransmissions of the last payload.
    fn observe_tx(&mut self) -> Result<(u8, u8), Self::StatusErrorType>;

    /// The Received Power Detector.
    ///
    /// Returns `true` if a signal stronger than -64 dBm was detected on the
    /// current channel while listening.
    fn rpd(&mut self) -> Result<bool, Self::StatusErrorType>;
}

/// The two 3-level payload FIFOs.
pub trait RadioFifo {
    type FifoErrorType;

    /// Discard every payload in the RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Discard every payload in the TX FIFO.
    ///
    /// This function is automatically called by
    /// [`RadioLink::write()`] when the transmission fails.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Fill level of the TX FIFO (`about_tx = true`) or the RX FIFO.
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;
}

/// Host-side payload size bookkeeping. Nothing here touches the bus.
pub trait RadioPayload {
    /// Set the size of statically sized payloads.
    ///
    /// Values outside the range [1, 32] default to 32. This is only stored
    /// on the host and applied to the RX_PW_Px registers as pipes are opened.
    fn set_payload_size(&mut self, size: u8);

    /// Get the currently configured payload size.
    fn get_payload_size(&self) -> u8;

    /// Were dynamically sized payloads enabled when the radio was initialized?
    ///
    /// When `true`, payloads are sent without padding.
    fn dynamic_payloads_enabled(&self) -> bool;
}

/// A trait to represent manipulation of the automatic acknowledgement
/// and auto-retransmit features.
pub trait RadioAutoAck {
    type AutoAckErrorType;

    /// Enable or disable the auto-ack feature for all pipes.
    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType>;

    /// Enable or disable the auto-ack feature for a specified `pipe`.
    fn set_auto_ack_pipe(&mut self, pipe: u8, enable: bool) -> Result<(), Self::AutoAckErrorType>;

    /// Get the auto-ack state of all pipes, one bit per pipe.
    fn get_auto_ack(&mut self) -> Result<u8, Self::AutoAckErrorType>;

    /// Configure the auto-retransmit policy. Both values are capped at 15.
    ///
    /// - `delay`: How long to wait between each retry, in multiples of
    ///   250 us. The minimum of 0 means 250 us, and the maximum of 15 means
    ///   4000 us.
    /// - `count`: How many retries before giving up. 0 disables auto-retransmit.
    fn set_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType>;

    /// Get the auto-retransmit policy.
    fn get_retries(&mut self) -> Result<AutoRetries, Self::AutoAckErrorType>;
}

/// Transmit power.
pub trait RadioPaLevel {
    type PaLevelErrorType;

    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType>;

    /// The LNA bit shares the register and is left as it is.
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType>;
}

/// Power state.
pub trait RadioPower {
    type PowerErrorType;

    /// Power down the radio. The CE pin is driven low first.
    ///
    /// The radio draws about 900 nA in this state and keeps its register values.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Power up the radio into Standby-I mode.
    ///
    /// `delay` is the number of microseconds to wait for the crystal oscillator
    /// to start. `None` waits 1500 us.
    fn power_up(&mut self, delay: Option<u32>) -> Result<(), Self::PowerErrorType>;

    /// Is the radio powered up?
    fn is_powered(&self) -> bool;
}

/// Packet checksums.
pub trait RadioCrcLength {
    type CrcLengthErrorType;

    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType>;

    /// Set the radio's CRC length.
    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType>;

    /// Disable the CRC.
    ///
    /// The radio forces CRC on while auto-ack is enabled for any pipe.
    fn disable_crc(&mut self) -> Result<(), Self::CrcLengthErrorType> {
        self.set_crc_length(CrcLength::Disabled)
    }
}

/// Over the air bit rate.
pub trait RadioDataRate {
    type DataRateErrorType;

    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;

    /// Set the radio's data rate.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;
}

/// A trait to bring the radio into a known state.
pub trait RadioInit {
    type ConfigErrorType;

    /// Initialize the radio.
    ///
    /// This probes the chip, resets every register to a known state,
    /// flushes the RX FIFO and starts listening.
    fn init(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Restore the power-on register values and power down.
    ///
    /// Both FIFOs are flushed and all IRQ flags are cleared.
    fn reset(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Reconfigure the radio using the given `config` object.
    ///
    /// See [`RadioConfig`] for an example.
    /// The radio is left powered down afterward.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to represent sending and receiving payloads.
pub trait RadioLink {
    type LinkErrorType;

    /// Put the radio into RX mode.
    ///
    /// This powers up the radio (if needed), clears all IRQ flags and drives CE high.
    /// Remember to open a reading pipe first.
    fn start_listening(&mut self) -> Result<(), Self::LinkErrorType>;

    /// Leave RX mode by driving CE low.
    fn stop_listening(&mut self) -> Result<(), Self::LinkErrorType>;

    /// Upload a payload and pulse CE to start transmitting it.
    ///
    /// This does not wait for the transmission to finish.
    /// Payloads shorter than the payload size are padded with zeros
    /// unless dynamic payloads are enabled.
    fn start_write(&mut self, buf: &[u8]) -> Result<(), Self::LinkErrorType>;

    /// Blocking send of a payload.
    ///
    /// Returns once the radio reports the payload as sent, gives up after
    /// its auto-retries, or after 500 ms of delays (SPI transfer time comes on
    /// top of that). The radio is powered down afterward.
    fn write(&mut self, buf: &[u8]) -> Result<WriteOutcome, Self::LinkErrorType>;

    /// Is there a payload waiting in the RX FIFO?
    ///
    /// The "RX Data Ready" flag is cleared when set.
    fn available(&mut self) -> Result<bool, Self::LinkErrorType>;

    /// The pipe number of the payload waiting at the top of the RX FIFO, if any.
    fn available_pipe(&mut self) -> Result<Option<u8>, Self::LinkErrorType>;

    /// Read the next payload into `buf`.
    ///
    /// The length of `buf` must equal the payload size (or be in range [1, 32]
    /// when dynamic payloads are enabled).
    /// Returns `true` if more payloads are waiting in the RX FIFO.
    fn read(&mut self, buf: &mut [u8]) -> Result<bool, Self::LinkErrorType>;

    /// The mode the radio was last put in.
    fn mode(&self) -> Mode;
}
