#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Radio::new()`](fn@crate::radio::Radio::new)
//! - [`Radio::init()`](radio/struct.Radio.html#method.init)
//! - [`Radio::start_listening()`](radio/struct.Radio.html#method.start_listening)
//! - [`Radio::stop_listening()`](radio/struct.Radio.html#method.stop_listening)
//! - [`Radio::open_writing_pipe()`](radio/struct.Radio.html#method.open_writing_pipe)
//! - [`Radio::open_reading_pipe()`](radio/struct.Radio.html#method.open_reading_pipe)
//! - [`Radio::close_reading_pipe()`](radio/struct.Radio.html#method.close_reading_pipe)
//! - [`Radio::available()`](radio/struct.Radio.html#method.available)
//! - [`Radio::available_pipe()`](radio/struct.Radio.html#method.available_pipe)
//! - [`Radio::read()`](radio/struct.Radio.html#method.read)
//! - [`Radio::write()`](radio/struct.Radio.html#method.write)
//! - [`Radio::set_channel()`](radio/struct.Radio.html#method.set_channel)
//! - [`Radio::get_channel()`](radio/struct.Radio.html#method.get_channel)
//! - [`Radio::terminate()`](fn@crate::radio::Radio::terminate)
//!
//! ## Advanced API
//!
//! - [`Radio::start_write()`](radio/struct.Radio.html#method.start_write)
//! - [`Radio::get_fifo_state()`](radio/struct.Radio.html#method.get_fifo_state)
//! - [`Radio::status()`](radio/struct.Radio.html#method.status)
//! - [`Radio::clear_status_flags()`](radio/struct.Radio.html#method.clear_status_flags)
//! - [`Radio::flush_rx()`](radio/struct.Radio.html#method.flush_rx)
//! - [`Radio::flush_tx()`](radio/struct.Radio.html#method.flush_tx)
//! - [`Radio::observe_tx()`](radio/struct.Radio.html#method.observe_tx)
//! - [`Radio::rpd()`](radio/struct.Radio.html#method.rpd)
//! - [`Radio::read_register()`](radio/struct.Radio.html#method.read_register)
//! - [`Radio::write_register()`](radio/struct.Radio.html#method.write_register)
//! - [`Radio::spi_settle_us`](value@crate::radio::Radio::spi_settle_us)
//!
//! ## Configuration API
//!
//! - [`Radio::with_config()`](radio/struct.Radio.html#method.with_config)
//! - [`Radio::reset()`](radio/struct.Radio.html#method.reset)
//! - [`Radio::set_auto_ack()`](radio/struct.Radio.html#method.set_auto_ack)
//! - [`Radio::set_auto_ack_pipe()`](radio/struct.Radio.html#method.set_auto_ack_pipe)
//! - [`Radio::set_retries()`](radio/struct.Radio.html#method.set_retries)
//! - [`Radio::set_address_width()`](radio/struct.Radio.html#method.set_address_width)
//! - [`Radio::get_address_width()`](radio/struct.Radio.html#method.get_address_width)
//! - [`Radio::set_payload_size()`](radio/struct.Radio.html#method.set_payload_size)
//! - [`Radio::get_payload_size()`](radio/struct.Radio.html#method.get_payload_size)
//! - [`Radio::set_data_rate()`](radio/struct.Radio.html#method.set_data_rate)
//! - [`Radio::get_data_rate()`](radio/struct.Radio.html#method.get_data_rate)
//! - [`Radio::set_pa_level()`](radio/struct.Radio.html#method.set_pa_level)
//! - [`Radio::get_pa_level()`](radio/struct.Radio.html#method.get_pa_level)
//! - [`Radio::set_lna()`](fn@crate::radio::Radio::set_lna)
//! - [`Radio::set_crc_length()`](radio/struct.Radio.html#method.set_crc_length)
//! - [`Radio::get_crc_length()`](radio/struct.Radio.html#method.get_crc_length)
//! - [`Radio::is_powered()`](radio/struct.Radio.html#method.is_powered)
//! - [`Radio::power_up()`](radio/struct.Radio.html#method.power_up)
//! - [`Radio::power_down()`](radio/struct.Radio.html#method.power_down)
//!
#![no_std]

// must come first so the logging macros are visible to the other modules
mod fmt;

mod types;
pub use types::{AutoRetries, CrcLength, DataRate, FifoState, Mode, PaLevel, StatusFlags, WriteOutcome};
pub mod radio;

/// The SPI mode used by the nRF24L01 (CPOL = 0, CPHA = 0).
///
/// The radio accepts SPI clock frequencies up to 10 MHz.
pub const SPI_MODE: embedded_hal::spi::Mode = embedded_hal::spi::MODE_0;

/// The largest payload the radio's FIFOs can hold.
pub const MAX_PAYLOAD_SIZE: u8 = 32;
