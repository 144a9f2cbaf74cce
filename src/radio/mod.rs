//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod rf24;
pub use rf24::{commands, mnemonics, Command, Radio, RadioError, Register, DEFAULT_SPI_SETTLE_US};

mod config;
pub use config::RadioConfig;
