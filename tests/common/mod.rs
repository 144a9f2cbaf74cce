//! A register-level simulation of nRF24L01 chips sharing one channel of "air".
//!
//! Each [`SimSpi`]/[`SimCe`] pair drives one simulated chip. A rising edge on CE
//! while the chip is a powered PTX with a loaded TX FIFO transmits the top payload
//! to every listening chip whose channel, data rate, CRC and address match.
#![allow(dead_code)]

use std::{cell::RefCell, collections::VecDeque, convert::Infallible, rc::Rc};

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType as PinErrorType, OutputPin},
    spi::{ErrorType as SpiErrorType, Operation, SpiDevice},
};
use rf24_driver::radio::Radio;

const CONFIG: usize = 0x00;
const EN_AA: usize = 0x01;
const EN_RXADDR: usize = 0x02;
const SETUP_AW: usize = 0x03;
const SETUP_RETR: usize = 0x04;
const RF_CH: usize = 0x05;
const RF_SETUP: usize = 0x06;
const STATUS: usize = 0x07;
const OBSERVE_TX: usize = 0x08;
const RX_ADDR_P0: usize = 0x0A;
const RX_ADDR_P1: usize = 0x0B;
const TX_ADDR: usize = 0x10;
const RX_PW_P0: usize = 0x11;
const FIFO_STATUS: usize = 0x17;

const RX_DR: u8 = 0x40;
const TX_DS: u8 = 0x20;
const MAX_RT: u8 = 0x10;
const PWR_UP: u8 = 2;
const PRIM_RX: u8 = 1;

pub struct Chip {
    regs: [u8; 0x20],
    rx_addr_p0: [u8; 5],
    rx_addr_p1: [u8; 5],
    tx_addr: [u8; 5],
    rx_fifo: VecDeque<(u8, Vec<u8>)>,
    tx_fifo: VecDeque<Vec<u8>>,
    ce: bool,
    /// An unresponsive chip never reports the outcome of a transmission.
    pub stuck: bool,
    pub transactions: usize,
}

impl Default for Chip {
    fn default() -> Self {
        let mut regs = [0u8; 0x20];
        regs[CONFIG] = 0x08;
        regs[EN_AA] = 0x3F;
        regs[EN_RXADDR] = 0x03;
        regs[SETUP_AW] = 0x03;
        regs[SETUP_RETR] = 0x03;
        regs[RF_CH] = 0x02;
        regs[RF_SETUP] = 0x0E;
        regs[0x0C..=0x0F].copy_from_slice(&[0xC3, 0xC4, 0xC5, 0xC6]);
        Self {
            regs,
            rx_addr_p0: [0xE7; 5],
            rx_addr_p1: [0xC2; 5],
            tx_addr: [0xE7; 5],
            rx_fifo: VecDeque::new(),
            tx_fifo: VecDeque::new(),
            ce: false,
            stuck: false,
            transactions: 0,
        }
    }
}

impl Chip {
    fn status(&self) -> u8 {
        let rx_p_no = self.rx_fifo.front().map_or(7, |(pipe, _)| *pipe);
        let tx_full = (self.tx_fifo.len() == 3) as u8;
        self.regs[STATUS] & 0x70 | rx_p_no << 1 | tx_full
    }

    fn fifo_status(&self) -> u8 {
        let mut value = 0;
        if self.rx_fifo.is_empty() {
            value |= 1;
        }
        if self.rx_fifo.len() == 3 {
            value |= 2;
        }
        if self.tx_fifo.is_empty() {
            value |= 0x10;
        }
        if self.tx_fifo.len() == 3 {
            value |= 0x20;
        }
        value
    }

    fn address_width(&self) -> usize {
        self.regs[SETUP_AW] as usize + 2
    }

    fn pipe_address(&self, pipe: usize) -> Vec<u8> {
        let width = self.address_width();
        match pipe {
            0 => self.rx_addr_p0[..width].to_vec(),
            1 => self.rx_addr_p1[..width].to_vec(),
            _ => {
                let mut address = self.rx_addr_p1[..width].to_vec();
                address[0] = self.regs[RX_ADDR_P0 + pipe];
                address
            }
        }
    }

    fn is_listening(&self) -> bool {
        self.ce && self.regs[CONFIG] & (PWR_UP | PRIM_RX) == PWR_UP | PRIM_RX
    }

    fn is_transmitting(&self) -> bool {
        self.regs[CONFIG] & (PWR_UP | PRIM_RX) == PWR_UP
    }

    /// Is `other` tuned to the same air interface?
    fn hears(&self, other: &Chip) -> bool {
        self.regs[RF_CH] == other.regs[RF_CH]
            && self.regs[RF_SETUP] & 0x28 == other.regs[RF_SETUP] & 0x28
            && self.regs[CONFIG] & 0x0C == other.regs[CONFIG] & 0x0C
            && self.regs[SETUP_AW] == other.regs[SETUP_AW]
    }

    /// Offer a packet to this chip. Returns the pipe that accepted it.
    fn receive(&mut self, address: &[u8], payload: &[u8]) -> Option<u8> {
        if !self.is_listening() {
            return None;
        }
        let pipe = (0..6).find(|pipe| {
            self.regs[EN_RXADDR] & (1 << pipe) > 0 && self.pipe_address(*pipe) == address
        })?;
        if self.regs[RX_PW_P0 + pipe] as usize != payload.len() || self.rx_fifo.len() == 3 {
            return None;
        }
        self.rx_fifo.push_back((pipe as u8, payload.to_vec()));
        self.regs[STATUS] |= RX_DR;
        Some(pipe as u8)
    }

    fn write_register(&mut self, register: usize, data: &[u8]) {
        let len = data.len().min(5);
        match register {
            STATUS => self.regs[STATUS] &= !(data[0] & 0x70),
            RX_ADDR_P0 => self.rx_addr_p0[..len].copy_from_slice(&data[..len]),
            RX_ADDR_P1 => self.rx_addr_p1[..len].copy_from_slice(&data[..len]),
            TX_ADDR => self.tx_addr[..len].copy_from_slice(&data[..len]),
            RF_CH => {
                self.regs[RF_CH] = data[0] & 0x7F;
                // resets the lost packet counter
                self.regs[OBSERVE_TX] &= 0x0F;
            }
            OBSERVE_TX | FIFO_STATUS => (),
            _ => self.regs[register] = data[0],
        }
    }

    fn read_register(&self, register: usize, out: &mut [u8]) {
        let len = out.len().min(5);
        match register {
            STATUS => out[0] = self.status(),
            FIFO_STATUS => out[0] = self.fifo_status(),
            RX_ADDR_P0 => out[..len].copy_from_slice(&self.rx_addr_p0[..len]),
            RX_ADDR_P1 => out[..len].copy_from_slice(&self.rx_addr_p1[..len]),
            TX_ADDR => out[..len].copy_from_slice(&self.tx_addr[..len]),
            _ => out[0] = self.regs[register],
        }
    }

    fn execute(&mut self, buf: &mut [u8]) {
        self.transactions += 1;
        let command = buf[0];
        let status = self.status();
        match command {
            0x00..=0x1F => self.read_register(command as usize, &mut buf[1..]),
            0x20..=0x3F => self.write_register((command & 0x1F) as usize, &buf[1..]),
            0x61 => {
                let payload = self.rx_fifo.pop_front().map(|(_, p)| p).unwrap_or_default();
                let len = payload.len().min(buf.len() - 1);
                buf[1..=len].copy_from_slice(&payload[..len]);
            }
            0xA0 => {
                if self.tx_fifo.len() < 3 {
                    self.tx_fifo.push_back(buf[1..].to_vec());
                }
            }
            0xE1 => self.tx_fifo.clear(),
            0xE2 => self.rx_fifo.clear(),
            0x50 | 0xE3 | 0xFF => (),
            _ => panic!("unknown command {command:#04X}"),
        }
        buf[0] = status;
    }
}

#[derive(Default)]
pub struct Air {
    pub chips: Vec<Chip>,
}

impl Air {
    /// A rising edge of CE on chip `id`.
    fn pulse(&mut self, id: usize) {
        if !self.chips[id].is_transmitting() || self.chips[id].stuck {
            return;
        }
        let Some(payload) = self.chips[id].tx_fifo.front().cloned() else {
            return;
        };
        let width = self.chips[id].address_width();
        let address = self.chips[id].tx_addr[..width].to_vec();
        let wants_ack = self.chips[id].regs[EN_AA] & 1 > 0;
        // the ACK comes back to the TX address on pipe 0
        let hears_ack = self.chips[id].regs[EN_RXADDR] & 1 > 0
            && self.chips[id].pipe_address(0) == address;

        let mut acked = false;
        for peer in 0..self.chips.len() {
            if peer == id || !self.chips[peer].hears(&self.chips[id]) {
                continue;
            }
            if let Some(pipe) = self.chips[peer].receive(&address, &payload) {
                acked |= self.chips[peer].regs[EN_AA] & (1 << pipe) > 0;
            }
        }

        let sender = &mut self.chips[id];
        if !wants_ack || (acked && hears_ack) {
            sender.tx_fifo.pop_front();
            sender.regs[STATUS] |= TX_DS;
        } else {
            // every retry was lost
            let retries = sender.regs[SETUP_RETR] & 0x0F;
            let lost = (sender.regs[OBSERVE_TX] >> 4).saturating_add(1).min(15);
            sender.regs[OBSERVE_TX] = lost << 4 | retries;
            sender.regs[STATUS] |= MAX_RT;
        }
    }
}

pub type SharedAir = Rc<RefCell<Air>>;

pub struct SimSpi {
    air: SharedAir,
    id: usize,
}

impl SpiErrorType for SimSpi {
    type Error = Infallible;
}

impl SpiDevice for SimSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        let mut air = self.air.borrow_mut();
        for operation in operations {
            match operation {
                Operation::TransferInPlace(buf) => air.chips[self.id].execute(buf),
                Operation::DelayNs(_) => (),
                _ => unimplemented!("only in-place transfers are used by the driver"),
            }
        }
        Ok(())
    }
}

pub struct SimCe {
    air: SharedAir,
    id: usize,
}

impl PinErrorType for SimCe {
    type Error = Infallible;
}

impl OutputPin for SimCe {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.air.borrow_mut().chips[self.id].ce = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut air = self.air.borrow_mut();
        let rising = !air.chips[self.id].ce;
        air.chips[self.id].ce = true;
        if rising {
            air.pulse(self.id);
        }
        Ok(())
    }
}

/// Time does not pass in the simulation.
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

pub type SimRadio = Radio<SimSpi, SimCe, NoDelay>;

/// Create `count` radios sharing the same air.
pub fn mk_radios(count: usize) -> (SharedAir, Vec<SimRadio>) {
    let air: SharedAir = Rc::new(RefCell::new(Air::default()));
    let mut radios = Vec::with_capacity(count);
    for id in 0..count {
        air.borrow_mut().chips.push(Chip::default());
        let spi = SimSpi {
            air: air.clone(),
            id,
        };
        let ce = SimCe {
            air: air.clone(),
            id,
        };
        radios.push(Radio::new(ce, spi, NoDelay));
    }
    (air, radios)
}

/// A SPI device with nothing attached: MISO floats high.
pub struct FloatingSpi;

impl SpiErrorType for FloatingSpi {
    type Error = Infallible;
}

impl SpiDevice for FloatingSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        for operation in operations {
            if let Operation::TransferInPlace(buf) = operation {
                buf.fill(0xFF);
            }
        }
        Ok(())
    }
}

pub struct NoPin;

impl PinErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
