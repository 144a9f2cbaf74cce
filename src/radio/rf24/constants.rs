/// The registers of the nRF24L01, addressed by their 5 bit offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    Config = 0x00,
    EnAa = 0x01,
    EnRxAddr = 0x02,
    SetupAw = 0x03,
    SetupRetr = 0x04,
    RfCh = 0x05,
    RfSetup = 0x06,
    Status = 0x07,
    ObserveTx = 0x08,
    Rpd = 0x09,
    RxAddrP0 = 0x0A,
    RxAddrP1 = 0x0B,
    RxAddrP2 = 0x0C,
    RxAddrP3 = 0x0D,
    RxAddrP4 = 0x0E,
    RxAddrP5 = 0x0F,
    TxAddr = 0x10,
    RxPwP0 = 0x11,
    RxPwP1 = 0x12,
    RxPwP2 = 0x13,
    RxPwP3 = 0x14,
    RxPwP4 = 0x15,
    RxPwP5 = 0x16,
    FifoStatus = 0x17,
    Dynpd = 0x1C,
    Feature = 0x1D,
}

impl Register {
    const RX_ADDR: [Register; 6] = [
        Register::RxAddrP0,
        Register::RxAddrP1,
        Register::RxAddrP2,
        Register::RxAddrP3,
        Register::RxAddrP4,
        Register::RxAddrP5,
    ];

    const RX_PW: [Register; 6] = [
        Register::RxPwP0,
        Register::RxPwP1,
        Register::RxPwP2,
        Register::RxPwP3,
        Register::RxPwP4,
        Register::RxPwP5,
    ];

    /// The register's address, masked to 5 bits.
    pub const fn addr(self) -> u8 {
        self as u8 & commands::REGISTER_MASK
    }

    /// The register's width in bytes.
    pub const fn width(self) -> usize {
        match self {
            Register::RxAddrP0 | Register::RxAddrP1 | Register::TxAddr => 5,
            _ => 1,
        }
    }

    /// The `RX_ADDR_Px` register of a data pipe in range [0, 5].
    pub const fn rx_addr(pipe: u8) -> Option<Register> {
        if pipe < 6 {
            Some(Self::RX_ADDR[pipe as usize])
        } else {
            None
        }
    }

    /// The `RX_PW_Px` register of a data pipe in range [0, 5].
    pub const fn rx_pw(pipe: u8) -> Option<Register> {
        if pipe < 6 {
            Some(Self::RX_PW[pipe as usize])
        } else {
            None
        }
    }
}

/// The SPI commands understood by the nRF24L01.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ReadRegister(Register),
    WriteRegister(Register),
    ReadRxPayload,
    WriteTxPayload,
    FlushTx,
    FlushRx,
    ReuseTxPl,
    Activate,
    Nop,
}

impl Command {
    /// The command byte clocked out first in a transaction.
    pub const fn opcode(self) -> u8 {
        match self {
            Command::ReadRegister(reg) => commands::R_REGISTER | reg.addr(),
            Command::WriteRegister(reg) => commands::W_REGISTER | reg.addr(),
            Command::ReadRxPayload => commands::R_RX_PAYLOAD,
            Command::WriteTxPayload => commands::W_TX_PAYLOAD,
            Command::FlushTx => commands::FLUSH_TX,
            Command::FlushRx => commands::FLUSH_RX,
            Command::ReuseTxPl => commands::REUSE_TX_PL,
            Command::Activate => commands::ACTIVATE,
            Command::Nop => commands::NOP,
        }
    }
}

/// Raw SPI command bytes for the nRF24L01.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const REGISTER_MASK: u8 = 0x1F;
    pub const ACTIVATE: u8 = 0x50;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const REUSE_TX_PL: u8 = 0xE3;
    pub const NOP: u8 = 0xFF;
}

/// Bit mnemonics
pub mod mnemonics {
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;

    /// CONFIG
    pub const PWR_UP: u8 = 1 << 1;
    pub const PRIM_RX: u8 = 1;

    /// FIFO_STATUS
    pub const RX_EMPTY: u8 = 1;

    /// FEATURE
    pub const EN_DPL: u8 = 1 << 2;
}
