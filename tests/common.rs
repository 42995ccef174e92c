#![allow(dead_code)]

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use lc709204f_async_rs::{crc::crc8, Lc709204f};

pub const LC709204F_ADDR: u8 = 0x0B;
pub const WRITE_ADDR: u8 = LC709204F_ADDR << 1;
pub const READ_ADDR: u8 = (LC709204F_ADDR << 1) | 1;

/// Expected bus traffic for a word read answered with `value`.
pub fn read_word(reg: u8, value: u16) -> I2cTransaction {
    let [low, high] = value.to_le_bytes();
    let crc = crc8(&[WRITE_ADDR, reg, READ_ADDR, low, high]);
    I2cTransaction::write_read(LC709204F_ADDR, vec![reg], vec![low, high, crc])
}

/// Expected bus traffic for a word write of `value`.
pub fn write_word(reg: u8, value: u16) -> I2cTransaction {
    let [low, high] = value.to_le_bytes();
    let crc = crc8(&[WRITE_ADDR, reg, low, high]);
    I2cTransaction::write(LC709204F_ADDR, vec![reg, low, high, crc])
}

/// Creates a driver on top of an `embedded-hal-mock` bus; the returned clone is used for `done()`.
pub fn create_driver(expectations: &[I2cTransaction]) -> (Lc709204f<I2cMock>, I2cMock) {
    let i2c = I2cMock::new(expectations);
    let driver = Lc709204f::new(i2c.clone());
    (driver, i2c)
}

/// Misbehaviour injected into the simulated gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fault {
    None,
    /// Inverts one byte (0 = value low, 1 = value high, 2 = CRC) of every read response.
    FlipResponseByte(usize),
    /// Answers reads with only two bytes.
    ShortRead,
    /// Refuses writes to the given register address.
    NackWrite(u8),
}

/// Register-level model of an LC709204F: checks write checksums, stores writes
/// and appends checksums to read responses.
pub struct SimulatedGauge {
    pub registers: [u16; 256],
    pub writes: Vec<(u8, u16)>,
    pub fault: Fault,
    pointer: Option<u8>,
}

impl SimulatedGauge {
    pub fn new() -> Self {
        Self {
            registers: [0; 256],
            writes: Vec::new(),
            fault: Fault::None,
            pointer: None,
        }
    }

    pub fn with_fault(fault: Fault) -> Self {
        Self {
            fault,
            ..Self::new()
        }
    }

    fn handle_write(&mut self, bytes: &[u8]) -> Result<(), ErrorKind> {
        match *bytes {
            [reg] => {
                self.pointer = Some(reg);
                Ok(())
            }
            [reg, low, high, crc] => {
                if crc8(&[WRITE_ADDR, reg, low, high]) != crc {
                    return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));
                }
                if self.fault == Fault::NackWrite(reg) {
                    return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));
                }
                let value = u16::from_le_bytes([low, high]);
                self.registers[reg as usize] = value;
                self.writes.push((reg, value));
                Ok(())
            }
            _ => Err(ErrorKind::Other),
        }
    }

    fn handle_read(&mut self, buffer: &mut [u8]) -> Result<(), ErrorKind> {
        let reg = self.pointer.take().ok_or(ErrorKind::Other)?;
        let [low, high] = self.registers[reg as usize].to_le_bytes();
        let mut response = [low, high, crc8(&[WRITE_ADDR, reg, READ_ADDR, low, high])];

        let available = match self.fault {
            Fault::FlipResponseByte(index) => {
                response[index] = !response[index];
                response.len()
            }
            Fault::ShortRead => 2,
            _ => response.len(),
        };

        if buffer.len() > available {
            // The gauge stopped sending before the master got all bytes.
            return Err(ErrorKind::Other);
        }
        buffer.copy_from_slice(&response[..buffer.len()]);
        Ok(())
    }
}

impl ErrorType for SimulatedGauge {
    type Error = ErrorKind;
}

impl I2c for SimulatedGauge {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != LC709204F_ADDR {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        for operation in operations {
            match operation {
                Operation::Write(bytes) => self.handle_write(bytes)?,
                Operation::Read(buffer) => self.handle_read(buffer)?,
            }
        }
        Ok(())
    }
}
