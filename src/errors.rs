#[cfg(feature = "defmt")]
use defmt::Format;

use crate::registers::Register;

/// Represents potential errors when interacting with the LC709204F.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum Error<E> {
    /// The bus write or read failed (NACK, short read, arbitration, ...).
    I2c(E),
    /// The checksum appended by the gauge did not match the received frame.
    Crc {
        register: Register,
        expected: u8,
        received: u8,
    },
    /// The register is write-only.
    NotReadable(Register),
    /// The register is read-only.
    NotWritable(Register),
    /// The register does not hold a value of the requested shape.
    Mismatch(Register),
    /// The value cannot be encoded into a register word.
    OutOfRange,
    /// The gauge returned a code outside the documented set.
    UnexpectedValue(u16),
}
