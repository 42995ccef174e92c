/// CRC-8 generator polynomial: x^8 + x^2 + x + 1.
pub const POLYNOMIAL: u8 = 0x07;

/// Calculates the CRC-8 checksum the LC709204F expects on every word transfer.
///
/// Polynomial 0x07, initial value 0x00, MSB first, no reflection, no output xor.
pub const fn crc8(data: &[u8]) -> u8 {
    let mut crc: u8 = 0;
    let mut i = 0;
    while i < data.len() {
        crc ^= data[i];
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
            bit += 1;
        }
        i += 1;
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::crc8;

    #[test]
    fn test_check_value() {
        // Standard CRC-8 check input.
        assert_eq!(crc8(b"123456789"), 0xF4);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(crc8(&[]), 0x00);
    }

    #[test]
    fn test_write_frames() {
        // [write address, register, value low, value high]
        assert_eq!(crc8(&[0x16, 0x04, 0x00, 0x00]), 0xB8);
        assert_eq!(crc8(&[0x16, 0x0B, 0x2D, 0x2D]), 0x7B);
        assert_eq!(crc8(&[0x16, 0x15, 0x01, 0x00]), 0x64);
        assert_eq!(crc8(&[0x16, 0x19, 0x40, 0x00]), 0xD0);
    }

    #[test]
    fn test_read_frames() {
        // [write address, register, read address, value low, value high]
        assert_eq!(crc8(&[0x16, 0x0D, 0x17, 0x32, 0x00]), 0xE0);
        assert_eq!(crc8(&[0x16, 0x09, 0x17, 0x3C, 0x0F]), 0x43);
    }

    #[test]
    fn test_single_byte_changes_are_detected() {
        let frame = [0x16, 0x08, 0x17, 0xA6, 0x0B];
        let reference = crc8(&frame);
        for position in 0..frame.len() {
            for flip in 1..=0xFFu8 {
                let mut corrupted = frame;
                corrupted[position] ^= flip;
                assert_ne!(crc8(&corrupted), reference);
            }
        }
    }
}
