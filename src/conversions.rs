//! Conversions between register encodings and caller-facing values.

/// Integer linear map between two ranges, truncating toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearMap {
    pub in_min: i32,
    pub in_max: i32,
    pub out_min: i32,
    pub out_max: i32,
}

impl LinearMap {
    pub const fn new(in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> Self {
        Self {
            in_min,
            in_max,
            out_min,
            out_max,
        }
    }

    /// Maps `x` from the input range onto the output range. Values outside the
    /// input range are extrapolated.
    pub const fn apply(&self, x: i64) -> i64 {
        let span_in = (self.in_max - self.in_min) as i64;
        let span_out = (self.out_max - self.out_min) as i64;
        (x - self.in_min as i64) * span_out / span_in + self.out_min as i64
    }

    pub const fn inverse(&self) -> Self {
        Self::new(self.out_min, self.out_max, self.in_min, self.in_max)
    }
}

/// Temperature registers hold 0.1 K units; 0x0980..=0x0DCC covers -30.0 °C to 80.0 °C.
pub const TEMPERATURE_MAP: LinearMap = LinearMap::new(0x0980, 0x0DCC, -300, 800);

/// Converts a raw temperature word to degrees Celsius.
pub fn celsius_from_raw(raw: u16) -> f32 {
    TEMPERATURE_MAP.apply(raw as i64) as f32 / 10.0
}

/// Converts degrees Celsius to a raw temperature word.
///
/// The temperature is truncated to 0.1 °C before mapping. Returns `None` when the
/// result does not fit in a register word.
pub fn celsius_to_raw(celsius: f32) -> Option<u16> {
    let tenths = celsius * 10.0;
    // Anything past this bound maps outside of u16 anyway.
    if !tenths.is_finite() || !(-1.0e6..=1.0e6).contains(&tenths) {
        return None;
    }
    let raw = TEMPERATURE_MAP.inverse().apply(tenths as i64);
    u16::try_from(raw).ok()
}

/// Scales a word holding 0.1 units.
pub fn tenths_from_raw(raw: u16) -> f32 {
    raw as f32 / 10.0
}

/// Splits a 32-bit quantity into its (lower, higher) register words.
pub const fn split_u32(value: u32) -> (u16, u16) {
    (value as u16, (value >> 16) as u16)
}

/// Joins (lower, higher) register words into a 32-bit quantity.
pub const fn join_u32(lower: u16, higher: u16) -> u32 {
    ((higher as u32) << 16) + lower as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_temperature_endpoints() {
        assert_relative_eq!(celsius_from_raw(0x0980), -30.0);
        assert_relative_eq!(celsius_from_raw(0x0DCC), 80.0);
        assert_relative_eq!(celsius_from_raw(0x0BA6), 25.0, epsilon = 0.05);
        assert_relative_eq!(celsius_from_raw(0x0AAC), 0.0);
    }

    #[test]
    fn test_temperature_to_raw() {
        assert_eq!(celsius_to_raw(-30.0), Some(0x0980));
        assert_eq!(celsius_to_raw(80.0), Some(0x0DCC));
        assert_eq!(celsius_to_raw(25.0), Some(0x0BA6));
        assert_eq!(celsius_to_raw(0.0), Some(0x0AAC));
        assert_eq!(celsius_to_raw(-10.0), Some(0x0A48));
        // Truncated to 0.1 °C.
        assert_eq!(celsius_to_raw(25.04), Some(0x0BA6));
    }

    #[test]
    fn test_temperature_round_trip() {
        for raw in 0x0980..=0x0DCCu16 {
            let back = celsius_to_raw(celsius_from_raw(raw)).unwrap();
            assert!(
                (back as i32 - raw as i32).abs() <= 1,
                "raw {:#06x} came back as {:#06x}",
                raw,
                back
            );
        }
    }

    #[test]
    fn test_temperature_out_of_range() {
        assert_eq!(celsius_to_raw(f32::NAN), None);
        assert_eq!(celsius_to_raw(f32::INFINITY), None);
        assert_eq!(celsius_to_raw(-273.0), Some(2));
        assert_eq!(celsius_to_raw(-280.0), None);
        assert_eq!(celsius_to_raw(10_000.0), None);
        // Outside the documented domain but still encodable.
        assert_eq!(celsius_to_raw(-40.0), Some(0x0980 - 100));
    }

    #[test]
    fn test_linear_map_inverse() {
        let map = LinearMap::new(0, 1000, 0, 100);
        assert_eq!(map.apply(555), 55);
        assert_eq!(map.inverse().apply(55), 550);
        assert_eq!(map.inverse().inverse(), map);
    }

    #[test]
    fn test_split_join() {
        let samples = (0..=u32::MAX).step_by(65_521).chain([
            0,
            1,
            0xFFFF,
            0x1_0000,
            0x1234_5678,
            u32::MAX,
        ]);
        for value in samples {
            let (lower, higher) = split_u32(value);
            assert_eq!(join_u32(lower, higher), value);
        }
        assert_eq!(split_u32(0x1234_5678), (0x5678, 0x1234));
    }
}
