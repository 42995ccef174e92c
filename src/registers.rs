use bitflags::bitflags;

/// Default 7-bit I2C address of the LC709204F.
pub const DEFAULT_ADDRESS: u8 = 0x0B;

/// Written to `InitialRsoc` to re-initialize RSOC from the present cell voltage.
pub const INITIAL_RSOC_COMMAND: u16 = 0xAA55;

/// Battery status value written at the end of initialization.
pub const BATTERY_STATUS_INITIALIZED: u16 = 0x0040;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Estimated time to empty in minutes
    TimeToEmpty = 0x03,
    /// Sampling trigger used to obtain the voltage with intentional timing after power on reset
    BeforeRsoc = 0x04,
    /// Estimated time to full in minutes
    TimeToFull = 0x05,
    /// B-constant of the TSENSE1 thermistor
    Tsense1ThermistorB = 0x06,
    /// Initializes RSOC with the current voltage when 0xAA55 is written
    InitialRsoc = 0x07,
    /// Cell temperature (TSENSE1), 0.1 K units. Writable in I2C temperature mode.
    CellTemperature = 0x08,
    /// Cell voltage in mV
    CellVoltage = 0x09,
    /// Auto / charge / discharge mode selection
    CurrentDirection = 0x0A,
    /// Adjustment pack application
    Apa = 0x0B,
    /// Adjustment pack thermistor, temperature measurement delay timing
    Apt = 0x0C,
    /// Relative state of charge, 0-100 %
    Rsoc = 0x0D,
    /// B-constant of the TSENSE2 thermistor
    Tsense2ThermistorB = 0x0E,
    /// Indicator to empty, 0.1 % units
    Ite = 0x0F,
    /// Internal management code
    IcVersion = 0x11,
    /// Battery profile selection
    ChangeOfTheParameter = 0x12,
    /// RSOC threshold of the low RSOC alarm
    AlarmLowRsoc = 0x13,
    /// Voltage threshold of the low cell voltage alarm
    AlarmLowCellVoltage = 0x14,
    /// Operate / sleep selection
    IcPowerMode = 0x15,
    /// TSENSE1 / TSENSE2 thermistor enables
    StatusBit = 0x16,
    /// Charge cycle count
    CycleCount = 0x17,
    /// Alarm flags and estimated battery state
    BatteryStatus = 0x19,
    /// Battery profile code
    NumberOfTheParameter = 0x1A,
    /// Termination current rate
    TerminationCurrentRate = 0x1C,
    /// Empty cell voltage
    EmptyCellVoltage = 0x1D,
    /// ITE value at which RSOC reads 0 %
    IteOffset = 0x1E,
    /// Voltage threshold of the high cell voltage alarm
    AlarmHighCellVoltage = 0x1F,
    /// Threshold of the low temperature alarm, 0.1 K units
    AlarmLowTemperature = 0x20,
    /// Threshold of the high temperature alarm, 0.1 K units
    AlarmHighTemperature = 0x21,
    /// Total operating time, lower 16 bits
    TotalRunTimeLower = 0x24,
    /// Total operating time, higher 8 bits
    TotalRunTimeHigher = 0x25,
    /// Accumulated temperature, lower 16 bits
    AccumulatedTemperatureLower = 0x26,
    /// Accumulated temperature, higher 16 bits
    AccumulatedTemperatureHigher = 0x27,
    /// Accumulated RSOC, lower 16 bits
    AccumulatedRsocLower = 0x28,
    /// Accumulated RSOC, higher 16 bits
    AccumulatedRsocHigher = 0x29,
    /// Historical maximum cell voltage
    MaximumCellVoltage = 0x2A,
    /// Historical minimum cell voltage
    MinimumCellVoltage = 0x2B,
    /// Historical maximum TSENSE1 temperature, 0.1 K units
    MaximumCellTemperature = 0x2C,
    /// Historical minimum TSENSE1 temperature, 0.1 K units
    MinimumCellTemperature = 0x2D,
    /// Ambient temperature (TSENSE2), 0.1 K units
    AmbientTemperature = 0x30,
    /// State of health, 0-100 %
    StateOfHealth = 0x32,
    /// 32-bit user id, lower 16 bits
    UserIdLower = 0x36,
    /// 32-bit user id, higher 16 bits
    UserIdHigher = 0x37,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

impl Access {
    pub const fn is_readable(self) -> bool {
        !matches!(self, Access::WriteOnly)
    }

    pub const fn is_writable(self) -> bool {
        !matches!(self, Access::ReadOnly)
    }
}

/// How a register takes part in a logical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Width {
    /// A standalone 16-bit word.
    Word,
    /// The low word of a 32-bit quantity; the high word lives at `address + 1`.
    LowerHalf,
    /// The high word of a 32-bit quantity.
    UpperHalf,
}

/// Conversion between the raw word and the caller-facing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Conversion {
    Raw,
    /// `raw / 10.0`
    Tenths,
    /// 0.1 K units mapped to degrees Celsius
    Temperature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterInfo {
    pub access: Access,
    pub width: Width,
    pub conversion: Conversion,
}

impl RegisterInfo {
    const fn new(access: Access, width: Width, conversion: Conversion) -> Self {
        Self {
            access,
            width,
            conversion,
        }
    }
}

const fn word(access: Access) -> RegisterInfo {
    RegisterInfo::new(access, Width::Word, Conversion::Raw)
}

const fn temperature(access: Access) -> RegisterInfo {
    RegisterInfo::new(access, Width::Word, Conversion::Temperature)
}

impl Register {
    /// Every register, in address order.
    pub const ALL: [Register; 42] = [
        Register::TimeToEmpty,
        Register::BeforeRsoc,
        Register::TimeToFull,
        Register::Tsense1ThermistorB,
        Register::InitialRsoc,
        Register::CellTemperature,
        Register::CellVoltage,
        Register::CurrentDirection,
        Register::Apa,
        Register::Apt,
        Register::Rsoc,
        Register::Tsense2ThermistorB,
        Register::Ite,
        Register::IcVersion,
        Register::ChangeOfTheParameter,
        Register::AlarmLowRsoc,
        Register::AlarmLowCellVoltage,
        Register::IcPowerMode,
        Register::StatusBit,
        Register::CycleCount,
        Register::BatteryStatus,
        Register::NumberOfTheParameter,
        Register::TerminationCurrentRate,
        Register::EmptyCellVoltage,
        Register::IteOffset,
        Register::AlarmHighCellVoltage,
        Register::AlarmLowTemperature,
        Register::AlarmHighTemperature,
        Register::TotalRunTimeLower,
        Register::TotalRunTimeHigher,
        Register::AccumulatedTemperatureLower,
        Register::AccumulatedTemperatureHigher,
        Register::AccumulatedRsocLower,
        Register::AccumulatedRsocHigher,
        Register::MaximumCellVoltage,
        Register::MinimumCellVoltage,
        Register::MaximumCellTemperature,
        Register::MinimumCellTemperature,
        Register::AmbientTemperature,
        Register::StateOfHealth,
        Register::UserIdLower,
        Register::UserIdHigher,
    ];

    /// Static description of the register: access mode, width and value conversion.
    pub const fn info(self) -> RegisterInfo {
        use Access::*;

        match self {
            Register::TimeToEmpty => word(ReadOnly),
            Register::BeforeRsoc => word(WriteOnly),
            Register::TimeToFull => word(ReadOnly),
            Register::Tsense1ThermistorB => word(ReadWrite),
            Register::InitialRsoc => word(WriteOnly),
            Register::CellTemperature => temperature(ReadWrite),
            Register::CellVoltage => word(ReadOnly),
            Register::CurrentDirection => word(ReadWrite),
            Register::Apa => word(ReadWrite),
            Register::Apt => word(ReadWrite),
            Register::Rsoc => word(ReadWrite),
            Register::Tsense2ThermistorB => word(ReadWrite),
            Register::Ite => RegisterInfo::new(ReadOnly, Width::Word, Conversion::Tenths),
            Register::IcVersion => word(ReadOnly),
            Register::ChangeOfTheParameter => word(ReadWrite),
            Register::AlarmLowRsoc => word(ReadWrite),
            Register::AlarmLowCellVoltage => word(ReadWrite),
            Register::IcPowerMode => word(ReadWrite),
            Register::StatusBit => word(ReadWrite),
            Register::CycleCount => word(ReadOnly),
            Register::BatteryStatus => word(ReadWrite),
            Register::NumberOfTheParameter => word(ReadOnly),
            Register::TerminationCurrentRate => word(ReadWrite),
            Register::EmptyCellVoltage => word(ReadWrite),
            Register::IteOffset => word(ReadWrite),
            Register::AlarmHighCellVoltage => word(ReadWrite),
            Register::AlarmLowTemperature => temperature(ReadWrite),
            Register::AlarmHighTemperature => temperature(ReadWrite),
            Register::TotalRunTimeLower
            | Register::AccumulatedTemperatureLower
            | Register::AccumulatedRsocLower => {
                RegisterInfo::new(ReadWrite, Width::LowerHalf, Conversion::Raw)
            }
            Register::TotalRunTimeHigher
            | Register::AccumulatedTemperatureHigher
            | Register::AccumulatedRsocHigher => {
                RegisterInfo::new(ReadWrite, Width::UpperHalf, Conversion::Raw)
            }
            Register::MaximumCellVoltage => word(ReadWrite),
            Register::MinimumCellVoltage => word(ReadWrite),
            Register::MaximumCellTemperature => temperature(ReadWrite),
            Register::MinimumCellTemperature => temperature(ReadWrite),
            Register::AmbientTemperature => temperature(ReadOnly),
            Register::StateOfHealth => word(ReadOnly),
            Register::UserIdLower => RegisterInfo::new(ReadOnly, Width::LowerHalf, Conversion::Raw),
            Register::UserIdHigher => RegisterInfo::new(ReadOnly, Width::UpperHalf, Conversion::Raw),
        }
    }

    /// Returns the register holding the high word of a 32-bit quantity anchored at `self`.
    pub fn upper_half(self) -> Option<Register> {
        match self.info().width {
            Width::LowerHalf => Register::try_from(self as u8 + 1).ok(),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Register {
    type Error = u8;

    fn try_from(address: u8) -> Result<Self, Self::Error> {
        Register::ALL
            .iter()
            .copied()
            .find(|reg| *reg as u8 == address)
            .ok_or(address)
    }
}

bitflags! {
    /// Thermistor enables held in the `StatusBit` register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Thermistors: u16 {
        const TSENSE1 = 1 << 0;
        const TSENSE2 = 1 << 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sorted_and_complete() {
        for pair in Register::ALL.windows(2) {
            assert!((pair[0] as u8) < (pair[1] as u8));
        }
        for address in 0..=u8::MAX {
            if let Ok(reg) = Register::try_from(address) {
                assert_eq!(reg as u8, address);
            }
        }
    }

    #[test]
    fn test_upper_half_pairs() {
        assert_eq!(
            Register::TotalRunTimeLower.upper_half(),
            Some(Register::TotalRunTimeHigher)
        );
        assert_eq!(
            Register::AccumulatedTemperatureLower.upper_half(),
            Some(Register::AccumulatedTemperatureHigher)
        );
        assert_eq!(
            Register::AccumulatedRsocLower.upper_half(),
            Some(Register::AccumulatedRsocHigher)
        );
        assert_eq!(Register::UserIdLower.upper_half(), Some(Register::UserIdHigher));
        assert_eq!(Register::Rsoc.upper_half(), None);
        assert_eq!(Register::UserIdHigher.upper_half(), None);

        for reg in Register::ALL {
            if let Some(upper) = reg.upper_half() {
                assert_eq!(upper.info().width, Width::UpperHalf);
                assert_eq!(upper.info().access, reg.info().access);
            }
        }
    }

    #[test]
    fn test_unknown_address() {
        assert_eq!(Register::try_from(0x10), Err(0x10));
        assert_eq!(Register::try_from(0x00), Err(0x00));
        assert_eq!(Register::try_from(0x0A), Ok(Register::CurrentDirection));
    }

    #[test]
    fn test_access_modes() {
        assert!(!Register::BeforeRsoc.info().access.is_readable());
        assert!(!Register::InitialRsoc.info().access.is_readable());
        assert!(!Register::CellVoltage.info().access.is_writable());
        assert!(Register::CurrentDirection.info().access.is_readable());
        assert!(Register::CurrentDirection.info().access.is_writable());
    }

    #[test]
    fn test_thermistor_bits() {
        assert_eq!((Thermistors::TSENSE1 | Thermistors::TSENSE2).bits(), 0x0003);
        assert_eq!(Thermistors::from_bits_truncate(0xFFFE), Thermistors::TSENSE2);
    }
}
