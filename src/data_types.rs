use crate::units::{ElectricPotential, Ratio, ThermodynamicTemperature, Time};

/// Adjustment pack application (APA) value for an approximate pack capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum ApaAdjustment {
    Mah50 = 0x1313,
    Mah100 = 0x1515,
    Mah200 = 0x1818,
    Mah500 = 0x2121,
    Mah1000 = 0x2D2D,
    Mah2000 = 0x3A3A,
    Mah3000 = 0x3F3F,
    Mah4000 = 0x4242,
    Mah5000 = 0x4444,
    Mah6000 = 0x4545,
}

/// Battery profile selected through `ChangeOfTheParameter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum BatteryProfile {
    /// 3.7 V nominal, 4.2 V charge
    Nominal3V7 = 0x0000,
    /// Panasonic UR18650ZY
    PanasonicUr18650Zy = 0x0001,
    /// Samsung ICR18650-26H
    SamsungIcr18650 = 0x0002,
    /// 3.8 V nominal, 4.35 V charge
    Nominal3V8 = 0x0003,
    /// 3.85 V nominal, 4.4 V charge
    Nominal3V85 = 0x0004,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum PowerMode {
    Operate = 0x0001,
    Sleep = 0x0002,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum CurrentDirection {
    Auto = 0x0000,
    Charge = 0x0001,
    Discharge = 0xFFFF,
}

/// Sampling slot written to `BeforeRsoc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum BeforeRsoc {
    FirstSampling = 0xAA55,
    SecondSampling = 0xAA56,
    ThirdSampling = 0xAA57,
    FourthSampling = 0xAA58,
}

macro_rules! word_enum {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        impl From<$name> for u16 {
            fn from(value: $name) -> Self {
                value as u16
            }
        }

        impl TryFrom<u16> for $name {
            type Error = u16;

            fn try_from(raw: u16) -> Result<Self, Self::Error> {
                $(
                    if raw == $name::$variant as u16 {
                        return Ok($name::$variant);
                    }
                )+
                Err(raw)
            }
        }
    };
}

word_enum!(ApaAdjustment {
    Mah50, Mah100, Mah200, Mah500, Mah1000, Mah2000, Mah3000, Mah4000, Mah5000, Mah6000,
});
word_enum!(BatteryProfile {
    Nominal3V7,
    PanasonicUr18650Zy,
    SamsungIcr18650,
    Nominal3V8,
    Nominal3V85,
});
word_enum!(PowerMode { Operate, Sleep });
word_enum!(CurrentDirection { Auto, Charge, Discharge });
word_enum!(BeforeRsoc {
    FirstSampling,
    SecondSampling,
    ThirdSampling,
    FourthSampling,
});

/// Caller-facing value of a register, as produced by `Lc709204f::get`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A raw 16-bit word.
    Word(u16),
    /// A 32-bit quantity assembled from a lower/higher register pair.
    DoubleWord(u32),
    /// A physical quantity (°C or %) derived from a raw word.
    Scaled(f32),
}

/// Snapshot of the commonly polled gauge readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub cell_voltage: ElectricPotential,
    pub cell_temperature: ThermodynamicTemperature,
    /// Relative state of charge.
    pub rsoc: Ratio,
    /// Indicator to empty, 0.1 % resolution.
    pub ite: Ratio,
    /// `None` while the gauge reports 0xFFFF (not discharging).
    pub time_to_empty: Option<Time>,
    /// `None` while the gauge reports 0xFFFF (not charging).
    pub time_to_full: Option<Time>,
    pub state_of_health: Ratio,
    pub cycle_count: u16,
    pub battery_status: u16,
}

/// Time registers report 0xFFFF when no estimate is available.
pub const TIME_NOT_AVAILABLE: u16 = 0xFFFF;
