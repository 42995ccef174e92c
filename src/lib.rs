#![no_std]

#[macro_use]
extern crate uom;

#[cfg(feature = "defmt")]
extern crate defmt;

#[cfg(not(feature = "async"))]
use embedded_hal::i2c::I2c;
#[cfg(feature = "async")]
use embedded_hal_async::i2c::I2c;

pub mod conversions;
pub mod crc;
pub mod data_types;
pub mod errors;
pub mod registers;
pub mod units;

pub use data_types::{
    ApaAdjustment, BatteryProfile, BeforeRsoc, CurrentDirection, Measurements, PowerMode, Value,
};
pub use errors::Error;
pub use registers::{Access, Conversion, Register, RegisterInfo, Thermistors, Width};

use conversions::{celsius_from_raw, celsius_to_raw, join_u32, split_u32, tenths_from_raw};
use crc::crc8;
use data_types::TIME_NOT_AVAILABLE;
use registers::{BATTERY_STATUS_INITIALIZED, DEFAULT_ADDRESS, INITIAL_RSOC_COMMAND};
use units::{ElectricPotential, Ratio, ThermodynamicTemperature, Time};
use uom::si::{
    electric_potential::millivolt, ratio::percent, thermodynamic_temperature::degree_celsius,
    time::minute,
};

/// LC709204F fuel gauge driver
pub struct Lc709204f<I2C> {
    address: u8,
    i2c: I2C,
}

impl<I2C> Lc709204f<I2C> {
    /// Creates a driver for a gauge at the default address (0x0B).
    ///
    /// The bus must already be initialized; the driver never reconfigures it.
    pub fn new(i2c: I2C) -> Self {
        Self::new_with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Creates a driver for a gauge at a non-default 7-bit address.
    pub fn new_with_address(i2c: I2C, address: u8) -> Self {
        Self { address, i2c }
    }

    /// Destroys the driver and returns the bus handle.
    pub fn release(self) -> I2C {
        self.i2c
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    const fn write_address(&self) -> u8 {
        self.address << 1
    }

    const fn read_address(&self) -> u8 {
        (self.address << 1) | 1
    }
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "RegisterAccess",),
    async(feature = "async", keep_self)
)]
#[allow(async_fn_in_trait)]
/// Word-level register access with CRC-8 framing.
///
/// No access-mode checks happen at this level.
pub trait RegisterAccess<E>
where
    Self: Sized,
{
    /// Reads one 16-bit register and verifies the checksum appended by the gauge.
    async fn read_word(&mut self, reg: Register) -> Result<u16, Error<E>>;

    /// Writes one 16-bit register followed by its checksum.
    async fn write_word(&mut self, reg: Register, value: u16) -> Result<(), Error<E>>;
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "Lc709204f",),
    async(feature = "async", keep_self)
)]
impl<I2C, E> RegisterAccess<E> for Lc709204f<I2C>
where
    I2C: I2c<Error = E>,
{
    async fn read_word(&mut self, reg: Register) -> Result<u16, Error<E>> {
        // Value low byte, value high byte, CRC.
        let mut response = [0u8; 3];
        self.i2c
            .write_read(self.address, &[reg as u8], &mut response)
            .await
            .map_err(Error::I2c)?;

        let [low, high, received] = response;

        // The gauge checksums the whole exchange, address bytes included.
        let expected = crc8(&[
            self.write_address(),
            reg as u8,
            self.read_address(),
            low,
            high,
        ]);

        if expected != received {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "CRC validation failed. {} Received CRC: {:02x}, Calculated CRC: {:02x}",
                reg,
                received,
                expected
            );
            return Err(Error::Crc {
                register: reg,
                expected,
                received,
            });
        }

        let value = u16::from_le_bytes([low, high]);
        #[cfg(feature = "defmt")]
        defmt::trace!("read {} = {:04x}", reg, value);
        Ok(value)
    }

    async fn write_word(&mut self, reg: Register, value: u16) -> Result<(), Error<E>> {
        let [low, high] = value.to_le_bytes();
        let checksum = crc8(&[self.write_address(), reg as u8, low, high]);

        #[cfg(feature = "defmt")]
        defmt::trace!("write {} = {:04x}", reg, value);

        // The device address byte goes out with the start condition, not in the payload.
        self.i2c
            .write(self.address, &[reg as u8, low, high, checksum])
            .await
            .map_err(Error::I2c)
    }
}

fn readable<E>(reg: Register) -> Result<RegisterInfo, Error<E>> {
    let info = reg.info();
    if info.access.is_readable() {
        Ok(info)
    } else {
        Err(Error::NotReadable(reg))
    }
}

fn writable<E>(reg: Register) -> Result<RegisterInfo, Error<E>> {
    let info = reg.info();
    if info.access.is_writable() {
        Ok(info)
    } else {
        Err(Error::NotWritable(reg))
    }
}

fn expect_conversion<E>(
    reg: Register,
    info: RegisterInfo,
    conversion: Conversion,
) -> Result<(), Error<E>> {
    if info.conversion == conversion {
        Ok(())
    } else {
        Err(Error::Mismatch(reg))
    }
}

fn decode<T, E>(raw: u16) -> Result<T, Error<E>>
where
    T: TryFrom<u16, Error = u16>,
{
    T::try_from(raw).map_err(Error::UnexpectedValue)
}

fn minutes(raw: u16) -> Option<Time> {
    (raw != TIME_NOT_AVAILABLE).then(|| Time::new::<minute>(raw as f32))
}

// Table-driven access: every operation consults `Register::info` first.
#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "Lc709204f",),
    async(feature = "async", keep_self)
)]
impl<I2C, E> Lc709204f<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Reads a raw word from any readable register.
    pub async fn read_u16(&mut self, reg: Register) -> Result<u16, Error<E>> {
        readable(reg)?;
        self.read_word(reg).await
    }

    /// Writes a raw word to any writable register.
    pub async fn write_u16(&mut self, reg: Register, value: u16) -> Result<(), Error<E>> {
        writable(reg)?;
        self.write_word(reg, value).await
    }

    /// Reads a 32-bit quantity anchored at its lower-half register.
    pub async fn read_u32(&mut self, reg: Register) -> Result<u32, Error<E>> {
        readable(reg)?;
        let upper = reg.upper_half().ok_or(Error::Mismatch(reg))?;
        let lower = self.read_word(reg).await?;
        let higher = self.read_word(upper).await?;
        Ok(join_u32(lower, higher))
    }

    /// Writes a 32-bit quantity, lower word first. A failed lower write skips the higher one.
    pub async fn write_u32(&mut self, reg: Register, value: u32) -> Result<(), Error<E>> {
        writable(reg)?;
        let upper = reg.upper_half().ok_or(Error::Mismatch(reg))?;
        let (lower, higher) = split_u32(value);
        self.write_word(reg, lower).await?;
        self.write_word(upper, higher).await
    }

    /// Reads a temperature register in degrees Celsius.
    pub async fn read_celsius(&mut self, reg: Register) -> Result<f32, Error<E>> {
        let info = readable(reg)?;
        expect_conversion(reg, info, Conversion::Temperature)?;
        Ok(celsius_from_raw(self.read_word(reg).await?))
    }

    /// Writes a temperature register from degrees Celsius, truncated to 0.1 °C.
    pub async fn write_celsius(&mut self, reg: Register, celsius: f32) -> Result<(), Error<E>> {
        let info = writable(reg)?;
        expect_conversion(reg, info, Conversion::Temperature)?;
        let raw = celsius_to_raw(celsius).ok_or(Error::OutOfRange)?;
        self.write_word(reg, raw).await
    }

    /// Reads a register holding 0.1 units.
    pub async fn read_tenths(&mut self, reg: Register) -> Result<f32, Error<E>> {
        let info = readable(reg)?;
        expect_conversion(reg, info, Conversion::Tenths)?;
        Ok(tenths_from_raw(self.read_word(reg).await?))
    }

    /// Reads a register as its caller-facing value.
    ///
    /// Lower-half registers yield the whole 32-bit quantity, temperature and
    /// tenths registers yield a scaled value, everything else a raw word.
    pub async fn get(&mut self, reg: Register) -> Result<Value, Error<E>> {
        let info = readable(reg)?;
        match (info.width, info.conversion) {
            (Width::LowerHalf, _) => Ok(Value::DoubleWord(self.read_u32(reg).await?)),
            (_, Conversion::Temperature) => Ok(Value::Scaled(self.read_celsius(reg).await?)),
            (_, Conversion::Tenths) => Ok(Value::Scaled(self.read_tenths(reg).await?)),
            (_, Conversion::Raw) => Ok(Value::Word(self.read_u16(reg).await?)),
        }
    }

    /// Writes a caller-facing value to a register.
    ///
    /// `Value::Word` writes the raw word of any single register, `Value::DoubleWord`
    /// needs a lower-half register and `Value::Scaled` a temperature register.
    pub async fn set(&mut self, reg: Register, value: Value) -> Result<(), Error<E>> {
        let info = writable(reg)?;
        match (info.width, info.conversion, value) {
            (Width::LowerHalf, _, Value::DoubleWord(v)) => self.write_u32(reg, v).await,
            (Width::Word | Width::UpperHalf, _, Value::Word(v)) => self.write_u16(reg, v).await,
            (Width::Word, Conversion::Temperature, Value::Scaled(c)) => {
                self.write_celsius(reg, c).await
            }
            _ => Err(Error::Mismatch(reg)),
        }
    }
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "Lc709204f",),
    async(feature = "async", keep_self)
)]
impl<I2C, E> Lc709204f<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Configures the gauge for operation.
    ///
    /// Writes the APA, the battery profile, operate power mode and the initial
    /// battery status, in that order. Stops at the first failure without undoing
    /// the steps already applied.
    pub async fn init(
        &mut self,
        apa: ApaAdjustment,
        profile: BatteryProfile,
    ) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::info!("LC709204F init: APA {}, profile {}", apa, profile);

        self.set_apa(apa).await?;
        self.set_change_of_the_parameter(profile).await?;
        self.set_ic_power_mode(PowerMode::Operate).await?;
        self.set_battery_status(BATTERY_STATUS_INITIALIZED).await?;

        #[cfg(feature = "defmt")]
        defmt::info!("LC709204F init complete");
        Ok(())
    }

    /// Reads the usual polling set in one go.
    pub async fn read_measurements(&mut self) -> Result<Measurements, Error<E>> {
        let cell_voltage =
            ElectricPotential::new::<millivolt>(self.read_cell_voltage().await? as f32);
        let cell_temperature =
            ThermodynamicTemperature::new::<degree_celsius>(self.read_cell_temperature().await?);
        let rsoc = Ratio::new::<percent>(self.read_rsoc().await? as f32);
        let ite = Ratio::new::<percent>(self.read_ite().await?);
        let time_to_empty = minutes(self.read_time_to_empty().await?);
        let time_to_full = minutes(self.read_time_to_full().await?);
        let state_of_health = Ratio::new::<percent>(self.read_state_of_health().await? as f32);
        let cycle_count = self.read_cycle_count().await?;
        let battery_status = self.read_battery_status().await?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "measurements: {} mV, RSOC {} %, status {:04x}",
            cell_voltage.get::<millivolt>(),
            rsoc.get::<percent>(),
            battery_status
        );

        Ok(Measurements {
            cell_voltage,
            cell_temperature,
            rsoc,
            ite,
            time_to_empty,
            time_to_full,
            state_of_health,
            cycle_count,
            battery_status,
        })
    }

    /// Estimated time to empty in minutes (0xFFFF while not discharging).
    pub async fn read_time_to_empty(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::TimeToEmpty).await
    }

    /// Triggers a voltage sample for RSOC initialization in the given slot.
    pub async fn set_before_rsoc(&mut self, sampling: BeforeRsoc) -> Result<(), Error<E>> {
        self.write_u16(Register::BeforeRsoc, sampling.into()).await
    }

    /// Estimated time to full in minutes (0xFFFF while not charging).
    pub async fn read_time_to_full(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::TimeToFull).await
    }

    pub async fn read_tsense1_thermistor_b(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::Tsense1ThermistorB).await
    }

    pub async fn set_tsense1_thermistor_b(&mut self, b: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::Tsense1ThermistorB, b).await
    }

    /// Re-initializes RSOC from the present cell voltage.
    pub async fn set_initial_rsoc(&mut self) -> Result<(), Error<E>> {
        self.write_u16(Register::InitialRsoc, INITIAL_RSOC_COMMAND)
            .await
    }

    /// Cell temperature (TSENSE1) in 0.1 K units.
    pub async fn read_cell_temperature_raw(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::CellTemperature).await
    }

    /// Cell temperature (TSENSE1) in degrees Celsius.
    pub async fn read_cell_temperature(&mut self) -> Result<f32, Error<E>> {
        self.read_celsius(Register::CellTemperature).await
    }

    /// Supplies the cell temperature in 0.1 K units (I2C temperature mode).
    pub async fn set_cell_temperature_raw(&mut self, raw: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::CellTemperature, raw).await
    }

    /// Supplies the cell temperature in degrees Celsius (I2C temperature mode).
    pub async fn set_cell_temperature(&mut self, celsius: f32) -> Result<(), Error<E>> {
        self.write_celsius(Register::CellTemperature, celsius).await
    }

    /// Cell voltage in mV.
    pub async fn read_cell_voltage(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::CellVoltage).await
    }

    pub async fn read_current_direction(&mut self) -> Result<CurrentDirection, Error<E>> {
        decode(self.read_u16(Register::CurrentDirection).await?)
    }

    pub async fn set_current_direction(
        &mut self,
        direction: CurrentDirection,
    ) -> Result<(), Error<E>> {
        self.write_u16(Register::CurrentDirection, direction.into())
            .await
    }

    /// Adjustment pack application. Returned raw, custom values are allowed.
    pub async fn read_apa(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::Apa).await
    }

    pub async fn set_apa(&mut self, apa: ApaAdjustment) -> Result<(), Error<E>> {
        self.write_u16(Register::Apa, apa.into()).await
    }

    pub async fn read_apt(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::Apt).await
    }

    pub async fn set_apt(&mut self, apt: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::Apt, apt).await
    }

    /// Relative state of charge in percent.
    pub async fn read_rsoc(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::Rsoc).await
    }

    pub async fn set_rsoc(&mut self, rsoc: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::Rsoc, rsoc).await
    }

    pub async fn read_tsense2_thermistor_b(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::Tsense2ThermistorB).await
    }

    pub async fn set_tsense2_thermistor_b(&mut self, b: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::Tsense2ThermistorB, b).await
    }

    /// Indicator to empty in percent, 0.1 % resolution.
    pub async fn read_ite(&mut self) -> Result<f32, Error<E>> {
        self.read_tenths(Register::Ite).await
    }

    pub async fn read_ic_version(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::IcVersion).await
    }

    /// Selected battery profile.
    pub async fn read_change_of_the_parameter(&mut self) -> Result<BatteryProfile, Error<E>> {
        decode(self.read_u16(Register::ChangeOfTheParameter).await?)
    }

    pub async fn set_change_of_the_parameter(
        &mut self,
        profile: BatteryProfile,
    ) -> Result<(), Error<E>> {
        self.write_u16(Register::ChangeOfTheParameter, profile.into())
            .await
    }

    pub async fn read_alarm_low_rsoc(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::AlarmLowRsoc).await
    }

    /// Sets the low RSOC alarm threshold in percent, 0 disables the alarm.
    pub async fn set_alarm_low_rsoc(&mut self, rsoc: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::AlarmLowRsoc, rsoc).await
    }

    pub async fn read_alarm_low_cell_voltage(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::AlarmLowCellVoltage).await
    }

    /// Sets the low cell voltage alarm threshold in mV, 0 disables the alarm.
    pub async fn set_alarm_low_cell_voltage(&mut self, millivolts: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::AlarmLowCellVoltage, millivolts)
            .await
    }

    pub async fn read_ic_power_mode(&mut self) -> Result<PowerMode, Error<E>> {
        decode(self.read_u16(Register::IcPowerMode).await?)
    }

    pub async fn set_ic_power_mode(&mut self, mode: PowerMode) -> Result<(), Error<E>> {
        self.write_u16(Register::IcPowerMode, mode.into()).await
    }

    pub async fn read_status_bit(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::StatusBit).await
    }

    pub async fn set_status_bit(&mut self, value: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::StatusBit, value).await
    }

    /// Thermistors currently enabled in the status-bit register.
    pub async fn read_thermistors(&mut self) -> Result<Thermistors, Error<E>> {
        Ok(Thermistors::from_bits_truncate(
            self.read_status_bit().await?,
        ))
    }

    /// Enables or disables the TSENSE1/TSENSE2 thermistors. Other status bits are cleared.
    pub async fn set_thermistors(&mut self, tsense1: bool, tsense2: bool) -> Result<(), Error<E>> {
        let mut thermistors = Thermistors::empty();
        thermistors.set(Thermistors::TSENSE1, tsense1);
        thermistors.set(Thermistors::TSENSE2, tsense2);
        self.set_status_bit(thermistors.bits()).await
    }

    pub async fn read_cycle_count(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::CycleCount).await
    }

    /// Raw alarm flags and estimated battery state.
    pub async fn read_battery_status(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::BatteryStatus).await
    }

    pub async fn set_battery_status(&mut self, value: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::BatteryStatus, value).await
    }

    /// Battery profile code stored in the gauge.
    pub async fn read_number_of_the_parameter(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::NumberOfTheParameter).await
    }

    pub async fn read_termination_current_rate(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::TerminationCurrentRate).await
    }

    pub async fn set_termination_current_rate(&mut self, rate: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::TerminationCurrentRate, rate)
            .await
    }

    pub async fn read_empty_cell_voltage(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::EmptyCellVoltage).await
    }

    pub async fn set_empty_cell_voltage(&mut self, millivolts: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::EmptyCellVoltage, millivolts)
            .await
    }

    pub async fn read_ite_offset(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::IteOffset).await
    }

    pub async fn set_ite_offset(&mut self, offset: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::IteOffset, offset).await
    }

    pub async fn read_alarm_high_cell_voltage(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::AlarmHighCellVoltage).await
    }

    /// Sets the high cell voltage alarm threshold in mV, 0 disables the alarm.
    pub async fn set_alarm_high_cell_voltage(&mut self, millivolts: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::AlarmHighCellVoltage, millivolts)
            .await
    }

    pub async fn read_alarm_low_temperature(&mut self) -> Result<f32, Error<E>> {
        self.read_celsius(Register::AlarmLowTemperature).await
    }

    pub async fn set_alarm_low_temperature(&mut self, celsius: f32) -> Result<(), Error<E>> {
        self.write_celsius(Register::AlarmLowTemperature, celsius)
            .await
    }

    pub async fn read_alarm_high_temperature(&mut self) -> Result<f32, Error<E>> {
        self.read_celsius(Register::AlarmHighTemperature).await
    }

    pub async fn set_alarm_high_temperature(&mut self, celsius: f32) -> Result<(), Error<E>> {
        self.write_celsius(Register::AlarmHighTemperature, celsius)
            .await
    }

    pub async fn read_total_run_time(&mut self) -> Result<u32, Error<E>> {
        self.read_u32(Register::TotalRunTimeLower).await
    }

    pub async fn set_total_run_time(&mut self, value: u32) -> Result<(), Error<E>> {
        self.write_u32(Register::TotalRunTimeLower, value).await
    }

    pub async fn read_accumulated_temperature(&mut self) -> Result<u32, Error<E>> {
        self.read_u32(Register::AccumulatedTemperatureLower).await
    }

    pub async fn set_accumulated_temperature(&mut self, value: u32) -> Result<(), Error<E>> {
        self.write_u32(Register::AccumulatedTemperatureLower, value)
            .await
    }

    pub async fn read_accumulated_rsoc(&mut self) -> Result<u32, Error<E>> {
        self.read_u32(Register::AccumulatedRsocLower).await
    }

    pub async fn set_accumulated_rsoc(&mut self, value: u32) -> Result<(), Error<E>> {
        self.write_u32(Register::AccumulatedRsocLower, value).await
    }

    pub async fn read_maximum_cell_voltage(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::MaximumCellVoltage).await
    }

    pub async fn set_maximum_cell_voltage(&mut self, millivolts: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::MaximumCellVoltage, millivolts)
            .await
    }

    pub async fn read_minimum_cell_voltage(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::MinimumCellVoltage).await
    }

    pub async fn set_minimum_cell_voltage(&mut self, millivolts: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::MinimumCellVoltage, millivolts)
            .await
    }

    pub async fn read_maximum_cell_temperature_raw(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::MaximumCellTemperature).await
    }

    pub async fn read_maximum_cell_temperature(&mut self) -> Result<f32, Error<E>> {
        self.read_celsius(Register::MaximumCellTemperature).await
    }

    pub async fn set_maximum_cell_temperature_raw(&mut self, raw: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::MaximumCellTemperature, raw).await
    }

    pub async fn set_maximum_cell_temperature(&mut self, celsius: f32) -> Result<(), Error<E>> {
        self.write_celsius(Register::MaximumCellTemperature, celsius)
            .await
    }

    pub async fn read_minimum_cell_temperature_raw(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::MinimumCellTemperature).await
    }

    pub async fn read_minimum_cell_temperature(&mut self) -> Result<f32, Error<E>> {
        self.read_celsius(Register::MinimumCellTemperature).await
    }

    pub async fn set_minimum_cell_temperature_raw(&mut self, raw: u16) -> Result<(), Error<E>> {
        self.write_u16(Register::MinimumCellTemperature, raw).await
    }

    pub async fn set_minimum_cell_temperature(&mut self, celsius: f32) -> Result<(), Error<E>> {
        self.write_celsius(Register::MinimumCellTemperature, celsius)
            .await
    }

    /// Ambient temperature (TSENSE2) in 0.1 K units.
    pub async fn read_ambient_temperature_raw(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::AmbientTemperature).await
    }

    /// Ambient temperature (TSENSE2) in degrees Celsius.
    pub async fn read_ambient_temperature(&mut self) -> Result<f32, Error<E>> {
        self.read_celsius(Register::AmbientTemperature).await
    }

    /// State of health in percent.
    pub async fn read_state_of_health(&mut self) -> Result<u16, Error<E>> {
        self.read_u16(Register::StateOfHealth).await
    }

    pub async fn read_user_id(&mut self) -> Result<u32, Error<E>> {
        self.read_u32(Register::UserIdLower).await
    }
}
