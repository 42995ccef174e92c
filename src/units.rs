#![allow(non_upper_case_globals)]
#![allow(non_snake_case)]
#![allow(non_camel_case_types)]
#![allow(clippy::upper_case_acronyms)]

// Quantity aliases backed by f32, stored in the gauge's native scales.
ISQ!(
    uom::si,
    f32,
    (
        millimeter,
        kilogram,
        second,
        milliampere,
        kelvin,
        mole,
        candela
    )
);

#[cfg(test)]
mod tests {
    use super::{ElectricPotential, Ratio, ThermodynamicTemperature, Time};
    use approx::assert_relative_eq;
    use uom::si::{
        electric_potential::{millivolt, volt},
        ratio::percent,
        thermodynamic_temperature::{degree_celsius, kelvin},
        time::{minute, second},
    };

    #[test]
    fn test_units() {
        let voltage = ElectricPotential::new::<millivolt>(3700.0);
        let temperature = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let rsoc = Ratio::new::<percent>(50.0);
        let time_to_empty = Time::new::<minute>(90.0);

        assert_relative_eq!(voltage.get::<volt>(), 3.7, epsilon = 1e-6);
        assert_relative_eq!(temperature.get::<kelvin>(), 298.15, epsilon = 1e-3);
        assert_relative_eq!(rsoc.value, 0.5);
        assert_relative_eq!(time_to_empty.get::<second>(), 5400.0);
    }
}
