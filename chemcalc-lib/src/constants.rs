/// Kelvin value of 0 °C.
pub const ZERO_CELSIUS_KELVIN: f64 = 273.15;

/// Fahrenheit value of 0 °C.
pub const ZERO_CELSIUS_FAHRENHEIT: f64 = 32.0;

/// Unit tag of the gram, the unit of mole/mass helper results.
pub const GRAM: &str = "g";

/// Unit tag of the mole.
pub const MOLE: &str = "mol";
