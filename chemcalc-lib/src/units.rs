use std::fmt;

use chemcalc_data::{UnitKind, UnitRecord};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::constants::{ZERO_CELSIUS_FAHRENHEIT, ZERO_CELSIUS_KELVIN};
use crate::db::ChemDb;
use crate::display::{DisplayConfig, format_significant};
use crate::error::{ChemCalcError, Result};

/// A numeric result tagged with its unit.
///
/// `value` is the unrounded result; rounding only happens when displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Quantity {
            value,
            unit: unit.into(),
        }
    }

    pub fn display_with(&self, config: &DisplayConfig) -> String {
        format!(
            "{} {}",
            format_significant(self.value, config.significant_digits),
            self.unit
        )
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(&DisplayConfig::default()))
    }
}

/// A validated conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(value: f64, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        ConversionRequest {
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }

    /// Builds a request from raw form input.
    ///
    /// Blank fields give [`ChemCalcError::MissingField`]; text that is not a
    /// finite number gives [`ChemCalcError::InvalidNumber`].
    pub fn from_input(value: &str, from_unit: &str, to_unit: &str) -> Result<Self> {
        let text = value.trim();
        if text.is_empty() {
            return Err(ChemCalcError::MissingField("value"));
        }
        check_tags(from_unit, to_unit)?;
        let value = text
            .parse::<f64>()
            .map_err(|_| ChemCalcError::InvalidNumber(text.to_string()))?;
        if !value.is_finite() {
            return Err(ChemCalcError::InvalidNumber(text.to_string()));
        }
        Ok(Self::new(value, from_unit.trim(), to_unit.trim()))
    }
}

/// The three supported temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    Celsius,
    Kelvin,
    Fahrenheit,
}

impl TemperatureScale {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "C" => Some(Self::Celsius),
            "K" => Some(Self::Kelvin),
            "F" => Some(Self::Fahrenheit),
            _ => None,
        }
    }
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + ZERO_CELSIUS_KELVIN
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - ZERO_CELSIUS_KELVIN
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + ZERO_CELSIUS_FAHRENHEIT
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - ZERO_CELSIUS_FAHRENHEIT) * 5.0 / 9.0
}

/// Converts between temperature scales with the exact affine formulas.
/// Kelvin <-> Fahrenheit goes through Celsius.
pub fn convert_temperature(value: f64, from: TemperatureScale, to: TemperatureScale) -> f64 {
    use TemperatureScale::*;
    match (from, to) {
        (Celsius, Kelvin) => celsius_to_kelvin(value),
        (Kelvin, Celsius) => kelvin_to_celsius(value),
        (Celsius, Fahrenheit) => celsius_to_fahrenheit(value),
        (Fahrenheit, Celsius) => fahrenheit_to_celsius(value),
        (Kelvin, Fahrenheit) => celsius_to_fahrenheit(kelvin_to_celsius(value)),
        (Fahrenheit, Kelvin) => celsius_to_kelvin(fahrenheit_to_celsius(value)),
        (Celsius, Celsius) | (Kelvin, Kelvin) | (Fahrenheit, Fahrenheit) => value,
    }
}

fn checked_quantity(result: f64, value: f64, from: &str, to: &str) -> Result<Quantity> {
    if !result.is_finite() {
        return Err(ChemCalcError::ResultOutOfRange(format!(
            "{value:e} {from} -> {to}"
        )));
    }
    Ok(Quantity::new(result, to))
}

fn check_tags(from: &str, to: &str) -> Result<()> {
    if from.trim().is_empty() {
        return Err(ChemCalcError::MissingField("from unit"));
    }
    if to.trim().is_empty() {
        return Err(ChemCalcError::MissingField("to unit"));
    }
    Ok(())
}

impl ChemDb {
    /// Converts `value` from one unit tag to another.
    ///
    /// Tags are case-sensitive. Temperature uses exact affine formulas; every
    /// other pair needs a direct factor in the conversion table, there is no
    /// chaining through intermediate units. Converting a unit to itself
    /// returns the value untouched.
    ///
    /// # Examples
    /// ```
    /// let db = chemcalc::ChemDb::new();
    /// assert_eq!(db.convert(1.0, "kg", "g").unwrap().value, 1000.0);
    /// assert_eq!(db.convert(100.0, "C", "F").unwrap().to_string(), "212 F");
    /// ```
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<Quantity> {
        trace!("convert {value} {from} -> {to}");
        let result = self.convert_inner(value, from.trim(), to.trim());
        if let Err(e) = &result {
            debug!("conversion rejected: {e}");
        }
        result
    }

    pub fn convert_request(&self, request: &ConversionRequest) -> Result<Quantity> {
        self.convert(request.value, &request.from_unit, &request.to_unit)
    }

    fn convert_inner(&self, value: f64, from: &str, to: &str) -> Result<Quantity> {
        check_tags(from, to)?;
        if !value.is_finite() {
            return Err(ChemCalcError::InvalidNumber(value.to_string()));
        }

        let from_unit = self.unit_record(from);
        let to_unit = self.unit_record(to);

        for unit in [from_unit, to_unit].into_iter().flatten() {
            if unit.kind == UnitKind::RequiresContext {
                return Err(ChemCalcError::InsufficientContext(unit.tag.clone()));
            }
        }

        let unknown = || ChemCalcError::UnknownUnitPair {
            from: from.to_string(),
            to: to.to_string(),
        };
        let (Some(from_unit), Some(to_unit)) = (from_unit, to_unit) else {
            return Err(unknown());
        };

        if from == to {
            return Ok(Quantity::new(value, to));
        }

        if from_unit.kind == UnitKind::Affine && to_unit.kind == UnitKind::Affine {
            let scales = TemperatureScale::from_tag(from).zip(TemperatureScale::from_tag(to));
            let (from_scale, to_scale) = scales.ok_or_else(unknown)?;
            return checked_quantity(
                convert_temperature(value, from_scale, to_scale),
                value,
                from,
                to,
            );
        }

        let factor = self
            .direct_factor(&from_unit.category, from, to)
            .ok_or_else(unknown)?;
        checked_quantity(value * factor, value, from, to)
    }

    /// Looks up a unit by tag.
    pub fn unit(&self, tag: &str) -> Option<&UnitRecord> {
        self.unit_record(tag)
    }

    pub fn units(&self) -> &[UnitRecord] {
        &self.raw().units
    }

    /// Units belonging to a dimensional category, in table order.
    pub fn units_in_category(&self, category: &str) -> Result<Vec<&UnitRecord>> {
        let units: Vec<&UnitRecord> = self
            .units()
            .iter()
            .filter(|u| u.category == category)
            .collect();
        if units.is_empty() {
            return Err(ChemCalcError::UnknownCategory(category.to_string()));
        }
        Ok(units)
    }

    /// Distinct unit categories, in table order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for unit in self.units() {
            if !categories.contains(&unit.category.as_str()) {
                categories.push(&unit.category);
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TemperatureScale::*;

    #[test]
    fn test_temperature_fixed_points() {
        assert_eq!(convert_temperature(0.0, Celsius, Kelvin), 273.15);
        assert_eq!(convert_temperature(273.15, Kelvin, Celsius), 0.0);
        assert_eq!(convert_temperature(100.0, Celsius, Fahrenheit), 212.0);
        assert_eq!(convert_temperature(32.0, Fahrenheit, Celsius), 0.0);
        assert_eq!(convert_temperature(-40.0, Celsius, Fahrenheit), -40.0);
    }

    #[test]
    fn test_temperature_composed_pairs() {
        let f = convert_temperature(373.15, Kelvin, Fahrenheit);
        assert!((f - 212.0).abs() < 1e-9, "f = {f}");
        let k = convert_temperature(212.0, Fahrenheit, Kelvin);
        assert!((k - 373.15).abs() < 1e-9, "k = {k}");
    }

    #[test]
    fn test_scale_from_tag_is_case_sensitive() {
        assert_eq!(TemperatureScale::from_tag("K"), Some(Kelvin));
        assert_eq!(TemperatureScale::from_tag("k"), None);
    }

    #[test]
    fn test_request_from_input() {
        let req = ConversionRequest::from_input(" 2.5 ", "kg", "g").unwrap();
        assert_eq!(req, ConversionRequest::new(2.5, "kg", "g"));

        assert_eq!(
            ConversionRequest::from_input("", "kg", "g"),
            Err(ChemCalcError::MissingField("value"))
        );
        assert_eq!(
            ConversionRequest::from_input("1", " ", "g"),
            Err(ChemCalcError::MissingField("from unit"))
        );
        assert_eq!(
            ConversionRequest::from_input("1", "kg", ""),
            Err(ChemCalcError::MissingField("to unit"))
        );
        assert!(matches!(
            ConversionRequest::from_input("abc", "kg", "g"),
            Err(ChemCalcError::InvalidNumber(_))
        ));
        assert!(matches!(
            ConversionRequest::from_input("inf", "kg", "g"),
            Err(ChemCalcError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_quantity_display() {
        assert_eq!(Quantity::new(1000.0, "g").to_string(), "1000 g");
        assert_eq!(Quantity::new(0.1 + 0.2, "L").to_string(), "0.3 L");
        let config = DisplayConfig {
            significant_digits: 2,
            ..DisplayConfig::default()
        };
        assert_eq!(Quantity::new(273.15, "K").display_with(&config), "270 K");
    }
}
