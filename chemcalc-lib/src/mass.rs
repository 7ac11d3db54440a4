use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::constants::{GRAM, MOLE};
use crate::db::ChemDb;
use crate::display::{DisplayConfig, format_mass};
use crate::error::{ChemCalcError, Result};
use crate::formula::tokenize_formula;
use crate::units::Quantity;

/// Molar mass of a formula. `grams_per_mole` is unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MolarMass {
    pub formula: String,
    pub grams_per_mole: f64,
}

impl MolarMass {
    pub fn value(&self) -> f64 {
        self.grams_per_mole
    }

    pub fn display_with(&self, config: &DisplayConfig) -> String {
        format_mass(self.grams_per_mole, config.mass_decimals)
    }
}

impl fmt::Display for MolarMass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(&DisplayConfig::default()))
    }
}

fn check_amount(value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChemCalcError::InvalidNumber(value.to_string()));
    }
    Ok(())
}

fn checked_amount(result: f64, what: impl FnOnce() -> String) -> Result<f64> {
    if !result.is_finite() {
        return Err(ChemCalcError::ResultOutOfRange(what()));
    }
    Ok(result)
}

impl ChemDb {
    /// Returns the molar mass (g/mol) of a chemical formula.
    ///
    /// The formula is scanned with [`tokenize_formula`]; an unknown symbol
    /// aborts the whole sum.
    ///
    /// # Examples
    /// ```
    /// let db = chemcalc::ChemDb::new();
    /// let water = db.molar_mass("H2O").unwrap();
    /// assert_eq!(water.to_string(), "18.015 g/mol");
    /// ```
    pub fn molar_mass(&self, formula: &str) -> Result<MolarMass> {
        trace!("molar mass of '{formula}'");
        let result = self.sum_formula(formula);
        if let Err(e) = &result {
            debug!("formula rejected: {e}");
        }
        result
    }

    fn sum_formula(&self, formula: &str) -> Result<MolarMass> {
        let mut total = 0.0_f64;
        for token in tokenize_formula(formula)? {
            total += self.atomic_weight(&token.symbol)? * f64::from(token.count);
        }

        if total == 0.0 {
            return Err(ChemCalcError::ZeroMassResult(formula.to_string()));
        }

        Ok(MolarMass {
            formula: formula.to_string(),
            grams_per_mole: total,
        })
    }

    /// Mass fraction of each element, in order of first appearance.
    pub fn mass_fractions(&self, formula: &str) -> Result<Vec<(String, f64)>> {
        let total = self.molar_mass(formula)?.grams_per_mole;

        let mut fractions: Vec<(String, f64)> = Vec::new();
        for token in tokenize_formula(formula)? {
            let part = self.atomic_weight(&token.symbol)? * f64::from(token.count) / total;
            match fractions.iter_mut().find(|(sym, _)| *sym == token.symbol) {
                Some((_, frac)) => *frac += part,
                None => fractions.push((token.symbol, part)),
            }
        }
        Ok(fractions)
    }

    /// Mass in grams of `moles` of a compound.
    pub fn moles_to_grams(&self, formula: &str, moles: f64) -> Result<Quantity> {
        check_amount(moles)?;
        let mass = self.molar_mass(formula)?;
        let grams = checked_amount(moles * mass.grams_per_mole, || {
            format!("{moles:e} {MOLE} {formula} -> {GRAM}")
        })?;
        Ok(Quantity::new(grams, GRAM))
    }

    /// Amount in moles of `grams` of a compound.
    pub fn grams_to_moles(&self, formula: &str, grams: f64) -> Result<Quantity> {
        check_amount(grams)?;
        let mass = self.molar_mass(formula)?;
        let moles = checked_amount(grams / mass.grams_per_mole, || {
            format!("{grams:e} {GRAM} {formula} -> {MOLE}")
        })?;
        Ok(Quantity::new(moles, MOLE))
    }
}
