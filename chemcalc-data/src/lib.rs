#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// The complete chemcalc reference database, deserialized from the embedded blob.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChemDatabase {
    pub version: Vec<VersionRecord>,
    pub elements: Vec<ElementRecord>,
    pub units: Vec<UnitRecord>,
    pub conversions: Vec<ConversionCategoryRecord>,
    pub molecules: Vec<MoleculeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub tag: String,
    pub date: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub atomic_number: u16,
    pub symbol: String,
    pub name: String,
    /// Standard atomic weight in g/mol.
    pub atomic_weight: f64,
    /// Kebab-case category name, e.g. `alkali-metal`.
    pub category: String,
    /// IUPAC group 1-18, or 0 for the f-block.
    pub group: u8,
    pub period: u8,
    pub properties: ElementProperties,
}

/// Descriptive data shown alongside an element. Numeric properties are
/// `None` when no value is tabulated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementProperties {
    /// `s`, `p`, `d` or `f`.
    pub block: String,
    /// Ground-state configuration with a noble-gas core, e.g. `[Ar] 3d⁶ 4s²`.
    pub electron_configuration: String,
    /// Pauling scale.
    pub electronegativity: Option<f64>,
    /// Kelvin.
    pub melting_point: Option<f64>,
    /// Kelvin.
    pub boiling_point: Option<f64>,
    /// g/cm³.
    pub density: Option<f64>,
}

/// How values in a unit relate to the rest of its category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UnitKind {
    /// Multiplicative factor to the category's base unit.
    Linear { to_base: f64 },
    /// Offset scales (temperature); converted with fixed formulas.
    Affine,
    /// Needs physical context the tables do not carry (molality).
    RequiresContext,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub tag: String,
    pub name: String,
    pub category: String,
    pub kind: UnitKind,
}

/// Direct conversion factors for one dimensional category.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversionCategoryRecord {
    pub category: String,
    pub factors: Vec<ConversionFactorRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionFactorRecord {
    pub from: String,
    pub to: String,
    pub factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeRecord {
    pub id: String,
    pub name: String,
    /// Display formula; may contain Unicode subscript digits.
    pub formula: String,
    /// Reference molecular weight in g/mol.
    pub molecular_weight: f64,
    /// SMILES notation.
    pub structure: String,
    pub description: String,
}
