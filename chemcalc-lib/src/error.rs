use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ChemCalcError {
    /// A required input (value, unit, formula) was absent or blank.
    MissingField(&'static str),
    InvalidNumber(String),
    /// A finite input whose result does not fit in an `f64`.
    ResultOutOfRange(String),
    UnknownUnitPair { from: String, to: String },
    /// The unit needs physical data a plain conversion does not carry.
    InsufficientContext(String),
    UnparseableFormula(String),
    UnsupportedSyntax {
        formula: String,
        found: char,
        position: usize,
    },
    InvalidCount { symbol: String, digits: String },
    UnknownElement(String),
    ZeroMassResult(String),
    UnknownMolecule(String),
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, ChemCalcError>;

impl fmt::Display for ChemCalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::InvalidNumber(value) => write!(f, "invalid number: '{value}'"),
            Self::ResultOutOfRange(what) => {
                write!(f, "result of {what} is too large to represent")
            }
            Self::UnknownUnitPair { from, to } => write!(
                f,
                "conversion from {from} to {to} is not implemented or the units are incompatible"
            ),
            Self::InsufficientContext(unit) => write!(
                f,
                "cannot convert {unit} without solvent data (insufficient context)"
            ),
            Self::UnparseableFormula(formula) => {
                write!(f, "could not parse chemical formula '{formula}'")
            }
            Self::UnsupportedSyntax {
                formula,
                found,
                position,
            } => write!(
                f,
                "unsupported character '{found}' at position {position} in '{formula}': \
                 groups, charges and hydrates are not supported"
            ),
            Self::InvalidCount { symbol, digits } => {
                write!(f, "invalid count '{digits}' for element {symbol}")
            }
            Self::UnknownElement(e) => write!(f, "unknown element: {e}"),
            Self::ZeroMassResult(formula) => {
                write!(f, "invalid chemical formula '{formula}': molar mass is zero")
            }
            Self::UnknownMolecule(m) => write!(f, "unknown molecule: {m}"),
            Self::UnknownCategory(c) => write!(f, "unknown category: {c}"),
        }
    }
}

impl std::error::Error for ChemCalcError {}
