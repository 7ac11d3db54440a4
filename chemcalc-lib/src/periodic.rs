use std::fmt;
use std::str::FromStr;

use chemcalc_data::ElementRecord;
use serde::{Deserialize, Serialize};

use crate::db::ChemDb;
use crate::error::{ChemCalcError, Result};

/// Grid row holding the lanthanides below the main table.
pub const LANTHANIDE_ROW: u8 = 8;
/// Grid row holding the actinides.
pub const ACTINIDE_ROW: u8 = 9;

/// Column offsets place La/Ac in column 3 and Lu/Lr in column 17.
const LANTHANIDE_COLUMN_OFFSET: u16 = 54;
const ACTINIDE_COLUMN_OFFSET: u16 = 86;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementCategory {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
}

impl ElementCategory {
    pub const ALL: [ElementCategory; 10] = [
        Self::AlkaliMetal,
        Self::AlkalineEarthMetal,
        Self::TransitionMetal,
        Self::PostTransitionMetal,
        Self::Metalloid,
        Self::Nonmetal,
        Self::Halogen,
        Self::NobleGas,
        Self::Lanthanide,
        Self::Actinide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlkaliMetal => "alkali-metal",
            Self::AlkalineEarthMetal => "alkaline-earth-metal",
            Self::TransitionMetal => "transition-metal",
            Self::PostTransitionMetal => "post-transition-metal",
            Self::Metalloid => "metalloid",
            Self::Nonmetal => "nonmetal",
            Self::Halogen => "halogen",
            Self::NobleGas => "noble-gas",
            Self::Lanthanide => "lanthanide",
            Self::Actinide => "actinide",
        }
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementCategory {
    type Err = ChemCalcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ChemCalcError::UnknownCategory(s.to_string()))
    }
}

/// Cell of an element in the 18-column periodic table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: u8,
    pub col: u8,
}

/// One populated cell of the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicCell<'a> {
    pub element: &'a ElementRecord,
    pub category: ElementCategory,
    pub position: GridPosition,
}

fn position_of(element: &ElementRecord, category: ElementCategory) -> GridPosition {
    let z = element.atomic_number;
    match category {
        ElementCategory::Lanthanide => GridPosition {
            row: LANTHANIDE_ROW,
            col: z.saturating_sub(LANTHANIDE_COLUMN_OFFSET) as u8,
        },
        ElementCategory::Actinide => GridPosition {
            row: ACTINIDE_ROW,
            col: z.saturating_sub(ACTINIDE_COLUMN_OFFSET) as u8,
        },
        _ => GridPosition {
            row: element.period,
            col: element.group,
        },
    }
}

fn cell_of(element: &ElementRecord) -> Result<PeriodicCell<'_>> {
    let category: ElementCategory = element.category.parse()?;
    Ok(PeriodicCell {
        element,
        category,
        position: position_of(element, category),
    })
}

impl ChemDb {
    pub fn category(&self, element: &str) -> Result<ElementCategory> {
        self.element(element)?.category.parse()
    }

    /// Returns the grid cell of an element (symbol, name, or atomic number).
    pub fn grid_position(&self, element: &str) -> Result<GridPosition> {
        let record = self.element(element)?;
        let category: ElementCategory = record.category.parse()?;
        Ok(position_of(record, category))
    }

    /// Every element with its category and grid cell, in atomic number order.
    pub fn periodic_layout(&self) -> Result<Vec<PeriodicCell<'_>>> {
        self.elements()
            .iter()
            .map(cell_of)
            .collect()
    }

    pub fn elements_in_category(&self, category: ElementCategory) -> Vec<&ElementRecord> {
        self.elements()
            .iter()
            .filter(|e| e.category == category.as_str())
            .collect()
    }
}
