pub mod constants;
pub mod db;
pub mod display;
pub mod error;
pub mod formula;
pub mod mass;
pub mod molecules;
pub mod periodic;
pub mod units;

pub use chemcalc_data;
pub use db::ChemDb;
pub use display::DisplayConfig;
pub use error::{ChemCalcError, Result};
pub use formula::FormulaToken;
pub use mass::MolarMass;
pub use periodic::{ElementCategory, GridPosition, PeriodicCell};
pub use units::{ConversionRequest, Quantity, TemperatureScale};
