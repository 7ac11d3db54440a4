use chemcalc_data::MoleculeRecord;

use crate::db::ChemDb;
use crate::error::{ChemCalcError, Result};
use crate::mass::MolarMass;

impl ChemDb {
    pub fn molecules(&self) -> &[MoleculeRecord] {
        &self.raw().molecules
    }

    /// Looks up a catalogue molecule by id (`h2o`) or name (`Water`),
    /// ignoring case.
    pub fn molecule(&self, key: &str) -> Result<&MoleculeRecord> {
        self.molecule_position(key)
            .map(|i| &self.raw().molecules[i])
            .ok_or_else(|| ChemCalcError::UnknownMolecule(key.to_string()))
    }

    /// Molar mass computed from the catalogue formula.
    pub fn molecule_molar_mass(&self, key: &str) -> Result<MolarMass> {
        let molecule = self.molecule(key)?;
        self.molar_mass(&molecule.formula)
    }
}
