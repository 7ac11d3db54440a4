use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use chemcalc_data::{ChemDatabase, ElementRecord, UnitRecord, VersionRecord};
use log::debug;

use crate::error::{ChemCalcError, Result};
use crate::periodic::ElementCategory;

const COMPRESSED_DATA: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/chemcalc.bin.zst"));

/// category -> from tag -> to tag -> factor
type FactorTable = HashMap<String, HashMap<String, HashMap<String, f64>>>;

struct InitializedDb {
    data: ChemDatabase,
    /// Exact-case symbols, used by the formula evaluator.
    symbol_to_z: HashMap<String, u16>,
    /// Lowercase symbols and names, used for lenient element lookup.
    alias_to_z: HashMap<String, u16>,
    unit_index: HashMap<String, usize>,
    factors: FactorTable,
    /// Lowercase ids and names.
    molecule_index: HashMap<String, usize>,
}

static DATABASE: OnceLock<InitializedDb> = OnceLock::new();

fn db() -> &'static InitializedDb {
    DATABASE.get_or_init(|| {
        // Decompress with ruzstd
        let mut decoder = ruzstd::decoding::StreamingDecoder::new(COMPRESSED_DATA)
            .expect("failed to create zstd decoder");
        let mut decompressed = Vec::new();
        std::io::Read::read_to_end(&mut decoder, &mut decompressed)
            .expect("failed to decompress data");

        // Deserialize with postcard
        let data: ChemDatabase =
            postcard::from_bytes(&decompressed).expect("failed to deserialize data");

        let initialized = index(data);
        debug!(
            "chemcalc database {} loaded: {} elements, {} units, {} molecules",
            initialized
                .data
                .version
                .last()
                .map(|v| v.tag.as_str())
                .unwrap_or("unversioned"),
            initialized.data.elements.len(),
            initialized.data.units.len(),
            initialized.data.molecules.len(),
        );
        initialized
    })
}

/// Builds lookup indices. Panics on a corrupted dataset.
fn index(data: ChemDatabase) -> InitializedDb {
    let mut symbol_to_z = HashMap::new();
    let mut alias_to_z = HashMap::new();
    for elem in &data.elements {
        assert!(
            elem.atomic_weight.is_finite() && elem.atomic_weight > 0.0,
            "corrupted element table: bad atomic weight for {}",
            elem.symbol
        );
        assert!(
            ElementCategory::from_str(&elem.category).is_ok(),
            "corrupted element table: bad category '{}' for {}",
            elem.category,
            elem.symbol
        );
        symbol_to_z.insert(elem.symbol.clone(), elem.atomic_number);
        alias_to_z.insert(elem.symbol.to_lowercase(), elem.atomic_number);
        alias_to_z.insert(elem.name.to_lowercase(), elem.atomic_number);
    }

    let unit_index = data
        .units
        .iter()
        .enumerate()
        .map(|(i, u)| (u.tag.clone(), i))
        .collect();

    let mut factors: FactorTable = HashMap::new();
    for table in &data.conversions {
        let category = factors.entry(table.category.clone()).or_default();
        for f in &table.factors {
            assert!(
                f.factor.is_finite() && f.factor > 0.0,
                "corrupted conversion table: bad factor {} -> {}",
                f.from,
                f.to
            );
            category
                .entry(f.from.clone())
                .or_default()
                .insert(f.to.clone(), f.factor);
        }
    }

    let mut molecule_index = HashMap::new();
    for (i, m) in data.molecules.iter().enumerate() {
        molecule_index.insert(m.id.to_lowercase(), i);
        molecule_index.insert(m.name.to_lowercase(), i);
    }

    InitializedDb {
        data,
        symbol_to_z,
        alias_to_z,
        unit_index,
        factors,
        molecule_index,
    }
}

/// The main interface to the chemistry reference data and calculators.
///
/// Cheap to create: holds a reference to statically-allocated data that is
/// decompressed on first use. Every method is a pure lookup or calculation,
/// so a `ChemDb` can be shared freely between threads.
#[derive(Clone, Copy)]
pub struct ChemDb {
    db: &'static InitializedDb,
}

impl ChemDb {
    pub fn new() -> Self {
        ChemDb { db: db() }
    }

    /// Access the raw database.
    pub fn raw(&self) -> &ChemDatabase {
        &self.db.data
    }

    /// The most recent dataset version.
    pub fn version(&self) -> Option<&VersionRecord> {
        self.db.data.version.last()
    }

    /// Resolve an element identifier (symbol, name, or atomic number) to Z.
    ///
    /// Symbols and names are matched case-insensitively here; formula
    /// evaluation uses [`ChemDb::atomic_weight`], which is exact-case.
    pub fn resolve_element(&self, element: &str) -> Result<u16> {
        let element = element.trim();
        // Try as atomic number first
        if let Ok(z) = element.parse::<u16>() {
            if (1..=self.db.data.elements.len()).contains(&usize::from(z)) {
                return Ok(z);
            }
        }
        // Try as exact symbol
        if let Some(&z) = self.db.symbol_to_z.get(element) {
            return Ok(z);
        }
        // Try as lowercase symbol or name
        if let Some(&z) = self.db.alias_to_z.get(&element.to_lowercase()) {
            return Ok(z);
        }
        Err(ChemCalcError::UnknownElement(element.to_string()))
    }

    /// Full record for an element identifier.
    pub fn element(&self, element: &str) -> Result<&ElementRecord> {
        let z = self.resolve_element(element)?;
        self.element_by_z(z)
            .ok_or_else(|| ChemCalcError::UnknownElement(element.to_string()))
    }

    pub(crate) fn element_by_z(&self, z: u16) -> Option<&ElementRecord> {
        // Records are stored in order of atomic number.
        self.db.data.elements.get(usize::from(z).checked_sub(1)?)
    }

    pub fn elements(&self) -> &[ElementRecord] {
        &self.db.data.elements
    }

    /// Elements whose name, symbol or atomic number contains `term`,
    /// ignoring case, in atomic number order. A blank term matches every
    /// element.
    ///
    /// # Examples
    /// ```
    /// let db = chemcalc::ChemDb::new();
    /// let hits = db.search_elements("gold");
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].symbol, "Au");
    /// ```
    pub fn search_elements(&self, term: &str) -> Vec<&ElementRecord> {
        let term = term.trim().to_lowercase();
        self.elements()
            .iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&term)
                    || e.symbol.to_lowercase().contains(&term)
                    || e.atomic_number.to_string().contains(&term)
            })
            .collect()
    }

    pub fn atomic_number(&self, element: &str) -> Result<u16> {
        self.resolve_element(element)
    }

    pub fn symbol(&self, element: &str) -> Result<&str> {
        Ok(&self.element(element)?.symbol)
    }

    pub fn element_name(&self, element: &str) -> Result<&str> {
        Ok(&self.element(element)?.name)
    }

    /// Standard atomic weight (g/mol) for an exact-case element symbol.
    pub fn atomic_weight(&self, symbol: &str) -> Result<f64> {
        self.db
            .symbol_to_z
            .get(symbol)
            .and_then(|&z| self.element_by_z(z))
            .map(|e| e.atomic_weight)
            .ok_or_else(|| ChemCalcError::UnknownElement(symbol.to_string()))
    }

    pub(crate) fn unit_record(&self, tag: &str) -> Option<&UnitRecord> {
        self.db
            .unit_index
            .get(tag)
            .map(|&i| &self.db.data.units[i])
    }

    /// Direct factor for `from -> to` within `category`. Never chains
    /// through intermediate units.
    pub(crate) fn direct_factor(&self, category: &str, from: &str, to: &str) -> Option<f64> {
        self.db
            .factors
            .get(category)?
            .get(from)?
            .get(to)
            .copied()
    }

    pub(crate) fn molecule_position(&self, key: &str) -> Option<usize> {
        self.db.molecule_index.get(&key.trim().to_lowercase()).copied()
    }
}

impl Default for ChemDb {
    fn default() -> Self {
        Self::new()
    }
}
