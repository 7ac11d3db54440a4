//! Builds the embedded chemcalc reference database from the plain-text
//! sources in `data_sources/`.
//!
//! Used by the `chemcalc` build script and by the `chemcalc-generate`
//! binary, which writes the blob to disk and verifies it.

pub mod parsers;

use std::path::{Path, PathBuf};

use chemcalc_data::{ChemDatabase, ConversionCategoryRecord, ConversionFactorRecord, UnitKind, UnitRecord};

/// zstd level used for the embedded blob.
pub const COMPRESSION_LEVEL: i32 = 19;

/// Source files read by [`build_database`], relative to the data directory.
pub const SOURCE_FILES: &[&str] = &[
    "Version.dat",
    "elements.txt",
    "element_properties.txt",
    "units.txt",
    "molecules.txt",
];

/// Location of the bundled data sources.
pub fn default_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data_sources")
}

/// Parses every source file and assembles the database.
///
/// Panics on malformed or inconsistent sources so that a bad dataset fails
/// the build instead of surfacing at runtime.
pub fn build_database(data_dir: &Path) -> ChemDatabase {
    let version = parsers::parse_version(&data_dir.join("Version.dat"));
    let mut elements = parsers::parse_elements(&data_dir.join("elements.txt"));
    let properties = parsers::parse_element_properties(&data_dir.join("element_properties.txt"));
    let units = parsers::parse_units(&data_dir.join("units.txt"));
    let molecules = parsers::parse_molecules(&data_dir.join("molecules.txt"));

    if let Err(msg) = parsers::check_elements(&elements) {
        panic!("invalid element data: {msg}");
    }
    if let Err(msg) = parsers::attach_properties(&mut elements, properties) {
        panic!("invalid element properties: {msg}");
    }
    if let Err(msg) = parsers::check_units(&units) {
        panic!("invalid unit data: {msg}");
    }

    let conversions = expand_conversions(&units);

    ChemDatabase {
        version,
        elements,
        units,
        conversions,
        molecules,
    }
}

/// Expands per-unit base factors into explicit pairwise direct factors,
/// one table per category, in the order categories first appear.
///
/// Only linear units take part. Self pairs are omitted.
pub fn expand_conversions(units: &[UnitRecord]) -> Vec<ConversionCategoryRecord> {
    let mut categories: Vec<ConversionCategoryRecord> = Vec::new();

    for unit in units {
        if !matches!(unit.kind, UnitKind::Linear { .. }) {
            continue;
        }
        if categories.iter().any(|c| c.category == unit.category) {
            continue;
        }

        let members: Vec<(&str, f64)> = units
            .iter()
            .filter(|u| u.category == unit.category)
            .filter_map(|u| match u.kind {
                UnitKind::Linear { to_base } => Some((u.tag.as_str(), to_base)),
                _ => None,
            })
            .collect();

        let mut factors = Vec::with_capacity(members.len() * members.len());
        for &(from, from_base) in &members {
            for &(to, to_base) in &members {
                if from == to {
                    continue;
                }
                factors.push(ConversionFactorRecord {
                    from: from.to_string(),
                    to: to.to_string(),
                    factor: from_base / to_base,
                });
            }
        }

        categories.push(ConversionCategoryRecord {
            category: unit.category.clone(),
            factors,
        });
    }

    categories
}

/// Serializes with postcard and compresses with zstd.
pub fn encode(db: &ChemDatabase) -> Vec<u8> {
    let serialized = postcard::to_allocvec(db).expect("postcard serialization failed");
    zstd::encode_all(&serialized[..], COMPRESSION_LEVEL).expect("zstd compression failed")
}

/// Inverse of [`encode`], used to verify a freshly written blob.
pub fn decode(compressed: &[u8]) -> ChemDatabase {
    let decompressed = zstd::decode_all(compressed).expect("zstd decompression failed");
    postcard::from_bytes(&decompressed).expect("postcard deserialization failed")
}
