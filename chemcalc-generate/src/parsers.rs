use std::collections::HashSet;
use std::path::Path;

use chemcalc_data::{
    ElementProperties, ElementRecord, MoleculeRecord, UnitKind, UnitRecord, VersionRecord,
};

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"))
}

fn data_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

pub fn parse_version(path: &Path) -> Vec<VersionRecord> {
    parse_version_str(&read(path))
}

pub fn parse_version_str(content: &str) -> Vec<VersionRecord> {
    let mut records = Vec::new();
    for line in data_lines(content) {
        let parts: Vec<&str> = line.splitn(3, "//").collect();
        if parts.len() == 3 {
            records.push(VersionRecord {
                tag: parts[0].trim().to_string(),
                date: parts[1].trim().to_string(),
                notes: parts[2].trim().to_string(),
            });
        }
    }
    records
}

pub fn parse_elements(path: &Path) -> Vec<ElementRecord> {
    parse_elements_str(&read(path))
}

pub fn parse_elements_str(content: &str) -> Vec<ElementRecord> {
    let mut records = Vec::new();
    for line in data_lines(content) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 7 {
            panic!("element line has {} fields, expected 7: {line}", parts.len());
        }
        records.push(ElementRecord {
            atomic_number: parts[0].parse().expect("bad atomic number"),
            symbol: parts[1].to_string(),
            name: parts[2].to_string(),
            atomic_weight: parts[3].parse().expect("bad atomic weight"),
            category: parts[4].to_string(),
            group: parts[5].parse().expect("bad group"),
            period: parts[6].parse().expect("bad period"),
            properties: ElementProperties::default(),
        });
    }
    records
}

pub fn parse_element_properties(path: &Path) -> Vec<(u16, ElementProperties)> {
    parse_element_properties_str(&read(path))
}

fn optional_number(field: &str, what: &str, z: u16) -> Option<f64> {
    if field == "-" {
        return None;
    }
    Some(
        field
            .parse()
            .unwrap_or_else(|_| panic!("bad {what} '{field}' for Z={z}")),
    )
}

/// Pipe-separated rows: `Z | block | configuration | electronegativity |
/// melting | boiling | density`, with `-` for missing numbers.
pub fn parse_element_properties_str(content: &str) -> Vec<(u16, ElementProperties)> {
    let mut records = Vec::new();
    for line in data_lines(content) {
        let parts: Vec<&str> = line.split('|').map(str::trim).collect();
        if parts.len() != 7 {
            panic!("property line has {} fields, expected 7: {line}", parts.len());
        }
        let z: u16 = parts[0].parse().expect("bad atomic number");
        records.push((
            z,
            ElementProperties {
                block: parts[1].to_string(),
                electron_configuration: parts[2].to_string(),
                electronegativity: optional_number(parts[3], "electronegativity", z),
                melting_point: optional_number(parts[4], "melting point", z),
                boiling_point: optional_number(parts[5], "boiling point", z),
                density: optional_number(parts[6], "density", z),
            },
        ));
    }
    records
}

/// Fills in each element's descriptive properties. Every element needs
/// exactly one row.
pub fn attach_properties(
    elements: &mut [ElementRecord],
    properties: Vec<(u16, ElementProperties)>,
) -> Result<(), String> {
    if properties.len() != elements.len() {
        return Err(format!(
            "{} property rows for {} elements",
            properties.len(),
            elements.len()
        ));
    }
    for (z, props) in properties {
        let elem = elements
            .iter_mut()
            .find(|e| e.atomic_number == z)
            .ok_or_else(|| format!("properties for unknown element Z={z}"))?;
        if !matches!(props.block.as_str(), "s" | "p" | "d" | "f") {
            return Err(format!("bad block '{}' for {}", props.block, elem.symbol));
        }
        if !elem.properties.block.is_empty() {
            return Err(format!("duplicate properties for {}", elem.symbol));
        }
        elem.properties = props;
    }
    Ok(())
}

pub fn parse_units(path: &Path) -> Vec<UnitRecord> {
    parse_units_str(&read(path))
}

pub fn parse_units_str(content: &str) -> Vec<UnitRecord> {
    let mut records = Vec::new();
    for line in data_lines(content) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 5 {
            panic!("unit line has {} fields, expected at least 5: {line}", parts.len());
        }
        let kind = match parts[2] {
            "linear" => UnitKind::Linear {
                to_base: parts[3]
                    .parse()
                    .unwrap_or_else(|_| panic!("bad factor for unit {}", parts[1])),
            },
            "affine" => UnitKind::Affine,
            "context" => UnitKind::RequiresContext,
            other => panic!("unknown unit kind '{other}' for unit {}", parts[1]),
        };
        records.push(UnitRecord {
            tag: parts[1].to_string(),
            name: parts[4..].join(" "),
            category: parts[0].to_string(),
            kind,
        });
    }
    records
}

pub fn parse_molecules(path: &Path) -> Vec<MoleculeRecord> {
    parse_molecules_str(&read(path))
}

pub fn parse_molecules_str(content: &str) -> Vec<MoleculeRecord> {
    let mut records = Vec::new();
    for line in data_lines(content) {
        let parts: Vec<&str> = line.split('|').map(str::trim).collect();
        if parts.len() != 6 {
            panic!("molecule line has {} fields, expected 6: {line}", parts.len());
        }
        records.push(MoleculeRecord {
            id: parts[0].to_string(),
            name: parts[1].to_string(),
            formula: parts[2].to_string(),
            molecular_weight: parts[3].parse().expect("bad molecular weight"),
            structure: parts[4].to_string(),
            description: parts[5].to_string(),
        });
    }
    records
}

/// Checks invariants the runtime relies on. Returns a description of the
/// first violation found.
pub fn check_elements(elements: &[ElementRecord]) -> Result<(), String> {
    let mut symbols = HashSet::new();
    for (i, elem) in elements.iter().enumerate() {
        if usize::from(elem.atomic_number) != i + 1 {
            return Err(format!(
                "element {} out of order: expected Z={}",
                elem.symbol,
                i + 1
            ));
        }
        if !(elem.atomic_weight.is_finite() && elem.atomic_weight > 0.0) {
            return Err(format!("non-positive atomic weight for {}", elem.symbol));
        }
        if !symbols.insert(elem.symbol.as_str()) {
            return Err(format!("duplicate element symbol {}", elem.symbol));
        }
    }
    Ok(())
}

pub fn check_units(units: &[UnitRecord]) -> Result<(), String> {
    let mut tags = HashSet::new();
    for unit in units {
        if !tags.insert(unit.tag.as_str()) {
            return Err(format!("duplicate unit tag {}", unit.tag));
        }
        if let UnitKind::Linear { to_base } = unit.kind {
            if !(to_base.is_finite() && to_base > 0.0) {
                return Err(format!("non-positive factor for unit {}", unit.tag));
            }
        }
    }
    Ok(())
}
