//! WASM bindings for chemcalc.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p chemcalc-wasm
//! ```
//!
//! Functions ending in `_display` follow the calculator page contract: they
//! always return a string, either the formatted result or `"Error: ..."`.
//! The numeric variants throw a `JsError` instead.

use std::fmt::Display;

use js_sys::Array;
use wasm_bindgen::prelude::*;

use chemcalc::{ChemCalcError, ChemDb, ConversionRequest, ElementCategory};

fn db() -> ChemDb {
    ChemDb::new()
}

fn to_js(e: ChemCalcError) -> JsError {
    JsError::new(&e.to_string())
}

fn display_result<T: Display>(result: chemcalc::Result<T>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(e) => format!("Error: {e}"),
    }
}

fn string_array<'a>(items: impl IntoIterator<Item = &'a str>) -> Array {
    items.into_iter().map(JsValue::from_str).collect()
}

// ── Unit conversion ──

/// Converts a value and returns e.g. `"212 F"` or an error string.
#[wasm_bindgen]
pub fn convert_units_display(value: f64, from_unit: &str, to_unit: &str) -> String {
    display_result(db().convert(value, from_unit, to_unit))
}

/// Same as [`convert_units_display`] but takes the raw text of the value field.
#[wasm_bindgen]
pub fn convert_text_display(value: &str, from_unit: &str, to_unit: &str) -> String {
    display_result(
        ConversionRequest::from_input(value, from_unit, to_unit)
            .and_then(|req| db().convert_request(&req)),
    )
}

/// Returns the unrounded converted value.
#[wasm_bindgen]
pub fn convert_units(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, JsError> {
    db().convert(value, from_unit, to_unit)
        .map(|q| q.value)
        .map_err(to_js)
}

/// Unit categories, e.g. `["mass", "amount", ...]`.
#[wasm_bindgen]
pub fn unit_categories() -> Array {
    string_array(db().categories())
}

/// Unit tags in a category, in table order.
#[wasm_bindgen]
pub fn unit_tags(category: &str) -> Result<Array, JsError> {
    let db = db();
    let units = db.units_in_category(category).map_err(to_js)?;
    Ok(string_array(units.iter().map(|u| u.tag.as_str())))
}

// ── Molar mass ──

/// Returns e.g. `"18.015 g/mol"` or an error string.
#[wasm_bindgen]
pub fn molar_mass_display(formula: &str) -> String {
    display_result(db().molar_mass(formula))
}

/// Returns the unrounded molar mass in g/mol.
#[wasm_bindgen]
pub fn molar_mass(formula: &str) -> Result<f64, JsError> {
    db().molar_mass(formula).map(|m| m.value()).map_err(to_js)
}

#[wasm_bindgen]
pub fn moles_to_grams(formula: &str, moles: f64) -> Result<f64, JsError> {
    db().moles_to_grams(formula, moles)
        .map(|q| q.value)
        .map_err(to_js)
}

#[wasm_bindgen]
pub fn grams_to_moles(formula: &str, grams: f64) -> Result<f64, JsError> {
    db().grams_to_moles(formula, grams)
        .map(|q| q.value)
        .map_err(to_js)
}

// ── Element lookups ──

#[wasm_bindgen]
pub fn atomic_number(element: &str) -> Result<u16, JsError> {
    db().atomic_number(element).map_err(to_js)
}

#[wasm_bindgen]
pub fn symbol(element: &str) -> Result<String, JsError> {
    db().symbol(element).map(|s| s.to_string()).map_err(to_js)
}

#[wasm_bindgen]
pub fn element_name(element: &str) -> Result<String, JsError> {
    db().element_name(element).map(|s| s.to_string()).map_err(to_js)
}

#[wasm_bindgen]
pub fn atomic_weight(element: &str) -> Result<f64, JsError> {
    let db = db();
    let symbol = db.symbol(element).map_err(to_js)?;
    db.atomic_weight(symbol).map_err(to_js)
}

/// Symbols of elements whose name, symbol or atomic number contains `term`.
#[wasm_bindgen]
pub fn search_elements(term: &str) -> Array {
    let db = db();
    let hits = db.search_elements(term);
    string_array(hits.iter().map(|e| e.symbol.as_str()))
}

/// `s`, `p`, `d` or `f`.
#[wasm_bindgen]
pub fn element_block(element: &str) -> Result<String, JsError> {
    db().element(element)
        .map(|e| e.properties.block.clone())
        .map_err(to_js)
}

#[wasm_bindgen]
pub fn electron_configuration(element: &str) -> Result<String, JsError> {
    db().element(element)
        .map(|e| e.properties.electron_configuration.clone())
        .map_err(to_js)
}

/// Pauling electronegativity, `undefined` when not tabulated.
#[wasm_bindgen]
pub fn electronegativity(element: &str) -> Result<Option<f64>, JsError> {
    db().element(element)
        .map(|e| e.properties.electronegativity)
        .map_err(to_js)
}

#[wasm_bindgen]
pub fn element_category(element: &str) -> Result<String, JsError> {
    db().category(element)
        .map(|c| c.as_str().to_string())
        .map_err(to_js)
}

// ── Periodic table layout ──

/// Returns `[row, col]` of an element in the 18-column grid.
#[wasm_bindgen]
pub fn grid_position(element: &str) -> Result<Vec<u8>, JsError> {
    let pos = db().grid_position(element).map_err(to_js)?;
    Ok(vec![pos.row, pos.col])
}

/// Symbols of every element in a category (e.g. `"noble-gas"`).
#[wasm_bindgen]
pub fn elements_in_category(category: &str) -> Result<Array, JsError> {
    let category: ElementCategory = category.parse().map_err(to_js)?;
    let db = db();
    let elements = db.elements_in_category(category);
    Ok(string_array(elements.iter().map(|e| e.symbol.as_str())))
}

// ── Molecules ──

#[wasm_bindgen]
pub fn molecule_formula(key: &str) -> Result<String, JsError> {
    db().molecule(key)
        .map(|m| m.formula.clone())
        .map_err(to_js)
}

/// SMILES notation of a catalogue molecule.
#[wasm_bindgen]
pub fn molecule_structure(key: &str) -> Result<String, JsError> {
    db().molecule(key)
        .map(|m| m.structure.clone())
        .map_err(to_js)
}

/// Molar mass computed from a catalogue molecule's formula, as a display string.
#[wasm_bindgen]
pub fn molecule_molar_mass_display(key: &str) -> String {
    display_result(db().molecule_molar_mass(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_display_contract() {
        assert_eq!(convert_units_display(100.0, "C", "F"), "212 F");
        assert_eq!(convert_units_display(1.0, "kg", "g"), "1000 g");
        assert!(convert_units_display(1.0, "g", "L").starts_with("Error: conversion from g to L"));
        assert!(
            convert_units_display(1.0, "m_molality", "M").contains("insufficient context")
        );
    }

    #[test]
    fn test_convert_text_display() {
        assert_eq!(convert_text_display("0", "C", "K"), "273.15 K");
        assert_eq!(
            convert_text_display("", "C", "K"),
            "Error: missing required field: value"
        );
        assert_eq!(
            convert_text_display("warm", "C", "K"),
            "Error: invalid number: 'warm'"
        );
    }

    #[test]
    fn test_molar_mass_display_contract() {
        assert_eq!(molar_mass_display("H2O"), "18.015 g/mol");
        assert_eq!(molar_mass_display("Xx2"), "Error: unknown element: Xx");
        assert_eq!(
            molar_mass_display(""),
            "Error: missing required field: formula"
        );
        assert_eq!(molecule_molar_mass_display("nacl"), "58.440 g/mol");
    }
}
