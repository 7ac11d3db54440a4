use approx::assert_relative_eq;
use chemcalc::chemcalc_data::UnitKind;
use chemcalc::{ChemCalcError, ChemDb, ConversionRequest};

fn value(db: &ChemDb, v: f64, from: &str, to: &str) -> f64 {
    db.convert(v, from, to).unwrap().value
}

#[test]
fn test_identity_for_every_unit() {
    let db = ChemDb::new();
    for unit in db.units() {
        if unit.kind == UnitKind::RequiresContext {
            continue;
        }
        for v in [0.0, -17.25, 123.456789, 1e300, f64::MIN_POSITIVE] {
            let q = db.convert(v, &unit.tag, &unit.tag).unwrap();
            assert_eq!(q.value, v, "identity for {}", unit.tag);
            assert_eq!(q.unit, unit.tag);
        }
    }
}

#[test]
fn test_temperature_fixed_points() {
    let db = ChemDb::new();
    assert_eq!(value(&db, 0.0, "C", "K"), 273.15);
    assert_eq!(value(&db, 100.0, "C", "F"), 212.0);
    assert_eq!(value(&db, 273.15, "K", "C"), 0.0);
    assert_eq!(value(&db, 32.0, "F", "C"), 0.0);
    assert_relative_eq!(value(&db, 0.0, "K", "F"), -459.67, epsilon = 1e-9);
    assert_relative_eq!(value(&db, -459.67, "F", "K"), 0.0, epsilon = 1e-9);
}

#[test]
fn test_temperature_round_trips() {
    let db = ChemDb::new();
    let pairs = [("C", "K"), ("C", "F"), ("K", "F")];
    for v in [-273.15, -40.0, 0.0, 25.0, 37.5, 100.0, 1234.5] {
        for (a, b) in pairs {
            let there = value(&db, v, a, b);
            let back = value(&db, there, b, a);
            assert!((back - v).abs() < 1e-9, "{v} {a}->{b}->{a} gave {back}");
            let there = value(&db, v, b, a);
            let back = value(&db, there, a, b);
            assert!((back - v).abs() < 1e-9, "{v} {b}->{a}->{b} gave {back}");
        }
    }
}

#[test]
fn test_mass_and_volume() {
    let db = ChemDb::new();
    assert_eq!(value(&db, 1.0, "kg", "g"), 1000.0);
    assert_eq!(value(&db, 1000.0, "g", "kg"), 1.0);
    assert_eq!(value(&db, 1.0, "L", "mL"), 1000.0);
    assert_eq!(value(&db, 250.0, "mL", "L"), 0.25);
    assert_relative_eq!(value(&db, 1.0, "cm3", "mL"), 1.0);
    assert_relative_eq!(value(&db, 1.0, "lb", "kg"), 0.45359237, max_relative = 1e-12);
}

#[test]
fn test_other_categories() {
    let db = ChemDb::new();
    assert_eq!(value(&db, 1.0, "atm", "Pa"), 101325.0);
    assert_relative_eq!(value(&db, 1.0, "atm", "mmHg"), 760.0, max_relative = 1e-6);
    assert_relative_eq!(value(&db, 1.0, "atm", "torr"), 760.0, max_relative = 1e-12);
    assert_relative_eq!(value(&db, 1.0, "kcal", "kJ"), 4.184, max_relative = 1e-12);
    assert_relative_eq!(value(&db, 1.0, "eV", "J"), 1.602176634e-19, max_relative = 1e-12);
    assert_relative_eq!(value(&db, 1.0, "Ang", "nm"), 0.1, max_relative = 1e-12);
    assert_relative_eq!(value(&db, 2.0, "mol", "mmol"), 2000.0, max_relative = 1e-12);
    assert_relative_eq!(value(&db, 0.5, "M", "mM"), 500.0, max_relative = 1e-12);
}

#[test]
fn test_direct_factors_are_reciprocal() {
    let db = ChemDb::new();
    for table in &db.raw().conversions {
        for f in &table.factors {
            let forward = value(&db, 1.0, &f.from, &f.to);
            let backward = value(&db, 1.0, &f.to, &f.from);
            assert_relative_eq!(forward * backward, 1.0, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_molality_needs_context() {
    let db = ChemDb::new();
    for (from, to) in [
        ("m_molality", "M"),
        ("M", "m_molality"),
        ("m_molality", "m_molality"),
        ("m_molality", "g"),
        ("m_molality", "nonsense"),
    ] {
        assert_eq!(
            db.convert(1.0, from, to),
            Err(ChemCalcError::InsufficientContext("m_molality".to_string())),
            "{from} -> {to}"
        );
    }
}

#[test]
fn test_cross_category_is_unknown_pair() {
    let db = ChemDb::new();
    for (from, to) in [("g", "L"), ("mol", "g"), ("C", "J"), ("Pa", "K"), ("M", "mol")] {
        let err = db.convert(1.0, from, to).unwrap_err();
        assert_eq!(
            err,
            ChemCalcError::UnknownUnitPair {
                from: from.to_string(),
                to: to.to_string()
            }
        );
        assert!(err.to_string().contains("not implemented or the units are incompatible"));
    }
}

#[test]
fn test_unknown_and_miscased_tags() {
    let db = ChemDb::new();
    assert!(matches!(
        db.convert(1.0, "stone", "kg"),
        Err(ChemCalcError::UnknownUnitPair { .. })
    ));
    assert!(matches!(
        db.convert(1.0, "KG", "g"),
        Err(ChemCalcError::UnknownUnitPair { .. })
    ));
    assert!(matches!(
        db.convert(1.0, "foo", "foo"),
        Err(ChemCalcError::UnknownUnitPair { .. })
    ));
}

#[test]
fn test_missing_fields_and_bad_numbers() {
    let db = ChemDb::new();
    assert_eq!(
        db.convert(1.0, "", "g"),
        Err(ChemCalcError::MissingField("from unit"))
    );
    assert_eq!(
        db.convert(1.0, "g", "  "),
        Err(ChemCalcError::MissingField("to unit"))
    );
    assert!(matches!(
        db.convert(f64::NAN, "g", "kg"),
        Err(ChemCalcError::InvalidNumber(_))
    ));
    assert!(matches!(
        db.convert(f64::INFINITY, "C", "K"),
        Err(ChemCalcError::InvalidNumber(_))
    ));
}

#[test]
fn test_overflowing_results_are_rejected() {
    let db = ChemDb::new();
    for (v, from, to) in [
        (1e308, "kg", "g"),
        (1e300, "km", "pm"),
        (f64::MAX, "C", "F"),
        (-f64::MAX, "F", "C"),
    ] {
        assert!(
            matches!(
                db.convert(v, from, to),
                Err(ChemCalcError::ResultOutOfRange(_))
            ),
            "{v} {from} -> {to}"
        );
    }
    // large but representable results still convert
    assert_relative_eq!(value(&db, 1e300, "kg", "g"), 1e303, max_relative = 1e-12);
    assert_eq!(value(&db, f64::MAX, "K", "C"), f64::MAX - 273.15);
}

#[test]
fn test_request_from_form_input() {
    let db = ChemDb::new();
    let req = ConversionRequest::from_input("1.5", "kg", "g").unwrap();
    assert_eq!(db.convert_request(&req).unwrap().value, 1500.0);

    assert!(matches!(
        ConversionRequest::from_input("12abc", "kg", "g"),
        Err(ChemCalcError::InvalidNumber(_))
    ));
}

#[test]
fn test_display_strings() {
    let db = ChemDb::new();
    assert_eq!(db.convert(0.0, "C", "K").unwrap().to_string(), "273.15 K");
    assert_eq!(db.convert(100.0, "C", "F").unwrap().to_string(), "212 F");
    assert_eq!(db.convert(1.0, "kg", "g").unwrap().to_string(), "1000 g");
    assert_eq!(db.convert(1.0, "g", "g").unwrap().to_string(), "1 g");
    assert_eq!(db.convert(1.0, "mL", "L").unwrap().to_string(), "0.001 L");
    assert_eq!(db.convert(1.0, "g", "lb").unwrap().to_string(), "0.00220462 lb");
}

#[test]
fn test_repeated_calls_are_identical() {
    let db = ChemDb::new();
    let first = db.convert(98.6, "F", "C");
    let second = db.convert(98.6, "F", "C");
    assert_eq!(first, second);
}

#[test]
fn test_unit_registry() {
    let db = ChemDb::new();
    let categories = db.categories();
    for expected in [
        "mass",
        "amount",
        "volume",
        "length",
        "pressure",
        "energy",
        "concentration",
        "temperature",
    ] {
        assert!(categories.contains(&expected), "missing {expected}");
    }

    let mass: Vec<&str> = db
        .units_in_category("mass")
        .unwrap()
        .iter()
        .map(|u| u.tag.as_str())
        .collect();
    assert!(mass.contains(&"kg"));
    assert!(mass.contains(&"g"));
    assert!(matches!(
        db.units_in_category("speed"),
        Err(ChemCalcError::UnknownCategory(_))
    ));

    assert_eq!(db.unit("atm").unwrap().category, "pressure");
    assert!(db.unit("atmosphere").is_none());
}
