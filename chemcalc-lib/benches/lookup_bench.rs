use criterion::{Criterion, black_box, criterion_group, criterion_main};
use chemcalc::ChemDb;

fn bench_lookup_apis(c: &mut Criterion) {
    let db = ChemDb::new();
    let ids = ["Fe", "iron", "26", "Si", "silicon", "14"];

    c.bench_function("atomic_number_mixed_identifiers", |b| {
        b.iter(|| {
            for id in ids {
                black_box(db.atomic_number(black_box(id)).unwrap());
            }
        });
    });

    c.bench_function("grid_position_mixed_identifiers", |b| {
        b.iter(|| {
            for id in ids {
                black_box(db.grid_position(black_box(id)).unwrap());
            }
        });
    });
}

fn bench_convert(c: &mut Criterion) {
    let db = ChemDb::new();
    let pairs = [("kg", "g"), ("atm", "mmHg"), ("kcal", "kJ"), ("C", "F"), ("K", "F")];

    c.bench_function("convert_mixed_pairs", |b| {
        b.iter(|| {
            for (from, to) in pairs {
                black_box(db.convert(black_box(42.0), black_box(from), black_box(to)).unwrap());
            }
        });
    });

    c.bench_function("convert_and_display", |b| {
        b.iter(|| black_box(db.convert(black_box(98.6), "F", "C").unwrap().to_string()));
    });
}

fn bench_molar_mass(c: &mut Criterion) {
    let db = ChemDb::new();
    let formulas = ["H2O", "NaCl", "C6H12O6", "C₂H₅OH", "C12H22O11"];

    c.bench_function("molar_mass_mixed_formulas", |b| {
        b.iter(|| {
            for formula in formulas {
                black_box(db.molar_mass(black_box(formula)).unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_lookup_apis, bench_convert, bench_molar_mass);
criterion_main!(benches);
