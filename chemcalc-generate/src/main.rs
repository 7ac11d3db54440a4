use std::io::Write;
use std::path::PathBuf;

use chemcalc_generate::{build_database, decode, default_data_dir, encode};

fn main() {
    let data_dir = default_data_dir();
    if !data_dir.exists() {
        eprintln!("Error: data_sources directory not found at {:?}", data_dir);
        std::process::exit(1);
    }

    println!("Parsing reference data from {:?}...", data_dir);
    let db = build_database(&data_dir);

    if let Some(latest) = db.version.last() {
        println!("  Version: {} ({})", latest.tag, latest.date);
    }
    println!("  Elements: {} entries", db.elements.len());
    println!("  Units: {} entries", db.units.len());
    for cat in &db.conversions {
        println!("    {}: {} direct factors", cat.category, cat.factors.len());
    }
    println!("  Molecules: {} entries", db.molecules.len());

    println!("\nSerializing with postcard and compressing with zstd...");
    let compressed = encode(&db);
    println!("  Compressed size: {} bytes", compressed.len());

    let out_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("chemcalc.bin.zst"));
    let mut f = std::fs::File::create(&out_path).expect("failed to create output file");
    f.write_all(&compressed)
        .expect("failed to write compressed data");
    println!("\nWrote {:?}", out_path);

    println!("Verifying round-trip deserialization...");
    let db2 = decode(&compressed);
    assert_eq!(db2.elements.len(), db.elements.len());
    assert_eq!(db2.units.len(), db.units.len());
    println!("  Round-trip OK!");
}
