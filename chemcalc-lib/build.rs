use std::path::PathBuf;

fn main() {
    let data_dir = chemcalc_generate::default_data_dir();
    for file in chemcalc_generate::SOURCE_FILES {
        println!("cargo:rerun-if-changed={}", data_dir.join(file).display());
    }
    println!("cargo:rerun-if-changed=build.rs");

    let db = chemcalc_generate::build_database(&data_dir);
    let compressed = chemcalc_generate::encode(&db);

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR not set"));
    std::fs::write(out_dir.join("chemcalc.bin.zst"), compressed)
        .expect("failed to write embedded database");
}
