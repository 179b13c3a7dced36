//! Example: classify a HYG catalog export
//!
//! Reads a JSON array of HYG records, classifies every star in parallel and
//! prints the augmented records as JSON on stdout. The stats summary goes to
//! stderr.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example classify_catalog -- hyg.json [TABLE_DIR] [CONFIG_JSON]
//! RUST_LOG=hyg_spectrum=debug cargo run --example classify_catalog -- hyg.json
//! ```
//!
//! `TABLE_DIR` holds `trl.json`, `tl.json`, `lum_by_mag.json` and optionally
//! `blackbody.json`; without it the bundled tables are used.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use hyg_spectrum::{ClassifierConfig, LookupTables, SpectrumClassifier, StarRecord};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(catalog_path) = args.first() else {
        bail!("usage: classify_catalog <catalog.json> [table_dir] [config.json]");
    };

    let tables = match args.get(1) {
        Some(dir) => LookupTables::from_dir(Path::new(dir)),
        None => LookupTables::bundled(),
    };

    let config = match args.get(2) {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path))?;
            ClassifierConfig::from_json(&text).with_context(|| format!("parsing config {}", path))?
        }
        None => ClassifierConfig::default(),
    };

    let text = fs::read_to_string(catalog_path)
        .with_context(|| format!("reading catalog {}", catalog_path))?;
    let records: Vec<StarRecord> = serde_json::from_str(&text)
        .with_context(|| format!("parsing catalog {}", catalog_path))?;
    tracing::info!(path = %catalog_path, records = records.len(), "catalog loaded");

    let classifier = SpectrumClassifier::new(tables, config);
    let classified = classifier.classify_batch(records);

    println!("{}", serde_json::to_string_pretty(&classified)?);
    eprintln!("{}", classifier.stats());

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
