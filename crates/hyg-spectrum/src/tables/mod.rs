//! Lookup tables consulted by the parser, the inference paths and the resolver.
//!
//! The grammar tables and type defaults are compiled in. The four larger
//! tables (type+range+luminosity, type+luminosity, luminosity-by-magnitude
//! and blackbody color) are loaded from JSON documents through
//! [`LookupTablesBuilder`]; a document that fails to load leaves an empty
//! table behind, and lookups against it fall through to the next tier.

pub mod blackbody;
pub mod grammar;
pub mod lum_by_mag;
pub mod properties;
pub mod type_defaults;

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::TableLoadError;

pub use blackbody::BlackbodyTable;
pub use lum_by_mag::LumByMagTable;
pub use properties::{PropertyTable, StellarProperties};
pub use type_defaults::type_default;

const BUNDLED_TRL: &str = include_str!("../../data/trl.json");
const BUNDLED_TL: &str = include_str!("../../data/tl.json");
const BUNDLED_LUM_BY_MAG: &str = include_str!("../../data/lum_by_mag.json");

/// The loaded tables. `None` means the table was never supplied; a table
/// whose document failed to parse is present but empty.
///
/// Instances are only produced by [`LookupTablesBuilder::build`], so a
/// classifier never sees a half-loaded set.
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    trl: Option<PropertyTable>,
    tl: Option<PropertyTable>,
    lum_by_mag: Option<LumByMagTable>,
    blackbody: Option<BlackbodyTable>,
}

impl LookupTables {
    pub fn builder() -> LookupTablesBuilder {
        LookupTablesBuilder::default()
    }

    /// Tables shipped with the crate plus the computed blackbody colors.
    pub fn bundled() -> Self {
        Self::builder()
            .trl_json(BUNDLED_TRL)
            .tl_json(BUNDLED_TL)
            .lum_by_mag_json(BUNDLED_LUM_BY_MAG)
            .planckian_blackbody()
            .build()
    }

    /// Reads `trl.json`, `tl.json`, `lum_by_mag.json` and `blackbody.json`
    /// from `dir`. A missing `blackbody.json` falls back to the computed
    /// Planckian table; any other unreadable document becomes an empty table.
    pub fn from_dir(dir: &Path) -> Self {
        let read = |name: &str| std::fs::read_to_string(dir.join(name));

        let mut builder = Self::builder()
            .trl_result(read("trl.json").map_err(TableLoadError::from))
            .tl_result(read("tl.json").map_err(TableLoadError::from))
            .lum_by_mag_result(read("lum_by_mag.json").map_err(TableLoadError::from));

        builder = match read("blackbody.json") {
            Ok(text) => builder.blackbody_json(&text),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(dir = %dir.display(), "no blackbody.json, using computed colors");
                builder.planckian_blackbody()
            }
            Err(err) => builder.blackbody_result(Err(err.into())),
        };

        builder.build()
    }

    pub fn trl(&self) -> Option<&PropertyTable> {
        self.trl.as_ref()
    }

    pub fn tl(&self) -> Option<&PropertyTable> {
        self.tl.as_ref()
    }

    pub fn lum_by_mag(&self) -> Option<&LumByMagTable> {
        self.lum_by_mag.as_ref()
    }

    pub fn blackbody(&self) -> Option<&BlackbodyTable> {
        self.blackbody.as_ref()
    }
}

/// Collects load attempts for each table, then yields an immutable [`LookupTables`].
#[derive(Debug, Default)]
pub struct LookupTablesBuilder {
    tables: LookupTables,
}

impl LookupTablesBuilder {
    pub fn trl_json(self, text: &str) -> Self {
        self.trl_result(Ok(text.to_string()))
    }

    pub fn tl_json(self, text: &str) -> Self {
        self.tl_result(Ok(text.to_string()))
    }

    pub fn lum_by_mag_json(self, text: &str) -> Self {
        self.lum_by_mag_result(Ok(text.to_string()))
    }

    pub fn blackbody_json(self, text: &str) -> Self {
        self.blackbody_result(Ok(text.to_string()))
    }

    pub fn planckian_blackbody(mut self) -> Self {
        self.tables.blackbody = Some(BlackbodyTable::planckian());
        self
    }

    pub fn build(self) -> LookupTables {
        self.tables
    }

    fn trl_result(mut self, text: Result<String, TableLoadError>) -> Self {
        let table = text.and_then(|text| PropertyTable::from_json(&text));
        self.tables.trl = Some(loaded_or_empty("trl", table, PropertyTable::len));
        self
    }

    fn tl_result(mut self, text: Result<String, TableLoadError>) -> Self {
        let table = text.and_then(|text| PropertyTable::from_json(&text));
        self.tables.tl = Some(loaded_or_empty("tl", table, PropertyTable::len));
        self
    }

    fn lum_by_mag_result(mut self, text: Result<String, TableLoadError>) -> Self {
        let table = text.and_then(|text| LumByMagTable::from_json(&text));
        self.tables.lum_by_mag = Some(loaded_or_empty("lum_by_mag", table, LumByMagTable::len));
        self
    }

    fn blackbody_result(mut self, text: Result<String, TableLoadError>) -> Self {
        let table = text.and_then(|text| BlackbodyTable::from_json(&text));
        self.tables.blackbody = Some(loaded_or_empty("blackbody", table, BlackbodyTable::len));
        self
    }
}

fn loaded_or_empty<T: Default>(
    name: &'static str,
    result: Result<T, TableLoadError>,
    len: fn(&T) -> usize,
) -> T {
    match result {
        Ok(table) => {
            debug!(table = name, rows = len(&table), "lookup table loaded");
            table
        }
        Err(err) => {
            warn!(table = name, error = %err, "lookup table failed to load, using an empty table");
            T::default()
        }
    }
}
