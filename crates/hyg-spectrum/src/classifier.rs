//! The classification pipeline over loaded tables.

use rayon::prelude::*;
use stellar::{LuminosityClass, SpectralType};
use tracing::{debug, error, warn};

use crate::component::{LookupTier, SpectralRange, SpectrumComponent, SpectrumRole};
use crate::config::ClassifierConfig;
use crate::inference::{self, LastDitch};
use crate::parser;
use crate::record::StarRecord;
use crate::resolver;
use crate::stats::{ClassificationStats, StatKind, StatsCounter};
use crate::tables::LookupTables;

/// Classifies HYG records against one immutable set of lookup tables.
///
/// A classifier is shared freely between threads; the only state it
/// mutates is its increment-only statistics.
///
/// # Example
/// ```
/// use hyg_spectrum::{SpectrumClassifier, StarRecord};
///
/// let classifier = SpectrumClassifier::with_bundled_tables();
/// let star = classifier.classify(StarRecord::with_spect("G2V"));
///
/// assert_eq!(star.primary.as_ref().map(|p| p.key.as_str()), Some("G2V"));
/// assert!(star.description.starts_with("Type G2V"));
/// ```
#[derive(Debug)]
pub struct SpectrumClassifier {
    tables: LookupTables,
    config: ClassifierConfig,
    stats: StatsCounter,
}

impl SpectrumClassifier {
    pub fn new(tables: LookupTables, config: ClassifierConfig) -> Self {
        Self {
            tables,
            config,
            stats: StatsCounter::default(),
        }
    }

    /// Bundled tables with the default configuration.
    pub fn with_bundled_tables() -> Self {
        Self::new(LookupTables::bundled(), ClassifierConfig::default())
    }

    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn stats(&self) -> ClassificationStats {
        self.stats.snapshot()
    }

    pub fn parse(&self, raw: &str) -> Vec<SpectrumComponent> {
        parser::parse(raw)
    }

    /// Runs the whole pipeline on one record.
    ///
    /// Never fails: a record always comes back, possibly flagged as
    /// `computed` or `guess`, and every soft failure shows up in
    /// [`stats`](Self::stats) and the log instead.
    pub fn classify(&self, mut record: StarRecord) -> StarRecord {
        self.stats.increment(StatKind::Total);
        reset_outputs(&mut record);

        let spect = record.spect.trim().to_string();
        let spect = if spect.is_empty() {
            record.computed = true;
            match self.compute_spect_from_hyg(&record) {
                Some(spect) => {
                    self.stats.increment(StatKind::Computed);
                    spect
                }
                None => {
                    self.stats.increment(StatKind::LastDitch);
                    let LastDitch { spect, guess } = self.last_ditch_props(&record);
                    record.guess = guess;
                    spect
                }
            }
        } else {
            self.stats.increment(StatKind::Parsed);
            spect
        };

        let mut components = self.parse(&spect);
        resolver::fill_forward(&mut components, |primary| {
            self.infer_primary_luminosity(&record, primary)
        });

        for component in components.iter_mut() {
            match resolver::resolve_component(&self.tables, component) {
                Some(LookupTier::Exact | LookupTier::TypeLuminosity) => {}
                Some(LookupTier::TypeDefault) => {
                    self.stats.increment(StatKind::FailedLookup);
                    warn!(
                        id = %record.label(),
                        key = %component.display_key(),
                        role = ?component.role,
                        "no table row, using type default"
                    );
                }
                None => {
                    self.stats.increment(StatKind::FailedLookup);
                    if component.role == SpectrumRole::Primary {
                        error!(id = %record.label(), spect = %spect, "primary spectrum has no type");
                    } else {
                        warn!(id = %record.label(), spect = %spect, role = ?component.role, "sub-spectrum has no type");
                    }
                }
            }
        }

        resolver::merge(&self.tables, &mut record, &components);
        record
    }

    /// Classifies records in parallel. The output has the same length and
    /// order as the input.
    pub fn classify_batch(&self, records: Vec<StarRecord>) -> Vec<StarRecord> {
        let count = records.len();
        let classified: Vec<StarRecord> = records
            .into_par_iter()
            .map(|record| self.classify(record))
            .collect();
        debug!(count, stats = %self.stats(), "batch classified");
        classified
    }

    pub fn compute_spect_from_hyg(&self, record: &StarRecord) -> Option<String> {
        inference::compute_spect_from_hyg(&self.tables, &self.config, record)
    }

    pub fn last_ditch_props(&self, record: &StarRecord) -> LastDitch {
        inference::last_ditch_props(&self.config, record)
    }

    pub fn lookup_luminosity_class(
        &self,
        spectral_type: SpectralType,
        range: Option<&SpectralRange>,
        absmag: f64,
    ) -> Option<LuminosityClass> {
        inference::lookup_luminosity_class(&self.tables, spectral_type, range, absmag)
    }

    fn infer_primary_luminosity(
        &self,
        record: &StarRecord,
        primary: &SpectrumComponent,
    ) -> Option<LuminosityClass> {
        let spectral_type = primary.spectral_type?;
        let absmag = record.absmag?;
        let class = self.lookup_luminosity_class(spectral_type, primary.range.as_ref(), absmag);
        match class {
            Some(class) => debug!(
                id = %record.label(),
                spectral_type = %spectral_type,
                absmag,
                class = %class,
                "luminosity class from magnitude"
            ),
            None => {
                self.stats.increment(StatKind::FailedLookup);
                warn!(
                    id = %record.label(),
                    key = %primary.display_key(),
                    absmag,
                    "no luminosity class for magnitude"
                );
            }
        }
        class
    }
}

/// Clears everything a previous pass may have written, so classifying a
/// record twice gives the same result as classifying it once.
fn reset_outputs(record: &mut StarRecord) {
    record.computed = false;
    record.guess = false;
    record.intermediate.clear();
    record.composite.clear();
    record.description.clear();
    record.var = None;
}
