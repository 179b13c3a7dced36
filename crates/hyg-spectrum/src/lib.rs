//! Spectral classification of HYG catalog stars.
//!
//! Free-text classification strings (`"G2V"`, `"sdB5"`, `"M5III-IV"`,
//! `"DA3"`) are parsed into sub-spectra, completed from each other and from
//! the star's photometry, mapped to physical properties through tiered
//! lookup tables, and written back onto the record with a description.

pub mod classifier;
pub mod component;
pub mod config;
pub mod describe;
pub mod error;
pub mod inference;
pub mod key_table;
pub mod parser;
pub mod record;
pub mod resolver;
pub mod stats;
pub mod tables;

#[cfg(test)]
mod describe_test;
#[cfg(test)]
mod resolver_test;

pub use classifier::SpectrumClassifier;
pub use component::{LookupTier, SpectralRange, SpectrumComponent, SpectrumRole};
pub use config::ClassifierConfig;
pub use error::{ConfigError, TableLoadError};
pub use inference::LastDitch;
pub use record::{ResolvedSpectrum, StarId, StarRecord};
pub use stats::ClassificationStats;
pub use tables::{LookupTables, LookupTablesBuilder, StellarProperties};
