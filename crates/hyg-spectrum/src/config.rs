//! Tunable thresholds for the fallback classification paths.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Thresholds used when a record has to be classified without a usable
/// spectral string.
///
/// Every field has a default, so a configuration document only needs to
/// name the values it overrides.
///
/// # Example
/// ```
/// use hyg_spectrum::ClassifierConfig;
///
/// let config = ClassifierConfig::from_json(r#"{ "temperatureWindow": 500.0 }"#).unwrap();
/// assert_eq!(config.temperature_window, 500.0);
/// assert_eq!(config.default_spectrum, "G5V");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassifierConfig {
    /// Half-width in Kelvin of the temperature window scanned for candidate spectra
    pub temperature_window: f64,
    /// Distance (parsecs) HYG assigns to stars with no usable parallax
    pub distance_sentinel: f64,
    /// Absolute magnitude below which a sentinel-distance star is read as a hypergiant
    pub hypergiant_absmag: f64,
    /// Absolute magnitude below which a star is read as a bright giant
    pub bright_giant_absmag: f64,
    /// Absolute magnitude at or below which a star is read as a giant
    pub giant_absmag: f64,
    /// Luminosity (L☉) below which the dwarf ladder is used
    pub dwarf_luminosity: f64,
    /// Spectrum assigned when nothing else applies; the record is flagged as a guess
    pub default_spectrum: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            temperature_window: 1000.0,
            distance_sentinel: 100_000.0,
            hypergiant_absmag: -9.2,
            bright_giant_absmag: -3.0,
            giant_absmag: 0.0,
            dwarf_luminosity: 0.2,
            default_spectrum: "G5V".to_string(),
        }
    }
}

impl ClassifierConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.temperature_window.is_finite() && self.temperature_window >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "temperatureWindow must be a non-negative number, got {}",
                self.temperature_window
            )));
        }
        if self.default_spectrum.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "defaultSpectrum must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
