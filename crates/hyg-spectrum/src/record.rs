//! HYG catalog records and the classification written back onto them.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use stellar::{luminosity_from_absmag, LuminosityClass, RotationClass, SpectralType};

use crate::component::SpectrumComponent;

/// Catalog identifier; HYG exports it as either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StarId {
    Number(i64),
    Text(String),
}

impl fmt::Display for StarId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StarId::Number(id) => write!(f, "{}", id),
            StarId::Text(id) => f.write_str(id),
        }
    }
}

/// One HYG catalog entry.
///
/// The input half mirrors the catalog columns; the output half is filled
/// in by [`SpectrumClassifier::classify`](crate::SpectrumClassifier::classify)
/// and skipped on serialization while unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StarId>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub proper: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub ra: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub dec: Option<f64>,
    /// Distance in parsecs
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub dist: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,

    /// Apparent visual magnitude
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub mag: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub absmag: Option<f64>,
    /// B-V color index
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub ci: Option<f64>,
    /// Luminosity in solar luminosities
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub lum: Option<f64>,
    #[serde(default, deserialize_with = "spect_string")]
    pub spect: String,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub var_min: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub var_max: Option<f64>,
    /// HYG's variable-star designation column; any non-empty one reads as `true`
    #[serde(rename = "var", default, deserialize_with = "lenient_flag", skip_serializing)]
    pub var_designation: Option<bool>,

    /// The spectrum was inferred rather than parsed from `spect`
    #[serde(default, skip_serializing_if = "is_false")]
    pub computed: bool,
    /// The spectrum is the configured default, not derived from any data
    #[serde(default, skip_serializing_if = "is_false")]
    pub guess: bool,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rot: Option<RotationClass>,
    /// Written from the designation, `var_min`/`var_max` and the primary's modifiers
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub var: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dust: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<ResolvedSpectrum>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intermediate: Vec<ResolvedSpectrum>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub composite: Vec<ResolvedSpectrum>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl StarRecord {
    /// A record holding only a spectral string.
    pub fn with_spect(spect: impl Into<String>) -> Self {
        Self {
            spect: spect.into(),
            ..Self::default()
        }
    }

    /// Catalog luminosity, or one derived from the absolute magnitude.
    pub fn luminosity(&self) -> Option<f64> {
        self.lum.or_else(|| self.absmag.map(luminosity_from_absmag))
    }

    /// Identifier for log lines; `"-"` when the record has none.
    pub fn label(&self) -> String {
        self.id
            .as_ref()
            .map(StarId::to_string)
            .unwrap_or_else(|| "-".to_string())
    }
}

/// The classification of one sub-spectrum as stored on a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSpectrum {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub spectral_type: Option<SpectralType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luminosity: Option<LuminosityClass>,
    /// `type + range + luminosity` as written, e.g. `"G2V"`
    pub key: String,
}

impl From<&SpectrumComponent> for ResolvedSpectrum {
    fn from(component: &SpectrumComponent) -> Self {
        Self {
            spectral_type: component.spectral_type,
            range: component.range.as_ref().map(|range| range.key.clone()),
            luminosity: component.luminosity,
            key: component.display_key(),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Accepts a number, a numeric string, `""` or `null`. Text that is not a
/// number reads as absent rather than failing the whole record.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<NumberOrText> = Option::deserialize(deserializer)?;
    Ok(match value {
        None => None,
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => s.trim().parse::<f64>().ok(),
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

fn spect_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagOrText {
    Flag(bool),
    Text(String),
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<FlagOrText> = Option::deserialize(deserializer)?;
    Ok(match value {
        None => None,
        Some(FlagOrText::Flag(flag)) => Some(flag),
        Some(FlagOrText::Text(s)) => {
            let s = s.trim();
            (!s.is_empty()).then_some(true)
        }
    })
}
