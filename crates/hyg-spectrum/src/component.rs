//! One parsed sub-spectrum of a catalog spectral string.

use serde::{Deserialize, Serialize};
use stellar::{LuminosityClass, SpectralType};

use crate::tables::StellarProperties;

/// How a sub-spectrum relates to the first one in the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpectrumRole {
    /// The first segment; exactly one per parse
    Primary,
    /// Preceded by `-`: a transitional class between two listed types (`G8-K0`)
    Intermediate,
    /// Preceded by `/`: an alternative or blended classification (`A5/8II`)
    Composite,
}

/// Numeric subclass as written, and its value clamped to [0, 9].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralRange {
    pub key: String,
    pub value: f64,
}

impl SpectralRange {
    /// Integer subclass used to build table keys.
    pub fn index(&self) -> u8 {
        self.value.round().clamp(0.0, 9.0) as u8
    }
}

/// Which tier of the lookup tables produced a component's properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LookupTier {
    /// Type + range + luminosity (`"G2V"`)
    Exact,
    /// Type + luminosity average (`"G-V"`)
    TypeLuminosity,
    /// Built-in default for the bare type
    TypeDefault,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumComponent {
    pub role: SpectrumRole,
    pub spectral_type: Option<SpectralType>,
    pub range: Option<SpectralRange>,
    pub luminosity: Option<LuminosityClass>,
    /// Peculiarity codes in grammar-table order, without duplicates
    pub mods: Vec<&'static str>,
    pub properties: StellarProperties,
    pub tier: Option<LookupTier>,
}

impl SpectrumComponent {
    pub fn new(role: SpectrumRole) -> Self {
        Self {
            role,
            spectral_type: None,
            range: None,
            luminosity: None,
            mods: Vec::new(),
            properties: StellarProperties::default(),
            tier: None,
        }
    }

    /// `type + rounded range + luminosity`, the key of the exact lookup tier.
    pub fn lookup_key(&self) -> String {
        format!(
            "{}{}{}",
            self.type_key(),
            self.range
                .as_ref()
                .map(|range| range.index().to_string())
                .unwrap_or_default(),
            self.luminosity_key()
        )
    }

    /// `type-luminosity`, the key of the averaged tier.
    pub fn type_luminosity_key(&self) -> String {
        format!("{}-{}", self.type_key(), self.luminosity_key())
    }

    /// Classification as written, e.g. `"B2.5IV"`.
    pub fn display_key(&self) -> String {
        format!(
            "{}{}{}",
            self.type_key(),
            self.range_key(),
            self.luminosity_key()
        )
    }

    pub fn type_key(&self) -> &'static str {
        self.spectral_type.map(|t| t.key()).unwrap_or_default()
    }

    pub fn range_key(&self) -> &str {
        self.range
            .as_ref()
            .map(|range| range.key.as_str())
            .unwrap_or_default()
    }

    pub fn luminosity_key(&self) -> &'static str {
        self.luminosity.map(|l| l.key()).unwrap_or_default()
    }

    pub fn has_modifier(&self, key: &str) -> bool {
        self.mods.iter().any(|m| *m == key)
    }

    pub fn is_white_dwarf(&self) -> bool {
        self.spectral_type.is_some_and(|t| t.is_white_dwarf())
    }
}
