//! Blackbody color keyed by temperature in 100 K steps.

use std::collections::HashMap;

use stellar::StellarColor;

use super::properties::OrderedMap;
use crate::error::TableLoadError;

const STEP: f64 = 100.0;

#[derive(Debug, Clone, Default)]
pub struct BlackbodyTable {
    colors: HashMap<u32, StellarColor>,
}

impl BlackbodyTable {
    /// Parses `{ "1000": { "r": 1.0, "g": 0.27, "b": 0.0 }, ... }`.
    pub fn from_json(text: &str) -> Result<Self, TableLoadError> {
        let OrderedMap(rows) = serde_json::from_str::<OrderedMap<StellarColor>>(text)?;

        let mut colors = HashMap::with_capacity(rows.len());
        for (key, color) in rows {
            let kelvin = key
                .trim()
                .parse::<u32>()
                .map_err(|err| TableLoadError::Shape {
                    table: "blackbody",
                    key: key.clone(),
                    reason: err.to_string(),
                })?;
            colors.insert(kelvin, color);
        }
        Ok(Self { colors })
    }

    /// Table computed from the Planckian-locus curve fit over the whole
    /// supported temperature range.
    pub fn planckian() -> Self {
        let min = StellarColor::MIN_TEMP as u32;
        let max = StellarColor::MAX_TEMP as u32;
        let colors = (min..=max)
            .step_by(STEP as usize)
            .map(|kelvin| (kelvin, StellarColor::from_temperature(kelvin as f64)))
            .collect();
        Self { colors }
    }

    /// Color for `temperature`, clamped to [1000, 40000] K and floored to the 100 K step.
    pub fn lookup(&self, temperature: f64) -> Option<StellarColor> {
        if !temperature.is_finite() {
            return None;
        }
        let clamped = temperature.clamp(StellarColor::MIN_TEMP, StellarColor::MAX_TEMP);
        let kelvin = ((clamped / STEP).floor() * STEP) as u32;
        self.colors.get(&kelvin).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
