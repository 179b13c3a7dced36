//! Physical-property rows and the keyed tables that hold them.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use stellar::StellarColor;

use crate::error::TableLoadError;

/// One row of physical properties, shared by every lookup tier.
///
/// Every field is optional: a value missing from a table document stays
/// `None` and is derived downstream, it is never read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StellarProperties {
    /// Mass in solar masses
    pub mass: Option<f64>,
    /// Luminosity in solar luminosities
    pub luminosity: Option<f64>,
    /// Radius in solar radii
    pub radius: Option<f64>,
    /// Effective temperature in Kelvin
    pub temp: Option<f64>,
    /// B-V color index
    pub ci: Option<f64>,
    /// Absolute visual magnitude
    pub absmag: Option<f64>,
    /// Absolute bolometric magnitude
    pub bolo: Option<f64>,
    pub r: Option<f64>,
    pub g: Option<f64>,
    pub b: Option<f64>,
}

impl StellarProperties {
    /// The tabulated color, when all three channels are present.
    pub fn color(&self) -> Option<StellarColor> {
        Some(StellarColor::new(self.r?, self.g?, self.b?))
    }
}

/// A JSON object read as a list of entries in document order.
///
/// Lookup tie-breaking follows table iteration order, so the order written
/// in the source document has to survive deserialization.
pub(crate) struct OrderedMap<V>(pub Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Properties keyed by a spectral key, in document order.
///
/// Used for both the type+range+luminosity table (`"G2V"`) and the
/// type+luminosity averages (`"G-V"`).
#[derive(Debug, Clone, Default)]
pub struct PropertyTable {
    rows: Vec<(String, StellarProperties)>,
    index: HashMap<String, usize>,
}

impl PropertyTable {
    pub fn from_json(text: &str) -> Result<Self, TableLoadError> {
        let OrderedMap(rows) = serde_json::from_str::<OrderedMap<StellarProperties>>(text)?;
        Ok(Self::from_rows(rows))
    }

    /// Builds a table from rows; a repeated key keeps its first position and last value.
    pub fn from_rows(rows: Vec<(String, StellarProperties)>) -> Self {
        let mut table = Self::default();
        for (key, properties) in rows {
            match table.index.get(&key) {
                Some(&i) => table.rows[i].1 = properties,
                None => {
                    table.index.insert(key.clone(), table.rows.len());
                    table.rows.push((key, properties));
                }
            }
        }
        table
    }

    pub fn get(&self, key: &str) -> Option<&StellarProperties> {
        self.index.get(key).map(|&i| &self.rows[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StellarProperties)> {
        self.rows.iter().map(|(key, row)| (key.as_str(), row))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
