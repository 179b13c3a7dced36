//! Absolute magnitude of each luminosity class at a given type and subclass.

use std::collections::HashMap;

use stellar::LuminosityClass;
use tracing::warn;

use super::properties::OrderedMap;
use crate::error::TableLoadError;

/// `"G2"` → `[(Ia, -7.4), (Ib, -5.8), ..., (V, 4.8)]`, rows and classes in document order.
#[derive(Debug, Clone, Default)]
pub struct LumByMagTable {
    rows: Vec<(String, Vec<(LuminosityClass, f64)>)>,
    index: HashMap<String, usize>,
}

impl LumByMagTable {
    /// Parses the table document. Class keys that are not luminosity classes
    /// are skipped with a warning rather than failing the whole table.
    pub fn from_json(text: &str) -> Result<Self, TableLoadError> {
        let OrderedMap(rows) = serde_json::from_str::<OrderedMap<OrderedMap<f64>>>(text)?;

        let mut table = Self::default();
        for (key, OrderedMap(classes)) in rows {
            let classes = classes
                .into_iter()
                .filter_map(|(class_key, absmag)| {
                    let class = LuminosityClass::from_key(&class_key);
                    if class.is_none() {
                        warn!(row = %key, class = %class_key, "skipping unknown luminosity class");
                    }
                    class.map(|class| (class, absmag))
                })
                .collect();
            table.insert(key, classes);
        }
        Ok(table)
    }

    pub fn insert(&mut self, key: String, classes: Vec<(LuminosityClass, f64)>) {
        match self.index.get(&key) {
            Some(&i) => self.rows[i].1 = classes,
            None => {
                self.index.insert(key.clone(), self.rows.len());
                self.rows.push((key, classes));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[(LuminosityClass, f64)]> {
        self.index.get(key).map(|&i| self.rows[i].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(LuminosityClass, f64)])> {
        self.rows
            .iter()
            .map(|(key, classes)| (key.as_str(), classes.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
