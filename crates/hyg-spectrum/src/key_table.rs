//! Longest-match-wins key tables for the spectral grammar.

/// An ordered list of notation keys mapped to values.
///
/// Entries are sorted by key length, longest first. The sort is stable, so
/// keys of equal length keep their declaration order. Every lookup walks the
/// list front to back and stops at the first hit, which makes "longest key
/// wins, then declaration order" the matching rule for the whole grammar:
/// `"DA"` is tried before `"D"`, `"Ia+"` before `"Ia"`, `"nn"` before `"n"`.
#[derive(Debug, Clone)]
pub struct KeyTable<T: 'static> {
    entries: Vec<(&'static str, T)>,
}

impl<T: Copy> KeyTable<T> {
    pub fn new(entries: &[(&'static str, T)]) -> Self {
        let mut entries = entries.to_vec();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { entries }
    }

    /// Longest key that `text` starts with.
    pub fn match_prefix(&self, text: &str) -> Option<(&'static str, T)> {
        self.entries
            .iter()
            .find(|(key, _)| text.starts_with(key))
            .copied()
    }

    /// First key, in table order, occurring anywhere in `text`, with its byte offset.
    pub fn find_in(&self, text: &str) -> Option<(usize, &'static str, T)> {
        self.entries
            .iter()
            .find_map(|&(key, value)| text.find(key).map(|pos| (pos, key, value)))
    }

    /// Exact key lookup.
    pub fn get(&self, key: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|&(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, T)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
