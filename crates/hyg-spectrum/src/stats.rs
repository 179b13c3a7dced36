//! Data-quality counters for the classification paths taken.

use std::fmt;
use std::ops::{Add, AddAssign};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// How many records took each path. Counters only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationStats {
    pub total: u64,
    /// Records with a spectral string
    pub parsed: u64,
    /// Records classified from their color index
    pub computed: u64,
    /// Records classified from magnitude and luminosity thresholds
    pub last_ditch: u64,
    /// Sub-spectra that could not be resolved because they had no type
    pub failed_lookup: u64,
}

impl Add for ClassificationStats {
    type Output = ClassificationStats;

    fn add(self, rhs: ClassificationStats) -> ClassificationStats {
        ClassificationStats {
            total: self.total + rhs.total,
            parsed: self.parsed + rhs.parsed,
            computed: self.computed + rhs.computed,
            last_ditch: self.last_ditch + rhs.last_ditch,
            failed_lookup: self.failed_lookup + rhs.failed_lookup,
        }
    }
}

impl AddAssign for ClassificationStats {
    fn add_assign(&mut self, rhs: ClassificationStats) {
        *self = *self + rhs;
    }
}

impl fmt::Display for ClassificationStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} records: {} parsed, {} computed, {} last-ditch, {} failed lookups",
            self.total, self.parsed, self.computed, self.last_ditch, self.failed_lookup
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Total,
    Parsed,
    Computed,
    LastDitch,
    FailedLookup,
}

/// Shared counters, safe to bump from every worker of a batch.
#[derive(Debug, Default)]
pub struct StatsCounter {
    total: AtomicU64,
    parsed: AtomicU64,
    computed: AtomicU64,
    last_ditch: AtomicU64,
    failed_lookup: AtomicU64,
}

impl StatsCounter {
    pub fn increment(&self, kind: StatKind) {
        let counter = match kind {
            StatKind::Total => &self.total,
            StatKind::Parsed => &self.parsed,
            StatKind::Computed => &self.computed,
            StatKind::LastDitch => &self.last_ditch,
            StatKind::FailedLookup => &self.failed_lookup,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ClassificationStats {
        ClassificationStats {
            total: self.total.load(Ordering::Relaxed),
            parsed: self.parsed.load(Ordering::Relaxed),
            computed: self.computed.load(Ordering::Relaxed),
            last_ditch: self.last_ditch.load(Ordering::Relaxed),
            failed_lookup: self.failed_lookup.load(Ordering::Relaxed),
        }
    }
}
