//! Fallback classification for records whose spectral string is missing or
//! incomplete.
//!
//! Three paths, tried by the classifier in this order of preference:
//! - [`compute_spect_from_hyg`]: pick a tabulated spectrum from the color index
//! - [`last_ditch_props`]: pick one from magnitude and luminosity thresholds
//! - [`lookup_luminosity_class`]: fill only the luminosity class of a parsed
//!   spectrum from its absolute magnitude

use stellar::{temperature_from_bv, LuminosityClass, SpectralType};
use tracing::debug;

use crate::component::SpectralRange;
use crate::config::ClassifierConfig;
use crate::record::StarRecord;
use crate::tables::LookupTables;

/// Result of the threshold fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastDitch {
    pub spect: String,
    /// Set only when nothing about the record informed the choice
    pub guess: bool,
}

/// Chooses a type+range+luminosity key for a record with no spectrum.
///
/// The B-V temperature selects every exact-tier row within the configured
/// window; among several, the row whose luminosity is closest to the star's
/// wins, earlier rows winning ties. Returns `None` without a color index, or
/// when no row falls inside the window.
pub fn compute_spect_from_hyg(
    tables: &LookupTables,
    config: &ClassifierConfig,
    record: &StarRecord,
) -> Option<String> {
    let ci = record.ci?;
    let temperature = temperature_from_bv(ci);
    if !temperature.is_finite() {
        debug!(id = %record.label(), ci, "color index outside the temperature fit");
        return None;
    }

    let trl = tables.trl()?;
    let luminosity = record.luminosity();

    let mut candidates = 0usize;
    let mut first = None;
    let mut closest: Option<(&str, f64)> = None;

    for (key, row) in trl.iter() {
        let Some(row_temp) = row.temp else {
            continue;
        };
        if (row_temp - temperature).abs() > config.temperature_window {
            continue;
        }

        candidates += 1;
        first.get_or_insert(key);

        if let (Some(target), Some(row_lum)) = (luminosity, row.luminosity) {
            let diff = (row_lum - target).abs();
            if closest.map_or(true, |(_, best)| diff < best) {
                closest = Some((key, diff));
            }
        }
    }

    let chosen = match candidates {
        0 => None,
        1 => first,
        _ => closest.map(|(key, _)| key).or(first),
    };

    debug!(
        id = %record.label(),
        temperature,
        candidates,
        chosen = ?chosen,
        "spectrum from color index"
    );

    chosen.map(str::to_string)
}

/// Threshold classification from absolute magnitude, distance and luminosity.
/// Always returns a spectrum.
pub fn last_ditch_props(config: &ClassifierConfig, record: &StarRecord) -> LastDitch {
    let absmag = record.absmag;
    let below = |limit: f64| absmag.is_some_and(|m| m < limit);

    let spect = if record.dist == Some(config.distance_sentinel) && below(config.hypergiant_absmag) {
        Some("B0Ia+")
    } else if below(config.bright_giant_absmag) {
        Some("G5II")
    } else if absmag.is_some_and(|m| m <= config.giant_absmag) {
        Some("K0III")
    } else {
        record
            .lum
            .filter(|&lum| lum < config.dwarf_luminosity)
            .map(dwarf_spectrum)
    };

    let last_ditch = match spect {
        Some(spect) => LastDitch {
            spect: spect.to_string(),
            guess: false,
        },
        None => LastDitch {
            spect: config.default_spectrum.clone(),
            guess: true,
        },
    };

    debug!(
        id = %record.label(),
        spect = %last_ditch.spect,
        guess = last_ditch.guess,
        "spectrum from thresholds"
    );

    last_ditch
}

/// Faint main-sequence ladder, late K down to brown dwarfs.
fn dwarf_spectrum(lum: f64) -> &'static str {
    match lum {
        l if l >= 0.1 => "K7V",
        l if l >= 0.04 => "M1V",
        l if l >= 0.01 => "M3V",
        l if l >= 0.003 => "M5V",
        l if l >= 0.001 => "M7V",
        l if l >= 0.0003 => "M9V",
        _ => "L5V",
    }
}

/// Luminosity class whose tabulated absolute magnitude is closest to `absmag`.
///
/// Looks in the `type + range` row when there is one; otherwise across every
/// row of the same type. White dwarfs have no luminosity class and always
/// return `None`.
pub fn lookup_luminosity_class(
    tables: &LookupTables,
    spectral_type: SpectralType,
    range: Option<&SpectralRange>,
    absmag: f64,
) -> Option<LuminosityClass> {
    if spectral_type.is_white_dwarf() || !absmag.is_finite() {
        return None;
    }
    let table = tables.lum_by_mag()?;
    let type_key = spectral_type.key();

    if let Some(range) = range {
        let key = format!("{}{}", type_key, range.index());
        if let Some(classes) = table.get(&key) {
            return closest_class(classes.iter(), absmag);
        }
    }

    let same_type = table
        .iter()
        .filter(|(key, _)| {
            key.strip_prefix(type_key)
                .is_some_and(|rest| !rest.is_empty() && rest.parse::<f64>().is_ok())
        })
        .flat_map(|(_, classes)| classes.iter());

    closest_class(same_type, absmag)
}

fn closest_class<'a>(
    classes: impl Iterator<Item = &'a (LuminosityClass, f64)>,
    absmag: f64,
) -> Option<LuminosityClass> {
    let mut best: Option<(LuminosityClass, f64)> = None;
    for &(class, magnitude) in classes {
        let diff = (magnitude - absmag).abs();
        if best.map_or(true, |(_, best_diff)| diff < best_diff) {
            best = Some((class, diff));
        }
    }
    best.map(|(class, _)| class)
}
