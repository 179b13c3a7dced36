//! Tokenizer for free-text spectral classification strings.
//!
//! A string such as `"sdB5"`, `"M5III-IV"` or `"A5/8II"` is cleaned up,
//! rewritten for known historical notations, split into sub-spectra on `-`
//! and `/`, and each sub-spectrum is read left to right as
//! `[prefix][type][subclass][luminosity][peculiarities]`.

use tracing::trace;

use crate::component::{SpectralRange, SpectrumComponent, SpectrumRole};
use crate::tables::grammar::{
    LUMINOSITY_KEYS, MODIFIERS, TRANSLATIONS, TYPE_KEYS, YERKES_PREFIXES,
};

/// Parses a raw spectral string into its sub-spectra.
///
/// The result always holds exactly one [`SpectrumRole::Primary`] component,
/// first, even for an empty input.
///
/// # Example
/// ```
/// use hyg_spectrum::parser::parse;
/// use hyg_spectrum::SpectrumRole;
/// use stellar::{LuminosityClass, SpectralType};
///
/// let components = parse("G8III-IV");
/// assert_eq!(components.len(), 2);
/// assert_eq!(components[0].spectral_type, Some(SpectralType::G));
/// assert_eq!(components[0].luminosity, Some(LuminosityClass::III));
/// assert_eq!(components[1].role, SpectrumRole::Intermediate);
/// assert_eq!(components[1].luminosity, Some(LuminosityClass::IV));
/// ```
pub fn parse(raw: &str) -> Vec<SpectrumComponent> {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let translated = translate_notation(&stripped);

    split_roles(&translated)
        .into_iter()
        .map(|(role, segment)| parse_segment(segment, role))
        .collect()
}

/// Rewrites the first known historical notation found in `spect`.
///
/// Only one rewrite is applied per call: the longest translation key that
/// occurs anywhere in the string, at its first occurrence.
pub fn translate_notation(spect: &str) -> String {
    match TRANSLATIONS.find_in(spect) {
        Some((pos, key, replacement)) => {
            let mut translated = String::with_capacity(spect.len());
            translated.push_str(&spect[..pos]);
            translated.push_str(replacement);
            translated.push_str(&spect[pos + key.len()..]);
            trace!(from = spect, to = %translated, "translated spectral notation");
            translated
        }
        None => spect.to_string(),
    }
}

/// Splits on `-` and `/`, tagging each segment with the separator before it.
///
/// The first segment is always kept as the primary, even when empty; empty
/// segments after a separator carry nothing and are dropped.
pub fn split_roles(spect: &str) -> Vec<(SpectrumRole, &str)> {
    let mut segments = Vec::new();
    let mut role = SpectrumRole::Primary;
    let mut start = 0;

    for (i, c) in spect.char_indices() {
        let next = match c {
            '-' => SpectrumRole::Intermediate,
            '/' => SpectrumRole::Composite,
            _ => continue,
        };
        push_segment(&mut segments, role, &spect[start..i]);
        role = next;
        start = i + c.len_utf8();
    }
    push_segment(&mut segments, role, &spect[start..]);

    segments
}

fn push_segment<'a>(segments: &mut Vec<(SpectrumRole, &'a str)>, role: SpectrumRole, segment: &'a str) {
    if role == SpectrumRole::Primary || !segment.is_empty() {
        segments.push((role, segment));
    }
}

fn parse_segment(segment: &str, role: SpectrumRole) -> SpectrumComponent {
    let component = extract(segment, role);

    // Lower-case catalog entries ("g2v") read as a Yerkes prefix followed by
    // nothing useful; retry the whole primary segment upper-cased.
    if role == SpectrumRole::Primary
        && component.spectral_type.is_none()
        && segment.parse::<f64>().is_err()
    {
        let upper = segment.to_uppercase();
        if upper != segment {
            let retried = extract(&upper, role);
            if retried.spectral_type.is_some() {
                return retried;
            }
        }
    }

    component
}

fn extract(segment: &str, role: SpectrumRole) -> SpectrumComponent {
    let mut component = SpectrumComponent::new(role);
    let mut rest = segment;

    // A lone "g" is a G star, not a giant prefix with nothing after it.
    // A trailing "-" has already been split off, so "g-" arrives as "g".
    let mut prefix_class = None;
    if rest != "g" {
        if let Some((key, class)) = YERKES_PREFIXES.match_prefix(rest) {
            prefix_class = Some(class);
            rest = &rest[key.len()..];
        }
    }

    if let Some((key, spectral_type)) = TYPE_KEYS.match_prefix(rest) {
        component.spectral_type = Some(spectral_type);
        rest = &rest[key.len()..];
    }

    let mut rest = rest.to_string();
    component.range = take_range(&mut rest);

    if let Some((key, class)) = LUMINOSITY_KEYS.match_prefix(&rest) {
        component.luminosity = Some(class);
        rest.replace_range(..key.len(), "");
    }
    component.luminosity = component.luminosity.or(prefix_class);

    component.mods = take_modifiers(&mut rest);

    if !rest.is_empty() {
        trace!(segment, unparsed = %rest, "unconsumed spectral notation");
    }

    component
}

/// Removes the first digit run (with an optional decimal part) from `rest`.
/// Subclasses above 9 are catalog artifacts and clamp to 9.
fn take_range(rest: &mut String) -> Option<SpectralRange> {
    let start = rest.find(|c: char| c.is_ascii_digit())?;
    let bytes = rest.as_bytes();

    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    let key = &rest[start..end];
    let value = key.parse::<f64>().ok()?;
    let range = if value > 9.0 {
        SpectralRange {
            key: "9".to_string(),
            value: 9.0,
        }
    } else {
        SpectralRange {
            key: key.to_string(),
            value,
        }
    };

    rest.replace_range(start..end, "");
    Some(range)
}

/// Removes every occurrence of every peculiarity code, longest codes first.
fn take_modifiers(rest: &mut String) -> Vec<&'static str> {
    let mut mods = Vec::new();
    for (key, _) in MODIFIERS.iter() {
        while let Some(pos) = rest.find(key) {
            rest.replace_range(pos..pos + key.len(), "");
            if !mods.contains(&key) {
                mods.push(key);
            }
        }
    }
    mods
}
