//! Human-readable description of a classified sub-spectrum.

use crate::component::{SpectrumComponent, SpectrumRole};
use crate::record::StarRecord;
use crate::tables::grammar::{luminosity_text, modifier_text, type_text};

/// Describes one component.
///
/// The primary reads `"Type G2V, yellow main-sequence dwarf"`: the word
/// "star" in the type text gives way to the luminosity phrase. Later
/// components return a fragment starting with `", "` so the texts of a
/// record's components concatenate in order.
///
/// # Example
/// ```
/// use hyg_spectrum::{describe::describe, parser::parse, StarRecord};
///
/// let components = parse("K0III");
/// let text = describe(&StarRecord::default(), &components[0]);
/// assert_eq!(text, "Type K0III, orange giant");
/// ```
pub fn describe(record: &StarRecord, component: &SpectrumComponent) -> String {
    let Some(spectral_type) = component.spectral_type else {
        return match component.role {
            SpectrumRole::Primary => "Unclassified spectrum".to_string(),
            _ => String::new(),
        };
    };

    let (short, long) = type_text(spectral_type);
    let phrase = component.luminosity.map(luminosity_text);

    let mut text = match component.role {
        SpectrumRole::Primary => {
            let long = match phrase {
                Some(phrase) if long.contains("star") => long.replacen("star", phrase, 1),
                _ => long.to_string(),
            };
            format!("Type {}, {}", component.display_key(), long)
        }
        SpectrumRole::Intermediate => {
            format!(", intermediate with {} {}", short, classification(component, phrase))
        }
        SpectrumRole::Composite => format!(
            ", composite with {} {}, (possible spectroscopic double or multiple star)",
            short,
            classification(component, phrase)
        ),
    };

    for key in &component.mods {
        if let Some(modifier) = modifier_text(key) {
            text.push_str(", ");
            text.push_str(modifier);
        }
    }

    if component.role == SpectrumRole::Primary {
        if record.guess {
            text.push_str(", spectrum assumed");
        } else if record.computed {
            text.push_str(", estimated from catalog photometry");
        }
    }

    text
}

fn classification(component: &SpectrumComponent, phrase: Option<&str>) -> String {
    let key = format!("{}{}", component.type_key(), component.range_key());
    match phrase {
        Some(phrase) => format!("{} {}", key, phrase),
        None => key,
    }
}
