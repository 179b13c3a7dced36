//! Property lookup for parsed sub-spectra and the merge onto the record.

use stellar::{
    radius_from_luminosity, temperature_from_bv, LuminosityClass, RotationClass, StellarColor,
};
use tracing::trace;

use crate::component::{LookupTier, SpectrumComponent, SpectrumRole};
use crate::describe::describe;
use crate::record::{ResolvedSpectrum, StarRecord};
use crate::tables::{type_default, LookupTables};

const ENVELOPE_MODIFIERS: [&str; 6] = ["sh", "e", "[e]", "eq", "er", "(e)"];

/// Completes the sub-spectra from each other.
///
/// The primary first borrows a missing range or luminosity class from the
/// later components. `infer_luminosity` is then asked for the primary's class
/// if it is still missing, and finally every later component inherits what
/// it lacks from the primary.
pub fn fill_forward<F>(components: &mut [SpectrumComponent], infer_luminosity: F)
where
    F: FnOnce(&SpectrumComponent) -> Option<LuminosityClass>,
{
    borrow_missing_from_secondaries(components);

    if let Some(primary) = components.first_mut() {
        if primary.luminosity.is_none() && !primary.is_white_dwarf() {
            let inferred = infer_luminosity(primary);
            primary.luminosity = inferred;
        }
    }

    inherit_from_primary(components);
}

/// The first range and the first luminosity class found after the primary,
/// each only if the primary has none.
pub fn borrow_missing_from_secondaries(components: &mut [SpectrumComponent]) {
    let Some((primary, rest)) = components.split_first_mut() else {
        return;
    };

    if primary.range.is_none() {
        primary.range = rest.iter().find_map(|c| c.range.clone());
    }
    if primary.luminosity.is_none() {
        primary.luminosity = rest.iter().find_map(|c| c.luminosity);
    }
}

pub fn inherit_from_primary(components: &mut [SpectrumComponent]) {
    let Some((primary, rest)) = components.split_first_mut() else {
        return;
    };

    for component in rest {
        if component.spectral_type.is_none() {
            component.spectral_type = primary.spectral_type;
        }
        if component.range.is_none() {
            component.range = primary.range.clone();
        }
        if component.luminosity.is_none() {
            component.luminosity = primary.luminosity;
        }
    }
}

/// Looks the component up tier by tier and stores the hit on it.
///
/// Exact `"G2V"` first, then the `"G-V"` average (skipped for white dwarfs),
/// then the bare type default. Returns `None` only when the component has
/// no type.
pub fn resolve_component(tables: &LookupTables, component: &mut SpectrumComponent) -> Option<LookupTier> {
    let spectral_type = component.spectral_type?;

    let exact = tables
        .trl()
        .and_then(|trl| trl.get(&component.lookup_key()))
        .map(|row| (LookupTier::Exact, *row));

    let averaged = || {
        if spectral_type.is_white_dwarf() {
            return None;
        }
        tables
            .tl()
            .and_then(|tl| tl.get(&component.type_luminosity_key()))
            .map(|row| (LookupTier::TypeLuminosity, *row))
    };

    let (tier, properties) = exact
        .or_else(averaged)
        .unwrap_or_else(|| (LookupTier::TypeDefault, type_default(spectral_type)));

    trace!(key = %component.display_key(), tier = ?tier, "resolved component");

    component.properties = properties;
    component.tier = Some(tier);
    Some(tier)
}

/// Writes the resolved components onto the record.
///
/// The primary's properties fill the physical fields, with derived values
/// standing in for anything its lookup row lacked. Every component, in
/// order, then appends its description.
pub fn merge(tables: &LookupTables, record: &mut StarRecord, components: &[SpectrumComponent]) {
    if let Some(primary) = components.first() {
        merge_primary(tables, record, primary);
    }

    for component in components {
        match component.role {
            SpectrumRole::Primary => {}
            SpectrumRole::Intermediate => record.intermediate.push(component.into()),
            SpectrumRole::Composite => record.composite.push(component.into()),
        }
    }

    for component in components {
        let text = describe(record, component);
        record.description.push_str(&text);
    }
}

fn merge_primary(tables: &LookupTables, record: &mut StarRecord, primary: &SpectrumComponent) {
    let props = primary.properties;
    let fallback = primary.spectral_type.map(type_default);
    let ci = record.ci.or(props.ci).filter(|ci| ci.is_finite());

    let temp = props
        .temp
        .or_else(|| ci.map(temperature_from_bv).filter(|t| t.is_finite() && *t > 0.0))
        .or_else(|| fallback.and_then(|f| f.temp));

    let luminosity = record.lum.or(props.luminosity);
    let radius = props
        .radius
        .or_else(|| match (luminosity, temp) {
            (Some(lum), Some(temp)) if lum > 0.0 => Some(radius_from_luminosity(lum, temp)),
            _ => None,
        })
        .or_else(|| fallback.and_then(|f| f.radius));

    let color = props
        .color()
        .or_else(|| temp.and_then(|t| tables.blackbody().and_then(|bb| bb.lookup(t))))
        .or_else(|| ci.map(StellarColor::from_bv));

    record.mass = props.mass.or_else(|| fallback.and_then(|f| f.mass));
    record.temp = temp;
    record.radius = radius;
    if let Some(color) = color {
        record.r = Some(color.r);
        record.g = Some(color.g);
        record.b = Some(color.b);
    }

    record.rot = Some(rotation_class(primary));
    record.var = Some(
        record.var_designation == Some(true)
            || record.var_min.is_some()
            || record.var_max.is_some()
            || primary.has_modifier("var")
            || primary.has_modifier("v"),
    );
    record.dust = Some(primary.has_modifier("neb") || primary.has_modifier("k"));
    record.envelope = Some(ENVELOPE_MODIFIERS.iter().any(|m| primary.has_modifier(m)));
    record.primary = Some(ResolvedSpectrum::from(primary));
}

fn rotation_class(component: &SpectrumComponent) -> RotationClass {
    if component.has_modifier("nn") {
        RotationClass::VeryFast
    } else if component.has_modifier("n")
        || component.spectral_type.is_some_and(|t| t.is_fast_rotator())
    {
        RotationClass::Fast
    } else {
        RotationClass::Normal
    }
}
