use approx::assert_abs_diff_eq;
use stellar::{
    radius_from_luminosity, temperature_from_bv, LuminosityClass, RotationClass, SpectralType,
    StellarColor,
};

use crate::component::{LookupTier, SpectrumRole};
use crate::parser::parse;
use crate::record::StarRecord;
use crate::resolver::{
    borrow_missing_from_secondaries, fill_forward, inherit_from_primary, merge, resolve_component,
};
use crate::tables::{type_default, LookupTables};

const TRL: &str = r#"{
    "G2V":  { "mass": 1.0, "luminosity": 1.0, "radius": 1.0, "temp": 5778, "ci": 0.65 },
    "K0III": { "mass": 2.3, "luminosity": 102.0, "temp": 4750, "ci": 1.0 },
    "DA3":  { "mass": 0.6, "radius": 0.013, "temp": 16800 },
    "A0V":  { "mass": 2.4, "radius": 2.2, "temp": 9600, "r": 0.1, "g": 0.2, "b": 0.3 }
}"#;

const TL: &str = r#"{
    "G-III": { "mass": 2.5, "radius": 10.0, "temp": 5100 },
    "D-":    { "mass": 9.9 }
}"#;

fn tables() -> LookupTables {
    LookupTables::builder()
        .trl_json(TRL)
        .tl_json(TL)
        .planckian_blackbody()
        .build()
}

// ============================================================================
// Filling components from each other
// ============================================================================

#[test]
fn primary_borrows_luminosity_then_composite_inherits() {
    let mut components = parse("A5/8II");
    fill_forward(&mut components, |_| None);

    let primary = &components[0];
    assert_eq!(primary.range_key(), "5");
    assert_eq!(primary.luminosity, Some(LuminosityClass::II));

    let composite = &components[1];
    assert_eq!(composite.role, SpectrumRole::Composite);
    assert_eq!(composite.spectral_type, Some(SpectralType::A));
    assert_eq!(composite.range_key(), "8");
    assert_eq!(composite.luminosity, Some(LuminosityClass::II));
}

#[test]
fn primary_borrows_first_range() {
    let mut components = parse("K-M2/3III");
    borrow_missing_from_secondaries(&mut components);
    assert_eq!(components[0].range_key(), "2");
    assert_eq!(components[0].luminosity, Some(LuminosityClass::III));
}

#[test]
fn secondaries_inherit_missing_fields() {
    let mut components = parse("M5III-IV");
    inherit_from_primary(&mut components);

    let intermediate = &components[1];
    assert_eq!(intermediate.spectral_type, Some(SpectralType::M));
    assert_eq!(intermediate.range_key(), "5");
    assert_eq!(intermediate.luminosity, Some(LuminosityClass::IV));
    assert_eq!(intermediate.lookup_key(), "M5IV");
}

#[test]
fn inferred_luminosity_reaches_secondaries() {
    let mut components = parse("G8-K0");
    fill_forward(&mut components, |primary| {
        assert_eq!(primary.spectral_type, Some(SpectralType::G));
        Some(LuminosityClass::III)
    });
    assert_eq!(components[0].luminosity, Some(LuminosityClass::III));
    assert_eq!(components[1].luminosity, Some(LuminosityClass::III));
}

#[test]
fn inference_skipped_when_not_needed() {
    let mut components = parse("G2V");
    fill_forward(&mut components, |_| panic!("luminosity is already known"));

    let mut white_dwarf = parse("DA3");
    fill_forward(&mut white_dwarf, |_| panic!("white dwarfs have no luminosity class"));
    assert_eq!(white_dwarf[0].luminosity, None);
}

// ============================================================================
// Tiered lookup
// ============================================================================

#[test]
fn exact_tier() {
    let mut component = parse("G2V").remove(0);
    assert_eq!(resolve_component(&tables(), &mut component), Some(LookupTier::Exact));
    assert_eq!(component.tier, Some(LookupTier::Exact));
    assert_eq!(component.properties.temp, Some(5778.0));
}

#[test]
fn type_luminosity_tier() {
    let mut component = parse("G7III").remove(0);
    assert_eq!(
        resolve_component(&tables(), &mut component),
        Some(LookupTier::TypeLuminosity)
    );
    assert_eq!(component.properties.mass, Some(2.5));
}

#[test]
fn white_dwarfs_skip_type_luminosity_tier() {
    // "D-" would match the averaged tier if white dwarfs used it
    let mut component = parse("D7").remove(0);
    assert_eq!(
        resolve_component(&tables(), &mut component),
        Some(LookupTier::TypeDefault)
    );
    assert_eq!(component.properties, type_default(SpectralType::D));
}

#[test]
fn type_default_tier() {
    let mut component = parse("B3").remove(0);
    assert_eq!(
        resolve_component(&tables(), &mut component),
        Some(LookupTier::TypeDefault)
    );
    assert_eq!(component.properties, type_default(SpectralType::B));
}

#[test]
fn empty_tables_fall_through_to_type_default() {
    let mut component = parse("G2V").remove(0);
    let empty = LookupTables::builder().trl_json("not json").tl_json("[]").build();
    assert_eq!(
        resolve_component(&empty, &mut component),
        Some(LookupTier::TypeDefault)
    );
}

#[test]
fn no_type_no_lookup() {
    let mut component = parse("").remove(0);
    assert_eq!(resolve_component(&tables(), &mut component), None);
    assert_eq!(component.tier, None);
}

// ============================================================================
// Merge
// ============================================================================

fn classify(spect: &str, record: StarRecord) -> StarRecord {
    let tables = tables();
    let mut components = parse(spect);
    fill_forward(&mut components, |_| None);
    for component in components.iter_mut() {
        resolve_component(&tables, component);
    }
    let mut record = record;
    merge(&tables, &mut record, &components);
    record
}

#[test]
fn merge_takes_tabulated_values() {
    let star = classify("G2V", StarRecord::default());
    assert_eq!(star.temp, Some(5778.0));
    assert_eq!(star.radius, Some(1.0));
    assert_eq!(star.mass, Some(1.0));

    let blackbody = StellarColor::from_temperature(5700.0);
    assert_eq!(star.r, Some(blackbody.r));
    assert_eq!(star.g, Some(blackbody.g));
    assert_eq!(star.b, Some(blackbody.b));

    let primary = star.primary.as_ref().map(|p| p.key.as_str());
    assert_eq!(primary, Some("G2V"));
}

#[test]
fn tabulated_color_wins() {
    let star = classify("A0V", StarRecord::default());
    assert_eq!((star.r, star.g, star.b), (Some(0.1), Some(0.2), Some(0.3)));
}

#[test]
fn radius_derived_from_record_luminosity() {
    let star = classify(
        "K0III",
        StarRecord {
            lum: Some(60.0),
            ..StarRecord::default()
        },
    );
    assert_abs_diff_eq!(
        star.radius.unwrap_or_default(),
        radius_from_luminosity(60.0, 4750.0),
        epsilon = 1e-9
    );
}

#[test]
fn temperature_derived_from_color_index() {
    // The exact row has no temperature or radius
    let tables = LookupTables::builder()
        .trl_json(r#"{ "K5V": { "mass": 0.7 } }"#)
        .build();
    let mut components = parse("K5V");
    resolve_component(&tables, &mut components[0]);

    let mut star = StarRecord {
        ci: Some(1.1),
        lum: Some(0.2),
        ..StarRecord::default()
    };
    merge(&tables, &mut star, &components);

    let temp = temperature_from_bv(1.1);
    assert_abs_diff_eq!(star.temp.unwrap_or_default(), temp, epsilon = 1e-9);
    assert_abs_diff_eq!(
        star.radius.unwrap_or_default(),
        radius_from_luminosity(0.2, temp),
        epsilon = 1e-9
    );

    // No blackbody table was loaded, so the color comes from B-V
    let color = StellarColor::from_bv(1.1);
    assert_eq!((star.r, star.g, star.b), (Some(color.r), Some(color.g), Some(color.b)));
}

#[test]
fn missing_values_fall_back_to_type_default() {
    let tables = LookupTables::builder()
        .trl_json(r#"{ "K5V": { "luminosity": 0.2 } }"#)
        .build();
    let mut components = parse("K5V");
    resolve_component(&tables, &mut components[0]);

    let mut star = StarRecord::default();
    merge(&tables, &mut star, &components);

    let default = type_default(SpectralType::K);
    assert_eq!(star.temp, default.temp);
    assert_eq!(star.mass, default.mass);
    assert!(star.radius.is_some());
}

#[test]
fn rotation_from_modifiers_and_type() {
    assert_eq!(classify("G2Vnn", StarRecord::default()).rot, Some(RotationClass::VeryFast));
    assert_eq!(classify("G2Vn", StarRecord::default()).rot, Some(RotationClass::Fast));
    assert_eq!(classify("B3V", StarRecord::default()).rot, Some(RotationClass::Fast));
    assert_eq!(classify("WC8", StarRecord::default()).rot, Some(RotationClass::Fast));
    assert_eq!(classify("K0III", StarRecord::default()).rot, Some(RotationClass::Normal));
}

#[test]
fn flags_from_modifiers_and_catalog() {
    let emission = classify("B2Ve", StarRecord::default());
    assert_eq!(emission.envelope, Some(true));
    assert_eq!(emission.dust, Some(false));
    assert_eq!(emission.var, Some(false));

    let nebular = classify("O9neb", StarRecord::default());
    assert_eq!(nebular.dust, Some(true));

    let variable = classify(
        "M2III",
        StarRecord {
            var_max: Some(6.1),
            ..StarRecord::default()
        },
    );
    assert_eq!(variable.var, Some(true));
    assert_eq!(classify("M2IIIvar", StarRecord::default()).var, Some(true));
}

#[test]
fn secondaries_are_listed_and_described_in_order() {
    let star = classify("M5III-IV", StarRecord::default());
    assert_eq!(star.intermediate.len(), 1);
    assert!(star.composite.is_empty());
    assert_eq!(star.intermediate[0].key, "M5IV");
    assert_eq!(
        star.description,
        "Type M5III, red giant, intermediate with red M5 subgiant"
    );
}
