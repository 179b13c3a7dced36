//! End-to-end classification against the bundled tables.

use approx::assert_abs_diff_eq;
use hyg_spectrum::{SpectrumClassifier, SpectrumRole, StarRecord};
use rand::prelude::*;
use rand_chacha::ChaChaRng;
use stellar::{temperature_from_bv, LuminosityClass, SpectralType, StellarColor, SOLAR_TEMP};

fn record(spect: &str) -> StarRecord {
    StarRecord::with_spect(spect)
}

// ============================================================================
// Catalog scenarios
// ============================================================================

#[test]
fn sun_like_dwarf() {
    let classifier = SpectrumClassifier::with_bundled_tables();
    let star = classifier.classify(StarRecord {
        absmag: Some(4.83),
        lum: Some(1.0),
        ci: Some(0.65),
        ..record("G2V")
    });

    let primary = star.primary.as_ref().expect("primary");
    assert_eq!(primary.spectral_type, Some(SpectralType::G));
    assert_eq!(primary.range.as_deref(), Some("2"));
    assert_eq!(primary.luminosity, Some(LuminosityClass::V));

    assert_abs_diff_eq!(star.temp.expect("temp"), 5778.0, epsilon = 200.0);
    assert_abs_diff_eq!(star.radius.expect("radius"), 1.0, epsilon = 0.1);
}

#[test]
fn yerkes_subdwarf() {
    let classifier = SpectrumClassifier::with_bundled_tables();
    let star = classifier.classify(StarRecord {
        absmag: Some(5.0),
        lum: Some(0.01),
        ..record("sdB5")
    });

    let primary = star.primary.expect("primary");
    assert_eq!(primary.spectral_type, Some(SpectralType::B));
    assert_eq!(primary.range.as_deref(), Some("5"));
    assert_eq!(primary.luminosity, Some(LuminosityClass::VI));
}

#[test]
fn no_spectrum_uses_temperature_window() {
    let classifier = SpectrumClassifier::with_bundled_tables();
    let star = classifier.classify(StarRecord {
        ci: Some(0.0),
        absmag: Some(-1.0),
        lum: Some(52000.0),
        dist: Some(100.0),
        ..record("")
    });

    assert!(star.computed);
    let key = star.primary.as_ref().map(|p| p.key.clone()).expect("primary");
    let row = classifier
        .tables()
        .trl()
        .and_then(|trl| trl.get(&key))
        .copied()
        .expect("chosen spectrum is a tabulated key");
    let window = classifier.config().temperature_window;
    assert!((row.temp.expect("temp") - temperature_from_bv(0.0)).abs() <= window);
}

#[test]
fn composite_borrows_luminosity() {
    let classifier = SpectrumClassifier::with_bundled_tables();

    let components = classifier.parse("A5/8II");
    assert_eq!(components.len(), 2);
    assert_eq!(components[0].role, SpectrumRole::Primary);
    assert_eq!(components[0].spectral_type, Some(SpectralType::A));
    assert_eq!(components[0].range_key(), "5");
    assert_eq!(components[1].role, SpectrumRole::Composite);
    assert_eq!(components[1].range_key(), "8");

    let star = classifier.classify(record("A5/8II"));
    let primary = star.primary.as_ref().expect("primary");
    assert_eq!(primary.luminosity, Some(LuminosityClass::II));
    assert_eq!(star.composite.len(), 1);
    assert_eq!(star.composite[0].key, "A8II");
    assert!(star
        .description
        .contains("possible spectroscopic double or multiple star"));
}

#[test]
fn subclass_artifact_clamps() {
    let classifier = SpectrumClassifier::with_bundled_tables();
    let star = classifier.classify(record("B10"));
    assert_eq!(star.primary.and_then(|p| p.range).as_deref(), Some("9"));
}

#[test]
fn color_and_temperature_formulas() {
    let blue = StellarColor::from_bv(-0.4);
    assert_abs_diff_eq!(blue.r, 0.61, epsilon = 1e-6);
    assert_abs_diff_eq!(blue.g, 0.70, epsilon = 1e-6);
    assert_abs_diff_eq!(blue.b, 1.0, epsilon = 1e-6);

    let white = StellarColor::from_bv(0.0);
    assert_abs_diff_eq!(white.r, 0.83, epsilon = 1e-6);
    assert_abs_diff_eq!(white.g, 0.87, epsilon = 1e-6);
    assert_abs_diff_eq!(white.b, 1.0, epsilon = 1e-6);

    let sun = temperature_from_bv(0.65);
    assert!((sun - SOLAR_TEMP).abs() / SOLAR_TEMP < 0.05);
}

// ============================================================================
// Randomized properties
// ============================================================================

#[test]
fn key_round_trips_through_parser() {
    let classifier = SpectrumClassifier::with_bundled_tables();
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..500 {
        let spectral_type = *SpectralType::ALL.choose(&mut rng).expect("types");
        let luminosity = *LuminosityClass::ALL.choose(&mut rng).expect("classes");
        let range = rng.random_range(0..=9u8);
        let key = format!("{}{}{}", spectral_type, range, luminosity);

        let components = classifier.parse(&key);
        assert_eq!(components.len(), 1, "{key}");
        let component = &components[0];
        assert_eq!(component.spectral_type, Some(spectral_type), "{key}");
        assert_eq!(component.range_key(), range.to_string(), "{key}");
        assert_eq!(component.luminosity, Some(luminosity), "{key}");
        assert_eq!(component.lookup_key(), key);
    }
}

#[test]
fn every_parse_has_one_primary() {
    let classifier = SpectrumClassifier::with_bundled_tables();
    let mut rng = ChaChaRng::seed_from_u64(42);
    let alphabet: Vec<char> = "OBAFGKMDWCSabdegnpsv0123456789.-/+:()IV ".chars().collect();

    for _ in 0..500 {
        let len = rng.random_range(1..12);
        let spect: String = (0..len)
            .map(|_| *alphabet.choose(&mut rng).expect("alphabet"))
            .collect();

        let components = classifier.parse(&spect);
        let primaries = components
            .iter()
            .filter(|c| c.role == SpectrumRole::Primary)
            .count();
        assert_eq!(primaries, 1, "{spect:?}");
        assert_eq!(components[0].role, SpectrumRole::Primary, "{spect:?}");
    }
}

#[test]
fn reclassifying_the_primary_key_is_idempotent() {
    let classifier = SpectrumClassifier::with_bundled_tables();
    let mut rng = ChaChaRng::seed_from_u64(42);
    let spectra = [
        "G2V", "K0III", "M5III-IV", "sdB5", "A5/8II", "B10", "DA3", "g2v", "F5", "K3.5IIIFe-1",
        "O9.5Iab", "B2IVne", "C5II", "", "WC8",
    ];

    for _ in 0..300 {
        let spect = spectra.choose(&mut rng).expect("spectra");
        let first = classifier.classify(StarRecord {
            ci: Some(rng.random_range(-0.3..2.0)),
            lum: Some(10f64.powf(rng.random_range(-3.0..5.0))),
            absmag: Some(rng.random_range(-8.0..15.0)),
            ..record(spect)
        });

        let Some(primary) = first.primary.clone() else {
            continue;
        };
        let again = classifier.classify(StarRecord {
            spect: primary.key.clone(),
            ..first.clone()
        });

        for (a, b, field) in [
            (first.temp, again.temp, "temp"),
            (first.radius, again.radius, "radius"),
            (first.r, again.r, "r"),
            (first.g, again.g, "g"),
            (first.b, again.b, "b"),
        ] {
            match (a, b) {
                (Some(a), Some(b)) => assert_abs_diff_eq!(a, b, epsilon = 1e-9),
                (a, b) => assert_eq!(a, b, "{spect} {field}"),
            }
        }
    }
}
