//! Coarse built-in properties for a bare type key.
//!
//! This is the last lookup tier: any star whose type was identified ends up
//! with at least these values.

use stellar::SpectralType;

use super::properties::StellarProperties;

#[allow(clippy::too_many_arguments)]
const fn row(
    mass: f64,
    luminosity: f64,
    radius: f64,
    temp: f64,
    ci: Option<f64>,
    absmag: f64,
    bolo: f64,
    rgb: (f64, f64, f64),
) -> StellarProperties {
    StellarProperties {
        mass: Some(mass),
        luminosity: Some(luminosity),
        radius: Some(radius),
        temp: Some(temp),
        ci,
        absmag: Some(absmag),
        bolo: Some(bolo),
        r: Some(rgb.0),
        g: Some(rgb.1),
        b: Some(rgb.2),
    }
}

const WOLF_RAYET_RGB: (f64, f64, f64) = (0.61, 0.69, 1.0);
const WHITE_DWARF_RGB: (f64, f64, f64) = (0.83, 0.87, 1.0);

pub fn type_default(spectral_type: SpectralType) -> StellarProperties {
    match spectral_type {
        SpectralType::O => row(40.0, 2.0e5, 10.0, 38000.0, Some(-0.32), -5.5, -9.0, (0.61, 0.69, 1.0)),
        SpectralType::B => row(6.0, 800.0, 4.0, 18000.0, Some(-0.18), -1.5, -2.5, (0.69, 0.76, 1.0)),
        SpectralType::A => row(2.0, 20.0, 1.8, 8500.0, Some(0.12), 1.6, 1.5, (0.83, 0.87, 1.0)),
        SpectralType::F => row(1.3, 3.0, 1.3, 6600.0, Some(0.42), 3.3, 3.5, (0.97, 0.97, 0.96)),
        SpectralType::G => row(1.0, 1.0, 1.0, 5700.0, Some(0.65), 4.8, 4.7, (1.0, 0.94, 0.84)),
        SpectralType::K => row(0.7, 0.3, 0.75, 4500.0, Some(1.1), 7.0, 6.0, (1.0, 0.87, 0.71)),
        SpectralType::M => row(0.3, 0.02, 0.35, 3200.0, Some(1.6), 11.0, 9.0, (1.0, 0.80, 0.57)),
        SpectralType::L => row(0.07, 1.0e-4, 0.1, 1800.0, None, 18.0, 14.7, (1.0, 0.45, 0.2)),
        SpectralType::T => row(0.05, 1.0e-5, 0.1, 1000.0, None, 22.0, 17.2, (0.8, 0.3, 0.4)),
        SpectralType::Y => row(0.02, 1.0e-6, 0.1, 500.0, None, 26.0, 19.7, (0.6, 0.2, 0.3)),
        SpectralType::C => row(1.5, 3000.0, 200.0, 3000.0, Some(2.5), -1.0, -3.9, (1.0, 0.6, 0.4)),
        SpectralType::R => row(1.5, 100.0, 15.0, 4500.0, Some(1.1), 0.0, -0.3, (1.0, 0.8, 0.6)),
        SpectralType::N => row(1.5, 5000.0, 300.0, 2800.0, Some(2.8), -1.5, -4.5, (1.0, 0.55, 0.35)),
        SpectralType::S => row(1.5, 5000.0, 250.0, 3000.0, Some(1.9), -1.0, -4.5, (1.0, 0.7, 0.5)),
        SpectralType::MS => row(1.5, 3000.0, 200.0, 3100.0, Some(1.7), -0.8, -4.0, (1.0, 0.72, 0.5)),
        SpectralType::SC => row(1.5, 4000.0, 250.0, 3000.0, Some(2.0), -1.0, -4.3, (1.0, 0.65, 0.45)),
        SpectralType::W | SpectralType::WR => {
            row(20.0, 2.0e5, 5.0, 60000.0, Some(-0.3), -5.0, -8.5, WOLF_RAYET_RGB)
        }
        SpectralType::WN => row(20.0, 2.0e5, 6.0, 50000.0, Some(-0.3), -5.0, -8.5, WOLF_RAYET_RGB),
        SpectralType::WC => row(15.0, 1.5e5, 3.0, 70000.0, Some(-0.3), -4.5, -8.2, WOLF_RAYET_RGB),
        SpectralType::WO => row(15.0, 3.0e5, 1.0, 150000.0, Some(-0.3), -4.0, -9.0, WOLF_RAYET_RGB),
        SpectralType::D => row(0.6, 1.5e-3, 0.013, 10000.0, Some(0.0), 11.5, 11.8, WHITE_DWARF_RGB),
        SpectralType::DA => row(0.6, 3.1e-3, 0.013, 12000.0, Some(-0.1), 11.0, 11.0, WHITE_DWARF_RGB),
        SpectralType::DB => row(0.65, 6.9e-3, 0.012, 16000.0, Some(-0.15), 10.8, 10.1, WHITE_DWARF_RGB),
        SpectralType::DC => row(0.6, 3.7e-4, 0.013, 7000.0, Some(0.3), 13.0, 13.3, (0.95, 0.95, 0.97)),
        SpectralType::DO => row(0.6, 10.0, 0.02, 60000.0, Some(-0.35), 7.0, 2.2, WOLF_RAYET_RGB),
        SpectralType::DQ => row(0.65, 6.5e-4, 0.012, 9000.0, Some(0.2), 12.5, 12.7, WHITE_DWARF_RGB),
        SpectralType::DZ => row(0.6, 5.2e-4, 0.013, 8000.0, Some(0.25), 12.8, 13.0, (0.9, 0.92, 1.0)),
        SpectralType::DX => row(0.6, 1.5e-3, 0.013, 10000.0, None, 11.5, 11.8, WHITE_DWARF_RGB),
    }
}
