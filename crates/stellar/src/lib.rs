//! Stellar spectral grammar, colors and closed-form stellar physics.

pub mod physics;
pub mod spectral;
pub mod stellar_color;


// Re-export spectral types
pub use spectral::{LuminosityClass, RotationClass, SpectralType};

// Re-export color
pub use stellar_color::StellarColor;

pub use physics::{
    luminosity_from_absmag, radius_from_luminosity, temperature_from_bv, SOLAR_ABSMAG, SOLAR_TEMP,
};
