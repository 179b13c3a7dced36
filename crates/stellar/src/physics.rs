//! Closed-form stellar relations shared by every resolution tier.

/// Solar effective temperature in Kelvin
pub const SOLAR_TEMP: f64 = 5778.0;

/// Solar absolute visual magnitude
pub const SOLAR_ABSMAG: f64 = 4.83;

/// Effective temperature from the B-V color index (Ballesteros 2012).
///
/// # Example
/// ```
/// use stellar::physics::temperature_from_bv;
///
/// let sun = temperature_from_bv(0.65);
/// assert!((sun - 5778.0).abs() < 50.0);
/// ```
pub fn temperature_from_bv(ci: f64) -> f64 {
    4600.0 * (1.0 / (0.92 * ci + 1.7) + 1.0 / (0.92 * ci + 0.62))
}

/// Radius in solar radii from luminosity (L☉) and temperature (K).
///
/// Stefan-Boltzmann: R/R☉ = sqrt(L / (T/T☉)^4)
pub fn radius_from_luminosity(luminosity: f64, temperature: f64) -> f64 {
    (luminosity / (temperature / SOLAR_TEMP).powi(4)).sqrt()
}

/// Luminosity in L☉ from absolute visual magnitude, ignoring bolometric correction.
pub fn luminosity_from_absmag(absmag: f64) -> f64 {
    10f64.powf((SOLAR_ABSMAG - absmag) / 2.5)
}
