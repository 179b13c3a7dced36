use serde::{Deserialize, Serialize};

/// Normalized RGB color of a stellar photosphere, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StellarColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl StellarColor {
    // Tanner Helland blackbody-to-RGB algorithm coefficients
    // Reference: https://tannerhelland.com/2012/09/18/convert-temperature-rgb-algorithm-code.html
    //
    // These are curve-fit coefficients for approximating the Planckian locus
    // (the path of blackbody colors through CIE color space)

    /// Red channel coefficient for hot stars (temp > 6600K)
    const RED_COEFF: f64 = 329.698727446;
    const RED_EXP: f64 = -0.1332047592;

    /// Green channel coefficients
    const GREEN_COOL_COEFF: f64 = 99.4708025861;
    const GREEN_COOL_OFFSET: f64 = -161.1195681661;
    const GREEN_HOT_COEFF: f64 = 288.1221695283;
    const GREEN_HOT_EXP: f64 = -0.0755148492;

    /// Blue channel coefficients for warm stars (1900K < temp < 6600K)
    const BLUE_COEFF: f64 = 138.5177312231;
    const BLUE_OFFSET: f64 = -305.0447927307;

    /// Temperature thresholds (in units of temp/100)
    const TEMP_HOT_THRESHOLD: f64 = 66.0;
    const TEMP_BLUE_CUTOFF: f64 = 19.0;

    /// Valid temperature range for stellar objects (Kelvin)
    pub const MIN_TEMP: f64 = 1000.0;
    pub const MAX_TEMP: f64 = 40000.0;

    /// Color index range covered by the B-V approximation
    pub const MIN_BV: f64 = -0.4;
    pub const MAX_BV: f64 = 2.0;

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Convert blackbody temperature to RGB color
    ///
    /// Uses an approximation of the Planckian locus for stellar temperatures.
    /// Unlike a rendered sprite color this is the raw curve fit, with no
    /// desaturation, so it can seed the blackbody lookup table.
    ///
    /// # Arguments
    /// * `temperature` - Temperature in Kelvin (clamped to 1000K-40000K)
    pub fn from_temperature(temperature: f64) -> Self {
        let temp = temperature.clamp(Self::MIN_TEMP, Self::MAX_TEMP) / 100.0;

        let r = match temp {
            t if t <= Self::TEMP_HOT_THRESHOLD => 255.0,
            t => (Self::RED_COEFF * (t - 60.0).powf(Self::RED_EXP)).clamp(0.0, 255.0),
        };

        let g = match temp {
            t if t <= Self::TEMP_HOT_THRESHOLD => {
                (Self::GREEN_COOL_COEFF * t.ln() + Self::GREEN_COOL_OFFSET).clamp(0.0, 255.0)
            }
            t => (Self::GREEN_HOT_COEFF * (t - 60.0).powf(Self::GREEN_HOT_EXP)).clamp(0.0, 255.0),
        };

        let b = match temp {
            t if t >= Self::TEMP_HOT_THRESHOLD => 255.0,
            t if t <= Self::TEMP_BLUE_CUTOFF => 0.0,
            t => (Self::BLUE_COEFF * (t - 10.0).ln() + Self::BLUE_OFFSET).clamp(0.0, 255.0),
        };

        Self {
            r: r / 255.0,
            g: g / 255.0,
            b: b / 255.0,
        }
    }

    /// Convert a B-V color index directly to RGB.
    ///
    /// Four-band piecewise polynomial fit over B-V in [-0.4, 2.0]; input
    /// outside that range is clamped. Channels that fall past their last
    /// band are zero.
    pub fn from_bv(bv: f64) -> Self {
        let bv = bv.clamp(Self::MIN_BV, Self::MAX_BV);

        let r = match bv {
            bv if bv < 0.00 => {
                let t = (bv + 0.40) / (0.00 + 0.40);
                0.61 + (0.11 * t) + (0.1 * t * t)
            }
            bv if bv < 0.40 => {
                let t = (bv - 0.00) / (0.40 - 0.00);
                0.83 + (0.17 * t)
            }
            bv if bv < 2.10 => 1.00,
            _ => 0.0,
        };

        let g = match bv {
            bv if bv < 0.00 => {
                let t = (bv + 0.40) / (0.00 + 0.40);
                0.70 + (0.07 * t) + (0.1 * t * t)
            }
            bv if bv < 0.40 => {
                let t = (bv - 0.00) / (0.40 - 0.00);
                0.87 + (0.11 * t)
            }
            bv if bv < 1.60 => {
                let t = (bv - 0.40) / (1.60 - 0.40);
                0.98 - (0.16 * t)
            }
            bv if bv < 2.00 => {
                let t = (bv - 1.60) / (2.00 - 1.60);
                0.82 - (0.5 * t * t)
            }
            _ => 0.0,
        };

        let b = match bv {
            bv if bv < 0.40 => 1.00,
            bv if bv < 1.50 => {
                let t = (bv - 0.40) / (1.50 - 0.40);
                1.00 - (0.47 * t) + (0.1 * t * t)
            }
            bv if bv < 1.94 => {
                let t = (bv - 1.50) / (1.94 - 1.50);
                0.63 - (0.6 * t * t)
            }
            _ => 0.0,
        };

        Self { r, g, b }
    }
}
