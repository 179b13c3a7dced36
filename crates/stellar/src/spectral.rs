use std::fmt;

use serde::{Deserialize, Serialize};

/// Harvard temperature type, extended with the carbon, S, Wolf-Rayet and
/// white dwarf families that appear in catalog spectra.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralType {
    // Main sequence types
    O,
    B,
    A,
    F,
    G,
    K,
    M,

    // Brown dwarfs
    L,
    T,
    Y,

    // Carbon and zirconium-oxide stars
    C,
    R,
    N,
    S,
    MS,
    SC,

    // Wolf-Rayet
    W,
    WR,
    WN,
    WC,
    WO,

    // White dwarfs
    D,
    DA,
    DB,
    DC,
    DO,
    DQ,
    DZ,
    DX,
}

impl SpectralType {
    pub const ALL: [SpectralType; 29] = [
        SpectralType::O,
        SpectralType::B,
        SpectralType::A,
        SpectralType::F,
        SpectralType::G,
        SpectralType::K,
        SpectralType::M,
        SpectralType::L,
        SpectralType::T,
        SpectralType::Y,
        SpectralType::C,
        SpectralType::R,
        SpectralType::N,
        SpectralType::S,
        SpectralType::MS,
        SpectralType::SC,
        SpectralType::W,
        SpectralType::WR,
        SpectralType::WN,
        SpectralType::WC,
        SpectralType::WO,
        SpectralType::D,
        SpectralType::DA,
        SpectralType::DB,
        SpectralType::DC,
        SpectralType::DO,
        SpectralType::DQ,
        SpectralType::DZ,
        SpectralType::DX,
    ];

    /// Catalog notation for this type.
    pub fn key(&self) -> &'static str {
        match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
            SpectralType::L => "L",
            SpectralType::T => "T",
            SpectralType::Y => "Y",
            SpectralType::C => "C",
            SpectralType::R => "R",
            SpectralType::N => "N",
            SpectralType::S => "S",
            SpectralType::MS => "MS",
            SpectralType::SC => "SC",
            SpectralType::W => "W",
            SpectralType::WR => "WR",
            SpectralType::WN => "WN",
            SpectralType::WC => "WC",
            SpectralType::WO => "WO",
            SpectralType::D => "D",
            SpectralType::DA => "DA",
            SpectralType::DB => "DB",
            SpectralType::DC => "DC",
            SpectralType::DO => "DO",
            SpectralType::DQ => "DQ",
            SpectralType::DZ => "DZ",
            SpectralType::DX => "DX",
        }
    }

    /// White dwarfs carry no luminosity class by convention.
    pub fn is_white_dwarf(&self) -> bool {
        matches!(
            self,
            SpectralType::D
                | SpectralType::DA
                | SpectralType::DB
                | SpectralType::DC
                | SpectralType::DO
                | SpectralType::DQ
                | SpectralType::DZ
                | SpectralType::DX
        )
    }

    pub fn is_wolf_rayet(&self) -> bool {
        matches!(
            self,
            SpectralType::W
                | SpectralType::WR
                | SpectralType::WN
                | SpectralType::WC
                | SpectralType::WO
        )
    }

    /// Hot types whose photospheres rotate fast as a rule.
    pub fn is_fast_rotator(&self) -> bool {
        matches!(self, SpectralType::O | SpectralType::A | SpectralType::B) || self.is_wolf_rayet()
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Yerkes (MK) luminosity class.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuminosityClass {
    #[serde(rename = "Ia+")]
    IAPLUS, // Hypergiants
    #[serde(rename = "Iab")]
    IAB, // Intermediate supergiants
    #[serde(rename = "Ia")]
    IA, // Bright supergiants
    #[serde(rename = "Ib")]
    IB, // Supergiants
    I,   // Unqualified supergiants
    II,  // Bright giants
    III, // Normal giants
    IV,  // Subgiants
    V,   // Main sequence
    VI,  // Subdwarfs
    VII, // White dwarfs (obsolete class)
}

impl LuminosityClass {
    pub const ALL: [LuminosityClass; 11] = [
        LuminosityClass::IAPLUS,
        LuminosityClass::IAB,
        LuminosityClass::IA,
        LuminosityClass::IB,
        LuminosityClass::I,
        LuminosityClass::II,
        LuminosityClass::III,
        LuminosityClass::IV,
        LuminosityClass::V,
        LuminosityClass::VI,
        LuminosityClass::VII,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            LuminosityClass::IAPLUS => "Ia+",
            LuminosityClass::IAB => "Iab",
            LuminosityClass::IA => "Ia",
            LuminosityClass::IB => "Ib",
            LuminosityClass::I => "I",
            LuminosityClass::II => "II",
            LuminosityClass::III => "III",
            LuminosityClass::IV => "IV",
            LuminosityClass::V => "V",
            LuminosityClass::VI => "VI",
            LuminosityClass::VII => "VII",
        }
    }

    /// Exact (non-prefix) lookup of a class by its notation.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.key() == key)
    }
}

impl fmt::Display for LuminosityClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Coarse rotation speed, used by the renderer to spin star meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RotationClass {
    #[default]
    Normal,
    Fast,
    VeryFast,
}

impl fmt::Display for RotationClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            RotationClass::Normal => "normal",
            RotationClass::Fast => "fast",
            RotationClass::VeryFast => "very fast",
        };
        write!(f, "{}", str)
    }
}
