//! Built-in notation tables for the spectral grammar.
//!
//! All tables are process-wide constants, built once on first use and only
//! read afterwards.

use once_cell::sync::Lazy;
use stellar::{LuminosityClass, SpectralType};

use crate::key_table::KeyTable;

/// Type keys, longest first (`"DA"` before `"D"`, `"WN"` before `"W"`).
pub static TYPE_KEYS: Lazy<KeyTable<SpectralType>> =
    Lazy::new(|| KeyTable::new(&SpectralType::ALL.map(|t| (t.key(), t))));

/// Luminosity class keys, longest first (`"Ia+"` before `"Ia"` before `"I"`).
pub static LUMINOSITY_KEYS: Lazy<KeyTable<LuminosityClass>> =
    Lazy::new(|| KeyTable::new(&LuminosityClass::ALL.map(|c| (c.key(), c))));

/// Mount Wilson / Yerkes lower-case prefixes and the class each implies.
pub static YERKES_PREFIXES: Lazy<KeyTable<LuminosityClass>> = Lazy::new(|| {
    KeyTable::new(&[
        ("sd", LuminosityClass::VI),
        ("sg", LuminosityClass::I),
        ("d", LuminosityClass::V),
        ("g", LuminosityClass::III),
        ("c", LuminosityClass::IA),
    ])
});

/// Peculiarity codes and their descriptions.
pub static MODIFIERS: Lazy<KeyTable<&'static str>> = Lazy::new(|| {
    KeyTable::new(&[
        (":", "uncertain classification"),
        ("...", "undescribed spectral peculiarities"),
        ("!", "special feature"),
        ("comp", "composite spectrum"),
        ("e", "emission lines present"),
        ("(e)", "weak emission lines"),
        ("[e]", "forbidden emission lines"),
        ("er", "reversed-center emission lines"),
        ("eq", "P Cygni-type emission lines"),
        ("f", "N III and He II emission"),
        ("(f)", "weak N III emission, absent He II"),
        ("((f))", "weak N III emission"),
        ("f*", "N IV emission stronger than N III"),
        ("f+", "Si IV emission"),
        ("h", "hydrogen emission"),
        ("ha", "hydrogen emission and absorption"),
        ("Hewk", "weak helium lines"),
        ("k", "interstellar absorption features"),
        ("m", "enhanced metal features"),
        ("n", "broad absorption lines from fast rotation"),
        ("nn", "very broad absorption lines from very fast rotation"),
        ("(n)", "slightly broadened absorption lines"),
        ("neb", "nebular spectrum mixed in"),
        ("p", "peculiar spectrum"),
        ("pec", "peculiar spectrum"),
        ("s", "narrow sharp absorption lines"),
        ("ss", "very narrow absorption lines"),
        ("sh", "shell star features"),
        ("var", "variable spectral features"),
        ("v", "variable spectral features"),
        ("wl", "weak lines"),
        ("wk", "weak lines"),
        ("Ba", "enhanced barium"),
        ("CN", "enhanced cyanogen"),
        ("CH", "enhanced CH bands"),
        ("Fe", "abnormal iron lines"),
        ("He", "abnormal helium lines"),
        ("Hg", "enhanced mercury"),
        ("Mn", "enhanced manganese"),
        ("Si", "enhanced silicon"),
        ("Sr", "enhanced strontium"),
        ("Cr", "enhanced chromium"),
        ("Eu", "enhanced europium"),
        ("dDel", "delta Delphini-type metallic lines"),
    ])
});

/// Historical and compound notations rewritten before splitting.
///
/// Several of these contain `-`, which would otherwise be read as an
/// intermediate-class separator.
pub static TRANSLATIONS: Lazy<KeyTable<&'static str>> = Lazy::new(|| {
    KeyTable::new(&[
        ("Ia-0", "Ia+"),
        ("Ia0", "Ia+"),
        ("Ia0-Ia", "Ia+"),
        ("Ia-ab", "Iab"),
        ("Iab-b", "Iab"),
        ("Ia/ab", "Iab"),
        ("C-R", "R"),
        ("C-N", "N"),
        ("C-J", "C"),
        ("C-Hd", "C"),
        ("C-H", "C"),
        ("WDA", "DA"),
        ("WDB", "DB"),
        ("WD", "D"),
        ("He-wk", "Hewk"),
        ("He-weak", "Hewk"),
        ("Fe-0.5", "Fe"),
        ("Fe-1", "Fe"),
        ("Fe-2", "Fe"),
        ("Fe-3", "Fe"),
        ("Fe-4", "Fe"),
        ("CN-0.5", "CN"),
        ("CN-1", "CN"),
        ("CN-2", "CN"),
        ("CN-3", "CN"),
        ("CH-1", "CH"),
        ("CH-2", "CH"),
        ("CH-3", "CH"),
        ("d-Del", "dDel"),
    ])
});

/// Short color word and full description for a type.
///
/// Descriptions use the word "star" where a luminosity phrase can stand in.
pub fn type_text(spectral_type: SpectralType) -> (&'static str, &'static str) {
    match spectral_type {
        SpectralType::O => ("blue", "blue star"),
        SpectralType::B => ("blue-white", "blue-white star"),
        SpectralType::A => ("white", "white star"),
        SpectralType::F => ("yellow-white", "yellow-white star"),
        SpectralType::G => ("yellow", "yellow star"),
        SpectralType::K => ("orange", "orange star"),
        SpectralType::M => ("red", "red star"),
        SpectralType::L => ("brown dwarf", "dark red brown dwarf"),
        SpectralType::T => ("brown dwarf", "methane brown dwarf"),
        SpectralType::Y => ("brown dwarf", "ultra-cool brown dwarf"),
        SpectralType::C => ("carbon", "carbon star"),
        SpectralType::R => ("carbon", "warm carbon star"),
        SpectralType::N => ("carbon", "cool carbon star"),
        SpectralType::S => ("zirconium", "zirconium-oxide star"),
        SpectralType::MS => ("M/S", "intermediate M/S star"),
        SpectralType::SC => ("S/C", "intermediate S/carbon star"),
        SpectralType::W | SpectralType::WR => ("Wolf-Rayet", "Wolf-Rayet star"),
        SpectralType::WN => ("nitrogen Wolf-Rayet", "nitrogen-rich Wolf-Rayet star"),
        SpectralType::WC => ("carbon Wolf-Rayet", "carbon-rich Wolf-Rayet star"),
        SpectralType::WO => ("oxygen Wolf-Rayet", "oxygen-rich Wolf-Rayet star"),
        SpectralType::D => ("white dwarf", "white dwarf"),
        SpectralType::DA => ("white dwarf", "hydrogen-rich white dwarf"),
        SpectralType::DB => ("white dwarf", "helium-rich white dwarf with He I lines"),
        SpectralType::DC => ("white dwarf", "white dwarf with a continuous spectrum"),
        SpectralType::DO => ("white dwarf", "helium-rich white dwarf with He II lines"),
        SpectralType::DQ => ("white dwarf", "carbon-rich white dwarf"),
        SpectralType::DZ => ("white dwarf", "metal-rich white dwarf"),
        SpectralType::DX => ("white dwarf", "white dwarf with an unclassifiable spectrum"),
    }
}

pub fn luminosity_text(class: LuminosityClass) -> &'static str {
    match class {
        LuminosityClass::IAPLUS => "hypergiant",
        LuminosityClass::IAB => "intermediate supergiant",
        LuminosityClass::IA => "luminous supergiant",
        LuminosityClass::IB => "less luminous supergiant",
        LuminosityClass::I => "supergiant",
        LuminosityClass::II => "bright giant",
        LuminosityClass::III => "giant",
        LuminosityClass::IV => "subgiant",
        LuminosityClass::V => "main-sequence dwarf",
        LuminosityClass::VI => "subdwarf",
        LuminosityClass::VII => "white dwarf",
    }
}

pub fn modifier_text(key: &str) -> Option<&'static str> {
    MODIFIERS.get(key)
}
