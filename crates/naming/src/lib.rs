//! Deterministic naming for generated bodies
//!
//! Names are syllable combinations drawn from the seeded stream, so a seed
//! reproduces its names along with everything else. Moons take their parent
//! planet's name plus a Roman numeral designation.

use seedrand::SeededRandom;

const NAME_PREFIXES: [&str; 30] = [
    "Kep", "Zan", "Vor", "Nix", "Tra", "Hel", "Cor", "Bel", "Aur", "Cyr", "Dra", "Ely", "Fal",
    "Gal", "Ion", "Jov", "Lyr", "Myr", "Neb", "Orb", "Pol", "Qua", "Rex", "Sol", "Tau", "Uma",
    "Vex", "Wyr", "Xen", "Zep",
];

const NAME_MIDDLES: [&str; 20] = [
    "ar", "en", "ix", "on", "us", "ia", "or", "an", "el", "is", "os", "um", "ius", "era", "ova",
    "ith", "eon", "ala", "eri", "olo",
];

const NAME_SUFFIXES: [&str; 16] = [
    "", "", "", "", "-I", "-II", "-III", "-IV", "-V", " Prime", " Major", " Minor", " Alpha",
    " Beta", "-7", "-9",
];

const NUMERALS: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

/// Generates a body name from the syllable tables.
///
/// Consumes exactly three draws: prefix, middle, suffix.
pub fn generate_name(rng: &mut SeededRandom) -> String {
    let prefix = rng.choice(&NAME_PREFIXES);
    let middle = rng.choice(&NAME_MIDDLES);
    let suffix = rng.choice(&NAME_SUFFIXES);
    format!("{prefix}{middle}{suffix}")
}

/// Roman numeral for a zero-based moon index; decimal past XII.
pub fn moon_numeral(index: usize) -> String {
    match NUMERALS.get(index) {
        Some(numeral) => (*numeral).to_string(),
        None => (index + 1).to_string(),
    }
}

/// Satellite designation: parent name plus numeral ("Vorix II").
pub fn moon_name(planet_name: &str, index: usize) -> String {
    format!("{planet_name} {}", moon_numeral(index))
}
