use std::fmt;

use serde::{Deserialize, Serialize};

use seedrand::SeededRandom;

/// Morgan-Keenan main-sequence spectral classes, hottest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralClass::O => "O",
            SpectralClass::B => "B",
            SpectralClass::A => "A",
            SpectralClass::F => "F",
            SpectralClass::G => "G",
            SpectralClass::K => "K",
            SpectralClass::M => "M",
        };
        write!(f, "{}", str)
    }
}

/// Physical ranges and abundance for one spectral class.
///
/// Samples are uniform within each `(min, max)` range; `probability` is the
/// relative abundance weight used by [`SpectralClass::select`].
#[derive(Debug, Clone, Copy)]
pub struct ClassProfile {
    pub name: &'static str,
    pub color: &'static str,
    pub temperature: (f64, f64),
    pub radius: (f64, f64),
    pub mass: (f64, f64),
    pub luminosity: (f64, f64),
    pub probability: f64,
}

impl SpectralClass {
    /// All classes in catalog order.
    pub const ALL: [SpectralClass; 7] = [
        SpectralClass::O,
        SpectralClass::B,
        SpectralClass::A,
        SpectralClass::F,
        SpectralClass::G,
        SpectralClass::K,
        SpectralClass::M,
    ];

    /// Static profile for this class.
    pub fn profile(&self) -> &'static ClassProfile {
        match self {
            SpectralClass::O => &ClassProfile {
                name: "O-Class (Blue Supergiant)",
                color: "#9bb0ff",
                temperature: (30_000.0, 50_000.0),
                radius: (6.6, 15.0),
                mass: (16.0, 150.0),
                luminosity: (30_000.0, 1_000_000.0),
                probability: 0.00003,
            },
            SpectralClass::B => &ClassProfile {
                name: "B-Class (Blue Giant)",
                color: "#aabfff",
                temperature: (10_000.0, 30_000.0),
                radius: (1.8, 6.6),
                mass: (2.1, 16.0),
                luminosity: (25.0, 30_000.0),
                probability: 0.13,
            },
            SpectralClass::A => &ClassProfile {
                name: "A-Class (White)",
                color: "#cad7ff",
                temperature: (7_500.0, 10_000.0),
                radius: (1.4, 1.8),
                mass: (1.4, 2.1),
                luminosity: (5.0, 25.0),
                probability: 0.6,
            },
            SpectralClass::F => &ClassProfile {
                name: "F-Class (Yellow-White)",
                color: "#f8f7ff",
                temperature: (6_000.0, 7_500.0),
                radius: (1.15, 1.4),
                mass: (1.04, 1.4),
                luminosity: (1.5, 5.0),
                probability: 3.0,
            },
            SpectralClass::G => &ClassProfile {
                name: "G-Class (Yellow)",
                color: "#fff4ea",
                temperature: (5_200.0, 6_000.0),
                radius: (0.96, 1.15),
                mass: (0.8, 1.04),
                luminosity: (0.6, 1.5),
                probability: 7.6,
            },
            SpectralClass::K => &ClassProfile {
                name: "K-Class (Orange)",
                color: "#ffd2a1",
                temperature: (3_700.0, 5_200.0),
                radius: (0.7, 0.96),
                mass: (0.45, 0.8),
                luminosity: (0.08, 0.6),
                probability: 12.1,
            },
            SpectralClass::M => &ClassProfile {
                name: "M-Class (Red Dwarf)",
                color: "#ffcc6f",
                temperature: (2_400.0, 3_700.0),
                radius: (0.1, 0.7),
                mass: (0.08, 0.45),
                luminosity: (0.0001, 0.08),
                probability: 76.45,
            },
        }
    }

    /// Abundance-weighted class draw; falls back to G when the cumulative
    /// scan exhausts the table.
    pub fn select(rng: &mut SeededRandom) -> Self {
        let weights: Vec<f64> = Self::ALL.iter().map(|c| c.profile().probability).collect();
        match rng.weighted_pick(&weights) {
            Some(index) => Self::ALL[index],
            None => SpectralClass::G,
        }
    }
}
