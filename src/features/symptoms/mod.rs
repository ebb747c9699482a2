//! Symptom extraction
//!
//! Converts an RGB pixel buffer into a bounded set of symptom ratios: for
//! each named symptom, the fraction of pixels matching its colour predicate.
//! Predicates may overlap; a pixel can contribute to several symptoms or to
//! none, so the ratios are not expected to sum to 1.

pub mod extractor;
pub mod predicates;

pub use extractor::{extract_symptoms, green_ratio};

use serde::{Deserialize, Serialize};

/// A named visual symptom derived from a per-pixel colour predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    /// Green-dominant pixels (healthy foliage)
    Green,
    /// Brown-toned pixels (necrotic lesions)
    BrownSpots,
    /// Yellow-toned pixels (chlorosis)
    Yellowing,
    /// Near-white pixels (powdery coating)
    WhiteDust,
    /// Rust-orange pixels (pustules)
    RustySpots,
}

impl Symptom {
    /// All recognised symptoms, in canonical order
    pub const ALL: [Symptom; 5] = [
        Symptom::Green,
        Symptom::BrownSpots,
        Symptom::Yellowing,
        Symptom::WhiteDust,
        Symptom::RustySpots,
    ];

    /// Stable string key for this symptom (matches the serialized form)
    pub fn key(&self) -> &'static str {
        match self {
            Symptom::Green => "green",
            Symptom::BrownSpots => "brown_spots",
            Symptom::Yellowing => "yellowing",
            Symptom::WhiteDust => "white_dust",
            Symptom::RustySpots => "rusty_spots",
        }
    }
}

/// Symptom ratios for one image
///
/// Every field is the fraction of pixels matching that symptom's predicate,
/// always in [0, 1]. All five symptoms are always present; a symptom with no
/// matching pixels has ratio 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymptomVector {
    /// Fraction of green-dominant pixels
    pub green: f32,
    /// Fraction of brown-toned pixels
    pub brown_spots: f32,
    /// Fraction of yellow-toned pixels
    pub yellowing: f32,
    /// Fraction of near-white pixels
    pub white_dust: f32,
    /// Fraction of rust-orange pixels
    pub rusty_spots: f32,
}

impl SymptomVector {
    /// Vector with all ratios at zero
    pub fn zero() -> Self {
        Self {
            green: 0.0,
            brown_spots: 0.0,
            yellowing: 0.0,
            white_dust: 0.0,
            rusty_spots: 0.0,
        }
    }

    /// Ratio for a single symptom
    pub fn get(&self, symptom: Symptom) -> f32 {
        match symptom {
            Symptom::Green => self.green,
            Symptom::BrownSpots => self.brown_spots,
            Symptom::Yellowing => self.yellowing,
            Symptom::WhiteDust => self.white_dust,
            Symptom::RustySpots => self.rusty_spots,
        }
    }

    /// Iterate over all (symptom, ratio) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Symptom, f32)> + '_ {
        Symptom::ALL.iter().map(move |&s| (s, self.get(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symptom_keys() {
        assert_eq!(Symptom::Green.key(), "green");
        assert_eq!(Symptom::BrownSpots.key(), "brown_spots");
        assert_eq!(Symptom::Yellowing.key(), "yellowing");
        assert_eq!(Symptom::WhiteDust.key(), "white_dust");
        assert_eq!(Symptom::RustySpots.key(), "rusty_spots");
    }

    #[test]
    fn test_vector_get_matches_fields() {
        let v = SymptomVector {
            green: 0.5,
            brown_spots: 0.1,
            yellowing: 0.2,
            white_dust: 0.3,
            rusty_spots: 0.4,
        };
        assert_eq!(v.get(Symptom::Green), 0.5);
        assert_eq!(v.get(Symptom::RustySpots), 0.4);
        assert_eq!(v.iter().count(), 5);
    }

    #[test]
    fn test_serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&Symptom::WhiteDust).unwrap();
        assert_eq!(json, "\"white_dust\"");
    }
}
