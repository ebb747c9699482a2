//! Disease profile library
//!
//! The library is read-only reference data: an ordered list of disease
//! profiles, each holding a partial reference symptom vector and a treatment
//! text. It is injected into the pipeline at construction time rather than
//! held as module-level state, so tests and deployments can substitute their
//! own libraries.

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::features::symptoms::Symptom;

/// A single disease profile: reference symptom ratios plus treatment text
///
/// The reference vector is partial. Symptoms a profile does not list are
/// skipped during matching, not treated as zero, so a short profile is not
/// penalised for symptoms it never mentions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseProfile {
    /// Disease name, unique within a library
    pub name: String,

    /// Reference symptom ratios, each in [0, 1]
    pub symptoms: BTreeMap<Symptom, f32>,

    /// Treatment text returned verbatim with a match
    pub treatment: String,
}

impl DiseaseProfile {
    /// Build a profile from an iterator of (symptom, reference ratio) pairs
    pub fn new(
        name: impl Into<String>,
        symptoms: impl IntoIterator<Item = (Symptom, f32)>,
        treatment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symptoms: symptoms.into_iter().collect(),
            treatment: treatment.into(),
        }
    }
}

/// Ordered collection of disease profiles
///
/// Iteration order is insertion order, and that order is a documented part
/// of the matching contract: when two profiles tie on match error, the one
/// that appears first in the library wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiseaseLibrary {
    profiles: Vec<DiseaseProfile>,
}

impl DiseaseLibrary {
    /// Build a library from profiles, preserving their order
    pub fn new(profiles: Vec<DiseaseProfile>) -> Self {
        Self { profiles }
    }

    /// The built-in five-profile library
    ///
    /// `Healthy` is always present and listed first.
    pub fn builtin() -> Self {
        Self::new(vec![
            DiseaseProfile::new(
                "Healthy",
                [(Symptom::Green, 0.9)],
                "Leaf looks healthy. Continue the current care routine and monitor for changes.",
            ),
            DiseaseProfile::new(
                "Powdery Mildew",
                [(Symptom::WhiteDust, 0.6), (Symptom::Green, 0.4)],
                "White powdery patches suggest powdery mildew. Apply a sulfur-based fungicide and improve air circulation.",
            ),
            DiseaseProfile::new(
                "Early Blight",
                [(Symptom::BrownSpots, 0.3), (Symptom::Green, 0.5)],
                "Brown concentric lesions suggest early blight. Remove affected leaves and apply a copper-based fungicide.",
            ),
            DiseaseProfile::new(
                "Leaf Rust",
                [(Symptom::RustySpots, 0.35), (Symptom::Green, 0.5)],
                "Rust-coloured pustules suggest leaf rust. Remove infected foliage and avoid overhead watering.",
            ),
            DiseaseProfile::new(
                "Yellow Leaf Curl",
                [(Symptom::Yellowing, 0.4), (Symptom::Green, 0.45)],
                "Widespread yellowing suggests yellow leaf curl or a nutrient deficiency. Check for whiteflies and apply a balanced fertiliser.",
            ),
        ])
    }

    /// Load and validate a library from a JSON string
    ///
    /// The expected format is an array of profiles:
    ///
    /// ```json
    /// [
    ///   {
    ///     "name": "Healthy",
    ///     "symptoms": { "green": 0.9 },
    ///     "treatment": "Continue the current care routine."
    ///   }
    /// ]
    /// ```
    ///
    /// # Errors
    ///
    /// * `AnalysisError::InvalidLibrary` on malformed JSON, duplicate names,
    ///   or reference ratios outside [0, 1]
    /// * `AnalysisError::EmptyLibrary` if the array is empty
    pub fn from_json_str(json: &str) -> Result<Self, AnalysisError> {
        let library: Self = serde_json::from_str(json)
            .map_err(|e| AnalysisError::InvalidLibrary(e.to_string()))?;
        library.validate()?;
        Ok(library)
    }

    /// Load and validate a library from a JSON reader
    pub fn from_json_reader(reader: impl Read) -> Result<Self, AnalysisError> {
        let library: Self = serde_json::from_reader(reader)
            .map_err(|e| AnalysisError::InvalidLibrary(e.to_string()))?;
        library.validate()?;
        Ok(library)
    }

    /// Validate library invariants: non-empty, unique names, ratios in [0, 1]
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.profiles.is_empty() {
            return Err(AnalysisError::EmptyLibrary);
        }

        let mut seen = std::collections::HashSet::new();
        for profile in &self.profiles {
            if !seen.insert(profile.name.as_str()) {
                return Err(AnalysisError::InvalidLibrary(format!(
                    "duplicate profile name '{}'",
                    profile.name
                )));
            }
            for (&symptom, &ratio) in &profile.symptoms {
                if !(0.0..=1.0).contains(&ratio) {
                    return Err(AnalysisError::InvalidLibrary(format!(
                        "profile '{}' has {} ratio {} outside [0, 1]",
                        profile.name,
                        symptom.key(),
                        ratio
                    )));
                }
            }
        }
        Ok(())
    }

    /// Profiles in library (tie-break) order
    pub fn profiles(&self) -> &[DiseaseProfile] {
        &self.profiles
    }

    /// Number of profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True if the library holds no profiles
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
