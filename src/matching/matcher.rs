//! Disease matching algorithm
//!
//! Selects the best-matching disease profile for a symptom vector using an
//! asymmetric L1 distance: the error against a profile is the sum of
//! absolute differences over the symptoms that profile lists. Symptoms a
//! profile does not mention are skipped entirely, so specific, short
//! profiles are not penalised for being short.

use serde::{Deserialize, Serialize};

use super::library::{DiseaseLibrary, DiseaseProfile};
use crate::error::AnalysisError;
use crate::features::symptoms::SymptomVector;

/// Match error for one profile, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileScore {
    /// Profile name
    pub name: String,
    /// Summed absolute error against the image's symptom vector
    pub error: f32,
}

/// Outcome of matching one symptom vector against the library
#[derive(Debug, Clone)]
pub struct MatchOutcome<'a> {
    /// The winning profile
    pub profile: &'a DiseaseProfile,
    /// The winner's match error
    pub error: f32,
    /// All profiles ranked by ascending error; equal errors keep library
    /// order, so the first entry is always the winner
    pub ranking: Vec<ProfileScore>,
}

/// Match error between a symptom vector and one profile
///
/// Sums `|image ratio - reference ratio|` over the profile's own symptom
/// keys only.
pub fn profile_error(symptoms: &SymptomVector, profile: &DiseaseProfile) -> f32 {
    profile
        .symptoms
        .iter()
        .map(|(&symptom, &reference)| (symptoms.get(symptom) - reference).abs())
        .sum()
}

/// Select the best-matching disease profile
///
/// The profile with the strictly smallest error wins; when two profiles have
/// equal error, the one listed first in the library wins. The library's
/// insertion order is therefore part of the behavioural contract.
///
/// # Errors
///
/// Returns `AnalysisError::EmptyLibrary` if the library holds no profiles.
pub fn match_disease<'a>(
    symptoms: &SymptomVector,
    library: &'a DiseaseLibrary,
) -> Result<MatchOutcome<'a>, AnalysisError> {
    if library.is_empty() {
        return Err(AnalysisError::EmptyLibrary);
    }

    let mut best: Option<(&DiseaseProfile, f32)> = None;
    let mut ranking = Vec::with_capacity(library.len());

    for profile in library.profiles() {
        let error = profile_error(symptoms, profile);
        ranking.push(ProfileScore {
            name: profile.name.clone(),
            error,
        });
        // Strict < keeps the earlier profile on ties
        match best {
            Some((_, best_error)) if error >= best_error => {}
            _ => best = Some((profile, error)),
        }
    }

    // Stable sort preserves library order among equal errors
    ranking.sort_by(|a, b| a.error.partial_cmp(&b.error).unwrap_or(std::cmp::Ordering::Equal));

    let (profile, error) = best.ok_or(AnalysisError::EmptyLibrary)?;
    log::debug!(
        "Matched '{}' with error {:.4} over {} profiles",
        profile.name,
        error,
        library.len()
    );

    Ok(MatchOutcome {
        profile,
        error,
        ranking,
    })
}
