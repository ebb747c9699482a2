//! Disease matching modules
//!
//! Matches an extracted symptom vector against the disease library:
//! - Disease profiles and the library container
//! - Asymmetric L1 matching with a stable tie-break

pub mod library;
pub mod matcher;

pub use library::{DiseaseLibrary, DiseaseProfile};
pub use matcher::{match_disease, MatchOutcome, ProfileScore};
