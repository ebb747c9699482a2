//! Classification result types

use serde::{Deserialize, Serialize};

use crate::features::symptoms::SymptomVector;
use crate::matching::matcher::ProfileScore;

/// Complete classification result for one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Matched disease name (always a profile name from the library)
    pub disease: String,

    /// Confidence score, rounded to two decimal places
    ///
    /// Baseline is `max(98 - error * 100, 75)`; with jitter enabled the
    /// value may additionally vary by up to ±2.
    pub confidence: f32,

    /// Treatment text from the matched profile, verbatim
    pub treatment: String,

    /// The extracted symptom vector, for persistence or display
    pub symptoms: SymptomVector,

    /// All library profiles ranked by ascending match error
    pub ranking: Vec<ProfileScore>,

    /// Classification metadata
    pub metadata: ClassificationMetadata,
}

/// Classification metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetadata {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Total pixels analysed
    pub pixel_count: u64,

    /// Measured green-dominance ratio (the leaf-gate input)
    pub green_ratio: f32,

    /// Match error of the winning profile
    pub match_error: f32,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,

    /// Algorithm version
    pub algorithm_version: String,
}
