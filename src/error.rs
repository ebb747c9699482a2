//! Error types for the leaf analysis engine

use std::fmt;

/// Errors that can occur during leaf classification
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The uploaded bytes could not be decoded into a pixel buffer,
    /// or the decoded image has zero area
    InvalidImage(String),

    /// The image does not plausibly depict foliage: the fraction of
    /// green-dominant pixels fell below the leaf-gate threshold
    NotALeaf {
        /// Measured fraction of green-dominant pixels
        green_ratio: f32,
    },

    /// The disease library contains no profiles. This is a configuration
    /// error and should prevent the service from serving traffic.
    EmptyLibrary,

    /// A disease library failed validation (malformed JSON, duplicate
    /// profile names, reference ratios outside [0, 1])
    InvalidLibrary(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidImage(msg) => write!(f, "Invalid image: {}", msg),
            AnalysisError::NotALeaf { green_ratio } => write!(
                f,
                "Image does not appear to contain a leaf (green ratio {:.3})",
                green_ratio
            ),
            AnalysisError::EmptyLibrary => write!(f, "Disease library is empty"),
            AnalysisError::InvalidLibrary(msg) => write!(f, "Invalid disease library: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
