//! Confidence scoring
//!
//! Derives the user-facing confidence score from the match error. The score
//! starts at a fixed base and loses a fixed penalty per unit of summed
//! absolute error, floored so that even a poor fit never reads as
//! low-confidence. The floor is an intentional product decision inherited
//! from the original service and is preserved as-is.

/// Base confidence for a perfect match
pub const CONFIDENCE_BASE: f32 = 98.0;

/// Confidence penalty per unit of match error
pub const ERROR_PENALTY: f32 = 100.0;

/// Lower bound on the pre-jitter confidence score
pub const CONFIDENCE_FLOOR: f32 = 75.0;

/// Half-width of the optional uniform jitter range
pub const JITTER_RANGE: f32 = 2.0;

/// Baseline (pre-jitter) confidence for a match error
///
/// `max(98 - error * 100, 75)`. This is the deterministic, testable value;
/// jitter, when enabled, is added on top by the caller.
pub fn score_confidence(error: f32) -> f32 {
    (CONFIDENCE_BASE - error * ERROR_PENALTY).max(CONFIDENCE_FLOOR)
}

/// Round a confidence value to two decimal places
pub fn round_confidence(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
