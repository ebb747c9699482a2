//! Configuration parameters for leaf classification

/// Confidence jitter mode
///
/// Jitter is a small random offset added to the confidence score, kept for
/// parity with earlier mock-response behaviour. It is cosmetic and disabled
/// by default so that `classify` stays fully deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JitterMode {
    /// No jitter; the confidence score is the deterministic baseline
    Disabled,
    /// Add a uniform draw from [-2.0, +2.0] to the confidence score
    Uniform,
}

/// Classification configuration parameters
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    /// Leaf-gate threshold (default: 0.20)
    ///
    /// Images whose fraction of green-dominant pixels falls below this value
    /// are rejected as non-foliage before any symptom matching happens.
    pub min_green_ratio: f32,

    /// Confidence jitter mode (default: Disabled)
    pub jitter: JitterMode,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            min_green_ratio: 0.20,
            jitter: JitterMode::Disabled,
        }
    }
}
