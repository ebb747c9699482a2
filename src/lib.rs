//! # Leafscan
//!
//! A heuristic leaf-disease analysis engine: colour-threshold symptom
//! extraction over an RGB pixel buffer, followed by profile matching against
//! a read-only disease library.
//!
//! ## Features
//!
//! - **Leaf gate**: green-dominance check that rejects non-foliage images
//!   before any matching happens
//! - **Symptom extraction**: five fixed colour predicates turned into
//!   per-image ratios
//! - **Disease matching**: asymmetric L1 distance against partial reference
//!   vectors, with a stable library-order tie-break
//! - **Confidence scoring**: deterministic baseline with an optional,
//!   injectable jitter term
//!
//! ## Quick Start
//!
//! ```no_run
//! use leafscan::{classify, ClassifyConfig, DiseaseLibrary};
//!
//! let bytes = std::fs::read("leaf.jpg")?;
//! let image = leafscan::io::decode_image(&bytes)?;
//!
//! let library = DiseaseLibrary::builtin();
//! let result = classify(&image, &library, &ClassifyConfig::default())?;
//!
//! println!("{}: {:.2}% — {}", result.disease, result.confidence, result.treatment);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! The pipeline is a pure, synchronous computation:
//!
//! ```text
//! Image Bytes → Decode → Leaf Gate → Symptom Extraction → Matching → Result
//! ```
//!
//! Each request runs start to finish with no retries and no shared mutable
//! state; the library may be shared read-only across threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod matching;

// Re-export main types
pub use analysis::jitter::{JitterSource, NoJitter, UniformJitter};
pub use analysis::result::{ClassificationMetadata, ClassificationResult};
pub use config::{ClassifyConfig, JitterMode};
pub use error::AnalysisError;
pub use features::symptoms::{Symptom, SymptomVector};
pub use matching::{DiseaseLibrary, DiseaseProfile};

use image::RgbImage;

/// Algorithm version recorded in result metadata
pub const ALGORITHM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Classify a decoded image against a disease library
///
/// Runs the full pipeline: leaf gate, symptom extraction, disease matching,
/// confidence scoring. With `JitterMode::Disabled` (the default) the result
/// is fully deterministic for a given buffer and library; with
/// `JitterMode::Uniform` each call draws an independent jitter value from a
/// thread-local RNG.
///
/// # Arguments
///
/// * `image` - Decoded RGB pixel buffer
/// * `library` - Disease profiles, shared read-only
/// * `config` - Classification configuration
///
/// # Errors
///
/// * `AnalysisError::InvalidImage` for a zero-area buffer
/// * `AnalysisError::NotALeaf` when the leaf gate rejects the image
/// * `AnalysisError::EmptyLibrary` when the library holds no profiles
///
/// # Example
///
/// ```
/// use leafscan::{classify, ClassifyConfig, DiseaseLibrary};
/// use image::{Rgb, RgbImage};
///
/// let image = RgbImage::from_pixel(16, 16, Rgb([20, 180, 40]));
/// let library = DiseaseLibrary::builtin();
/// let result = classify(&image, &library, &ClassifyConfig::default())?;
///
/// assert_eq!(result.disease, "Healthy");
/// # Ok::<(), leafscan::AnalysisError>(())
/// ```
pub fn classify(
    image: &RgbImage,
    library: &DiseaseLibrary,
    config: &ClassifyConfig,
) -> Result<ClassificationResult, AnalysisError> {
    match config.jitter {
        JitterMode::Disabled => classify_with_jitter(image, library, config, &mut NoJitter),
        JitterMode::Uniform => {
            let mut jitter = UniformJitter::new(rand::thread_rng());
            classify_with_jitter(image, library, config, &mut jitter)
        }
    }
}

/// Classify with an explicit jitter source
///
/// Same pipeline as [`classify`], but the confidence jitter term is drawn
/// from the supplied source regardless of `config.jitter`. Pass
/// [`NoJitter`] for the deterministic baseline or a seeded
/// [`UniformJitter`] for reproducible jittered runs.
pub fn classify_with_jitter(
    image: &RgbImage,
    library: &DiseaseLibrary,
    config: &ClassifyConfig,
    jitter: &mut dyn JitterSource,
) -> Result<ClassificationResult, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Classifying {}x{} image against {} profiles",
        image.width(),
        image.height(),
        library.len()
    );

    // An empty library is a configuration error; fail before touching pixels.
    if library.is_empty() {
        return Err(AnalysisError::EmptyLibrary);
    }

    let (symptoms, green_ratio) = features::symptoms::extract_symptoms(image, config)?;
    let outcome = matching::match_disease(&symptoms, library)?;

    let baseline = analysis::confidence::score_confidence(outcome.error);
    let confidence = analysis::confidence::round_confidence(baseline + jitter.draw());

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;
    log::info!(
        "Classified as '{}' (confidence {:.2}, error {:.4}) in {:.2} ms",
        outcome.profile.name,
        confidence,
        outcome.error,
        processing_time_ms
    );

    Ok(ClassificationResult {
        disease: outcome.profile.name.clone(),
        confidence,
        treatment: outcome.profile.treatment.clone(),
        symptoms,
        ranking: outcome.ranking,
        metadata: ClassificationMetadata {
            width: image.width(),
            height: image.height(),
            pixel_count: image.width() as u64 * image.height() as u64,
            green_ratio,
            match_error: outcome.error,
            processing_time_ms,
            algorithm_version: ALGORITHM_VERSION.to_string(),
        },
    })
}

/// Decode an uploaded byte stream and classify it
///
/// Convenience front door for callers holding raw upload bytes rather than
/// a decoded buffer.
///
/// # Errors
///
/// `AnalysisError::InvalidImage` if the bytes cannot be decoded, plus any
/// error [`classify`] can return.
pub fn classify_bytes(
    bytes: &[u8],
    library: &DiseaseLibrary,
    config: &ClassifyConfig,
) -> Result<ClassificationResult, AnalysisError> {
    let image = io::decode_image(bytes)?;
    classify(&image, library, config)
}
