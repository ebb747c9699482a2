//! Symptom ratio extraction and the leaf gate
//!
//! A single pass over the pixel buffer counts matches for all five symptom
//! predicates. Before any ratios are reported, the green-dominance ratio is
//! checked against the configured leaf-gate threshold: images that do not
//! look like foliage are rejected outright rather than classified with a
//! reduced confidence.

use image::RgbImage;

use super::predicates;
use super::SymptomVector;
use crate::config::ClassifyConfig;
use crate::error::AnalysisError;

/// Fraction of pixels that are green-dominant
///
/// Returns 0.0 for an empty buffer; callers that need to distinguish an
/// empty buffer from a non-green one should use [`extract_symptoms`].
pub fn green_ratio(image: &RgbImage) -> f32 {
    let total = image.width() as u64 * image.height() as u64;
    if total == 0 {
        return 0.0;
    }
    let green = image.pixels().filter(|p| predicates::is_green(p)).count();
    green as f32 / total as f32
}

/// Extract the symptom vector from a pixel buffer
///
/// Computes all five symptom ratios over the entire buffer, gating first on
/// the green-dominance ratio. The gate is a hard rejection, not a soft
/// penalty: a buffer that fails it never reaches the matching stage.
///
/// # Arguments
///
/// * `image` - Decoded RGB pixel buffer
/// * `config` - Classification configuration (leaf-gate threshold)
///
/// # Returns
///
/// The symptom vector together with the measured green ratio (reported in
/// result metadata even though it equals the `green` symptom ratio).
///
/// # Errors
///
/// * `AnalysisError::InvalidImage` if the buffer has zero area
/// * `AnalysisError::NotALeaf` if the green ratio is below the gate threshold
pub fn extract_symptoms(
    image: &RgbImage,
    config: &ClassifyConfig,
) -> Result<(SymptomVector, f32), AnalysisError> {
    let total = image.width() as u64 * image.height() as u64;
    if total == 0 {
        return Err(AnalysisError::InvalidImage(
            "empty pixel buffer".to_string(),
        ));
    }

    // One pass, independent counters per predicate. Predicates overlap, so
    // each pixel is tested against all five.
    let mut green = 0u64;
    let mut brown = 0u64;
    let mut yellow = 0u64;
    let mut white = 0u64;
    let mut rusty = 0u64;

    for pixel in image.pixels() {
        if predicates::is_green(pixel) {
            green += 1;
        }
        if predicates::is_brown_spot(pixel) {
            brown += 1;
        }
        if predicates::is_yellowing(pixel) {
            yellow += 1;
        }
        if predicates::is_white_dust(pixel) {
            white += 1;
        }
        if predicates::is_rusty_spot(pixel) {
            rusty += 1;
        }
    }

    let green_ratio = green as f32 / total as f32;
    if green_ratio < config.min_green_ratio {
        log::debug!(
            "Leaf gate rejected image: green ratio {:.3} < {:.3}",
            green_ratio,
            config.min_green_ratio
        );
        return Err(AnalysisError::NotALeaf { green_ratio });
    }

    let symptoms = SymptomVector {
        green: green_ratio,
        brown_spots: brown as f32 / total as f32,
        yellowing: yellow as f32 / total as f32,
        white_dust: white as f32 / total as f32,
        rusty_spots: rusty as f32 / total as f32,
    };

    log::debug!(
        "Extracted symptoms from {}x{} image: green={:.3} brown={:.3} yellow={:.3} white={:.3} rusty={:.3}",
        image.width(),
        image.height(),
        symptoms.green,
        symptoms.brown_spots,
        symptoms.yellowing,
        symptoms.white_dust,
        symptoms.rusty_spots
    );

    Ok((symptoms, green_ratio))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    /// Build an image where the first `counts` pixels (row-major) take the
    /// given colours and the remainder are black.
    fn image_with(width: u32, height: u32, fills: &[(Rgb<u8>, u32)]) -> RgbImage {
        let mut image = RgbImage::from_pixel(width, height, Rgb([0, 0, 0]));
        let mut idx = 0u32;
        for &(color, count) in fills {
            for _ in 0..count {
                let (x, y) = (idx % width, idx / width);
                image.put_pixel(x, y, color);
                idx += 1;
            }
        }
        image
    }

    const GREEN: Rgb<u8> = Rgb([20, 180, 40]);
    const WHITE: Rgb<u8> = Rgb([210, 210, 210]);

    #[test]
    fn test_gate_rejects_below_threshold() {
        // 19 of 100 pixels green: just under the 0.20 gate
        let image = image_with(10, 10, &[(GREEN, 19)]);
        let result = extract_symptoms(&image, &ClassifyConfig::default());
        match result {
            Err(AnalysisError::NotALeaf { green_ratio }) => {
                assert!((green_ratio - 0.19).abs() < 1e-6);
            }
            other => panic!("expected NotALeaf, got {:?}", other),
        }
    }

    #[test]
    fn test_gate_passes_at_threshold() {
        // Exactly 0.20 is not below the gate
        let image = image_with(10, 10, &[(GREEN, 20)]);
        let (symptoms, ratio) = extract_symptoms(&image, &ClassifyConfig::default()).unwrap();
        assert!((ratio - 0.20).abs() < 1e-6);
        assert!((symptoms.green - 0.20).abs() < 1e-6);
    }

    #[test]
    fn test_ratios_bounded_and_complete() {
        let image = image_with(
            10,
            10,
            &[(GREEN, 40), (WHITE, 25), (Rgb([120, 70, 50]), 10)],
        );
        let (symptoms, _) = extract_symptoms(&image, &ClassifyConfig::default()).unwrap();
        for (_, ratio) in symptoms.iter() {
            assert!((0.0..=1.0).contains(&ratio));
        }
        assert!((symptoms.white_dust - 0.25).abs() < 1e-6);
        assert!((symptoms.brown_spots - 0.10).abs() < 1e-6);
        // Unmatched symptoms are present with ratio zero
        assert_eq!(symptoms.yellowing, 0.0);
        assert_eq!(symptoms.rusty_spots, 0.0);
    }

    #[test]
    fn test_all_green_image() {
        let image = RgbImage::from_pixel(8, 8, GREEN);
        let (symptoms, ratio) = extract_symptoms(&image, &ClassifyConfig::default()).unwrap();
        assert_eq!(ratio, 1.0);
        assert_eq!(symptoms.green, 1.0);
        assert_eq!(symptoms.white_dust, 0.0);
    }

    #[test]
    fn test_green_ratio_empty_buffer() {
        let image = RgbImage::new(0, 0);
        assert_eq!(green_ratio(&image), 0.0);
        let result = extract_symptoms(&image, &ClassifyConfig::default());
        assert!(matches!(result, Err(AnalysisError::InvalidImage(_))));
    }
}
