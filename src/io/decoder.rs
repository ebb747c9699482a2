//! Image decoding using the `image` crate

use image::RgbImage;

use crate::error::AnalysisError;

/// Decode an uploaded byte stream into an RGB pixel buffer
///
/// Accepts any container format the `image` crate recognises (PNG, JPEG,
/// GIF, BMP, ...) and flattens it to 8-bit RGB. Alpha channels are dropped.
///
/// # Arguments
///
/// * `bytes` - Raw file contents as uploaded
///
/// # Errors
///
/// Returns `AnalysisError::InvalidImage` if the bytes cannot be decoded or
/// the decoded image has zero area.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage, AnalysisError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| AnalysisError::InvalidImage(e.to_string()))?;

    let rgb = decoded.to_rgb8();
    log::debug!("Decoded image: {}x{} pixels", rgb.width(), rgb.height());

    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(AnalysisError::InvalidImage(
            "decoded image has zero area".to_string(),
        ));
    }

    Ok(rgb)
}
