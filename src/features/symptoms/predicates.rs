//! Per-pixel colour predicates
//!
//! Each symptom is defined by a fixed colour-threshold predicate over an
//! 8-bit RGB pixel. The thresholds are part of the behavioural contract of
//! the engine and are deliberately not configurable.

use image::Rgb;

use super::Symptom;

/// Green-dominance factor: a pixel is green-dominant when its green channel
/// exceeds both red and blue by at least this factor.
pub const GREEN_DOMINANCE: f32 = 1.1;

/// Pixel is green-dominant: `G > R*1.1 && G > B*1.1`
///
/// This is both the `green` symptom predicate and the leaf-gate predicate.
pub fn is_green(pixel: &Rgb<u8>) -> bool {
    let [r, g, b] = pixel.0;
    let g = g as f32;
    g > r as f32 * GREEN_DOMINANCE && g > b as f32 * GREEN_DOMINANCE
}

/// Pixel is brown-toned: `R > 90 && G > 60 && B < 90`
pub fn is_brown_spot(pixel: &Rgb<u8>) -> bool {
    let [r, g, b] = pixel.0;
    r > 90 && g > 60 && b < 90
}

/// Pixel is yellow-toned: `R > 150 && G > 150 && B < 100`
pub fn is_yellowing(pixel: &Rgb<u8>) -> bool {
    let [r, g, b] = pixel.0;
    r > 150 && g > 150 && b < 100
}

/// Pixel is near-white: `R > 200 && G > 200 && B > 200`
pub fn is_white_dust(pixel: &Rgb<u8>) -> bool {
    let [r, g, b] = pixel.0;
    r > 200 && g > 200 && b > 200
}

/// Pixel is rust-orange: `R > 150 && G > 80 && B < 80`
pub fn is_rusty_spot(pixel: &Rgb<u8>) -> bool {
    let [r, g, b] = pixel.0;
    r > 150 && g > 80 && b < 80
}

/// Evaluate the predicate for one symptom
pub fn matches(symptom: Symptom, pixel: &Rgb<u8>) -> bool {
    match symptom {
        Symptom::Green => is_green(pixel),
        Symptom::BrownSpots => is_brown_spot(pixel),
        Symptom::Yellowing => is_yellowing(pixel),
        Symptom::WhiteDust => is_white_dust(pixel),
        Symptom::RustySpots => is_rusty_spot(pixel),
    }
}
