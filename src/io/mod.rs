//! Image input modules
//!
//! Decoding of uploaded byte streams into the RGB pixel buffers the
//! analysis pipeline operates on.

pub mod decoder;

pub use decoder::decode_image;
