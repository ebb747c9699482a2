//! Analysis and result aggregation modules
//!
//! Combines the matching outcome into the final classification:
//! - Confidence scoring
//! - Confidence jitter sources
//! - Result types

pub mod confidence;
pub mod jitter;
pub mod result;
