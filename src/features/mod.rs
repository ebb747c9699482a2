//! Feature extraction modules
//!
//! This module contains the symptom extraction stage of the pipeline:
//! - Per-pixel colour predicates
//! - Leaf-gate check (green-dominance ratio)
//! - Symptom ratio computation

pub mod symptoms;
