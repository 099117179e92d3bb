//! # Workflows Module
//!
//! High-level entry points that run complete procedures on a set of nuclei.
//!
//! - **Detection Workflow** ([`detect`]) - Centering, symmetry element searches, standard
//!   orientation and point-group classification in a single call.

pub mod detect;
