//! # Engine Module
//!
//! This module implements the symmetry detection engine: the individual search and
//! transformation stages that take a raw set of nuclei to an oriented, classified molecule.
//!
//! ## Overview
//!
//! Each stage is a stateless task operating on plain slices of nuclei and symmetry elements.
//! Candidate transforms are always validated against an immutable snapshot of the point set,
//! so validations are independent of each other and can run in parallel (enable the
//! `parallel` feature to use the rayon thread pool).
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Tolerance and maximum rotational order
//! - **Error Handling** ([`error`]) - Structural input and configuration errors
//! - **Progress Monitoring** ([`progress`]) - Stage and search events for front-ends
//! - **Tasks** ([`tasks`]) - Centering, rotation search, reflection search, standard
//!   orientation and point-group classification
//!
//! ## Scaling
//!
//! Candidate generation enumerates every triple of nucleus directions and is therefore
//! cubic in the number of nuclei. The engine targets small molecules (tens of atoms).

pub mod config;
pub mod error;
pub mod progress;
pub mod tasks;
pub(crate) mod utils;
