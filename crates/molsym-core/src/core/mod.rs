//! # Core Module
//!
//! Fundamental building blocks shared by the engine and by external collaborators.
//!
//! - **Molecular Representation** ([`models`]) - Nuclei, symmetry elements and the analysed molecule
//! - **Geometry and Elements** ([`utils`]) - The vector kernel and a periodic-table lookup
//! - **File I/O** ([`io`]) - Reading and writing nuclei in the XYZ format
//!
//! Nothing in this module performs symmetry detection; it only describes and moves data.

pub mod io;
pub mod models;
pub mod utils;
