//! # MolSym Core Library
//!
//! Detection of molecular point groups (Schoenflies symmetry) for rigid sets of nuclei, and
//! placement of the molecule in a canonical, symmetry-aligned orientation.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Nucleus`, `RotationSymmetry`,
//!   `ReflectionSymmetry`, `Molecule`), the vector kernel, and XYZ file I/O.
//!
//! - **[`engine`]: The Logic Core.** The detection stages: centering, brute-force rotation
//!   axis and mirror plane searches, the standard-orientation aligner, and the point-group
//!   classifier, together with configuration, errors and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Ties the stages together into a single call that
//!   takes nuclei and returns an analysed [`core::models::molecule::Molecule`].
//!
//! ## Example
//!
//! ```
//! use molsym::core::models::molecule::PointGroup;
//! use molsym::core::models::nucleus::Nucleus;
//! use molsym::engine::config::SymmetryConfig;
//! use molsym::engine::progress::ProgressReporter;
//! use molsym::workflows::detect;
//! use nalgebra::Vector3;
//!
//! let nuclei = vec![
//!     Nucleus::new("O", 8.0, Vector3::new(0.0, 0.0, 2.2)),
//!     Nucleus::new("C", 6.0, Vector3::new(0.0, 0.0, 0.0)),
//!     Nucleus::new("O", 8.0, Vector3::new(0.0, 0.0, -2.2)),
//! ];
//! let molecule = detect::run(nuclei, &SymmetryConfig::default(), &ProgressReporter::new())?;
//! assert_eq!(molecule.point_group(), Some(PointGroup::DInfH));
//! # Ok::<(), molsym::engine::error::EngineError>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
