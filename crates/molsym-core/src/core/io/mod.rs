//! Provides input/output for point sets of nuclei.
//!
//! The symmetry engine itself never parses files or converts units. This module is the
//! collaborator that turns structure files into [`Nucleus`](crate::core::models::nucleus::Nucleus)
//! values in bohr and writes oriented geometries back out.

pub mod traits;
pub mod xyz;
