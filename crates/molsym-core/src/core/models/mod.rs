//! Value types describing a point set and its symmetry.
//!
//! - [`nucleus`] - A point mass with element identity, charge and coordinates
//! - [`symmetry`] - Rotation axes and mirror planes found by the searches
//! - [`molecule`] - The oriented, classified result of a detection run

pub mod molecule;
pub mod nucleus;
pub mod symmetry;
