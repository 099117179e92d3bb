//! Stateless helpers shared across the library: the vector kernel used by every symmetry
//! search and a periodic-table lookup used by file readers.

pub mod elements;
pub mod geometry;
