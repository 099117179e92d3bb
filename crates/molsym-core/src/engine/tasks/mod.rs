pub mod centering;
pub mod classification;
pub mod orientation;
pub mod reflection_search;
pub mod rotation_search;
