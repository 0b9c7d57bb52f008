//! # granule-geometry
//!
//! Shape (morph) variants for placed scene objects and their
//! axis-aligned bounding boxes.

pub mod morph;

pub use morph::Morph;
