//! # granule-material
//!
//! Physical material variants for dynamic bodies, with silent
//! range-clamping of every numeric parameter.

pub mod material;

pub use material::{ElasticModel, Material};
