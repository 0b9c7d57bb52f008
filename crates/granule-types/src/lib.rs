//! # granule-types
//!
//! Shared types, error vocabulary, and physical constants for the
//! Granule scene-configuration validator.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Granule crates share.

pub mod aabb;
pub mod constants;
pub mod error;
pub mod scalar;

pub use aabb::Aabb;
pub use error::{ConfigError, ConfigResult};
pub use scalar::{clamp_repair, clamp_repair_int, Color3, Scalar, Vec3};
