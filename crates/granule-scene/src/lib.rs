//! # granule-scene
//!
//! Placed scene objects: static geometry and dynamic MPM bodies, each
//! binding a name, a shape, a surface, and (for bodies) a material.
//! Enforces the cross-field rules between object kind, material, and
//! render mode.

pub mod object;
pub mod surface;

pub use object::{MpmBody, StaticObject};
pub use surface::{Surface, SurfaceKind, VisMode};
