//! Shape variants and their bounding boxes.
//!
//! The variant set is small and fixed; dispatch is exhaustive matching.
//! A plane is an unbounded half-space and therefore has no finite box.

use serde::{Deserialize, Serialize};

use granule_types::{Aabb, Scalar, Vec3};

/// A placed shape, tagged by `type` in the JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Morph {
    /// An unbounded half-space, typically the ground.
    Plane,

    /// An axis-aligned box given by its center and full extents.
    Box {
        /// Center position.
        pos: Vec3,
        /// Full edge length per axis.
        size: Vec3,
    },

    /// A sphere given by its center and radius.
    Sphere {
        /// Center position.
        pos: Vec3,
        /// Radius. Only the magnitude is meaningful; negative input is
        /// normalized by absolute value.
        radius: Scalar,
    },
}

impl Morph {
    /// Finite bounding box of the shape, or `None` for unbounded shapes.
    ///
    /// Never fails: degenerate inputs (zero size, zero radius) yield a
    /// degenerate but valid box.
    pub fn aabb(&self) -> Option<Aabb> {
        match self {
            Morph::Plane => None,
            Morph::Box { pos, size } => {
                Some(Aabb::from_center_half_extents(*pos, *size * 0.5))
            }
            Morph::Sphere { pos, radius } => {
                let r = radius.abs();
                Some(Aabb::from_center_half_extents(*pos, Vec3::splat(r)))
            }
        }
    }

    /// Whether the shape has no finite bounding box.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Morph::Plane)
    }

    /// The JSON discriminant of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Morph::Plane => "Plane",
            Morph::Box { .. } => "Box",
            Morph::Sphere { .. } => "Sphere",
        }
    }
}
