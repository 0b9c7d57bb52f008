//! Axis-aligned bounding boxes.
//!
//! The domain-fit algorithm works entirely on AABBs: per-shape boxes,
//! their union over all dynamic bodies, and the safety-shrunk domain.
//! An unbounded shape has no box at all; [`Aabb::union_opt`] propagates
//! that absence through unions without losing the finite side.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scalar::{Scalar, Vec3};

/// An axis-aligned bounding box given by its two extreme corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from two arbitrary opposite corners, reordering
    /// them per axis so that `min <= max` holds.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a box from a center and per-axis half extents.
    ///
    /// Half extents are taken by magnitude; a zero half extent yields a
    /// degenerate but valid box.
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        let half = half.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Union over optional boxes: `None` denotes an unbounded shape and
    /// never constrains the result — the finite side wins.
    pub fn union_opt(a: Option<Aabb>, b: Option<Aabb>) -> Option<Aabb> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.union(&b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }

    /// Whether `other` lies entirely inside `self`, boundary included.
    pub fn contains_aabb(&self, other: &Aabb) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.min.z <= other.min.z
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
            && self.max.z >= other.max.z
    }

    /// Per-axis edge lengths.
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Length of the longest edge.
    pub fn max_extent(&self) -> Scalar {
        self.extents().max_element()
    }

    /// Euclidean distance between the two corners.
    pub fn diagonal(&self) -> Scalar {
        self.extents().length()
    }

    /// The box moved inward by `margin` on every face.
    ///
    /// May invert (min > max) when the margin exceeds half an extent;
    /// an inverted box contains nothing, which is the correct outcome
    /// for a domain too small to hold any body safely.
    pub fn shrink(&self, margin: Scalar) -> Aabb {
        Aabb {
            min: self.min + Vec3::splat(margin),
            max: self.max - Vec3::splat(margin),
        }
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.4}, {:.4}, {:.4}] .. [{:.4}, {:.4}, {:.4}]",
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z
        )
    }
}
