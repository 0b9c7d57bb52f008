//! Scalar and vector type aliases for the validator.
//!
//! Validation arithmetic runs in `f64`: the configuration is built once
//! per generation cycle, so there is no GPU-compatibility pressure to
//! drop to `f32`, and the domain-fit geometry benefits from the extra
//! precision.

/// The floating-point type used throughout validation.
pub type Scalar = f64;

/// The canonical 3-vector (double precision, from `glam`).
pub type Vec3 = glam::DVec3;

/// An RGB color triple in `[0, 1]` per channel. Display-only.
pub type Color3 = [f32; 3];

/// Clamps `value` into `[lo, hi]`, logging a range-repair event when the
/// value actually changed.
///
/// Repairs are silent from the caller's perspective: they never fail and
/// are distinguishable from untouched fields only through the emitted
/// `tracing` event.
pub fn clamp_repair(field: &str, value: Scalar, lo: Scalar, hi: Scalar) -> Scalar {
    let clamped = value.clamp(lo, hi);
    if clamped != value {
        tracing::debug!(field, from = value, to = clamped, "range repair");
    }
    clamped
}

/// Integer counterpart of [`clamp_repair`].
pub fn clamp_repair_int(field: &str, value: i64, lo: i64, hi: i64) -> i64 {
    let clamped = value.clamp(lo, hi);
    if clamped != value {
        tracing::debug!(field, from = value, to = clamped, "range repair");
    }
    clamped
}
