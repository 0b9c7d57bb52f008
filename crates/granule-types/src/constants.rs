//! Default values and clamp intervals for scene configurations.
//!
//! Intervals bracket the engine's own material and solver defaults;
//! anything the generator emits outside them is silently clamped.

use crate::scalar::Scalar;

// ─── Simulation stepping ──────────────────────────────────────

/// Default timestep (seconds).
pub const DEFAULT_DT: Scalar = 1e-3;

/// Smallest accepted timestep (seconds).
pub const MIN_DT: Scalar = 1e-6;

/// Largest accepted timestep (seconds).
pub const MAX_DT: Scalar = 0.1;

/// Default number of solver substeps per step.
pub const DEFAULT_SUBSTEPS: i64 = 10;

/// Largest accepted substep count.
pub const MAX_SUBSTEPS: i64 = 100;

/// Default gravity vector (m/s²), z-up.
pub const DEFAULT_GRAVITY: [Scalar; 3] = [0.0, 0.0, -9.81];

/// Largest accepted gravity magnitude (m/s²). Oversized vectors are
/// rescaled, preserving direction.
pub const MAX_GRAVITY: Scalar = 50.0;

// ─── Simulation domain ────────────────────────────────────────

/// Default lower corner of the simulation domain.
pub const DEFAULT_LOWER_BOUND: [Scalar; 3] = [-1.0, -1.0, 0.0];

/// Default upper corner of the simulation domain.
pub const DEFAULT_UPPER_BOUND: [Scalar; 3] = [1.0, 1.0, 1.5];

/// Default grid resolution (cells along the longest axis).
pub const DEFAULT_GRID_DENSITY: i64 = 64;

/// Smallest accepted grid resolution.
pub const MIN_GRID_DENSITY: i64 = 8;

/// Largest accepted grid resolution.
pub const MAX_GRID_DENSITY: i64 = 512;

/// Default padding fraction for domain auto-fit: the grown domain keeps
/// at least this fraction of the bodies' bounding-box diagonal as
/// clearance on every violated side.
pub const DEFAULT_PAD_FRAC: Scalar = 0.15;

// ─── Materials ────────────────────────────────────────────────

/// Accepted density interval (kg/m³), all material kinds.
pub const MIN_DENSITY: Scalar = 100.0;
/// See [`MIN_DENSITY`].
pub const MAX_DENSITY: Scalar = 10_000.0;

/// Accepted Young's modulus interval (Pa), elastic materials.
pub const MIN_YOUNG_MODULUS: Scalar = 1e3;
/// See [`MIN_YOUNG_MODULUS`].
pub const MAX_YOUNG_MODULUS: Scalar = 1e9;

/// Accepted Poisson ratio interval. The upper end stays strictly below
/// the incompressible limit of 0.5.
pub const MIN_POISSON_RATIO: Scalar = 0.0;
/// See [`MIN_POISSON_RATIO`].
pub const MAX_POISSON_RATIO: Scalar = 0.49;

/// Default density for snow (kg/m³).
pub const DEFAULT_SNOW_RHO: Scalar = 400.0;
/// Default density for sand (kg/m³).
pub const DEFAULT_SAND_RHO: Scalar = 1600.0;
/// Default density for liquids (kg/m³).
pub const DEFAULT_LIQUID_RHO: Scalar = 1000.0;

// ─── Scene scalars ────────────────────────────────────────────

/// Default step count for a run.
pub const DEFAULT_STEPS: i64 = 600;

/// Default cap on the number of dynamic bodies.
pub const DEFAULT_MAX_BODIES: i64 = 8;

// ─── Viewer / capture ─────────────────────────────────────────

/// Default camera field of view (degrees).
pub const DEFAULT_CAMERA_FOV: Scalar = 35.0;
/// Smallest accepted camera field of view (degrees).
pub const MIN_CAMERA_FOV: Scalar = 10.0;
/// Largest accepted camera field of view (degrees).
pub const MAX_CAMERA_FOV: Scalar = 120.0;

/// Default camera position.
pub const DEFAULT_CAMERA_POS: [Scalar; 3] = [2.0, -2.0, 1.5];
/// Default camera look-at point.
pub const DEFAULT_CAMERA_LOOKAT: [Scalar; 3] = [0.0, 0.0, 0.5];

/// Default background color.
pub const DEFAULT_BACKGROUND_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Default frame-capture interval (steps).
pub const DEFAULT_CAPTURE_EVERY: i64 = 10;
