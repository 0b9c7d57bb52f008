//! Grouped numeric option blocks and their clamping rules.
//!
//! Every block exposes `clamp`, which repairs out-of-range values in
//! place. Clamping never fails; each actual repair emits a `tracing`
//! event through the shared helpers.

use serde::{Deserialize, Serialize};

use granule_types::{clamp_repair, clamp_repair_int, constants, Color3, Scalar, Vec3};

/// Simulation stepping parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimOptions {
    /// Timestep (seconds).
    pub dt: Scalar,
    /// Solver substeps per step.
    pub substeps: i64,
    /// Gravity vector (m/s²).
    pub gravity: Vec3,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: constants::DEFAULT_DT,
            substeps: constants::DEFAULT_SUBSTEPS,
            gravity: Vec3::from_array(constants::DEFAULT_GRAVITY),
        }
    }
}

impl SimOptions {
    /// Clamps all fields into their safe ranges.
    ///
    /// Gravity is clamped by magnitude, rescaling the vector so its
    /// direction is preserved — clamping components independently would
    /// tilt it.
    pub fn clamp(&mut self) {
        self.dt = clamp_repair("sim_options.dt", self.dt, constants::MIN_DT, constants::MAX_DT);
        self.substeps = clamp_repair_int(
            "sim_options.substeps",
            self.substeps,
            1,
            constants::MAX_SUBSTEPS,
        );
        let magnitude = self.gravity.length();
        if magnitude > constants::MAX_GRAVITY {
            let rescaled = self.gravity * (constants::MAX_GRAVITY / magnitude);
            tracing::debug!(
                field = "sim_options.gravity",
                from = magnitude,
                to = constants::MAX_GRAVITY,
                "gravity magnitude rescaled"
            );
            self.gravity = rescaled;
        }
    }
}

/// The simulation's finite domain and grid resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MpmOptions {
    /// Lower corner of the domain.
    pub lower_bound: Vec3,
    /// Upper corner of the domain.
    pub upper_bound: Vec3,
    /// Grid resolution (cells along the longest axis).
    pub grid_density: i64,
}

impl Default for MpmOptions {
    fn default() -> Self {
        Self {
            lower_bound: Vec3::from_array(constants::DEFAULT_LOWER_BOUND),
            upper_bound: Vec3::from_array(constants::DEFAULT_UPPER_BOUND),
            grid_density: constants::DEFAULT_GRID_DENSITY,
        }
    }
}

impl MpmOptions {
    /// Clamps the grid resolution into its bounded range.
    pub fn clamp(&mut self) {
        self.grid_density = clamp_repair_int(
            "mpm_options.grid_density",
            self.grid_density,
            constants::MIN_GRID_DENSITY,
            constants::MAX_GRID_DENSITY,
        );
    }

    /// Restores the lower-strictly-below-upper corner ordering by
    /// swapping per axis where violated. A repair, not a rejection.
    pub fn order_bounds(&mut self) {
        let lo = self.lower_bound.min(self.upper_bound);
        let hi = self.lower_bound.max(self.upper_bound);
        if lo != self.lower_bound || hi != self.upper_bound {
            tracing::debug!(
                field = "mpm_options.lower_bound/upper_bound",
                "domain corners reordered"
            );
        }
        self.lower_bound = lo;
        self.upper_bound = hi;
    }
}

/// Visualization options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisOptions {
    /// Background color, RGB in `[0, 1]`.
    pub background_color: Color3,
    /// Whether to draw the domain boundary.
    pub visualize_mpm_boundary: bool,
}

impl Default for VisOptions {
    fn default() -> Self {
        Self {
            background_color: constants::DEFAULT_BACKGROUND_COLOR,
            visualize_mpm_boundary: true,
        }
    }
}

/// Desktop-viewer camera options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Camera field of view (degrees).
    pub camera_fov: Scalar,
    /// Camera position.
    pub camera_pos: Vec3,
    /// Camera look-at point.
    pub camera_lookat: Vec3,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            camera_fov: constants::DEFAULT_CAMERA_FOV,
            camera_pos: Vec3::from_array(constants::DEFAULT_CAMERA_POS),
            camera_lookat: Vec3::from_array(constants::DEFAULT_CAMERA_LOOKAT),
        }
    }
}

impl ViewerOptions {
    /// Clamps the field of view into its safe range.
    pub fn clamp(&mut self) {
        self.camera_fov = clamp_repair(
            "viewer_options.camera_fov",
            self.camera_fov,
            constants::MIN_CAMERA_FOV,
            constants::MAX_CAMERA_FOV,
        );
    }
}

/// Frame-capture options. Capture is off unless a directory is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureOptions {
    /// Output directory for captured frames. `None` disables capture.
    pub dir: Option<String>,
    /// Capture every n-th step.
    pub every: i64,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            dir: None,
            every: constants::DEFAULT_CAPTURE_EVERY,
        }
    }
}

impl CaptureOptions {
    /// Clamps the capture interval to at least one step.
    pub fn clamp(&mut self) {
        self.every = clamp_repair_int("capture.every", self.every, 1, i64::MAX);
    }
}
