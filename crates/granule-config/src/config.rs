//! The top-level scene configuration aggregate.
//!
//! This is the boundary type the upstream generator (the LLM layer)
//! produces and the simulation-engine adapter consumes. It is
//! constructed once per generation cycle from untrusted data, repaired
//! and validated in a single pass, then handed off immutably.

use serde::{Deserialize, Deserializer, Serialize};

use granule_scene::{MpmBody, StaticObject};
use granule_types::{constants, ConfigError, ConfigResult};

use crate::options::{CaptureOptions, MpmOptions, SimOptions, ViewerOptions, VisOptions};

/// A complete scene configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Whether the desktop viewer should open. Explicit `null` in the
    /// payload means "not specified" and resolves to `true`.
    #[serde(deserialize_with = "null_to_true")]
    pub show_viewer: bool,

    /// Number of simulation steps to run.
    pub steps: i64,

    /// Cap on the number of dynamic bodies; excess bodies are dropped
    /// during validation.
    pub max_bodies: i64,

    /// Whether to dump per-body particle positions after the run.
    pub dump_particles: bool,

    /// Simulation stepping parameters.
    #[serde(deserialize_with = "null_to_default")]
    pub sim_options: SimOptions,

    /// Simulation domain and grid resolution.
    #[serde(deserialize_with = "null_to_default")]
    pub mpm_options: MpmOptions,

    /// Visualization options.
    #[serde(deserialize_with = "null_to_default")]
    pub vis_options: VisOptions,

    /// Desktop-viewer camera options.
    #[serde(deserialize_with = "null_to_default")]
    pub viewer_options: ViewerOptions,

    /// Static geometry, not simulated.
    #[serde(rename = "static", deserialize_with = "null_to_default")]
    pub static_objects: Vec<StaticObject>,

    /// Dynamic bodies, simulated by the solver.
    #[serde(deserialize_with = "null_to_default")]
    pub mpm_bodies: Vec<MpmBody>,

    /// Frame-capture options.
    #[serde(deserialize_with = "null_to_default")]
    pub capture: CaptureOptions,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            show_viewer: true,
            steps: constants::DEFAULT_STEPS,
            max_bodies: constants::DEFAULT_MAX_BODIES,
            dump_particles: false,
            sim_options: SimOptions::default(),
            mpm_options: MpmOptions::default(),
            vis_options: VisOptions::default(),
            viewer_options: ViewerOptions::default(),
            static_objects: Vec::new(),
            mpm_bodies: Vec::new(),
            capture: CaptureOptions::default(),
        }
    }
}

impl SceneConfig {
    /// Parses a raw JSON payload into the typed model.
    ///
    /// Fails with [`ConfigError::Malformed`] — before any clamping —
    /// when a discriminant is wrong or missing or a value has the wrong
    /// type. Unknown optional fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Serializes the configuration as pretty-printed JSON, in the same
    /// field structure the input payload uses.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Malformed(e.to_string()))
    }
}

// The upstream generator marks unspecified blocks either by omitting
// the key or by an explicit `null`; both fall back to the default.

fn null_to_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
