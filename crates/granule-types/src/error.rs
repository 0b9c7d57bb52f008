//! Error types for scene-configuration validation.
//!
//! Range repairs are not errors — they are applied silently and logged.
//! Everything that can actually fail a validation pass is one of the
//! variants below, and a pass fails as a whole: the caller either gets
//! the fully repaired configuration or a single `ConfigError`.

use thiserror::Error;

use crate::aabb::Aabb;

/// Unified error type for the Granule validator.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The raw payload could not be parsed into the typed model at all
    /// (wrong or missing discriminant, wrong value type). Raised before
    /// any clamping begins.
    #[error("malformed config: {0}")]
    Malformed(String),

    /// A required invariant that cannot be silently repaired.
    #[error("invalid `{field}`: {reason}")]
    Structural {
        /// The offending field, e.g. `mpm_bodies` or `static[floor].surface.vis_mode`.
        field: String,
        /// What was wrong with it, including the offending value.
        reason: String,
    },

    /// Dynamic bodies lie outside the effective simulation domain and
    /// auto-fit is disabled.
    #[error(
        "bodies lie outside the simulation domain\n  domain:    {raw}\n  effective: {effective}\n  bodies:    {bodies}\nenable auto-fit or enlarge the bounds in `mpm_options`"
    )]
    Domain {
        /// The configured (raw) domain.
        raw: Aabb,
        /// The domain after the resolution-dependent safety shrink.
        effective: Aabb,
        /// The union bounding box of all finite dynamic bodies.
        bodies: Aabb,
    },
}

/// Convenience alias for `Result<T, ConfigError>`.
pub type ConfigResult<T> = Result<T, ConfigError>;
