//! The configuration validation pipeline.
//!
//! Stages run once, in a fixed order, each only if the previous one
//! succeeded:
//!
//! 1. Field clamping — every numeric block repaired into range; never
//!    rejects.
//! 2. Structural checks — step-count positivity, minimum body count,
//!    body cap, render-mode resolution; may reject.
//! 3. Domain corner ordering — auto-swapped per axis; never rejects.
//! 4. Domain consistency and auto-fit — may grow the domain, or reject
//!    when auto-fit is disabled.
//!
//! The outcome is all-or-nothing: the fully repaired configuration, or
//! a single [`ConfigError`].

use granule_types::{Aabb, ConfigError, ConfigResult, Scalar, Vec3};

use crate::config::SceneConfig;

/// Knobs for a validation pass.
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Grow the domain around out-of-bounds bodies instead of
    /// rejecting the configuration.
    pub auto_fit: bool,
    /// Fraction of the bodies' bounding-box diagonal kept as clearance
    /// when the domain grows.
    pub pad_frac: Scalar,
    /// Minimum number of dynamic bodies a scene must contain.
    pub min_bodies: usize,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            auto_fit: true,
            pad_frac: granule_types::constants::DEFAULT_PAD_FRAC,
            min_bodies: 1,
        }
    }
}

/// Runs the full validation pipeline on `cfg`.
///
/// Consumes the configuration and returns the repaired one; on failure
/// the whole pass fails with a single structured error.
pub fn validate(mut cfg: SceneConfig, opts: &ValidateOptions) -> ConfigResult<SceneConfig> {
    clamp_fields(&mut cfg);
    check_structure(&mut cfg, opts)?;
    cfg.mpm_options.order_bounds();
    fit_domain(&mut cfg, opts)?;
    Ok(cfg)
}

/// Parses and validates a raw JSON payload in one call.
pub fn validate_json_str(json: &str, opts: &ValidateOptions) -> ConfigResult<SceneConfig> {
    validate(SceneConfig::from_json_str(json)?, opts)
}

/// Stage 1: per-field clamping. Repairs only, never rejects.
fn clamp_fields(cfg: &mut SceneConfig) {
    cfg.max_bodies = granule_types::clamp_repair_int("max_bodies", cfg.max_bodies, 1, i64::MAX);
    cfg.sim_options.clamp();
    cfg.mpm_options.clamp();
    cfg.viewer_options.clamp();
    cfg.capture.clamp();
    for body in &mut cfg.mpm_bodies {
        body.material = body.material.clamped();
    }
}

/// Stage 2: structural checks. A non-positive step count or a body
/// count below the minimum rejects; bodies beyond the cap are dropped
/// (a repair); render modes are resolved, which can reject for static
/// objects.
fn check_structure(cfg: &mut SceneConfig, opts: &ValidateOptions) -> ConfigResult<()> {
    if cfg.steps < 1 {
        return Err(ConfigError::Structural {
            field: "steps".into(),
            reason: format!("step count {} is not positive", cfg.steps),
        });
    }

    if cfg.mpm_bodies.len() < opts.min_bodies {
        return Err(ConfigError::Structural {
            field: "mpm_bodies".into(),
            reason: format!(
                "{} dynamic bodies present, at least {} required",
                cfg.mpm_bodies.len(),
                opts.min_bodies
            ),
        });
    }

    let cap = cfg.max_bodies as usize;
    if cfg.mpm_bodies.len() > cap {
        tracing::debug!(
            field = "mpm_bodies",
            from = cfg.mpm_bodies.len(),
            to = cap,
            "excess bodies dropped"
        );
        cfg.mpm_bodies.truncate(cap);
    }

    for obj in &mut cfg.static_objects {
        obj.resolve_surface()?;
    }
    for body in &mut cfg.mpm_bodies {
        body.resolve_surface();
    }
    Ok(())
}

/// Stage 4: domain consistency and auto-fit.
///
/// Grid cells near the walls are unreliable, so a body must keep
/// roughly two cell-widths of clearance from every wall: the raw domain
/// is shrunk inward by `2 * max_extent / grid_density` before the
/// containment test. The largest extent is applied uniformly on all
/// three axes, matching the engine's own behavior even for anisotropic
/// domains.
///
/// When growth is needed, the padding is the larger of the configured
/// fraction of the bodies' diagonal and
/// `2 * max_extent(domain ∪ bodies) / (grid_density - 4)`. The second
/// term bounds the safety margin of the *grown* domain as well as the
/// raw one (the grown extent is at most the union extent plus twice the
/// padding), so a single growth pass reaches a fixed point:
/// re-validating the result never moves the corners again.
fn fit_domain(cfg: &mut SceneConfig, opts: &ValidateOptions) -> ConfigResult<()> {
    let bodies = cfg
        .mpm_bodies
        .iter()
        .fold(None, |acc, b| Aabb::union_opt(acc, b.morph.aabb()));

    // Unbounded shapes never constrain the domain; a scene with no
    // finite body box is vacuously contained.
    let Some(bodies) = bodies else {
        return Ok(());
    };

    let raw = Aabb {
        min: cfg.mpm_options.lower_bound,
        max: cfg.mpm_options.upper_bound,
    };
    let resolution = cfg.mpm_options.grid_density.max(1) as Scalar;
    let margin = 2.0 * raw.max_extent() / resolution;
    let effective = raw.shrink(margin);

    if effective.contains_aabb(&bodies) {
        return Ok(());
    }

    if !opts.auto_fit {
        return Err(ConfigError::Domain {
            raw,
            effective,
            bodies,
        });
    }

    let union = raw.union(&bodies);
    let fixed_point_floor = 2.0 * union.max_extent() / (resolution - 4.0).max(1.0);
    let pad = (opts.pad_frac * bodies.diagonal()).max(fixed_point_floor);

    let lower = raw.min.min(bodies.min - Vec3::splat(pad));
    let upper = raw.max.max(bodies.max + Vec3::splat(pad));
    tracing::info!(
        old = %raw,
        new = %Aabb { min: lower, max: upper },
        pad,
        "domain grown to fit bodies"
    );
    cfg.mpm_options.lower_bound = lower;
    cfg.mpm_options.upper_bound = upper;
    Ok(())
}
