//! Placed objects: static geometry and dynamic MPM bodies.
//!
//! Default render modes follow what each object physically is: static
//! geometry renders as a mesh, elastic bodies as a reconstructed
//! surface (visually a solid), and granular or fluid bodies as
//! particles. A static object explicitly asking for particle mode is a
//! misconfiguration, not something that can be repaired — there are no
//! particles to draw for unsimulated geometry.

use serde::{Deserialize, Serialize};

use granule_geometry::Morph;
use granule_material::Material;
use granule_types::{ConfigError, ConfigResult};

use crate::surface::{Surface, VisMode};

/// Placed geometry with no material, not subject to the solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticObject {
    /// Human-readable name, used in diagnostics.
    pub name: String,
    /// The placed shape.
    pub morph: Morph,
    /// Visual appearance.
    #[serde(default)]
    pub surface: Surface,
}

/// Placed geometry with a material, simulated by the solver each step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MpmBody {
    /// Human-readable name, used in diagnostics.
    pub name: String,
    /// The body's physical material.
    pub material: Material,
    /// The placed shape.
    pub morph: Morph,
    /// Visual appearance.
    #[serde(default)]
    pub surface: Surface,
}

impl StaticObject {
    /// Resolves the render mode: unset defaults to [`VisMode::Visual`];
    /// an explicit [`VisMode::Particle`] fails validation.
    pub fn resolve_surface(&mut self) -> ConfigResult<()> {
        match self.surface.vis_mode {
            None => {
                self.surface.vis_mode = Some(VisMode::Visual);
                Ok(())
            }
            Some(VisMode::Particle) => Err(ConfigError::Structural {
                field: format!("static[{}].surface.vis_mode", self.name),
                reason: "static objects have no particle representation; \
                         `particle` mode is not allowed"
                    .into(),
            }),
            Some(_) => Ok(()),
        }
    }
}

impl MpmBody {
    /// Resolves the render mode: unset defaults to [`VisMode::Recon`]
    /// for elastic materials and [`VisMode::Particle`] otherwise. Any
    /// explicit mode from the closed set is kept. Never fails.
    pub fn resolve_surface(&mut self) {
        if self.surface.vis_mode.is_none() {
            self.surface.vis_mode = Some(if self.material.is_elastic() {
                VisMode::Recon
            } else {
                VisMode::Particle
            });
        }
    }
}
