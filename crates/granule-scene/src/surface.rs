//! Visual surface description of a placed object.
//!
//! Rendering mode is independent of physics; it may be left unset in
//! the payload, in which case the right default depends on what kind of
//! object carries the surface and is resolved during validation, never
//! here.

use serde::{Deserialize, Serialize};

use granule_types::Color3;

/// The closed set of render modes the engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisMode {
    /// Mesh-style rendering of the shape itself.
    Visual,
    /// Collision geometry only.
    Collision,
    /// Raw particle rendering.
    Particle,
    /// Implicit-surface rendering.
    Sdf,
    /// Reconstructed surface from particles.
    Recon,
}

impl VisMode {
    /// The JSON name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            VisMode::Visual => "visual",
            VisMode::Collision => "collision",
            VisMode::Particle => "particle",
            VisMode::Sdf => "sdf",
            VisMode::Recon => "recon",
        }
    }
}

/// Surface type discriminant. The engine only has one surface family
/// today; the tag is kept so the payload shape stays stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// The default surface family.
    #[default]
    Default,
}

/// Visual appearance of a placed object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Surface {
    /// Surface family tag (`"Default"`).
    #[serde(rename = "type")]
    pub kind: SurfaceKind,

    /// Display color, RGB in `[0, 1]`.
    pub color: Color3,

    /// Render mode. `None` means "pick a default for me" and is
    /// resolved against the owning object during validation.
    pub vis_mode: Option<VisMode>,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            kind: SurfaceKind::Default,
            color: [0.9, 0.9, 0.9],
            vis_mode: None,
        }
    }
}
