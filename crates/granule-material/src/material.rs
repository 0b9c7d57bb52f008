//! Material variants and parameter clamping.
//!
//! Construction always succeeds; [`Material::clamped`] then maps every
//! numeric field into its kind-specific closed interval, silently and
//! deterministically. This keeps the aggregate robust to a generator
//! that emits implausible values (negative density, `nu` above the
//! incompressible limit, and so on).

use serde::{Deserialize, Serialize};

use granule_types::{clamp_repair, constants, Scalar};

/// Constitutive model selector for elastic materials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElasticModel {
    /// Corotated linear elasticity.
    #[default]
    Corotation,
    /// Neo-Hookean hyperelasticity.
    NeoHookean,
    /// St. Venant–Kirchhoff.
    Stvk,
}

/// A dynamic body's material, tagged by `type` in the JSON payload.
///
/// Elastic carries the full parameter set; the granular and fluid kinds
/// only carry an optional density, with a kind-specific default.
/// Descriptive field names (`youngs_modulus`, `poisson_ratio`,
/// `density`) are accepted as aliases on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Material {
    /// Elastic solid.
    Elastic {
        /// Young's modulus (Pa).
        #[serde(rename = "E", alias = "youngs_modulus")]
        e: Scalar,
        /// Poisson's ratio.
        #[serde(alias = "poisson_ratio")]
        nu: Scalar,
        /// Density (kg/m³).
        #[serde(alias = "density")]
        rho: Scalar,
        /// Constitutive model.
        #[serde(default)]
        model: ElasticModel,
    },

    /// Snow (elastoplastic).
    Snow {
        /// Density (kg/m³); defaults to [`constants::DEFAULT_SNOW_RHO`].
        #[serde(default, alias = "density")]
        rho: Option<Scalar>,
    },

    /// Dry sand (granular).
    Sand {
        /// Density (kg/m³); defaults to [`constants::DEFAULT_SAND_RHO`].
        #[serde(default, alias = "density")]
        rho: Option<Scalar>,
    },

    /// Liquid (weakly compressible).
    Liquid {
        /// Density (kg/m³); defaults to [`constants::DEFAULT_LIQUID_RHO`].
        #[serde(default, alias = "density")]
        rho: Option<Scalar>,
    },
}

impl Material {
    /// A copy with every numeric parameter clamped into its documented
    /// interval. Total and deterministic; never an error.
    pub fn clamped(&self) -> Material {
        match self.clone() {
            Material::Elastic { e, nu, rho, model } => Material::Elastic {
                e: clamp_repair(
                    "material.E",
                    e,
                    constants::MIN_YOUNG_MODULUS,
                    constants::MAX_YOUNG_MODULUS,
                ),
                nu: clamp_repair(
                    "material.nu",
                    nu,
                    constants::MIN_POISSON_RATIO,
                    constants::MAX_POISSON_RATIO,
                ),
                rho: clamp_density(rho),
                model,
            },
            Material::Snow { rho } => Material::Snow {
                rho: rho.map(clamp_density),
            },
            Material::Sand { rho } => Material::Sand {
                rho: rho.map(clamp_density),
            },
            Material::Liquid { rho } => Material::Liquid {
                rho: rho.map(clamp_density),
            },
        }
    }

    /// Density of the material, resolving kind-specific defaults where
    /// the payload left it unset.
    pub fn density(&self) -> Scalar {
        match self {
            Material::Elastic { rho, .. } => *rho,
            Material::Snow { rho } => rho.unwrap_or(constants::DEFAULT_SNOW_RHO),
            Material::Sand { rho } => rho.unwrap_or(constants::DEFAULT_SAND_RHO),
            Material::Liquid { rho } => rho.unwrap_or(constants::DEFAULT_LIQUID_RHO),
        }
    }

    /// Whether this is an elastic solid (drives the default render mode).
    pub fn is_elastic(&self) -> bool {
        matches!(self, Material::Elastic { .. })
    }

    /// The JSON discriminant of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Material::Elastic { .. } => "Elastic",
            Material::Snow { .. } => "Snow",
            Material::Sand { .. } => "Sand",
            Material::Liquid { .. } => "Liquid",
        }
    }
}

fn clamp_density(rho: Scalar) -> Scalar {
    clamp_repair(
        "material.rho",
        rho,
        constants::MIN_DENSITY,
        constants::MAX_DENSITY,
    )
}
