//! Integration tests for granule-scene.

use granule_geometry::Morph;
use granule_material::Material;
use granule_scene::{MpmBody, StaticObject, Surface, VisMode};
use granule_types::{ConfigError, Vec3};

fn floor() -> StaticObject {
    StaticObject {
        name: "floor".into(),
        morph: Morph::Plane,
        surface: Surface::default(),
    }
}

fn sand_ball() -> MpmBody {
    MpmBody {
        name: "sand_ball".into(),
        material: Material::Sand { rho: None },
        morph: Morph::Sphere {
            pos: Vec3::new(0.0, 0.0, 0.5),
            radius: 0.2,
        },
        surface: Surface::default(),
    }
}

// ─── Static Object Tests ──────────────────────────────────────

#[test]
fn static_defaults_to_visual() {
    let mut obj = floor();
    obj.resolve_surface().unwrap();
    assert_eq!(obj.surface.vis_mode, Some(VisMode::Visual));
}

#[test]
fn static_keeps_explicit_collision_mode() {
    let mut obj = floor();
    obj.surface.vis_mode = Some(VisMode::Collision);
    obj.resolve_surface().unwrap();
    assert_eq!(obj.surface.vis_mode, Some(VisMode::Collision));
}

#[test]
fn static_particle_mode_is_rejected() {
    let mut obj = floor();
    obj.surface.vis_mode = Some(VisMode::Particle);
    let err = obj.resolve_surface().unwrap_err();
    match err {
        ConfigError::Structural { field, .. } => {
            assert!(field.contains("floor"));
            assert!(field.contains("vis_mode"));
        }
        other => panic!("expected structural violation, got {other}"),
    }
}

#[test]
fn static_particle_rejected_regardless_of_shape_or_color() {
    let mut obj = StaticObject {
        name: "wall".into(),
        morph: Morph::Box {
            pos: Vec3::ZERO,
            size: Vec3::ONE,
        },
        surface: Surface {
            color: [1.0, 0.0, 0.0],
            vis_mode: Some(VisMode::Particle),
            ..Surface::default()
        },
    };
    assert!(obj.resolve_surface().is_err());
}

// ─── Dynamic Body Tests ───────────────────────────────────────

#[test]
fn sand_body_defaults_to_particle() {
    let mut body = sand_ball();
    body.resolve_surface();
    assert_eq!(body.surface.vis_mode, Some(VisMode::Particle));
}

#[test]
fn elastic_body_defaults_to_recon() {
    let mut body = sand_ball();
    body.material = Material::Elastic {
        e: 1e6,
        nu: 0.2,
        rho: 1000.0,
        model: Default::default(),
    };
    body.resolve_surface();
    assert_eq!(body.surface.vis_mode, Some(VisMode::Recon));
}

#[test]
fn body_keeps_explicit_mode() {
    let mut body = sand_ball();
    body.surface.vis_mode = Some(VisMode::Sdf);
    body.resolve_surface();
    assert_eq!(body.surface.vis_mode, Some(VisMode::Sdf));
}

// ─── Serde Tests ──────────────────────────────────────────────

#[test]
fn body_parses_with_defaulted_surface() {
    let body: MpmBody = serde_json::from_str(
        r#"{
            "name": "blob",
            "material": {"type": "Liquid"},
            "morph": {"type": "Sphere", "pos": [0, 0, 0.3], "radius": 0.15}
        }"#,
    )
    .unwrap();
    assert_eq!(body.surface, Surface::default());
    assert!(body.surface.vis_mode.is_none());
}

#[test]
fn surface_parses_payload_shape() {
    let s: Surface = serde_json::from_str(
        r#"{"type": "Default", "color": [0.2, 0.4, 0.9], "vis_mode": "recon"}"#,
    )
    .unwrap();
    assert_eq!(s.color, [0.2, 0.4, 0.9]);
    assert_eq!(s.vis_mode, Some(VisMode::Recon));
}

#[test]
fn invalid_vis_mode_fails() {
    let r: Result<Surface, _> = serde_json::from_str(r#"{"vis_mode": "hologram"}"#);
    assert!(r.is_err());
}
