//! Integration tests for granule-geometry.

use granule_geometry::Morph;
use granule_types::Vec3;

// ─── Bounding Box Tests ───────────────────────────────────────

#[test]
fn box_aabb_is_center_plus_minus_half_extent() {
    let m = Morph::Box {
        pos: Vec3::new(1.0, 2.0, 3.0),
        size: Vec3::new(0.4, 0.6, 1.0),
    };
    let b = m.aabb().unwrap();
    assert_eq!(b.min, Vec3::new(0.8, 1.7, 2.5));
    assert_eq!(b.max, Vec3::new(1.2, 2.3, 3.5));
}

#[test]
fn sphere_aabb_is_center_plus_minus_radius() {
    let m = Morph::Sphere {
        pos: Vec3::new(0.95, 0.0, 0.1),
        radius: 0.1,
    };
    let b = m.aabb().unwrap();
    assert!((b.max.x - 1.05).abs() < 1e-12);
    assert!((b.min.x - 0.85).abs() < 1e-12);
}

#[test]
fn negative_radius_is_normalized() {
    let m = Morph::Sphere {
        pos: Vec3::ZERO,
        radius: -2.0,
    };
    let b = m.aabb().unwrap();
    assert_eq!(b.min, Vec3::splat(-2.0));
    assert_eq!(b.max, Vec3::splat(2.0));
}

#[test]
fn negative_box_size_is_normalized() {
    let m = Morph::Box {
        pos: Vec3::ZERO,
        size: Vec3::new(-1.0, 1.0, -1.0),
    };
    let b = m.aabb().unwrap();
    assert_eq!(b.min, Vec3::splat(-0.5));
    assert_eq!(b.max, Vec3::splat(0.5));
}

#[test]
fn min_never_exceeds_max() {
    let shapes = [
        Morph::Box {
            pos: Vec3::new(-3.0, 7.0, 0.0),
            size: Vec3::ZERO,
        },
        Morph::Sphere {
            pos: Vec3::new(5.0, -5.0, 5.0),
            radius: 0.0,
        },
    ];
    for m in &shapes {
        let b = m.aabb().unwrap();
        assert!(b.min.x <= b.max.x);
        assert!(b.min.y <= b.max.y);
        assert!(b.min.z <= b.max.z);
    }
}

#[test]
fn plane_has_no_aabb() {
    assert!(Morph::Plane.aabb().is_none());
    assert!(Morph::Plane.is_unbounded());
}

// ─── Serde Tests ──────────────────────────────────────────────

#[test]
fn parse_tagged_variants() {
    let m: Morph =
        serde_json::from_str(r#"{"type": "Sphere", "pos": [0.0, 0.0, 0.5], "radius": 0.2}"#)
            .unwrap();
    assert_eq!(m.kind_name(), "Sphere");

    let m: Morph = serde_json::from_str(r#"{"type": "Plane"}"#).unwrap();
    assert_eq!(m, Morph::Plane);

    let m: Morph =
        serde_json::from_str(r#"{"type": "Box", "pos": [0, 0, 0], "size": [1, 1, 1]}"#).unwrap();
    assert_eq!(m.kind_name(), "Box");
}

#[test]
fn unknown_discriminant_fails() {
    let r: Result<Morph, _> = serde_json::from_str(r#"{"type": "Torus", "radius": 1.0}"#);
    assert!(r.is_err());
}
