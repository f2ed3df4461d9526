use bevy::math::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::diagnostics::Diagnostics;
use crate::mesh::{AxesMask, EditableMesh, KeepSide, PrimitiveSpec, Vec3Spec};

fn cylinder(segments: u32, radius: f32, depth: f32) -> EditableMesh {
    PrimitiveSpec::Cylinder {
        segments,
        radius,
        depth,
    }
    .build()
}

#[test]
fn test_primitive_vertex_counts() {
    let cyl = cylinder(8, 10.0, 150.0);
    assert_eq!(cyl.vertex_count(), 16);
    // 8 side quads + 2 caps
    assert_eq!(cyl.face_count(), 10);

    let cube = PrimitiveSpec::Cube {
        size: Vec3Spec::splat(2.0),
    }
    .build();
    assert_eq!(cube.vertex_count(), 8);
    assert_eq!(cube.face_count(), 6);

    let sphere = PrimitiveSpec::Sphere {
        segments: 32,
        rings: 16,
        radius: 20.0,
    }
    .build();
    // 2 poles + 15 interior rings of 32
    assert_eq!(sphere.vertex_count(), 2 + 15 * 32);

    let grid = PrimitiveSpec::Grid { cuts: 4, size: 8.0 }.build();
    assert_eq!(grid.vertex_count(), 25);
    assert_eq!(grid.face_count(), 16);
}

#[test]
fn test_cone_has_apex() {
    let cone = PrimitiveSpec::Cone {
        segments: 8,
        radius_bottom: 1.5,
        radius_top: 0.0,
        depth: 10.0,
    }
    .build();
    // 8 ring verts + 1 apex
    assert_eq!(cone.vertex_count(), 9);
    let apex = cone.positions[8];
    assert!((apex - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-6);
}

#[test]
fn test_taper_scales_top_vertices_about_centroid() {
    let mut mesh = cylinder(8, 10.0, 150.0);
    let mut diag = Diagnostics::new();
    mesh.taper(60.0, 0.6, &mut diag);
    assert!(diag.is_empty());
    for p in &mesh.positions {
        let r = (p.x * p.x + p.y * p.y).sqrt();
        if p.z > 60.0 {
            assert!((r - 6.0).abs() < 1e-3, "top ring radius was {r}");
        } else {
            assert!((r - 10.0).abs() < 1e-3, "bottom ring radius was {r}");
        }
    }
}

#[test]
fn test_taper_empty_selection_is_recorded_noop() {
    let mut mesh = cylinder(8, 10.0, 150.0);
    let before = mesh.positions.clone();
    let mut diag = Diagnostics::new();
    // threshold above the whole mesh: nothing selected
    mesh.taper(1000.0, 0.5, &mut diag);
    assert_eq!(mesh.positions, before);
    assert_eq!(diag.count_for("mesh"), 1);
}

#[test]
fn test_distort_is_seeded_and_bounded() {
    let build = |seed: u64| {
        let mut mesh = PrimitiveSpec::Grid { cuts: 4, size: 5.0 }.build();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut diag = Diagnostics::new();
        mesh.distort(0.7, (-0.5, 0.5), AxesMask::Z_ONLY, &mut rng, &mut diag);
        mesh
    };
    let a = build(7);
    let b = build(7);
    assert_eq!(a.positions, b.positions);
    for p in &a.positions {
        assert!(p.z.abs() <= 0.5);
    }
    // Z-only mask leaves X/Y untouched
    let pristine = PrimitiveSpec::Grid { cuts: 4, size: 5.0 }.build();
    for (moved, orig) in a.positions.iter().zip(&pristine.positions) {
        assert_eq!(moved.x, orig.x);
        assert_eq!(moved.y, orig.y);
    }
}

#[test]
fn test_distort_degenerate_range_skips() {
    let mut mesh = cylinder(8, 1.0, 1.0);
    let before = mesh.positions.clone();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut diag = Diagnostics::new();
    mesh.distort(1.0, (0.5, 0.5), AxesMask::ALL, &mut rng, &mut diag);
    assert_eq!(mesh.positions, before);
    assert_eq!(diag.len(), 1);
}

#[test]
fn test_extrude_region_grows_mesh() {
    let mut mesh = PrimitiveSpec::Cube {
        size: Vec3Spec::splat(2.0),
    }
    .build();
    let faces_before = mesh.face_count();
    let verts_before = mesh.vertex_count();
    let mut diag = Diagnostics::new();
    // extrude the top face (index 1) straight up and shrink the cap
    mesh.extrude_region(1, Vec3::new(0.0, 0.0, 1.5), Some(0.5), &mut diag);
    assert!(diag.is_empty());
    assert_eq!(mesh.vertex_count(), verts_before + 4);
    assert_eq!(mesh.face_count(), faces_before + 4);
    // cap vertices sit above the original top and are pulled inward
    let cap = &mesh.faces[1];
    for &i in &cap.indices {
        let p = mesh.positions[i as usize];
        assert!((p.z - 2.5).abs() < 1e-5);
        assert!(p.x.abs() < 1.0 && p.y.abs() < 1.0);
    }
}

#[test]
fn test_extrude_invalid_face_skips() {
    let mut mesh = PrimitiveSpec::Plane { size: 2.0 }.build();
    let before = mesh.clone();
    let mut diag = Diagnostics::new();
    mesh.extrude_region(99, Vec3::Z, None, &mut diag);
    assert_eq!(mesh, before);
    assert_eq!(diag.len(), 1);
}

#[test]
fn test_bisect_sphere_into_dome() {
    // odd ring count so no vertex ring sits exactly on the cut plane
    let mut mesh = PrimitiveSpec::Sphere {
        segments: 16,
        rings: 9,
        radius: 10.0,
    }
    .build();
    let mut diag = Diagnostics::new();
    mesh.bisect(Vec3::ZERO, Vec3::Z, KeepSide::Above, &mut diag);
    assert!(diag.is_empty(), "equator cut should auto-cap cleanly");
    for p in &mesh.positions {
        assert!(p.z >= -1e-3, "vertex below cut plane survived: {p}");
    }
    // the cap ngon closes the equator
    assert!(mesh.faces.iter().any(|f| f.indices.len() >= 16));
}

#[test]
fn test_bisect_no_crossing_is_noop() {
    let mut mesh = cylinder(8, 1.0, 2.0);
    let before = mesh.clone();
    let mut diag = Diagnostics::new();
    mesh.bisect(Vec3::new(0.0, 0.0, -50.0), Vec3::Z, KeepSide::Above, &mut diag);
    assert_eq!(mesh, before);
    assert!(diag.is_empty());
}

#[test]
fn test_bisect_discarding_everything_is_recorded() {
    let mut mesh = cylinder(8, 1.0, 2.0);
    let before = mesh.clone();
    let mut diag = Diagnostics::new();
    mesh.bisect(Vec3::new(0.0, 0.0, 50.0), Vec3::Z, KeepSide::Above, &mut diag);
    assert_eq!(mesh, before);
    assert_eq!(diag.len(), 1);
}

#[test]
fn test_subdivide_quadruples_quads() {
    let mut mesh = PrimitiveSpec::Plane { size: 4.0 }.build();
    let mut diag = Diagnostics::new();
    mesh.subdivide(2, &mut diag);
    assert!(diag.is_empty());
    assert_eq!(mesh.face_count(), 16);
    assert_eq!(mesh.vertex_count(), 25);
}

#[test]
fn test_delete_faces_drops_orphans() {
    let mut mesh = cylinder(6, 5.0, 80.0);
    let mut diag = Diagnostics::new();
    // skeletal spire look: remove alternating side faces
    let mut side = 0;
    mesh.delete_faces_where(
        |_, _, normal| {
            if normal.z.abs() < 0.1 {
                side += 1;
                side % 2 == 1
            } else {
                false
            }
        },
        &mut diag,
    );
    assert!(diag.is_empty());
    assert_eq!(mesh.face_count(), 5);
    // all remaining indices are in range after the orphan sweep
    for face in &mesh.faces {
        for &i in &face.indices {
            assert!((i as usize) < mesh.vertex_count());
        }
    }
}

#[test]
fn test_delete_all_faces_refused() {
    let mut mesh = PrimitiveSpec::Plane { size: 1.0 }.build();
    let before = mesh.clone();
    let mut diag = Diagnostics::new();
    mesh.delete_faces_where(|_, _, _| true, &mut diag);
    assert_eq!(mesh, before);
    assert_eq!(diag.len(), 1);
}
