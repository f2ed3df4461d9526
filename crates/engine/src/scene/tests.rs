use bevy::math::Vec3;
use bevy::prelude::Transform;

use crate::diagnostics::Diagnostics;
use crate::error::EngineError;
use crate::material::{MaterialGraph, StageKind, StageSpec};
use crate::mesh::{PrimitiveSpec, Vec3Spec};
use crate::scene::SceneGraph;

use std::sync::Arc;

fn unit_cube() -> PrimitiveSpec {
    PrimitiveSpec::Cube {
        size: Vec3Spec::splat(1.0),
    }
}

#[test]
fn test_get_or_create_group_walks_and_reuses() {
    let mut scene = SceneGraph::new();
    let a = scene.get_or_create_group(&["Landmarks", "NeoTech"]);
    let b = scene.get_or_create_group(&["Landmarks", "NeoTech"]);
    assert_eq!(a, b);
    let sibling = scene.get_or_create_group(&["Landmarks", "Specter"]);
    assert_ne!(a, sibling);
    // root + Landmarks + 2 leaves
    assert_eq!(scene.group_count(), 4);
    assert_eq!(scene.group(a).name(), "NeoTech");
    assert_eq!(scene.find_group(&["Landmarks", "Specter"]), Some(sibling));
    assert_eq!(scene.find_group(&["Landmarks", "Missing"]), None);
}

#[test]
fn test_spawn_files_object_and_names_are_unique() {
    let mut scene = SceneGraph::new();
    let group = scene.get_or_create_group(&["Landmarks", "RustVault"]);
    let a = scene.spawn("Vault_Door", &unit_cube(), Transform::IDENTITY, group);
    let b = scene.spawn("Vault_Door", &unit_cube(), Transform::IDENTITY, group);
    assert_eq!(scene.object(a).name(), "Vault_Door");
    assert_eq!(scene.object(b).name(), "Vault_Door.001");
    assert_eq!(scene.object_by_name("Vault_Door"), Some(a));
    assert_eq!(scene.group(group).objects(), &[a, b]);
}

#[test]
fn test_move_to_relinks_exclusively() {
    let mut scene = SceneGraph::new();
    let staging = scene.get_or_create_group(&["Staging"]);
    let target = scene.get_or_create_group(&["Landmarks", "WireNest"]);
    let id = scene.spawn("Frame", &unit_cube(), Transform::IDENTITY, staging);

    scene.move_to(id, target);
    assert!(scene.group(staging).objects().is_empty());
    assert_eq!(scene.group(target).objects(), &[id]);
    assert_eq!(scene.object_group(id), target);

    // already the sole member: no-op
    scene.move_to(id, target);
    assert_eq!(scene.group(target).objects(), &[id]);
}

#[test]
fn test_world_bounds_apply_transform() {
    let mut scene = SceneGraph::new();
    let root = scene.root();
    let id = scene.spawn(
        "Marker",
        &unit_cube(),
        Transform::from_translation(Vec3::new(10.0, -5.0, 2.0)),
        root,
    );
    let bounds = scene.world_bounds(id).unwrap();
    assert!((bounds.center() - Vec3::new(10.0, -5.0, 2.0)).length() < 1e-5);
    assert!((bounds.size() - Vec3::ONE).length() < 1e-5);
}

#[test]
fn test_edit_session_conflict_and_commit() {
    let mut scene = SceneGraph::new();
    let root = scene.root();
    let id = scene.spawn("Tower", &unit_cube(), Transform::IDENTITY, root);

    let mut session = scene.begin_edit(id).unwrap();
    // second session on the same object fails fast
    let err = scene.begin_edit(id).unwrap_err();
    assert!(matches!(err, EngineError::SessionConflict { .. }), "{err}");

    let mut diag = Diagnostics::new();
    session.taper(0.0, 0.5, &mut diag).unwrap();
    scene.end_edit(&mut session).unwrap();

    // the commit wrote the edit back
    let top = scene
        .object(id)
        .mesh()
        .positions
        .iter()
        .filter(|p| p.z > 0.0)
        .map(|p| p.x.abs())
        .fold(0.0_f32, f32::max);
    assert!((top - 0.25).abs() < 1e-5);

    // session handle is dead after commit
    let err = session.taper(0.0, 0.5, &mut diag).unwrap_err();
    assert!(matches!(err, EngineError::StaleSession { .. }), "{err}");
    let err = scene.end_edit(&mut session).unwrap_err();
    assert!(matches!(err, EngineError::StaleSession { .. }), "{err}");

    // the object is editable again
    let mut second = scene.begin_edit(id).unwrap();
    scene.end_edit(&mut second).unwrap();
}

#[test]
fn test_assign_material_shares_graph() {
    let mut scene = SceneGraph::new();
    let root = scene.root();
    let graph = Arc::new(
        MaterialGraph::build(
            "shared",
            vec![
                StageSpec::new("base", StageKind::ConstantColor { rgba: [1.0; 4] }),
                StageSpec::with_inputs("out", StageKind::SurfaceOutput, &["base"]),
            ],
        )
        .unwrap(),
    );
    let a = scene.spawn("A", &unit_cube(), Transform::IDENTITY, root);
    let b = scene.spawn("B", &unit_cube(), Transform::IDENTITY, root);
    scene.assign_material(a, Arc::clone(&graph));
    scene.assign_material(b, Arc::clone(&graph));
    assert!(Arc::ptr_eq(&scene.object(a).materials()[0], &graph));
    assert!(Arc::ptr_eq(&scene.object(b).materials()[0], &graph));
}

#[test]
fn test_reset_all_keeps_only_root() {
    let mut scene = SceneGraph::new();
    let group = scene.get_or_create_group(&["Landmarks", "Militech"]);
    scene.spawn("Fortress", &unit_cube(), Transform::IDENTITY, group);
    assert_eq!(scene.object_count(), 1);

    scene.reset_all();
    assert_eq!(scene.group_count(), 1);
    assert_eq!(scene.object_count(), 0);
    assert_eq!(scene.group(scene.root()).name(), "World");
    assert!(scene.group(scene.root()).children().is_empty());

    // the hierarchy can be rebuilt from scratch
    let again = scene.get_or_create_group(&["Landmarks", "Militech"]);
    assert_eq!(scene.group(again).name(), "Militech");
}

#[test]
fn test_objects_in_subtree_walks_descendants() {
    let mut scene = SceneGraph::new();
    let landmarks = scene.get_or_create_group(&["Landmarks"]);
    let neotech = scene.get_or_create_group(&["Landmarks", "NeoTech"]);
    let windows = scene.get_or_create_group(&["Landmarks", "NeoTech", "Windows"]);
    let a = scene.spawn("Tower", &unit_cube(), Transform::IDENTITY, neotech);
    let b = scene.spawn("Window_0", &unit_cube(), Transform::IDENTITY, windows);

    let mut found = scene.objects_in_subtree(landmarks);
    found.sort();
    assert_eq!(found, vec![a, b]);
}
