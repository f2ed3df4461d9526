use bevy::math::Vec3;

use crate::config::{default_city, LandmarkKind};
use crate::interiors::{entrances, fixtures};
use crate::landmarks;
use crate::palette;
use crate::GenContext;

fn interior_material(ctx: &mut GenContext) -> std::sync::Arc<engine::MaterialGraph> {
    ctx.materials
        .build_graph("Test_Interior", palette::interior_stages([0.2; 4], 0.5))
        .unwrap()
}

#[test]
fn test_desk_assembly_shape() {
    let mut ctx = GenContext::with_seed(3);
    let group = ctx.scene.get_or_create_group(&["Fixtures"]);
    let material = interior_material(&mut ctx);
    let ids = fixtures::desk(&mut ctx, group, "Desk", Vec3::ZERO, &material);
    // top + 4 legs
    assert_eq!(ids.len(), 5);
    let top = ctx.scene.world_bounds(ids[0]).unwrap();
    assert!((top.center().z - 0.75).abs() < 1e-5);
}

#[test]
fn test_server_rack_has_units_and_lights() {
    let mut ctx = GenContext::with_seed(3);
    let group = ctx.scene.get_or_create_group(&["Fixtures"]);
    let material = interior_material(&mut ctx);
    let ids = fixtures::server_rack(&mut ctx, group, "Rack", Vec3::ZERO, &material).unwrap();
    // cabinet + 5 units + 10 lights
    assert_eq!(ids.len(), 16);
    // status lights use one of the two shared emissive graphs
    assert!(ctx.materials.get("Status_Light_Green").is_some());
    assert!(ctx.materials.get("Status_Light_Red").is_some());
}

#[test]
fn test_wall_spans_endpoints() {
    let mut ctx = GenContext::with_seed(3);
    let group = ctx.scene.get_or_create_group(&["Fixtures"]);
    let material = interior_material(&mut ctx);
    let id = fixtures::wall(
        &mut ctx,
        group,
        "Wall",
        Vec3::new(-5.0, 2.0, 0.0),
        Vec3::new(5.0, 2.0, 0.0),
        3.0,
        0.2,
        &material,
    );
    let bounds = ctx.scene.world_bounds(id).unwrap();
    assert!((bounds.size().x - 10.0).abs() < 1e-4);
    assert!((bounds.size().y - 0.2).abs() < 1e-4);
    assert!((bounds.size().z - 3.0).abs() < 1e-4);
    assert!((bounds.min.z - 0.0).abs() < 1e-4);
}

#[test]
fn test_biotechnica_entrance_is_airlock() {
    let mut ctx = GenContext::with_seed(3);
    let desc = default_city()
        .into_iter()
        .find(|d| d.kind == LandmarkKind::Biotechnica)
        .unwrap();
    let handle = landmarks::generate(&mut ctx, &desc).unwrap();
    let ids = entrances::generate_entrance(&mut ctx, &handle, &desc).unwrap();
    // frame + chamber + 8 nozzles + logo
    assert_eq!(ids.len(), 11);
    let entrance_group = ctx
        .scene
        .find_group(&["Upper", "Biotechnica_Spire", "Entrance"])
        .unwrap();
    assert_eq!(ctx.scene.group(entrance_group).objects().len(), 11);
}

#[test]
fn test_sliding_door_entrance_for_other_landmarks() {
    let mut ctx = GenContext::with_seed(3);
    let desc = default_city()
        .into_iter()
        .find(|d| d.kind == LandmarkKind::Militech)
        .unwrap();
    let handle = landmarks::generate(&mut ctx, &desc).unwrap();
    let ids = entrances::generate_entrance(&mut ctx, &handle, &desc).unwrap();
    // frame + 2 panels + status strip
    assert_eq!(ids.len(), 4);
    assert!(ctx.diagnostics.is_empty());
}
