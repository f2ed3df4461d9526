use bevy::math::Vec3;

use crate::config::{default_city, LandmarkKind, Tier};
use crate::landmarks;
use crate::rooms::{
    build_for_landmark, build_rooms, resolve_rooms, BuildingManifest, BuildingState,
    CorridorDescriptor, CorridorOrientation, RoomDescriptor, RoomKind,
};
use crate::GenContext;

fn two_room_manifest(corridor_width: f32, corridor_height: f32) -> BuildingManifest {
    BuildingManifest {
        rooms: vec![
            RoomDescriptor::new("Hub", RoomKind::Hub, [-0.2, 0.0, 0.05], [0.3, 0.3, 0.04], 0),
            RoomDescriptor::new(
                "Annex",
                RoomKind::Office,
                [0.2, 0.0, 0.05],
                [0.3, 0.3, 0.04],
                0,
            ),
        ],
        corridors: vec![CorridorDescriptor::new(
            "Hub",
            "Annex",
            corridor_width,
            corridor_height,
            CorridorOrientation::Horizontal,
        )],
    }
}

#[test]
fn test_two_rooms_narrow_corridor_keeps_all_walls() {
    let mut ctx = GenContext::with_seed(9);
    let manifest = two_room_manifest(2.0, 2.5);
    let log = build_rooms(
        &mut ctx,
        "Test_Tower",
        Tier::Mid,
        Vec3::ZERO,
        Vec3::new(40.0, 40.0, 100.0),
        &manifest,
    )
    .unwrap();
    // 2 rooms x (floor + ceiling + 4 walls)
    assert_eq!(log.slab_count, 12);
    assert_eq!(log.corridor_count, 1);
    assert_eq!(log.state(), BuildingState::Done);
    assert_eq!(ctx.diagnostics.unresolved_count(), 0);
}

#[test]
fn test_full_coverage_corridor_omits_facing_walls() {
    let mut ctx = GenContext::with_seed(9);
    // cross-section covers the whole 12x4 shared faces
    let manifest = two_room_manifest(13.0, 5.0);
    let log = build_rooms(
        &mut ctx,
        "Test_Tower",
        Tier::Mid,
        Vec3::ZERO,
        Vec3::new(40.0, 40.0, 100.0),
        &manifest,
    )
    .unwrap();
    // Hub loses its east wall, Annex its west wall
    assert_eq!(log.slab_count, 10);
    assert!(ctx
        .scene
        .object_by_name("Test_Tower_Hub_Wall_East")
        .is_none());
    assert!(ctx
        .scene
        .object_by_name("Test_Tower_Hub_Wall_West")
        .is_some());
    assert!(ctx
        .scene
        .object_by_name("Test_Tower_Annex_Wall_West")
        .is_none());
}

#[test]
fn test_unresolved_corridor_endpoint_is_skipped_not_fatal() {
    let mut ctx = GenContext::with_seed(9);
    let mut manifest = two_room_manifest(2.0, 2.5);
    manifest
        .corridors
        .push(CorridorDescriptor::new(
            "Annex",
            "Basement",
            2.0,
            2.5,
            CorridorOrientation::Horizontal,
        ));
    let log = build_rooms(
        &mut ctx,
        "Test_Tower",
        Tier::Mid,
        Vec3::ZERO,
        Vec3::new(40.0, 40.0, 100.0),
        &manifest,
    )
    .unwrap();
    // the good corridor still lands, the bad one records an unresolved skip
    assert_eq!(log.corridor_count, 1);
    assert_eq!(ctx.diagnostics.unresolved_count(), 1);
    assert_eq!(log.state(), BuildingState::Done);
}

#[test]
fn test_room_resolution_is_deterministic() {
    let manifest = two_room_manifest(2.0, 2.5);
    let mut a_diag = engine::Diagnostics::default();
    let mut b_diag = engine::Diagnostics::default();
    let anchor = Vec3::new(5.0, -3.0, 0.0);
    let footprint = Vec3::new(30.0, 30.0, 80.0);
    let a = resolve_rooms(anchor, footprint, &manifest, &mut a_diag);
    let b = resolve_rooms(anchor, footprint, &manifest, &mut b_diag);
    assert_eq!(a, b);
    assert_eq!(a[0].center, anchor + Vec3::new(-0.2, 0.0, 0.05) * footprint);
    assert_eq!(a[0].size, Vec3::new(0.3, 0.3, 0.04) * footprint);
}

#[test]
fn test_vertical_shaft_choice_is_logged() {
    let mut ctx = GenContext::with_seed(9);
    let manifest = BuildingManifest {
        rooms: vec![
            RoomDescriptor::new("Lower", RoomKind::Hub, [0.0, 0.0, 0.1], [0.4, 0.4, 0.08], 0),
            RoomDescriptor::new("Upper", RoomKind::Lab, [0.0, 0.0, 0.5], [0.4, 0.4, 0.08], 1),
        ],
        corridors: vec![CorridorDescriptor::new(
            "Lower",
            "Upper",
            3.0,
            3.0,
            CorridorOrientation::Vertical,
        )],
    };
    let log = build_rooms(
        &mut ctx,
        "Shaft_Test",
        Tier::Upper,
        Vec3::ZERO,
        Vec3::new(30.0, 30.0, 60.0),
        &manifest,
    )
    .unwrap();
    assert_eq!(log.corridor_count, 1);
    assert_eq!(log.corridor_choices.len(), 1);
    let choice = &log.corridor_choices[0];
    assert!(choice.ends_with("ladder") || choice.ends_with("stairs"));
    assert!(ctx
        .scene
        .object_by_name("Shaft_Test_Corridor_0_Shaft")
        .is_some());
}

#[test]
fn test_state_machine_progression_order() {
    let mut ctx = GenContext::with_seed(9);
    let manifest = two_room_manifest(2.0, 2.5);
    let log = build_rooms(
        &mut ctx,
        "Test_Tower",
        Tier::Mid,
        Vec3::ZERO,
        Vec3::new(40.0, 40.0, 100.0),
        &manifest,
    )
    .unwrap();
    assert_eq!(
        log.states,
        vec![
            BuildingState::Unplaced,
            BuildingState::FloorsBuilt,
            BuildingState::WallsBuilt,
            BuildingState::Furnished,
            BuildingState::CorridorsConnected,
            BuildingState::Done,
        ]
    );
}

#[test]
fn test_landmark_interior_files_under_rooms_subgroup() {
    let mut ctx = GenContext::with_seed(9);
    let desc = default_city()
        .into_iter()
        .find(|d| d.kind == LandmarkKind::Militech)
        .unwrap();
    let handle = landmarks::generate(&mut ctx, &desc).unwrap();
    let log = build_for_landmark(&mut ctx, &handle, &desc).unwrap();
    assert_eq!(log.state(), BuildingState::Done);
    assert!(log.slab_count > 0);
    let rooms_group = ctx
        .scene
        .find_group(&["Upper", "Militech_Armory", "Rooms"])
        .unwrap();
    assert!(!ctx.scene.group(rooms_group).objects().is_empty());
    // interior material was pre-styled for the landmark and cached
    assert!(ctx.materials.get("Militech_Armory_Interior").is_some());
}
