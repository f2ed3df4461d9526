use std::f32::consts::TAU;

use bevy::math::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{default_city, LandmarkKind};
use crate::landmarks;
use crate::windows::{generate_windows, styles};
use crate::GenContext;

#[test]
fn test_spiral_heights_strictly_increase() {
    let slots = styles::spiral_slots(8, 4, Vec3::ZERO, 10.0, 80.0);
    assert_eq!(slots.len(), 8);
    for pair in slots.windows(2) {
        assert!(pair[1].position.z > pair[0].position.z);
    }
    for (i, slot) in slots.iter().enumerate() {
        let expected = i as f32 / 8.0 * 4.0 * TAU;
        // congruent modulo a full turn
        assert!((slot.facing.cos() - expected.cos()).abs() < 1e-4);
        assert!((slot.facing.sin() - expected.sin()).abs() < 1e-4);
        let radial = slot.position.truncate().length();
        assert!((radial - 10.0).abs() < 1e-4);
    }
}

#[test]
fn test_scattered_slots_respect_height_band_and_breakage() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let slots = styles::scattered_slots(&mut rng, 50, Vec3::ZERO, 5.0, 100.0, 1.0);
    assert_eq!(slots.len(), 50);
    for slot in &slots {
        assert!(slot.position.z >= 20.0 && slot.position.z <= 90.0);
        assert!(slot.broken);
    }
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let intact = styles::scattered_slots(&mut rng, 50, Vec3::ZERO, 5.0, 100.0, 0.0);
    assert!(intact.iter().all(|s| !s.broken));
}

#[test]
fn test_banded_grid_covers_four_faces_per_level() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let slots = styles::banded_grid_slots(&mut rng, 3, Vec3::ZERO, 12.5, 50.0);
    assert_eq!(slots.len(), 12);
    // band heights at quarter fractions of the building height
    assert!((slots[0].position.z - 12.5).abs() < 1e-4);
    assert!((slots[4].position.z - 25.0).abs() < 1e-4);
    assert!((slots[8].position.z - 37.5).abs() < 1e-4);
}

#[test]
fn test_neotech_spiral_windows_filed_under_subgroup() {
    let mut ctx = GenContext::with_seed(11);
    let desc = default_city()
        .into_iter()
        .find(|d| d.kind == LandmarkKind::NeoTech)
        .unwrap();
    let handle = landmarks::generate(&mut ctx, &desc).unwrap();
    let ids = generate_windows(&mut ctx, &handle, &desc).unwrap();
    // frame + pane per spiral slot, nothing broken
    assert_eq!(ids.len(), 80);
    let group = ctx
        .scene
        .find_group(&["Upper", "NeoTech_Tower", "Windows"])
        .unwrap();
    assert_eq!(ctx.scene.group(group).objects().len(), 80);
}

#[test]
fn test_militech_windows_carry_bars() {
    let mut ctx = GenContext::with_seed(11);
    let desc = default_city()
        .into_iter()
        .find(|d| d.kind == LandmarkKind::Militech)
        .unwrap();
    let handle = landmarks::generate(&mut ctx, &desc).unwrap();
    let ids = generate_windows(&mut ctx, &handle, &desc).unwrap();
    // 3 levels x 4 faces, each frame + pane + 3 bars
    assert_eq!(ids.len(), 60);
    assert!(ctx
        .scene
        .object_by_name("Militech_Armory_Window_0_Bar_2")
        .is_some());
}

#[test]
fn test_concealed_slots_cycle_faces_at_mid_heights() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let slots = styles::concealed_slots(&mut rng, 6, Vec3::ZERO, (5.0, 0.25), 15.0);
    assert_eq!(slots.len(), 6);
    for (i, slot) in slots.iter().enumerate() {
        let expected = (i % 4) as f32 * TAU / 4.0;
        assert!((slot.facing - expected).abs() < 1e-6);
        // middle third of the facade
        assert!(slot.position.z >= 2.5 && slot.position.z <= 12.5);
        assert!(!slot.broken);
    }
}

#[test]
fn test_reinforced_slots_sit_below_the_crown() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let slots = styles::reinforced_slots(&mut rng, 4, Vec3::ZERO, (4.0, 4.0), 8.0);
    assert_eq!(slots.len(), 4);
    for slot in &slots {
        assert!(slot.position.z >= 6.0 && slot.position.z <= 7.0);
    }
}

#[test]
fn test_wire_nest_windows_hide_behind_covers() {
    let mut ctx = GenContext::with_seed(11);
    let desc = default_city()
        .into_iter()
        .find(|d| d.kind == LandmarkKind::WireNest)
        .unwrap();
    let handle = landmarks::generate(&mut ctx, &desc).unwrap();
    let ids = generate_windows(&mut ctx, &handle, &desc).unwrap();
    // frame + pane + ajar cover per concealed slot
    assert_eq!(ids.len(), 18);
    assert!(ctx
        .scene
        .object_by_name("Wire_Nest_Window_0_Cover")
        .is_some());
    assert!(ctx.materials.get("WireNest_DarkGlass").is_some());
    let group = ctx
        .scene
        .find_group(&["Mid", "Wire_Nest", "Windows"])
        .unwrap();
    assert_eq!(ctx.scene.group(group).objects().len(), 18);
}

#[test]
fn test_rust_vault_windows_are_barred() {
    let mut ctx = GenContext::with_seed(11);
    let desc = default_city()
        .into_iter()
        .find(|d| d.kind == LandmarkKind::RustVault)
        .unwrap();
    let handle = landmarks::generate(&mut ctx, &desc).unwrap();
    let ids = generate_windows(&mut ctx, &handle, &desc).unwrap();
    // frame + pane + 2 horizontal + 2 vertical bars per slot
    assert_eq!(ids.len(), 24);
    assert!(ctx
        .scene
        .object_by_name("Rust_Vault_Window_0_Bar_3")
        .is_some());
    // frames and bars share the vault hull's corrosion graph
    let frame = ctx.scene.object_by_name("Rust_Vault_Window_0").unwrap();
    let rusty = ctx.materials.get("RustVault_Weathered").unwrap();
    assert!(ctx
        .scene
        .object(frame)
        .materials()
        .iter()
        .any(|m| std::sync::Arc::ptr_eq(m, &rusty)));
}
