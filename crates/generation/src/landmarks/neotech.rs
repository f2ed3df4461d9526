//! NeoTech Tower: the upper-tier corporate obelisk.
//!
//! Eight-segment tower tapered above 45% of its height, a wide base drum,
//! five orbiting holo-ad panes with randomized emission hues, and a ring
//! of red laser-grid planes at street level.

use std::f32::consts::FRAC_PI_2;

use bevy::math::{Quat, Vec3};
use engine::{EngineError, PrimitiveSpec, Vec3Spec};
use rand::Rng;

use crate::config::BuildingDescriptor;
use crate::palette;
use crate::GenContext;

use super::{landmark_group, part_transform, ring_positions, tier_material, LandmarkHandle};

const TOWER_HEIGHT: f32 = 150.0;
const TOWER_RADIUS: f32 = 10.0;
const TAPER_FRACTION: f32 = 0.45;
const HOLO_AD_COUNT: u32 = 5;
const LASER_GRID_COUNT: u32 = 8;

pub(super) fn generate(
    ctx: &mut GenContext,
    desc: &BuildingDescriptor,
) -> Result<LandmarkHandle, EngineError> {
    let group = landmark_group(ctx, desc);
    let tier = tier_material(ctx, desc)?;

    let tower = ctx.scene.spawn(
        &format!("{}_Tower", desc.name),
        &PrimitiveSpec::Cylinder {
            segments: 8,
            radius: TOWER_RADIUS,
            depth: TOWER_HEIGHT,
        },
        part_transform(desc, Vec3::new(0.0, 0.0, TOWER_HEIGHT * 0.5)),
        group,
    );
    // taper everything above 45% of the height (local z runs -75..75)
    let threshold = TAPER_FRACTION * TOWER_HEIGHT - TOWER_HEIGHT * 0.5;
    let mut session = ctx.scene.begin_edit(tower)?;
    session.taper(threshold, 0.6, &mut ctx.diagnostics)?;
    ctx.scene.end_edit(&mut session)?;
    ctx.scene.assign_material(tower, tier.clone());

    let base = ctx.scene.spawn(
        &format!("{}_Base", desc.name),
        &PrimitiveSpec::Cylinder {
            segments: 16,
            radius: 20.0,
            depth: 10.0,
        },
        part_transform(desc, Vec3::new(0.0, 0.0, 5.0)),
        group,
    );
    ctx.scene.assign_material(base, tier);

    let mut handle = LandmarkHandle::new(&desc.name, desc.tier, group, tower);
    handle.insert_part("base", base);

    // orbiting holo-ads, each with its own randomized hue
    for (i, (angle, offset)) in ring_positions(HOLO_AD_COUNT, 15.0, 140.0).enumerate() {
        let rgba = [
            ctx.rng.0.gen_range(0.5..1.0),
            ctx.rng.0.gen_range(0.5..1.0),
            ctx.rng.0.gen_range(0.5..1.0),
            1.0,
        ];
        let glow = ctx.materials.build_graph(
            &format!("{}_Holo_{i}", desc.name),
            palette::emission_stages(rgba, 3.0),
        )?;
        let mut transform = part_transform(desc, offset);
        // stand the pane upright, facing out from the tower
        transform.rotation = Quat::from_rotation_z(angle) * Quat::from_rotation_x(FRAC_PI_2);
        let ad = ctx.scene.spawn(
            &format!("{}_HoloAd_{i}", desc.name),
            &PrimitiveSpec::Plane { size: 6.0 },
            transform,
            group,
        );
        ctx.scene.assign_material(ad, glow);
        handle.push_part("holo_ads", ad);
    }

    let laser = ctx.materials.build_graph(
        &format!("{}_Laser", desc.name),
        palette::emission_stages([1.0, 0.05, 0.05, 1.0], 2.0),
    )?;
    for (i, (_, offset)) in ring_positions(LASER_GRID_COUNT, 25.0, 0.05).enumerate() {
        let grid = ctx.scene.spawn(
            &format!("{}_LaserGrid_{i}", desc.name),
            &PrimitiveSpec::Plane { size: 3.0 },
            part_transform(desc, offset),
            group,
        );
        ctx.scene.assign_material(grid, laser.clone());
        handle.push_part("laser_grids", grid);
    }

    // low emissive plinth marking the lobby entrance
    let plinth = ctx.scene.spawn(
        &format!("{}_Plinth", desc.name),
        &PrimitiveSpec::Cube {
            size: Vec3Spec::new(6.0, 2.0, 4.0),
        },
        part_transform(desc, Vec3::new(0.0, -20.0, 2.0)),
        group,
    );
    let hologram = ctx
        .materials
        .build_graph("Hologram", palette::hologram_stages())?;
    ctx.scene.assign_material(plinth, hologram);
    handle.insert_part("plinth", plinth);

    Ok(handle)
}
