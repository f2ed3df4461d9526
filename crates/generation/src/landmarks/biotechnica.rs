//! Biotechnica Spire: the bio-research tower with the greenhouse dome.
//!
//! Smooth 32-segment tower, a hemispherical dome (sphere bisected at the
//! equator) crowning it, vine tubes trailing down the flanks, glowing
//! culture vats, and DNA-helix display panes at the entrance.

use std::f32::consts::FRAC_PI_2;

use bevy::math::{Quat, Vec3};
use engine::{EngineError, KeepSide, PrimitiveSpec};
use rand::Rng;

use crate::config::BuildingDescriptor;
use crate::palette;
use crate::GenContext;

use super::{landmark_group, part_transform, ring_positions, tier_material, LandmarkHandle};

const TOWER_HEIGHT: f32 = 80.0;
const TOWER_RADIUS: f32 = 15.0;
const DOME_RADIUS: f32 = 20.0;
const VINE_COUNT: u32 = 8;
const VAT_COUNT: u32 = 5;
const DNA_COUNT: u32 = 3;

pub(super) fn generate(
    ctx: &mut GenContext,
    desc: &BuildingDescriptor,
) -> Result<LandmarkHandle, EngineError> {
    let group = landmark_group(ctx, desc);
    let tier = tier_material(ctx, desc)?;

    let tower = ctx.scene.spawn(
        &format!("{}_Tower", desc.name),
        &PrimitiveSpec::Cylinder {
            segments: 32,
            radius: TOWER_RADIUS,
            depth: TOWER_HEIGHT,
        },
        part_transform(desc, Vec3::new(0.0, 0.0, TOWER_HEIGHT * 0.5)),
        group,
    );
    ctx.scene.assign_material(tower, tier.clone());

    let mut handle = LandmarkHandle::new(&desc.name, desc.tier, group, tower);

    // greenhouse dome: halve a sphere at its equator, keep the top
    let dome = ctx.scene.spawn(
        &format!("{}_Dome", desc.name),
        &PrimitiveSpec::Sphere {
            segments: 32,
            rings: 15,
            radius: DOME_RADIUS,
        },
        part_transform(desc, Vec3::new(0.0, 0.0, TOWER_HEIGHT)),
        group,
    );
    let mut session = ctx.scene.begin_edit(dome)?;
    session.bisect(Vec3::ZERO, Vec3::Z, KeepSide::Above, &mut ctx.diagnostics)?;
    ctx.scene.end_edit(&mut session)?;
    let dome_glass = ctx.materials.build_graph(
        "Biotechnica_DomeGlass",
        palette::glass_stages([0.7, 0.95, 0.8, 1.0], 0.85, 0.0),
    )?;
    ctx.scene.assign_material(dome, dome_glass);
    handle.insert_part("dome", dome);

    // vines trailing down the tower flank
    for (i, (angle, offset)) in
        ring_positions(VINE_COUNT, TOWER_RADIUS + 0.4, TOWER_HEIGHT * 0.55).enumerate()
    {
        let length = ctx.rng.0.gen_range(25.0..45.0);
        let mut transform = part_transform(desc, offset);
        transform.rotation =
            Quat::from_rotation_z(angle) * Quat::from_rotation_x(ctx.rng.0.gen_range(-0.15..0.15));
        let vine = ctx.scene.spawn(
            &format!("{}_Vine_{i}", desc.name),
            &PrimitiveSpec::Cylinder {
                segments: 6,
                radius: 0.3,
                depth: length,
            },
            transform,
            group,
        );
        let moss = ctx.materials.build_graph(
            "Biotechnica_Vine",
            palette::interior_stages([0.1, 0.4, 0.12, 1.0], 0.9),
        )?;
        ctx.scene.assign_material(vine, moss);
        handle.push_part("vines", vine);
    }

    // culture vats around the base, glowing green
    let vat_glass = ctx.materials.build_graph(
        "Biotechnica_VatGlass",
        palette::glass_stages([0.2, 1.0, 0.4, 1.0], 0.9, 1.5),
    )?;
    for (i, (_, offset)) in ring_positions(VAT_COUNT, TOWER_RADIUS + 5.0, 2.0).enumerate() {
        let vat = ctx.scene.spawn(
            &format!("{}_Vat_{i}", desc.name),
            &PrimitiveSpec::Cylinder {
                segments: 16,
                radius: 2.0,
                depth: 4.0,
            },
            part_transform(desc, offset),
            group,
        );
        ctx.scene.assign_material(vat, vat_glass.clone());
        handle.push_part("vats", vat);
    }

    // DNA display panes over the entrance
    let helix_glow = ctx.materials.build_graph(
        &format!("{}_Helix", desc.name),
        palette::emission_stages([0.3, 0.9, 1.0, 1.0], 2.2),
    )?;
    for i in 0..DNA_COUNT {
        let x = (i as f32 - 1.0) * 4.0;
        let mut transform =
            part_transform(desc, Vec3::new(x, -TOWER_RADIUS - 0.3, 8.0));
        transform.rotation = Quat::from_rotation_x(FRAC_PI_2);
        let pane = ctx.scene.spawn(
            &format!("{}_DnaDisplay_{i}", desc.name),
            &PrimitiveSpec::Plane { size: 3.0 },
            transform,
            group,
        );
        ctx.scene.assign_material(pane, helix_glow.clone());
        handle.push_part("dna_displays", pane);
    }

    Ok(handle)
}
