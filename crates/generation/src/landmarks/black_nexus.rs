//! Black Nexus: a lower-tier data den squeezed into a street-level box.
//!
//! Station hull, rusted roof hatch, flickering cyan sign, binary graffiti
//! panes, and acid-rain streaks running down the walls.

use std::f32::consts::FRAC_PI_2;

use bevy::math::{Quat, Vec3};
use engine::{AxesMask, EngineError, PrimitiveSpec, Vec3Spec};
use rand::Rng;

use crate::config::BuildingDescriptor;
use crate::palette;
use crate::GenContext;

use super::{landmark_group, part_transform, tier_material, LandmarkHandle};

const HULL_SIZE: Vec3Spec = Vec3Spec::new(15.0, 10.0, 6.0);
const GRAFFITI_COUNT: u32 = 3;
const STREAK_COUNT: u32 = 5;

pub(super) fn generate(
    ctx: &mut GenContext,
    desc: &BuildingDescriptor,
) -> Result<LandmarkHandle, EngineError> {
    let group = landmark_group(ctx, desc);
    let tier = tier_material(ctx, desc)?;

    let hull = ctx.scene.spawn(
        &format!("{}_Hull", desc.name),
        &PrimitiveSpec::Cube { size: HULL_SIZE },
        part_transform(desc, Vec3::new(0.0, 0.0, HULL_SIZE.z * 0.5)),
        group,
    );
    let magnitude = desc.tier.distort_magnitude();
    let mut session = ctx.scene.begin_edit(hull)?;
    session.distort(
        0.5,
        (-magnitude, magnitude),
        AxesMask::ALL,
        &mut ctx.rng.0,
        &mut ctx.diagnostics,
    )?;
    ctx.scene.end_edit(&mut session)?;
    ctx.scene.assign_material(hull, tier.clone());

    let mut handle = LandmarkHandle::new(&desc.name, desc.tier, group, hull);

    let hatch = ctx.scene.spawn(
        &format!("{}_Hatch", desc.name),
        &PrimitiveSpec::Cylinder {
            segments: 12,
            radius: 1.5,
            depth: 0.3,
        },
        part_transform(desc, Vec3::new(4.0, 2.0, HULL_SIZE.z + 0.15)),
        group,
    );
    let rusted = ctx
        .materials
        .build_graph("RustVault_Weathered", palette::rust_vault_stages())?;
    ctx.scene.assign_material(hatch, rusted);
    handle.insert_part("hatch", hatch);

    // flickering shopfront sign above the door
    let sign_glow = ctx.materials.build_graph(
        &format!("{}_Sign", desc.name),
        palette::emission_stages([0.0, 0.9, 1.0, 1.0], 2.0),
    )?;
    let mut transform = part_transform(desc, Vec3::new(0.0, -(HULL_SIZE.y * 0.5) - 0.1, 5.0));
    transform.rotation = Quat::from_rotation_x(FRAC_PI_2);
    let sign = ctx.scene.spawn(
        &format!("{}_Sign", desc.name),
        &PrimitiveSpec::Plane { size: 4.0 },
        transform,
        group,
    );
    ctx.scene.assign_material(sign, sign_glow);
    handle.insert_part("sign", sign);

    for i in 0..GRAFFITI_COUNT {
        let x = ctx.rng.0.gen_range(-6.0..6.0);
        let z = ctx.rng.0.gen_range(1.0..5.0);
        let mut transform =
            part_transform(desc, Vec3::new(x, -(HULL_SIZE.y * 0.5) - 0.05, z));
        transform.rotation = Quat::from_rotation_x(FRAC_PI_2);
        let graffiti = ctx.scene.spawn(
            &format!("{}_Graffiti_{i}", desc.name),
            &PrimitiveSpec::Plane { size: 1.5 },
            transform,
            group,
        );
        let glow = ctx.materials.build_graph(
            &format!("{}_Graffiti_{i}", desc.name),
            palette::emission_stages([0.1, 1.0, 0.3, 1.0], 1.2),
        )?;
        ctx.scene.assign_material(graffiti, glow);
        handle.push_part("graffiti", graffiti);
    }

    // translucent acid streaks running down the front wall
    let acid = ctx.materials.build_graph(
        "Acid_Streak",
        palette::glass_stages([0.5, 0.7, 0.3, 0.6], 0.7, 0.0),
    )?;
    for i in 0..STREAK_COUNT {
        let x = ctx.rng.0.gen_range(-7.0..7.0);
        let length = ctx.rng.0.gen_range(2.0..5.0);
        let mut transform = part_transform(
            desc,
            Vec3::new(x, -(HULL_SIZE.y * 0.5) - 0.02, HULL_SIZE.z - length * 0.5),
        );
        transform.rotation = Quat::from_rotation_x(FRAC_PI_2);
        transform.scale *= Vec3::new(0.15, length / 2.0, 1.0);
        let streak = ctx.scene.spawn(
            &format!("{}_AcidStreak_{i}", desc.name),
            &PrimitiveSpec::Plane { size: 2.0 },
            transform,
            group,
        );
        ctx.scene.assign_material(streak, acid.clone());
        handle.push_part("acid_streaks", streak);
    }

    Ok(handle)
}
