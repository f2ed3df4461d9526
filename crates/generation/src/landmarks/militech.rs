//! Militech Armory: an upper-tier fortress that wants to be seen.
//!
//! Solid fortress block, three bands of turret ports on all four sides,
//! and glowing edge accents running up the corners.

use std::f32::consts::FRAC_PI_2;

use bevy::math::{Quat, Vec3};
use engine::{EngineError, PrimitiveSpec, Vec3Spec};

use crate::config::BuildingDescriptor;
use crate::palette;
use crate::GenContext;

use super::{landmark_group, part_transform, tier_material, LandmarkHandle};

const FOOTPRINT: f32 = 25.0;
const HEIGHT: f32 = 50.0;
const TURRET_LEVELS: u32 = 3;

pub(super) fn generate(
    ctx: &mut GenContext,
    desc: &BuildingDescriptor,
) -> Result<LandmarkHandle, EngineError> {
    let group = landmark_group(ctx, desc);
    let tier = tier_material(ctx, desc)?;

    let fortress = ctx.scene.spawn(
        &format!("{}_Fortress", desc.name),
        &PrimitiveSpec::Cube {
            size: Vec3Spec::new(FOOTPRINT, FOOTPRINT, HEIGHT),
        },
        part_transform(desc, Vec3::new(0.0, 0.0, HEIGHT * 0.5)),
        group,
    );
    ctx.scene.assign_material(fortress, tier.clone());

    let mut handle = LandmarkHandle::new(&desc.name, desc.tier, group, fortress);

    // turret ports: one per side per band, poking out of the wall plane
    let half = FOOTPRINT * 0.5;
    let sides: [(Vec3, Quat); 4] = [
        (Vec3::new(0.0, -half - 0.75, 0.0), Quat::from_rotation_x(FRAC_PI_2)),
        (Vec3::new(half + 0.75, 0.0, 0.0), Quat::from_rotation_y(FRAC_PI_2)),
        (Vec3::new(0.0, half + 0.75, 0.0), Quat::from_rotation_x(FRAC_PI_2)),
        (Vec3::new(-half - 0.75, 0.0, 0.0), Quat::from_rotation_y(FRAC_PI_2)),
    ];
    for level in 0..TURRET_LEVELS {
        let z = HEIGHT * (level + 1) as f32 / (TURRET_LEVELS + 1) as f32;
        for (side, (offset, rotation)) in sides.iter().enumerate() {
            let mut transform = part_transform(desc, *offset + Vec3::Z * z);
            transform.rotation = *rotation;
            let turret = ctx.scene.spawn(
                &format!("{}_Turret_L{level}_S{side}", desc.name),
                &PrimitiveSpec::Cylinder {
                    segments: 10,
                    radius: 1.5,
                    depth: 1.5,
                },
                transform,
                group,
            );
            ctx.scene.assign_material(turret, tier.clone());
            handle.push_part("turrets", turret);
        }
    }

    // corner accent tubes, full height
    let accent_glow = ctx.materials.build_graph(
        &format!("{}_Accent", desc.name),
        palette::emission_stages([0.9, 0.25, 0.05, 1.0], 1.8),
    )?;
    for (i, (sx, sy)) in [(1.0_f32, 1.0_f32), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)]
        .iter()
        .enumerate()
    {
        let accent = ctx.scene.spawn(
            &format!("{}_EdgeAccent_{i}", desc.name),
            &PrimitiveSpec::Cylinder {
                segments: 8,
                radius: 0.3,
                depth: HEIGHT,
            },
            part_transform(desc, Vec3::new(sx * half, sy * half, HEIGHT * 0.5)),
            group,
        );
        ctx.scene.assign_material(accent, accent_glow.clone());
        handle.push_part("edge_accents", accent);
    }

    Ok(handle)
}
