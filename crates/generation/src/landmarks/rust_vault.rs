//! Rust Vault: a sealed lower-tier bank vault, long since looted.
//!
//! Circular vault door set into a face, scorch marks around the breach, a
//! no-entry sign, the hollow interior shell, a red neon tube someone
//! wired up inside, leaking pipes, and the stash safe in the corner.

use std::f32::consts::FRAC_PI_2;

use bevy::math::{Quat, Vec3};
use engine::{AxesMask, EngineError, PrimitiveSpec, Vec3Spec};
use rand::Rng;

use crate::config::BuildingDescriptor;
use crate::palette;
use crate::GenContext;

use super::{landmark_group, part_transform, LandmarkHandle};

const DOOR_RADIUS: f32 = 5.0;
const SCORCH_COUNT: u32 = 5;
const PIPE_COUNT: u32 = 3;
const SHELL_SIZE: f32 = 8.0;

pub(super) fn generate(
    ctx: &mut GenContext,
    desc: &BuildingDescriptor,
) -> Result<LandmarkHandle, EngineError> {
    let group = landmark_group(ctx, desc);
    let rusted = ctx
        .materials
        .build_graph("RustVault_Weathered", palette::rust_vault_stages())?;

    // the interior shell is the structure; the door hangs on its south face
    let shell = ctx.scene.spawn(
        &format!("{}_Shell", desc.name),
        &PrimitiveSpec::Cube {
            size: Vec3Spec::splat(SHELL_SIZE),
        },
        part_transform(desc, Vec3::new(0.0, 0.0, SHELL_SIZE * 0.5)),
        group,
    );
    let magnitude = desc.tier.distort_magnitude();
    let mut session = ctx.scene.begin_edit(shell)?;
    session.distort(
        0.4,
        (-magnitude, magnitude),
        AxesMask::ALL,
        &mut ctx.rng.0,
        &mut ctx.diagnostics,
    )?;
    ctx.scene.end_edit(&mut session)?;
    ctx.scene.assign_material(shell, rusted.clone());

    let mut handle = LandmarkHandle::new(&desc.name, desc.tier, group, shell);

    let mut door_transform =
        part_transform(desc, Vec3::new(0.0, -(SHELL_SIZE * 0.5) - 0.5, 5.0));
    door_transform.rotation = Quat::from_rotation_x(FRAC_PI_2);
    let door = ctx.scene.spawn(
        &format!("{}_Door", desc.name),
        &PrimitiveSpec::Cylinder {
            segments: 32,
            radius: DOOR_RADIUS,
            depth: 1.0,
        },
        door_transform,
        group,
    );
    ctx.scene.assign_material(door, rusted.clone());
    handle.insert_part("door", door);

    // scorch marks where someone tried to cut through
    let scorch = ctx.materials.build_graph(
        "Scorch_Mark",
        palette::interior_stages([0.03, 0.03, 0.03, 1.0], 0.95),
    )?;
    for i in 0..SCORCH_COUNT {
        let angle = ctx.rng.0.gen_range(0.0..std::f32::consts::TAU);
        let r = ctx.rng.0.gen_range(2.0..DOOR_RADIUS + 1.5);
        let mut transform = part_transform(
            desc,
            Vec3::new(
                angle.cos() * r,
                -(SHELL_SIZE * 0.5) - 1.05,
                5.0 + angle.sin() * r,
            ),
        );
        transform.rotation = Quat::from_rotation_x(FRAC_PI_2);
        let mark = ctx.scene.spawn(
            &format!("{}_Scorch_{i}", desc.name),
            &PrimitiveSpec::Circle {
                segments: 10,
                radius: ctx.rng.0.gen_range(0.4..1.0),
            },
            transform,
            group,
        );
        ctx.scene.assign_material(mark, scorch.clone());
        handle.push_part("scorch_marks", mark);
    }

    let sign_glow = ctx.materials.build_graph(
        &format!("{}_Sign", desc.name),
        palette::emission_stages([1.0, 0.08, 0.05, 1.0], 2.0),
    )?;
    let mut transform = part_transform(desc, Vec3::new(0.0, -(SHELL_SIZE * 0.5) - 0.6, 9.5));
    transform.rotation = Quat::from_rotation_x(FRAC_PI_2);
    let sign = ctx.scene.spawn(
        &format!("{}_Sign", desc.name),
        &PrimitiveSpec::Plane { size: 2.5 },
        transform,
        group,
    );
    ctx.scene.assign_material(sign, sign_glow);
    handle.insert_part("sign", sign);

    // red neon tube along the interior ceiling
    let neon = ctx
        .materials
        .build_graph("Neon_Light", palette::neon_light_stages())?;
    let mut tube_transform = part_transform(desc, Vec3::new(0.0, 0.0, SHELL_SIZE - 0.5));
    tube_transform.rotation = Quat::from_rotation_y(FRAC_PI_2);
    let tube = ctx.scene.spawn(
        &format!("{}_NeonTube", desc.name),
        &PrimitiveSpec::Cylinder {
            segments: 8,
            radius: 0.15,
            depth: SHELL_SIZE - 1.0,
        },
        tube_transform,
        group,
    );
    ctx.scene.assign_material(tube, neon);
    handle.insert_part("neon_tube", tube);

    for i in 0..PIPE_COUNT {
        let x = -3.0 + i as f32 * 3.0;
        let pipe = ctx.scene.spawn(
            &format!("{}_Pipe_{i}", desc.name),
            &PrimitiveSpec::Cylinder {
                segments: 8,
                radius: 0.3,
                depth: SHELL_SIZE,
            },
            part_transform(desc, Vec3::new(x, SHELL_SIZE * 0.5 - 0.4, SHELL_SIZE * 0.5)),
            group,
        );
        ctx.scene.assign_material(pipe, rusted.clone());
        handle.push_part("pipes", pipe);
    }

    let safe = ctx.scene.spawn(
        &format!("{}_Safe", desc.name),
        &PrimitiveSpec::Cube {
            size: Vec3Spec::new(1.5, 1.5, 2.0),
        },
        part_transform(desc, Vec3::new(2.8, 2.8, 1.0)),
        group,
    );
    ctx.scene.assign_material(safe, rusted);
    handle.insert_part("safe", safe);

    Ok(handle)
}
