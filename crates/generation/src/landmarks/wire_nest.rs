//! Wire Nest: a scavenger roost strung off an old billboard frame.
//!
//! Elevated anchor. Billboard frame, shredded holo-ads (subdivided,
//! jittered, randomly holed), a rope ladder, squatters' platforms, the
//! data-tree sculpture grown by random branch extrusions, and a ceiling
//! web.

use std::f32::consts::FRAC_PI_2;

use bevy::math::{Quat, Vec3};
use engine::{AxesMask, EngineError, PrimitiveSpec, Vec3Spec};
use rand::Rng;

use crate::config::BuildingDescriptor;
use crate::palette;
use crate::GenContext;

use super::{landmark_group, part_transform, tier_material, LandmarkHandle};

const FRAME_SIZE: Vec3Spec = Vec3Spec::new(10.0, 0.5, 15.0);
const AD_COUNT: u32 = 3;
const PLATFORM_COUNT: u32 = 3;
const BRANCH_COUNT: u32 = 8;
const LADDER_DROP: f32 = 15.0;

pub(super) fn generate(
    ctx: &mut GenContext,
    desc: &BuildingDescriptor,
) -> Result<LandmarkHandle, EngineError> {
    let group = landmark_group(ctx, desc);
    let tier = tier_material(ctx, desc)?;

    let frame = ctx.scene.spawn(
        &format!("{}_Frame", desc.name),
        &PrimitiveSpec::Cube { size: FRAME_SIZE },
        part_transform(desc, Vec3::new(0.0, 0.0, FRAME_SIZE.z * 0.5)),
        group,
    );
    ctx.scene.assign_material(frame, tier.clone());

    let mut handle = LandmarkHandle::new(&desc.name, desc.tier, group, frame);

    // shredded holo-ads hanging off the frame face
    for i in 0..AD_COUNT {
        let z = 3.0 + i as f32 * 4.5;
        let mut transform = part_transform(desc, Vec3::new(0.0, -0.6, z));
        transform.rotation = Quat::from_rotation_x(FRAC_PI_2);
        let ad = ctx.scene.spawn(
            &format!("{}_ShreddedAd_{i}", desc.name),
            &PrimitiveSpec::Plane { size: 5.0 },
            transform,
            group,
        );
        let cuts: u32 = ctx.rng.0.gen_range(3..=5);
        let mut session = ctx.scene.begin_edit(ad)?;
        session.subdivide_and_jitter(
            cuts,
            0.4,
            (-0.4, 0.4),
            AxesMask::ALL,
            &mut ctx.rng.0,
            &mut ctx.diagnostics,
        )?;
        // tear holes in roughly a fifth of the sheet
        let rng = &mut ctx.rng.0;
        session.delete_faces_where(
            |_, _, _| rng.gen::<f32>() > 0.8,
            &mut ctx.diagnostics,
        )?;
        ctx.scene.end_edit(&mut session)?;
        let glow = ctx.materials.build_graph(
            &format!("{}_Ad_{i}", desc.name),
            palette::emission_stages(
                [
                    ctx.rng.0.gen_range(0.3..1.0),
                    ctx.rng.0.gen_range(0.3..1.0),
                    ctx.rng.0.gen_range(0.3..1.0),
                    1.0,
                ],
                1.5,
            ),
        )?;
        ctx.scene.assign_material(ad, glow);
        handle.push_part("shredded_ads", ad);
    }

    // rope ladder down to street level: two rails and rungs
    for (i, x) in [-0.4_f32, 0.4].iter().enumerate() {
        let rail = ctx.scene.spawn(
            &format!("{}_LadderRail_{i}", desc.name),
            &PrimitiveSpec::Cylinder {
                segments: 6,
                radius: 0.2,
                depth: LADDER_DROP,
            },
            part_transform(desc, Vec3::new(*x + 4.0, -1.0, -LADDER_DROP * 0.5)),
            group,
        );
        ctx.scene.assign_material(rail, tier.clone());
        handle.push_part("ladder_rails", rail);
    }
    for i in 0..8 {
        let z = -1.0 - i as f32 * 1.8;
        let mut transform = part_transform(desc, Vec3::new(4.0, -1.0, z));
        transform.rotation = Quat::from_rotation_y(FRAC_PI_2);
        let rung = ctx.scene.spawn(
            &format!("{}_LadderRung_{i}", desc.name),
            &PrimitiveSpec::Cylinder {
                segments: 6,
                radius: 0.08,
                depth: 1.0,
            },
            transform,
            group,
        );
        ctx.scene.assign_material(rung, tier.clone());
        handle.push_part("ladder_rungs", rung);
    }

    for i in 0..PLATFORM_COUNT {
        let platform = ctx.scene.spawn(
            &format!("{}_Platform_{i}", desc.name),
            &PrimitiveSpec::Cube {
                size: Vec3Spec::new(4.0, 3.0, 0.3),
            },
            part_transform(
                desc,
                Vec3::new(
                    ctx.rng.0.gen_range(-4.0..4.0),
                    ctx.rng.0.gen_range(1.0..3.0),
                    2.0 + i as f32 * 4.0,
                ),
            ),
            group,
        );
        ctx.scene.assign_material(platform, tier.clone());
        handle.push_part("platforms", platform);
    }

    // the data-tree: a cone trunk with branches grown by extrusion
    let tree = ctx.scene.spawn(
        &format!("{}_DataTree", desc.name),
        &PrimitiveSpec::Cone {
            segments: 8,
            radius_bottom: 1.5,
            radius_top: 0.2,
            depth: 10.0,
        },
        part_transform(desc, Vec3::new(-4.0, 2.0, 5.0)),
        group,
    );
    let mut session = ctx.scene.begin_edit(tree)?;
    for _ in 0..BRANCH_COUNT {
        let face_count = session.mesh()?.face_count();
        let face = ctx.rng.0.gen_range(0..face_count);
        let normal = session.mesh()?.face_normal(&session.mesh()?.faces[face]);
        let push = normal * ctx.rng.0.gen_range(1.0..3.0)
            + Vec3::Z * ctx.rng.0.gen_range(0.5..1.5);
        session.extrude_region(face, push, Some(0.5), &mut ctx.diagnostics)?;
    }
    ctx.scene.end_edit(&mut session)?;
    let hologram = ctx
        .materials
        .build_graph("Hologram", palette::hologram_stages())?;
    ctx.scene.assign_material(tree, hologram);
    handle.insert_part("data_tree", tree);

    // sagging web plane strung over the nest
    let mut transform = part_transform(desc, Vec3::new(0.0, 1.5, FRAME_SIZE.z + 0.5));
    transform.rotation = Quat::from_rotation_x(0.15);
    let web = ctx.scene.spawn(
        &format!("{}_Web", desc.name),
        &PrimitiveSpec::Grid { cuts: 4, size: 9.0 },
        transform,
        group,
    );
    let mut session = ctx.scene.begin_edit(web)?;
    session.distort(
        0.6,
        (-0.6, 0.2),
        AxesMask::Z_ONLY,
        &mut ctx.rng.0,
        &mut ctx.diagnostics,
    )?;
    ctx.scene.end_edit(&mut session)?;
    ctx.scene.assign_material(web, tier);
    handle.insert_part("web", web);

    Ok(handle)
}
