//! Specter Station: a derelict mid-tier broadcast spire.
//!
//! Six-segment skeletal mast (alternating side faces deleted), tilted
//! antennae of randomized height, broken solar panels, an observation deck,
//! and a purple call-sign glyph. The hull wears the rust-over-metal
//! weathering ramp.

use std::f32::consts::FRAC_PI_2;

use bevy::math::{Quat, Vec3};
use engine::{AxesMask, EngineError, PrimitiveSpec};
use rand::Rng;

use crate::config::BuildingDescriptor;
use crate::palette;
use crate::GenContext;

use super::{landmark_group, part_transform, ring_positions, LandmarkHandle};

const SPIRE_HEIGHT: f32 = 80.0;
const SPIRE_RADIUS: f32 = 5.0;
const ANTENNA_COUNT: u32 = 8;
const PANEL_COUNT: u32 = 5;

pub(super) fn generate(
    ctx: &mut GenContext,
    desc: &BuildingDescriptor,
) -> Result<LandmarkHandle, EngineError> {
    let group = landmark_group(ctx, desc);
    let weathered = ctx
        .materials
        .build_graph("Specter_Weathered", palette::specter_weathered_stages())?;

    let spire = ctx.scene.spawn(
        &format!("{}_Spire", desc.name),
        &PrimitiveSpec::Cylinder {
            segments: 6,
            radius: SPIRE_RADIUS,
            depth: SPIRE_HEIGHT,
        },
        part_transform(desc, Vec3::new(0.0, 0.0, SPIRE_HEIGHT * 0.5)),
        group,
    );
    let mut session = ctx.scene.begin_edit(spire)?;
    // strip alternating side walls for the skeletal look; caps stay
    let mut side = 0u32;
    session.delete_faces_where(
        |_, _, normal| {
            if normal.z.abs() < 0.5 {
                side += 1;
                side % 2 == 1
            } else {
                false
            }
        },
        &mut ctx.diagnostics,
    )?;
    session.distort(
        0.4,
        (-desc.tier.distort_magnitude(), desc.tier.distort_magnitude()),
        AxesMask::ALL,
        &mut ctx.rng.0,
        &mut ctx.diagnostics,
    )?;
    ctx.scene.end_edit(&mut session)?;
    ctx.scene.assign_material(spire, weathered.clone());

    let mut handle = LandmarkHandle::new(&desc.name, desc.tier, group, spire);

    // antennae around the mast top, randomly tall, slightly tilted
    for (i, (angle, offset)) in
        ring_positions(ANTENNA_COUNT, SPIRE_RADIUS * 0.8, SPIRE_HEIGHT).enumerate()
    {
        let height = ctx.rng.0.gen_range(10.0..20.0);
        let tilt = ctx.rng.0.gen_range(-0.1..0.1);
        let mut transform = part_transform(desc, offset + Vec3::Z * (height * 0.5));
        transform.rotation = Quat::from_rotation_z(angle) * Quat::from_rotation_x(tilt);
        let antenna = ctx.scene.spawn(
            &format!("{}_Antenna_{i}", desc.name),
            &PrimitiveSpec::Cylinder {
                segments: 6,
                radius: 0.5,
                depth: height,
            },
            transform,
            group,
        );
        ctx.scene.assign_material(antenna, weathered.clone());
        handle.push_part("antennae", antenna);
    }

    // solar panels, subdivided and jittered so most read as broken
    for (i, (angle, offset)) in ring_positions(PANEL_COUNT, SPIRE_RADIUS + 3.0, 45.0).enumerate() {
        let mut transform = part_transform(desc, offset);
        transform.rotation = Quat::from_rotation_z(angle) * Quat::from_rotation_x(FRAC_PI_2);
        let panel = ctx.scene.spawn(
            &format!("{}_SolarPanel_{i}", desc.name),
            &PrimitiveSpec::Plane { size: 4.0 },
            transform,
            group,
        );
        let mut session = ctx.scene.begin_edit(panel)?;
        session.subdivide_and_jitter(
            2,
            0.3,
            (-0.5, 0.5),
            AxesMask::ALL,
            &mut ctx.rng.0,
            &mut ctx.diagnostics,
        )?;
        ctx.scene.end_edit(&mut session)?;
        ctx.scene.assign_material(panel, weathered.clone());
        handle.push_part("solar_panels", panel);
    }

    let deck = ctx.scene.spawn(
        &format!("{}_Deck", desc.name),
        &PrimitiveSpec::Cylinder {
            segments: 16,
            radius: 8.0,
            depth: 2.0,
        },
        part_transform(desc, Vec3::new(0.0, 0.0, 60.0)),
        group,
    );
    ctx.scene.assign_material(deck, weathered);
    handle.insert_part("deck", deck);

    // dead-channel purple call sign on the deck rim
    let glyph_glow = ctx.materials.build_graph(
        &format!("{}_Glyph", desc.name),
        palette::emission_stages([0.6, 0.1, 0.9, 1.0], 2.5),
    )?;
    let mut transform = part_transform(desc, Vec3::new(0.0, 8.2, 62.0));
    transform.rotation = Quat::from_rotation_x(FRAC_PI_2);
    let glyph = ctx.scene.spawn(
        &format!("{}_Glyph", desc.name),
        &PrimitiveSpec::Plane { size: 3.0 },
        transform,
        group,
    );
    ctx.scene.assign_material(glyph, glyph_glow);
    handle.insert_part("glyph", glyph);

    Ok(handle)
}
