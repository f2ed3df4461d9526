//! Street-level entrance assemblies, one flavor per landmark.
//!
//! The Biotechnica spire gets the full airlock treatment (organic frame,
//! chamber, decontamination nozzles, logo glass); everything else gets a
//! sliding double door fitted to its hull. Entrances anchor to the
//! landmark's measured world bounds, never to recomputed geometry.

use std::f32::consts::FRAC_PI_2;

use bevy::math::{Quat, Vec3};
use bevy::prelude::Transform;
use engine::{EngineError, ObjectId, PrimitiveSpec, Vec3Spec};

use crate::config::{BuildingDescriptor, LandmarkKind};
use crate::landmarks::LandmarkHandle;
use crate::palette;
use crate::GenContext;

/// Build the entrance for one landmark, filed under an `Entrance` subgroup
/// of its leaf group. Landmarks whose primary bounds cannot be measured
/// (empty mesh) are skipped with a diagnostic per the missing-substructure
/// policy.
pub fn generate_entrance(
    ctx: &mut GenContext,
    handle: &LandmarkHandle,
    desc: &BuildingDescriptor,
) -> Result<Vec<ObjectId>, EngineError> {
    let Some(bounds) = ctx.scene.world_bounds(handle.primary()) else {
        ctx.diagnostics.skip(
            "interiors",
            format!("entrance {}", handle.name()),
            "primary substructure has no measurable bounds",
        );
        return Ok(Vec::new());
    };

    let group_name = ctx.scene.group(handle.group()).name().to_string();
    let group = ctx
        .scene
        .get_or_create_group(&[desc.tier.label(), group_name.as_str(), "Entrance"]);

    // doorway on the south face, at ground level
    let door_center = Vec3::new(
        bounds.center().x,
        bounds.min.y - 0.2,
        bounds.min.z.max(0.0),
    );

    match desc.kind {
        LandmarkKind::Biotechnica => airlock(ctx, handle, group, door_center),
        _ => sliding_door(ctx, handle, group, door_center),
    }
}

/// Double sliding door: frame, two panels, status strip.
fn sliding_door(
    ctx: &mut GenContext,
    handle: &LandmarkHandle,
    group: engine::GroupId,
    center: Vec3,
) -> Result<Vec<ObjectId>, EngineError> {
    let interior = ctx.materials.build_graph(
        &format!("{}_Interior", handle.name()),
        palette::interior_stages([0.14, 0.14, 0.16, 1.0], 0.6),
    )?;
    let mut ids = Vec::new();

    let frame = ctx.scene.spawn(
        &format!("{}_DoorFrame", handle.name()),
        &PrimitiveSpec::Cube {
            size: Vec3Spec::new(3.2, 0.4, 3.4),
        },
        Transform::from_translation(center + Vec3::Z * 1.7),
        group,
    );
    ctx.scene.assign_material(frame, interior.clone());
    ids.push(frame);

    for (i, sx) in [-1.0_f32, 1.0].iter().enumerate() {
        let panel = ctx.scene.spawn(
            &format!("{}_DoorPanel_{i}", handle.name()),
            &PrimitiveSpec::Cube {
                size: Vec3Spec::new(1.4, 0.1, 3.0),
            },
            Transform::from_translation(center + Vec3::new(sx * 0.75, -0.1, 1.5)),
            group,
        );
        ctx.scene.assign_material(panel, interior.clone());
        ids.push(panel);
    }

    let strip_glow = ctx
        .materials
        .build_graph("Hologram", palette::hologram_stages())?;
    let strip = ctx.scene.spawn(
        &format!("{}_DoorStrip", handle.name()),
        &PrimitiveSpec::Cube {
            size: Vec3Spec::new(3.0, 0.05, 0.1),
        },
        Transform::from_translation(center + Vec3::new(0.0, -0.25, 3.45)),
        group,
    );
    ctx.scene.assign_material(strip, strip_glow);
    ids.push(strip);

    Ok(ids)
}

/// Biotechnica airlock: organic door frame, airlock chamber, eight
/// decontamination nozzles around the opening, and the backlit logo pane.
fn airlock(
    ctx: &mut GenContext,
    handle: &LandmarkHandle,
    group: engine::GroupId,
    center: Vec3,
) -> Result<Vec<ObjectId>, EngineError> {
    let white = ctx.materials.build_graph(
        "Biotechnica_Interior",
        palette::interior_wall_stages(LandmarkKind::Biotechnica),
    )?;
    let mut ids = Vec::new();

    // torus frame, stood upright around the opening
    let frame = ctx.scene.spawn(
        &format!("{}_AirlockFrame", handle.name()),
        &PrimitiveSpec::Torus {
            major_segments: 24,
            minor_segments: 10,
            major_radius: 2.2,
            minor_radius: 0.35,
        },
        Transform::from_translation(center + Vec3::Z * 2.2)
            .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        group,
    );
    ctx.scene.assign_material(frame, white.clone());
    ids.push(frame);

    let chamber = ctx.scene.spawn(
        &format!("{}_AirlockChamber", handle.name()),
        &PrimitiveSpec::Cube {
            size: Vec3Spec::new(4.5, 3.0, 4.5),
        },
        Transform::from_translation(center + Vec3::new(0.0, -1.8, 2.25)),
        group,
    );
    ctx.scene.assign_material(chamber, white.clone());
    ids.push(chamber);

    for i in 0..8 {
        let angle = i as f32 / 8.0 * std::f32::consts::TAU;
        let nozzle = ctx.scene.spawn(
            &format!("{}_Nozzle_{i}", handle.name()),
            &PrimitiveSpec::Cone {
                segments: 8,
                radius_bottom: 0.12,
                radius_top: 0.04,
                depth: 0.4,
            },
            Transform::from_translation(
                center + Vec3::new(angle.cos() * 1.8, -0.3, 2.2 + angle.sin() * 1.8),
            )
            .with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            group,
        );
        ctx.scene.assign_material(nozzle, white.clone());
        ids.push(nozzle);
    }

    let logo_glass = ctx.materials.build_graph(
        "Biotechnica_LogoGlass",
        palette::glass_stages([0.4, 1.0, 0.5, 1.0], 0.6, 1.0),
    )?;
    let logo = ctx.scene.spawn(
        &format!("{}_Logo", handle.name()),
        &PrimitiveSpec::Circle {
            segments: 24,
            radius: 1.0,
        },
        Transform::from_translation(center + Vec3::new(0.0, -0.4, 5.2))
            .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        group,
    );
    ctx.scene.assign_material(logo, logo_glass);
    ids.push(logo);

    Ok(ids)
}
