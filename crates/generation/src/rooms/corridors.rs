//! Corridor geometry: horizontal connecting boxes and vertical shafts.
//!
//! A vertical shaft gets either ladder rungs or a spiral stair, drawn
//! against `LADDER_WEIGHT` from the context's seeded stream; the caller
//! records the draw so a run can be replayed from its log.

use std::sync::Arc;

use bevy::math::{Quat, Vec3};
use bevy::prelude::Transform;
use engine::{GroupId, MaterialGraph, ObjectId, PrimitiveSpec, Vec3Spec};
use rand::Rng;

use crate::config::{LADDER_RUNG_SPACING, LADDER_WEIGHT, STAIR_ANGLE_STEP, STAIR_RISE};
use crate::GenContext;

const MIN_SPAN: f32 = 1e-3;

/// Oriented box between two room centers, on the lower of the two floor
/// heights. Returns `None` (with a diagnostic) when the centers coincide
/// in the XY plane.
#[allow(clippy::too_many_arguments)]
pub fn horizontal_corridor(
    ctx: &mut GenContext,
    group: GroupId,
    name: &str,
    start: Vec3,
    end: Vec3,
    width: f32,
    height: f32,
    material: &Arc<MaterialGraph>,
) -> Option<ObjectId> {
    let delta = (end - start).truncate();
    let length = delta.length();
    if length < MIN_SPAN {
        ctx.diagnostics.skip(
            "rooms",
            format!("corridor {name}"),
            "horizontal span is degenerate",
        );
        return None;
    }
    let mid = (start + end) * 0.5;
    let z = start.z.min(end.z);
    let yaw = delta.y.atan2(delta.x);
    let id = ctx.scene.spawn(
        name,
        &PrimitiveSpec::Cube {
            size: Vec3Spec::new(length, width, height),
        },
        Transform::from_translation(Vec3::new(mid.x, mid.y, z))
            .with_rotation(Quat::from_rotation_z(yaw)),
        group,
    );
    ctx.scene.assign_material(id, Arc::clone(material));
    Some(id)
}

/// Vertical shaft between two room centers: a cylinder tube plus either
/// ladder rungs or a spiral stair. Returns the fitting label, or `None`
/// (with a diagnostic) when the rooms share a floor height.
pub fn vertical_shaft(
    ctx: &mut GenContext,
    group: GroupId,
    name: &str,
    start: Vec3,
    end: Vec3,
    radius: f32,
    material: &Arc<MaterialGraph>,
) -> Option<&'static str> {
    let (low, high) = if start.z <= end.z {
        (start, end)
    } else {
        (end, start)
    };
    let span = high.z - low.z;
    if span < MIN_SPAN {
        ctx.diagnostics.skip(
            "rooms",
            format!("corridor {name}"),
            "vertical span is degenerate",
        );
        return None;
    }

    let center = Vec3::new(low.x, low.y, low.z + span * 0.5);
    let tube = ctx.scene.spawn(
        &format!("{name}_Shaft"),
        &PrimitiveSpec::Cylinder {
            segments: 16,
            radius,
            depth: span,
        },
        Transform::from_translation(center),
        group,
    );
    ctx.scene.assign_material(tube, Arc::clone(material));

    let fitting = if ctx.rng.0.gen::<f32>() < LADDER_WEIGHT {
        ladder(ctx, group, name, low, span, radius, material);
        "ladder"
    } else {
        spiral_stairs(ctx, group, name, low, span, radius, material);
        "stairs"
    };
    Some(fitting)
}

fn ladder(
    ctx: &mut GenContext,
    group: GroupId,
    name: &str,
    base: Vec3,
    span: f32,
    radius: f32,
    material: &Arc<MaterialGraph>,
) {
    let rail_offset = radius * 0.6;
    for (i, sx) in [-1.0_f32, 1.0].iter().enumerate() {
        let rail = ctx.scene.spawn(
            &format!("{name}_Rail_{i}"),
            &PrimitiveSpec::Cube {
                size: Vec3Spec::new(0.06, 0.06, span),
            },
            Transform::from_translation(base + Vec3::new(sx * 0.25, -rail_offset, span * 0.5)),
            group,
        );
        ctx.scene.assign_material(rail, Arc::clone(material));
    }
    let rungs = (span / LADDER_RUNG_SPACING).floor() as u32;
    for i in 0..rungs {
        let z = (i as f32 + 0.5) * LADDER_RUNG_SPACING;
        let rung = ctx.scene.spawn(
            &format!("{name}_Rung_{i}"),
            &PrimitiveSpec::Cube {
                size: Vec3Spec::new(0.56, 0.05, 0.05),
            },
            Transform::from_translation(base + Vec3::new(0.0, -rail_offset, z)),
            group,
        );
        ctx.scene.assign_material(rung, Arc::clone(material));
    }
}

fn spiral_stairs(
    ctx: &mut GenContext,
    group: GroupId,
    name: &str,
    base: Vec3,
    span: f32,
    radius: f32,
    material: &Arc<MaterialGraph>,
) {
    let steps = (span / STAIR_RISE).ceil() as u32;
    let tread = radius * 0.7;
    for i in 0..steps {
        let angle = i as f32 * STAIR_ANGLE_STEP;
        let z = (i as f32 + 0.5) * STAIR_RISE;
        let offset = Vec3::new(angle.cos(), angle.sin(), 0.0) * (radius * 0.5);
        let step = ctx.scene.spawn(
            &format!("{name}_Step_{i}"),
            &PrimitiveSpec::Cube {
                size: Vec3Spec::new(tread, tread * 0.45, 0.06),
            },
            Transform::from_translation(base + offset + Vec3::Z * z)
                .with_rotation(Quat::from_rotation_z(angle)),
            group,
        );
        ctx.scene.assign_material(step, Arc::clone(material));
    }
}
