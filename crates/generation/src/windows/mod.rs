//! Exterior window placement and assembly.
//!
//! Each landmark gets a [`styles::WindowStyle`] resolved into
//! [`styles::WindowSlot`]s against its measured bounds, then a small
//! frame-and-pane assembly per slot, filed under a `Windows` subgroup.
//! Militech and Rust Vault windows carry security bars, Wire Nest windows
//! hide behind partially open covers, and Biotechnica windows carry a
//! bioluminescent trim strip.

pub mod styles;

#[cfg(test)]
mod tests;

pub use styles::{WindowSlot, WindowStyle};

use std::sync::Arc;

use bevy::math::{Quat, Vec3};
use bevy::prelude::Transform;
use engine::{EngineError, GroupId, MaterialGraph, ObjectId, PrimitiveSpec, Vec3Spec};
use rand::Rng;

use crate::config::{
    BuildingDescriptor, LandmarkKind, SPIRAL_RADIUS_FRACTION, WINDOW_BREAKAGE_PROBABILITY,
};
use crate::landmarks::LandmarkHandle;
use crate::palette;
use crate::GenContext;

const FRAME_SIZE: (f32, f32) = (1.2, 1.6);

/// Glaze one landmark. Landmarks whose primary bounds cannot be measured
/// are skipped with a diagnostic.
pub fn generate_windows(
    ctx: &mut GenContext,
    handle: &LandmarkHandle,
    desc: &BuildingDescriptor,
) -> Result<Vec<ObjectId>, EngineError> {
    let style = WindowStyle::for_landmark(desc.kind);
    let Some(bounds) = ctx.scene.world_bounds(handle.primary()) else {
        ctx.diagnostics.skip(
            "windows",
            format!("windows {}", handle.name()),
            "primary substructure has no measurable bounds",
        );
        return Ok(Vec::new());
    };

    let group = ctx
        .scene
        .get_or_create_group(&[handle.tier().label(), handle.name(), "Windows"]);

    let size = bounds.size();
    let center = bounds.center();
    let base = Vec3::new(center.x, center.y, bounds.min.z);
    let radius = SPIRAL_RADIUS_FRACTION * size.x.min(size.y) * 0.5;

    let slots = match style {
        WindowStyle::Spiral { count, turns } => {
            styles::spiral_slots(count, turns, base, radius, size.z)
        }
        WindowStyle::Scattered { count } => styles::scattered_slots(
            &mut ctx.rng.0,
            count,
            base,
            radius,
            size.z,
            WINDOW_BREAKAGE_PROBABILITY,
        ),
        WindowStyle::BandedGrid { levels } => {
            styles::banded_grid_slots(&mut ctx.rng.0, levels, base, size.x * 0.5, size.z)
        }
        WindowStyle::Concealed { count } => styles::concealed_slots(
            &mut ctx.rng.0,
            count,
            base,
            (size.x * 0.5, size.y * 0.5),
            size.z,
        ),
        WindowStyle::Reinforced { count } => styles::reinforced_slots(
            &mut ctx.rng.0,
            count,
            base,
            (size.x * 0.5, size.y * 0.5),
            size.z,
        ),
    };

    // den windows keep their hull's look; everything else frames in the
    // tier basic
    let frame_material = match desc.kind {
        LandmarkKind::WireNest => ctx.materials.build_graph(
            &format!("{}_Interior", handle.name()),
            palette::interior_wall_stages(desc.kind),
        )?,
        LandmarkKind::RustVault => ctx
            .materials
            .build_graph("RustVault_Weathered", palette::rust_vault_stages())?,
        _ => ctx.materials.build_graph(
            palette::tier_graph_name(handle.tier()),
            palette::tier_stages(handle.tier()),
        )?,
    };
    let glass = match desc.kind {
        LandmarkKind::WireNest => ctx.materials.build_graph(
            "WireNest_DarkGlass",
            palette::glass_stages([0.02, 0.02, 0.02, 1.0], 0.5, 0.0),
        )?,
        LandmarkKind::RustVault => ctx.materials.build_graph(
            "RustVault_DirtyGlass",
            palette::glass_stages([0.3, 0.26, 0.2, 1.0], 0.4, 0.0),
        )?,
        _ => ctx
            .materials
            .build_graph("Window_Glass", palette::window_glass_stages())?,
    };

    let mut ids = Vec::with_capacity(slots.len() * 2);
    for (i, slot) in slots.iter().enumerate() {
        ids.extend(spawn_assembly(
            ctx,
            group,
            handle,
            desc.kind,
            i,
            slot,
            &frame_material,
            &glass,
        )?);
    }
    Ok(ids)
}

/// Frame plus pane, plus the landmark's extra dressing.
#[allow(clippy::too_many_arguments)]
fn spawn_assembly(
    ctx: &mut GenContext,
    group: GroupId,
    handle: &LandmarkHandle,
    kind: LandmarkKind,
    index: usize,
    slot: &WindowSlot,
    frame_material: &Arc<MaterialGraph>,
    glass: &Arc<MaterialGraph>,
) -> Result<Vec<ObjectId>, EngineError> {
    let rotation = Quat::from_rotation_z(slot.facing);
    let outward = rotation * Vec3::X;
    let (w, h) = FRAME_SIZE;
    let mut ids = Vec::new();

    let frame = ctx.scene.spawn(
        &format!("{}_Window_{index}", handle.name()),
        &PrimitiveSpec::Cube {
            size: Vec3Spec::new(0.15, w, h),
        },
        Transform::from_translation(slot.position).with_rotation(rotation),
        group,
    );
    ctx.scene.assign_material(frame, Arc::clone(frame_material));
    ids.push(frame);

    if !slot.broken {
        let pane = ctx.scene.spawn(
            &format!("{}_Window_{index}_Pane", handle.name()),
            &PrimitiveSpec::Cube {
                size: Vec3Spec::new(0.05, w - 0.2, h - 0.2),
            },
            Transform::from_translation(slot.position + outward * 0.06).with_rotation(rotation),
            group,
        );
        ctx.scene.assign_material(pane, Arc::clone(glass));
        ids.push(pane);
    }

    match kind {
        LandmarkKind::Militech => {
            for b in 0..3 {
                let offset = (b as f32 - 1.0) * w * 0.3;
                let bar = ctx.scene.spawn(
                    &format!("{}_Window_{index}_Bar_{b}", handle.name()),
                    &PrimitiveSpec::Cube {
                        size: Vec3Spec::new(0.2, 0.06, h),
                    },
                    Transform::from_translation(
                        slot.position + rotation * Vec3::new(0.1, offset, 0.0),
                    )
                    .with_rotation(rotation),
                    group,
                );
                ctx.scene.assign_material(bar, Arc::clone(frame_material));
                ids.push(bar);
            }
        }
        LandmarkKind::WireNest => {
            // squatter privacy: a metal cover left ajar over the pane
            let cover_panel = ctx.materials.build_graph(
                "WireNest_Cover",
                palette::metal_panel_stages([0.2, 0.2, 0.25, 1.0], 0.7, 0.6),
            )?;
            let tilt = ctx.rng.0.gen_range(0.35..1.05_f32);
            let cover = ctx.scene.spawn(
                &format!("{}_Window_{index}_Cover", handle.name()),
                &PrimitiveSpec::Cube {
                    size: Vec3Spec::new(0.05, w * 0.85, h * 0.8),
                },
                Transform::from_translation(slot.position + outward * 0.15)
                    .with_rotation(rotation * Quat::from_rotation_y(tilt)),
                group,
            );
            ctx.scene.assign_material(cover, cover_panel);
            ids.push(cover);
        }
        LandmarkKind::RustVault => {
            // two horizontal, two vertical bars over the pane
            for b in 0..4u32 {
                let (size, local) = if b < 2 {
                    let z = (b as f32 - 0.5) * h * 0.4;
                    (Vec3Spec::new(0.2, w * 0.85, 0.08), Vec3::new(0.12, 0.0, z))
                } else {
                    let y = (b as f32 - 2.5) * w * 0.4;
                    (Vec3Spec::new(0.2, 0.08, h * 0.9), Vec3::new(0.12, y, 0.0))
                };
                let bar = ctx.scene.spawn(
                    &format!("{}_Window_{index}_Bar_{b}", handle.name()),
                    &PrimitiveSpec::Cube { size },
                    Transform::from_translation(slot.position + rotation * local)
                        .with_rotation(rotation),
                    group,
                );
                ctx.scene.assign_material(bar, Arc::clone(frame_material));
                ids.push(bar);
            }
        }
        LandmarkKind::Biotechnica => {
            let trim_glow = ctx.materials.build_graph(
                "Biotechnica_Trim",
                palette::emission_stages([0.3, 1.0, 0.5, 1.0], 2.0),
            )?;
            let trim = ctx.scene.spawn(
                &format!("{}_Window_{index}_Trim", handle.name()),
                &PrimitiveSpec::Cube {
                    size: Vec3Spec::new(0.08, w, 0.08),
                },
                Transform::from_translation(slot.position + Vec3::Z * (h * 0.5 + 0.1))
                    .with_rotation(rotation),
                group,
            );
            ctx.scene.assign_material(trim, trim_glow);
            ids.push(trim);
        }
        _ => {}
    }

    Ok(ids)
}
