//! Landmark assembly pipeline.
//!
//! One generator per landmark type. Each builds its substructures through
//! the mesh kernel, skins them from `palette`, files everything under a
//! per-landmark leaf group, and returns a [`LandmarkHandle`] for the
//! downstream interior/room/window passes.

mod biotechnica;
mod black_nexus;
mod handle;
mod militech;
mod neotech;
mod rust_vault;
mod specter;
#[cfg(test)]
mod tests;
mod wire_nest;

pub use handle::LandmarkHandle;

use std::f32::consts::TAU;

use bevy::math::Vec3;
use bevy::prelude::Transform;
use engine::{EngineError, GroupId};

use crate::config::{BuildingDescriptor, LandmarkKind};
use crate::palette;
use crate::GenContext;

/// Dispatch to the landmark's dedicated generator.
pub fn generate(
    ctx: &mut GenContext,
    desc: &BuildingDescriptor,
) -> Result<LandmarkHandle, EngineError> {
    match desc.kind {
        LandmarkKind::NeoTech => neotech::generate(ctx, desc),
        LandmarkKind::Specter => specter::generate(ctx, desc),
        LandmarkKind::BlackNexus => black_nexus::generate(ctx, desc),
        LandmarkKind::WireNest => wire_nest::generate(ctx, desc),
        LandmarkKind::RustVault => rust_vault::generate(ctx, desc),
        LandmarkKind::Militech => militech::generate(ctx, desc),
        LandmarkKind::Biotechnica => biotechnica::generate(ctx, desc),
    }
}

// ---------------------------------------------------------------------------
// Shared generator plumbing
// ---------------------------------------------------------------------------

/// Leaf group for a landmark, under the tier branch.
fn landmark_group(ctx: &mut GenContext, desc: &BuildingDescriptor) -> GroupId {
    ctx.scene
        .get_or_create_group(&[desc.tier.label(), desc.name.as_str()])
}

/// Build (or fetch) the shared tier-wide basic graph for this landmark.
fn tier_material(
    ctx: &mut GenContext,
    desc: &BuildingDescriptor,
) -> Result<std::sync::Arc<engine::MaterialGraph>, EngineError> {
    ctx.materials.build_graph(
        palette::tier_graph_name(desc.tier),
        palette::tier_stages(desc.tier),
    )
}

/// Evenly spaced positions on a circle of `radius` at height `z`, local to
/// the anchor.
fn ring_positions(count: u32, radius: f32, z: f32) -> impl Iterator<Item = (f32, Vec3)> {
    (0..count).map(move |i| {
        let angle = i as f32 / count as f32 * TAU;
        (
            angle,
            Vec3::new(angle.cos() * radius, angle.sin() * radius, z),
        )
    })
}

/// World transform for a part offset from the landmark anchor, scaled by
/// the descriptor's uniform scale factor.
fn part_transform(desc: &BuildingDescriptor, offset: Vec3) -> Transform {
    Transform::from_translation(desc.anchor_vec() + offset * desc.scale)
        .with_scale(Vec3::splat(desc.scale))
}
