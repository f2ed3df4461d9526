//! Interior room construction.
//!
//! A [`manifest::BuildingManifest`] declares rooms and corridors in
//! footprint-relative coordinates; [`build_rooms`] resolves them against a
//! measured footprint and drives the per-building state machine through
//! floors, walls, furnishing, and corridors, emitting a [`BuildingLog`]
//! for reproducibility.

mod corridors;
mod furnish;
mod layout;
pub mod manifest;

#[cfg(test)]
mod tests;

pub use layout::{build_rooms, resolve_rooms, BuildingLog, BuildingState, ResolvedRoom};
pub use manifest::{
    default_manifest, BuildingManifest, CorridorDescriptor, CorridorOrientation, RoomDescriptor,
    RoomKind,
};

use bevy::math::Vec3;
use engine::EngineError;

use crate::config::BuildingDescriptor;
use crate::landmarks::LandmarkHandle;
use crate::palette;
use crate::GenContext;

/// Build the stock interior for a generated landmark, measuring the
/// footprint from its primary substructure. Landmarks whose primary mesh
/// has no measurable bounds are skipped with a diagnostic and an
/// `Unplaced` log.
pub fn build_for_landmark(
    ctx: &mut GenContext,
    handle: &LandmarkHandle,
    desc: &BuildingDescriptor,
) -> Result<BuildingLog, EngineError> {
    let Some(bounds) = ctx.scene.world_bounds(handle.primary()) else {
        ctx.diagnostics.skip(
            "rooms",
            format!("building {}", handle.name()),
            "primary substructure has no measurable bounds",
        );
        return Ok(BuildingLog {
            building: handle.name().to_string(),
            states: vec![BuildingState::Unplaced],
            corridor_choices: Vec::new(),
            slab_count: 0,
            corridor_count: 0,
        });
    };

    // pre-seed the interior graph so rooms pick up the landmark style
    ctx.materials.build_graph(
        &format!("{}_Interior", handle.name()),
        palette::interior_wall_stages(desc.kind),
    )?;

    // rooms place relative to the footprint center at ground level
    let center = bounds.center();
    let anchor = Vec3::new(center.x, center.y, bounds.min.z);
    let manifest = default_manifest(desc.kind);
    build_rooms(
        ctx,
        handle.name(),
        handle.tier(),
        anchor,
        bounds.size(),
        &manifest,
    )
}
