//! Furnishing callbacks, one per room kind.

use std::sync::Arc;

use bevy::math::Vec3;
use engine::{EngineError, GroupId, MaterialGraph};
use rand::Rng;

use crate::interiors::fixtures;
use crate::GenContext;

use super::layout::ResolvedRoom;
use super::manifest::RoomKind;

/// Populate one room with the fixtures its kind calls for. Positions are
/// jittered a little inside the safe central area so identical layouts do
/// not read as copy-pasted.
pub fn furnish_room(
    ctx: &mut GenContext,
    group: GroupId,
    building: &str,
    room: &ResolvedRoom,
    interior: &Arc<MaterialGraph>,
) -> Result<(), EngineError> {
    // top surface of the floor slab
    let floor = room.center.z - room.size.z * 0.5 + 0.1;
    let at = |x: f32, y: f32| Vec3::new(room.center.x + x, room.center.y + y, floor);
    let prefix = format!("{building}_{}", room.name);
    let spread = (room.size.min_element() * 0.2).min(2.0);
    let jitter = |ctx: &mut GenContext| {
        if spread > 0.0 {
            ctx.rng.0.gen_range(-spread..spread)
        } else {
            0.0
        }
    };

    match room.kind {
        RoomKind::Hub => {
            fixtures::hologram(ctx, group, &format!("{prefix}_Holo"), at(0.0, 0.0), interior)?;
            for i in 0..3 {
                let (dx, dy) = (jitter(ctx), jitter(ctx));
                fixtures::chair(
                    ctx,
                    group,
                    &format!("{prefix}_Chair_{i}"),
                    at(dx, dy),
                    interior,
                );
            }
        }
        RoomKind::Lab => {
            for i in 0..2 {
                let dy = jitter(ctx);
                fixtures::desk(
                    ctx,
                    group,
                    &format!("{prefix}_Bench_{i}"),
                    at(i as f32 * 2.2 - 1.1, dy),
                    interior,
                );
            }
            fixtures::computer(
                ctx,
                group,
                &format!("{prefix}_Analyzer"),
                at(-1.1, 0.0) + Vec3::Z * 0.78,
                interior,
            )?;
        }
        RoomKind::ServerRoom => {
            for i in 0..3 {
                fixtures::server_rack(
                    ctx,
                    group,
                    &format!("{prefix}_Rack_{i}"),
                    at(i as f32 * 1.0 - 1.0, 0.0),
                    interior,
                )?;
            }
        }
        RoomKind::Quarters => {
            for i in 0..2 {
                let dx = jitter(ctx);
                fixtures::bed(
                    ctx,
                    group,
                    &format!("{prefix}_Bunk_{i}"),
                    at(dx, i as f32 * 2.4 - 1.2),
                    interior,
                );
            }
        }
        RoomKind::Workshop => {
            fixtures::desk(ctx, group, &format!("{prefix}_Bench"), at(0.0, 0.0), interior);
            fixtures::computer(
                ctx,
                group,
                &format!("{prefix}_Rig"),
                at(0.0, 0.0) + Vec3::Z * 0.78,
                interior,
            )?;
        }
        RoomKind::Office => {
            fixtures::desk(ctx, group, &format!("{prefix}_Desk"), at(0.0, 0.0), interior);
            fixtures::chair(
                ctx,
                group,
                &format!("{prefix}_Chair"),
                at(0.0, -0.8),
                interior,
            );
            fixtures::computer(
                ctx,
                group,
                &format!("{prefix}_Terminal"),
                at(0.0, 0.1) + Vec3::Z * 0.78,
                interior,
            )?;
        }
    }
    Ok(())
}
