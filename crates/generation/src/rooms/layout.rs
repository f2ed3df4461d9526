//! Room construction state machine.
//!
//! Per building: Unplaced → FloorsBuilt → WallsBuilt → Furnished →
//! CorridorsConnected → Done. Room resolution (relative → absolute) is
//! fully deterministic; randomness enters only in furnishing and shaft
//! fitting choices, all drawn from the context's seeded stream.

use std::sync::Arc;

use bevy::math::Vec3;
use engine::{EngineError, GroupId, MaterialGraph};

use crate::config::Tier;
use crate::interiors::fixtures;
use crate::palette;
use crate::GenContext;

use super::corridors;
use super::furnish;
use super::manifest::{BuildingManifest, CorridorOrientation, RoomKind};

const WALL_THICKNESS: f32 = 0.25;
const SLAB_THICKNESS: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BuildingState {
    Unplaced,
    FloorsBuilt,
    WallsBuilt,
    Furnished,
    CorridorsConnected,
    Done,
}

/// A room descriptor resolved to world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoom {
    pub name: String,
    pub kind: RoomKind,
    pub center: Vec3,
    pub size: Vec3,
    pub level: u32,
}

/// Reproducibility record for one building's interior build: the state
/// progression, every weighted shaft-fitting draw, and the emitted
/// object tallies.
#[derive(Debug, Clone)]
pub struct BuildingLog {
    pub building: String,
    pub states: Vec<BuildingState>,
    pub corridor_choices: Vec<String>,
    pub slab_count: usize,
    pub corridor_count: usize,
}

impl BuildingLog {
    fn new(building: &str) -> Self {
        Self {
            building: building.to_string(),
            states: vec![BuildingState::Unplaced],
            corridor_choices: Vec::new(),
            slab_count: 0,
            corridor_count: 0,
        }
    }

    fn advance(&mut self, state: BuildingState) {
        self.states.push(state);
    }

    pub fn state(&self) -> BuildingState {
        *self.states.last().unwrap_or(&BuildingState::Unplaced)
    }
}

/// Resolve every room of `manifest` against the building anchor and
/// measured footprint. Same inputs always produce the same output; rooms
/// with a degenerate resolved size are dropped with a diagnostic.
pub fn resolve_rooms(
    anchor: Vec3,
    footprint: Vec3,
    manifest: &BuildingManifest,
    diagnostics: &mut engine::Diagnostics,
) -> Vec<ResolvedRoom> {
    let mut resolved = Vec::with_capacity(manifest.rooms.len());
    for room in &manifest.rooms {
        let center = anchor + Vec3::from_array(room.relative_position) * footprint;
        let size = Vec3::from_array(room.relative_size) * footprint;
        if size.min_element() <= SLAB_THICKNESS {
            diagnostics.skip(
                "rooms",
                format!("room {}", room.name),
                format!("degenerate resolved size {size}"),
            );
            continue;
        }
        resolved.push(ResolvedRoom {
            name: room.name.clone(),
            kind: room.kind,
            center,
            size,
            level: room.level,
        });
    }
    resolved
}

/// Run the full state machine for one building. The interior material is
/// cached under `<building>_Interior`; pre-build that name to restyle.
pub fn build_rooms(
    ctx: &mut GenContext,
    building: &str,
    tier: Tier,
    anchor: Vec3,
    footprint: Vec3,
    manifest: &BuildingManifest,
) -> Result<BuildingLog, EngineError> {
    let mut log = BuildingLog::new(building);
    if footprint.min_element() <= 0.0 {
        ctx.diagnostics.skip(
            "rooms",
            format!("building {building}"),
            format!("degenerate footprint {footprint}"),
        );
        return Ok(log);
    }

    let rooms_group = ctx
        .scene
        .get_or_create_group(&[tier.label(), building, "Rooms"]);
    let interior = ctx.materials.build_graph(
        &format!("{building}_Interior"),
        palette::interior_stages([0.18, 0.18, 0.2, 1.0], 0.6),
    )?;

    let rooms = resolve_rooms(anchor, footprint, manifest, &mut ctx.diagnostics);

    // floors and ceilings
    for room in &rooms {
        build_floor_and_ceiling(ctx, rooms_group, building, room, &interior, &mut log);
    }
    log.advance(BuildingState::FloorsBuilt);

    // walls, omitting any face a corridor fully covers
    for room in &rooms {
        build_walls(ctx, rooms_group, building, room, manifest, &rooms, &interior, &mut log);
    }
    log.advance(BuildingState::WallsBuilt);

    for room in &rooms {
        furnish::furnish_room(ctx, rooms_group, building, room, &interior)?;
    }
    log.advance(BuildingState::Furnished);

    build_corridors(ctx, rooms_group, building, manifest, &rooms, &interior, &mut log);
    log.advance(BuildingState::CorridorsConnected);

    log.advance(BuildingState::Done);
    Ok(log)
}

fn build_floor_and_ceiling(
    ctx: &mut GenContext,
    group: GroupId,
    building: &str,
    room: &ResolvedRoom,
    interior: &Arc<MaterialGraph>,
    log: &mut BuildingLog,
) {
    let half_h = room.size.z * 0.5;
    fixtures::slab(
        ctx,
        group,
        &format!("{building}_{}_Floor", room.name),
        room.center - Vec3::Z * half_h,
        (room.size.x, room.size.y),
        SLAB_THICKNESS,
        interior,
    );
    fixtures::slab(
        ctx,
        group,
        &format!("{building}_{}_Ceiling", room.name),
        room.center + Vec3::Z * half_h,
        (room.size.x, room.size.y),
        SLAB_THICKNESS,
        interior,
    );
    log.slab_count += 2;
}

/// The four cardinal wall faces of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WallFace {
    North,
    South,
    East,
    West,
}

#[allow(clippy::too_many_arguments)]
fn build_walls(
    ctx: &mut GenContext,
    group: GroupId,
    building: &str,
    room: &ResolvedRoom,
    manifest: &BuildingManifest,
    rooms: &[ResolvedRoom],
    interior: &Arc<MaterialGraph>,
    log: &mut BuildingLog,
) {
    let half = room.size * 0.5;
    let floor = room.center.z - half.z;
    let faces = [
        (WallFace::North, Vec3::new(-half.x, half.y, 0.0), Vec3::new(half.x, half.y, 0.0)),
        (WallFace::South, Vec3::new(-half.x, -half.y, 0.0), Vec3::new(half.x, -half.y, 0.0)),
        (WallFace::East, Vec3::new(half.x, -half.y, 0.0), Vec3::new(half.x, half.y, 0.0)),
        (WallFace::West, Vec3::new(-half.x, -half.y, 0.0), Vec3::new(-half.x, half.y, 0.0)),
    ];
    for (face, a, b) in faces {
        if corridor_covers_face(room, face, manifest, rooms) {
            // punch-through by omission, not boolean subtraction
            continue;
        }
        let base = Vec3::new(room.center.x, room.center.y, floor);
        fixtures::wall(
            ctx,
            group,
            &format!("{building}_{}_Wall_{face:?}", room.name),
            base + a,
            base + b,
            room.size.z,
            WALL_THICKNESS,
            interior,
        );
        log.slab_count += 1;
    }
}

/// A wall face is omitted only when a horizontal corridor attaches to it
/// and its cross-section covers the whole face; narrower corridors keep
/// the wall and simply overlap it.
fn corridor_covers_face(
    room: &ResolvedRoom,
    face: WallFace,
    manifest: &BuildingManifest,
    rooms: &[ResolvedRoom],
) -> bool {
    for corridor in &manifest.corridors {
        if corridor.orientation != CorridorOrientation::Horizontal {
            continue;
        }
        let (this, other) = if corridor.start_room == room.name {
            (room, rooms.iter().find(|r| r.name == corridor.end_room))
        } else if corridor.end_room == room.name {
            (room, rooms.iter().find(|r| r.name == corridor.start_room))
        } else {
            continue;
        };
        let Some(other) = other else { continue };
        let delta = other.center - this.center;
        let attached = if delta.x.abs() >= delta.y.abs() {
            if delta.x > 0.0 {
                face == WallFace::East
            } else {
                face == WallFace::West
            }
        } else if delta.y > 0.0 {
            face == WallFace::North
        } else {
            face == WallFace::South
        };
        if !attached {
            continue;
        }
        let face_length = match face {
            WallFace::North | WallFace::South => room.size.x,
            WallFace::East | WallFace::West => room.size.y,
        };
        if corridor.width >= face_length && corridor.height >= room.size.z {
            return true;
        }
    }
    false
}

#[allow(clippy::too_many_arguments)]
fn build_corridors(
    ctx: &mut GenContext,
    group: GroupId,
    building: &str,
    manifest: &BuildingManifest,
    rooms: &[ResolvedRoom],
    interior: &Arc<MaterialGraph>,
    log: &mut BuildingLog,
) {
    for (i, corridor) in manifest.corridors.iter().enumerate() {
        let start = rooms.iter().find(|r| r.name == corridor.start_room);
        let end = rooms.iter().find(|r| r.name == corridor.end_room);
        let (Some(start), Some(end)) = (start, end) else {
            let missing = if start.is_none() {
                &corridor.start_room
            } else {
                &corridor.end_room
            };
            ctx.diagnostics.skip(
                "rooms",
                format!(
                    "corridor {}->{}",
                    corridor.start_room, corridor.end_room
                ),
                format!("unresolved room `{missing}`"),
            );
            continue;
        };
        let name = format!("{building}_Corridor_{i}");
        match corridor.orientation {
            CorridorOrientation::Horizontal => {
                if corridors::horizontal_corridor(
                    ctx,
                    group,
                    &name,
                    start.center,
                    end.center,
                    corridor.width,
                    corridor.height,
                    interior,
                )
                .is_some()
                {
                    log.corridor_count += 1;
                }
            }
            CorridorOrientation::Vertical => {
                let fitting = corridors::vertical_shaft(
                    ctx,
                    group,
                    &name,
                    start.center,
                    end.center,
                    corridor.width * 0.5,
                    interior,
                );
                if let Some(fitting) = fitting {
                    log.corridor_choices.push(format!("{name}: {fitting}"));
                    log.corridor_count += 1;
                }
            }
        }
    }
}
