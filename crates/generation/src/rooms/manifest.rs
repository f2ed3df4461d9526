//! Room and corridor manifests: the declarative, relative-coordinate
//! description of a building's interior layout.

use serde::{Deserialize, Serialize};

use crate::config::LandmarkKind;

/// Drives the furnishing callback for a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    Hub,
    Lab,
    ServerRoom,
    Quarters,
    Workshop,
    Office,
}

/// One room, positioned and sized as fractions of the building footprint.
/// Resolution to absolute coordinates is deterministic; only furnishing
/// draws randomness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDescriptor {
    pub name: String,
    pub kind: RoomKind,
    /// Offset from the building anchor, in footprint fractions per axis.
    pub relative_position: [f32; 3],
    /// Extents as fractions of footprint width/depth/height.
    pub relative_size: [f32; 3],
    /// Floor level index (recorded; level stacking is expressed through
    /// `relative_position.z`).
    pub level: u32,
}

impl RoomDescriptor {
    pub fn new(
        name: &str,
        kind: RoomKind,
        relative_position: [f32; 3],
        relative_size: [f32; 3],
        level: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            relative_position,
            relative_size,
            level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorridorOrientation {
    Horizontal,
    Vertical,
}

/// A connection between two named rooms of the same building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorridorDescriptor {
    pub start_room: String,
    pub end_room: String,
    pub width: f32,
    pub height: f32,
    pub orientation: CorridorOrientation,
}

impl CorridorDescriptor {
    pub fn new(
        start_room: &str,
        end_room: &str,
        width: f32,
        height: f32,
        orientation: CorridorOrientation,
    ) -> Self {
        Self {
            start_room: start_room.to_string(),
            end_room: end_room.to_string(),
            width,
            height,
            orientation,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingManifest {
    pub rooms: Vec<RoomDescriptor>,
    pub corridors: Vec<CorridorDescriptor>,
}

/// Stock interior layout per landmark.
pub fn default_manifest(kind: LandmarkKind) -> BuildingManifest {
    use CorridorOrientation::{Horizontal, Vertical};
    match kind {
        LandmarkKind::NeoTech => BuildingManifest {
            rooms: vec![
                RoomDescriptor::new("Lobby", RoomKind::Hub, [0.0, 0.0, 0.05], [0.5, 0.5, 0.06], 0),
                RoomDescriptor::new(
                    "Lab",
                    RoomKind::Lab,
                    [0.0, 0.0, 0.3],
                    [0.4, 0.4, 0.05],
                    1,
                ),
                RoomDescriptor::new(
                    "ServerVault",
                    RoomKind::ServerRoom,
                    [0.0, 0.0, 0.55],
                    [0.3, 0.3, 0.05],
                    2,
                ),
            ],
            corridors: vec![
                CorridorDescriptor::new("Lobby", "Lab", 3.0, 3.0, Vertical),
                CorridorDescriptor::new("Lab", "ServerVault", 3.0, 3.0, Vertical),
            ],
        },
        LandmarkKind::Specter => BuildingManifest {
            rooms: vec![
                RoomDescriptor::new(
                    "ControlRoom",
                    RoomKind::Workshop,
                    [0.0, 0.0, 0.72],
                    [0.6, 0.6, 0.08],
                    0,
                ),
                RoomDescriptor::new(
                    "Bunks",
                    RoomKind::Quarters,
                    [0.0, 0.0, 0.55],
                    [0.5, 0.5, 0.08],
                    0,
                ),
            ],
            corridors: vec![CorridorDescriptor::new(
                "Bunks",
                "ControlRoom",
                2.0,
                2.5,
                Vertical,
            )],
        },
        LandmarkKind::BlackNexus => BuildingManifest {
            rooms: vec![
                RoomDescriptor::new("Den", RoomKind::Hub, [-0.15, 0.0, 0.35], [0.5, 0.7, 0.5], 0),
                RoomDescriptor::new(
                    "Racks",
                    RoomKind::ServerRoom,
                    [0.3, 0.0, 0.35],
                    [0.25, 0.7, 0.5],
                    0,
                ),
            ],
            corridors: vec![CorridorDescriptor::new("Den", "Racks", 1.5, 2.2, Horizontal)],
        },
        LandmarkKind::WireNest => BuildingManifest {
            // squatters build on platforms, not rooms
            rooms: vec![RoomDescriptor::new(
                "Perch",
                RoomKind::Workshop,
                [0.0, 2.0, 0.3],
                [0.4, 4.0, 0.25],
                0,
            )],
            corridors: Vec::new(),
        },
        LandmarkKind::RustVault => BuildingManifest {
            rooms: vec![RoomDescriptor::new(
                "Stash",
                RoomKind::Workshop,
                [0.0, 0.0, 0.4],
                [0.8, 0.8, 0.6],
                0,
            )],
            corridors: Vec::new(),
        },
        LandmarkKind::Militech => BuildingManifest {
            rooms: vec![
                RoomDescriptor::new(
                    "Garrison",
                    RoomKind::Quarters,
                    [0.0, -0.2, 0.1],
                    [0.6, 0.4, 0.1],
                    0,
                ),
                RoomDescriptor::new(
                    "Armory",
                    RoomKind::Workshop,
                    [0.0, 0.2, 0.1],
                    [0.6, 0.4, 0.1],
                    0,
                ),
                RoomDescriptor::new(
                    "OpsCenter",
                    RoomKind::Office,
                    [0.0, 0.0, 0.6],
                    [0.5, 0.5, 0.1],
                    1,
                ),
            ],
            corridors: vec![
                CorridorDescriptor::new("Garrison", "Armory", 2.0, 2.5, Horizontal),
                CorridorDescriptor::new("Armory", "OpsCenter", 2.5, 2.5, Vertical),
            ],
        },
        LandmarkKind::Biotechnica => BuildingManifest {
            rooms: vec![
                RoomDescriptor::new("Atrium", RoomKind::Hub, [0.0, 0.0, 0.08], [0.6, 0.6, 0.1], 0),
                RoomDescriptor::new(
                    "WetLab",
                    RoomKind::Lab,
                    [0.0, 0.0, 0.45],
                    [0.5, 0.5, 0.08],
                    1,
                ),
            ],
            corridors: vec![CorridorDescriptor::new(
                "Atrium",
                "WetLab",
                2.5,
                2.8,
                Vertical,
            )],
        },
    }
}
