//! Declarative generation constants: the city roster, per-tier styling
//! factors, and the documented probabilities the generators draw against.

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tiers and landmarks
// ---------------------------------------------------------------------------

/// Coarse districting classification driving material and layout style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Upper,
    Mid,
    Lower,
}

impl Tier {
    /// Group name of the tier branch in the scene hierarchy.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Upper => "Upper",
            Tier::Mid => "Mid",
            Tier::Lower => "Lower",
        }
    }

    /// Per-vertex jitter magnitude bound for "worn" distortion. Upper-tier
    /// structures stay crisp; lower-tier ones get visibly beaten up. Kept
    /// well under minimum feature size so meshes never self-intersect.
    pub fn distort_magnitude(self) -> f32 {
        match self {
            Tier::Upper => 0.1,
            Tier::Mid => 0.3,
            Tier::Lower => 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandmarkKind {
    NeoTech,
    Specter,
    BlackNexus,
    WireNest,
    RustVault,
    Militech,
    Biotechnica,
}

/// Declarative description of one building to generate. Drives every
/// downstream generator; resolved against nothing but itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingDescriptor {
    pub name: String,
    pub kind: LandmarkKind,
    pub tier: Tier,
    pub anchor: [f32; 3],
    pub scale: f32,
}

impl BuildingDescriptor {
    pub fn new(
        name: &str,
        kind: LandmarkKind,
        tier: Tier,
        anchor: [f32; 3],
        scale: f32,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            tier,
            anchor,
            scale,
        }
    }

    pub fn anchor_vec(&self) -> Vec3 {
        Vec3::from_array(self.anchor)
    }
}

/// The fixed city roster: seven landmarks at hardcoded world anchors.
pub fn default_city() -> Vec<BuildingDescriptor> {
    vec![
        BuildingDescriptor::new(
            "NeoTech_Tower",
            LandmarkKind::NeoTech,
            Tier::Upper,
            [50.0, 50.0, 0.0],
            1.0,
        ),
        BuildingDescriptor::new(
            "Specter_Station",
            LandmarkKind::Specter,
            Tier::Mid,
            [0.0, 80.0, 0.0],
            1.0,
        ),
        BuildingDescriptor::new(
            "Black_Nexus",
            LandmarkKind::BlackNexus,
            Tier::Lower,
            [-70.0, -50.0, 0.0],
            1.0,
        ),
        BuildingDescriptor::new(
            "Wire_Nest",
            LandmarkKind::WireNest,
            Tier::Mid,
            [30.0, -60.0, 10.0],
            1.0,
        ),
        BuildingDescriptor::new(
            "Rust_Vault",
            LandmarkKind::RustVault,
            Tier::Lower,
            [-40.0, 20.0, 0.0],
            1.0,
        ),
        BuildingDescriptor::new(
            "Militech_Armory",
            LandmarkKind::Militech,
            Tier::Upper,
            [80.0, -20.0, 0.0],
            1.0,
        ),
        BuildingDescriptor::new(
            "Biotechnica_Spire",
            LandmarkKind::Biotechnica,
            Tier::Upper,
            [-80.0, 80.0, 0.0],
            1.0,
        ),
    ]
}

// ---------------------------------------------------------------------------
// Windows
// ---------------------------------------------------------------------------

/// Spiral window count for the NeoTech tower.
pub const SPIRAL_WINDOW_COUNT: u32 = 40;
/// Full turns the spiral makes over the tower height.
pub const SPIRAL_WINDOW_TURNS: u32 = 4;
/// Scattered window count for the Specter station.
pub const SCATTERED_WINDOW_COUNT: u32 = 15;
/// Probability that a scattered window's glass pane is omitted (breakage).
pub const WINDOW_BREAKAGE_PROBABILITY: f32 = 0.3;
/// Fraction of the footprint radius windows sit at on spiral towers.
pub const SPIRAL_RADIUS_FRACTION: f32 = 0.9;
/// Banded-grid levels on the Militech fortress.
pub const BANDED_GRID_LEVELS: u32 = 3;
/// Concealed window count on the Wire Nest billboard frame.
pub const CONCEALED_WINDOW_COUNT: u32 = 6;
/// Reinforced window count on the Rust Vault shell.
pub const REINFORCED_WINDOW_COUNT: u32 = 4;

// ---------------------------------------------------------------------------
// Corridors
// ---------------------------------------------------------------------------

/// Weight of choosing ladder rungs over a spiral stair for a vertical
/// corridor shaft. The draw is recorded in the building's generation log.
pub const LADDER_WEIGHT: f32 = 0.4;
/// Rung spacing inside vertical shafts.
pub const LADDER_RUNG_SPACING: f32 = 0.4;
/// Angular increment per spiral stair step, radians.
pub const STAIR_ANGLE_STEP: f32 = 0.6;
/// Height climbed per spiral stair step.
pub const STAIR_RISE: f32 = 0.35;
