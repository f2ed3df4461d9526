//! Window placement styles.
//!
//! Placement math is pure: the spiral layout is a function of its
//! parameters alone, and the randomized layouts take the rng stream
//! explicitly. Assembly spawning lives in the parent module.

use bevy::math::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

use crate::config::{
    BANDED_GRID_LEVELS, CONCEALED_WINDOW_COUNT, REINFORCED_WINDOW_COUNT, SCATTERED_WINDOW_COUNT,
    SPIRAL_WINDOW_COUNT, SPIRAL_WINDOW_TURNS,
};

/// How a landmark's exterior windows are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStyle {
    /// Helix up the facade: window `i` of `count` sits at angle
    /// `(i / count) * turns * 2π` and height fraction `i / count`.
    Spiral { count: u32, turns: u32 },
    /// Random angle and height, with a breakage chance per pane.
    Scattered { count: u32 },
    /// Regular bands on all four faces.
    BandedGrid { levels: u32 },
    /// Small windows cycling the four cardinal faces at mid heights, each
    /// hidden behind a partially open cover.
    Concealed { count: u32 },
    /// Small barred windows cycling the four cardinal faces near the
    /// crown.
    Reinforced { count: u32 },
}

impl WindowStyle {
    /// The stock style per landmark.
    pub fn for_landmark(kind: crate::config::LandmarkKind) -> Self {
        use crate::config::LandmarkKind::*;
        match kind {
            NeoTech | Biotechnica => Self::Spiral {
                count: SPIRAL_WINDOW_COUNT,
                turns: SPIRAL_WINDOW_TURNS,
            },
            Specter => Self::Scattered {
                count: SCATTERED_WINDOW_COUNT,
            },
            BlackNexus => Self::Scattered { count: 6 },
            Militech => Self::BandedGrid {
                levels: BANDED_GRID_LEVELS,
            },
            WireNest => Self::Concealed {
                count: CONCEALED_WINDOW_COUNT,
            },
            RustVault => Self::Reinforced {
                count: REINFORCED_WINDOW_COUNT,
            },
        }
    }
}

/// One resolved window slot: where it sits and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSlot {
    pub position: Vec3,
    /// Yaw of the outward facade normal, radians.
    pub facing: f32,
    /// Scattered style only: pane left out to read as broken.
    pub broken: bool,
}

/// Helix placement around a cylinder of `radius` spanning `base_z` to
/// `base_z + height`.
pub fn spiral_slots(
    count: u32,
    turns: u32,
    center: Vec3,
    radius: f32,
    height: f32,
) -> Vec<WindowSlot> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let angle = t * turns as f32 * TAU;
            WindowSlot {
                position: center
                    + Vec3::new(angle.cos() * radius, angle.sin() * radius, t * height),
                facing: angle,
                broken: false,
            }
        })
        .collect()
}

/// Random placement on the facade cylinder, heights kept off the extreme
/// base and crown. Pane breakage is drawn here so the slot list fully
/// determines the assembly.
pub fn scattered_slots<R: Rng>(
    rng: &mut R,
    count: u32,
    center: Vec3,
    radius: f32,
    height: f32,
    breakage: f32,
) -> Vec<WindowSlot> {
    (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..TAU);
            let t = rng.gen_range(0.2..0.9_f32);
            let broken = rng.gen::<f32>() < breakage;
            WindowSlot {
                position: center
                    + Vec3::new(angle.cos() * radius, angle.sin() * radius, t * height),
                facing: angle,
                broken,
            }
        })
        .collect()
}

/// Cardinal-face slot: window `i` takes side `i % 4` of a box footprint
/// with the given half extents, pushed out to the face and jittered a
/// little along it.
fn cardinal_slot<R: Rng>(
    rng: &mut R,
    index: u32,
    center: Vec3,
    half_extents: (f32, f32),
    z: f32,
) -> WindowSlot {
    let facing = (index % 4) as f32 * TAU / 4.0;
    let outward = Vec3::new(facing.cos(), facing.sin(), 0.0);
    let lateral = Vec3::new(-facing.sin(), facing.cos(), 0.0);
    let half = facing.cos().abs() * half_extents.0 + facing.sin().abs() * half_extents.1;
    let jitter = rng.gen_range(-1.0..1.0_f32);
    WindowSlot {
        position: center + outward * half + lateral * jitter + Vec3::Z * z,
        facing,
        broken: false,
    }
}

/// Small concealed windows cycling the four faces, heights drawn from the
/// middle third of the facade.
pub fn concealed_slots<R: Rng>(
    rng: &mut R,
    count: u32,
    center: Vec3,
    half_extents: (f32, f32),
    height: f32,
) -> Vec<WindowSlot> {
    (0..count)
        .map(|i| {
            let z = height * 0.5 + rng.gen_range(-height / 3.0..height / 3.0);
            cardinal_slot(rng, i, center, half_extents, z)
        })
        .collect()
}

/// Reinforced windows cycling the four faces, tucked just below the
/// crown.
pub fn reinforced_slots<R: Rng>(
    rng: &mut R,
    count: u32,
    center: Vec3,
    half_extents: (f32, f32),
    height: f32,
) -> Vec<WindowSlot> {
    (0..count)
        .map(|i| {
            let z = height - rng.gen_range(1.0..2.0_f32);
            cardinal_slot(rng, i, center, half_extents, z)
        })
        .collect()
}

/// Four windows per level on the cardinal faces of a box footprint, with
/// a little lateral jitter per slot.
pub fn banded_grid_slots<R: Rng>(
    rng: &mut R,
    levels: u32,
    center: Vec3,
    half_extent: f32,
    height: f32,
) -> Vec<WindowSlot> {
    let mut slots = Vec::with_capacity(levels as usize * 4);
    for level in 0..levels {
        let z = height * (level + 1) as f32 / (levels + 1) as f32;
        for side in 0..4u32 {
            let facing = side as f32 * TAU / 4.0;
            let outward = Vec3::new(facing.cos(), facing.sin(), 0.0);
            let lateral = Vec3::new(-facing.sin(), facing.cos(), 0.0);
            let jitter = rng.gen_range(-0.2..0.2_f32) * half_extent;
            slots.push(WindowSlot {
                position: center + outward * half_extent + lateral * jitter + Vec3::Z * z,
                facing,
                broken: false,
            });
        }
    }
    slots
}
