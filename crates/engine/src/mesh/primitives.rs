//! Parametric primitive factories.
//!
//! All primitives are built centered at the local origin with +Z up;
//! world placement is carried by the owning object's `Transform`. Radial
//! primitives close their ends with ngon caps so downstream edits (taper,
//! bisect) see the full boundary.

use std::f32::consts::TAU;

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

use super::types::{EditableMesh, Face};

/// Declarative description of a primitive mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PrimitiveSpec {
    Cylinder {
        segments: u32,
        radius: f32,
        depth: f32,
    },
    /// Axis-aligned box with full extents `size`.
    Cube { size: Vec3Spec },
    /// Square plane in the XY plane, side length `size`.
    Plane { size: f32 },
    Cone {
        segments: u32,
        radius_bottom: f32,
        radius_top: f32,
        depth: f32,
    },
    Sphere {
        segments: u32,
        rings: u32,
        radius: f32,
    },
    Torus {
        major_segments: u32,
        minor_segments: u32,
        major_radius: f32,
        minor_radius: f32,
    },
    /// Filled ngon disc in the XY plane.
    Circle { segments: u32, radius: f32 },
    /// Plane pre-subdivided into `cuts x cuts` quads.
    Grid { cuts: u32, size: f32 },
}

/// Serializable 3-vector used inside primitive specs (plain floats so the
/// declarative tables stay serde-friendly without glam's serde feature).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3Spec {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3Spec {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }
}

impl From<Vec3Spec> for Vec3 {
    fn from(v: Vec3Spec) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl PrimitiveSpec {
    pub fn build(&self) -> EditableMesh {
        match *self {
            PrimitiveSpec::Cylinder {
                segments,
                radius,
                depth,
            } => lathe(segments.max(3), radius, radius, depth),
            PrimitiveSpec::Cube { size } => cube(size.into()),
            PrimitiveSpec::Plane { size } => grid(1, size),
            PrimitiveSpec::Cone {
                segments,
                radius_bottom,
                radius_top,
                depth,
            } => lathe(segments.max(3), radius_bottom, radius_top, depth),
            PrimitiveSpec::Sphere {
                segments,
                rings,
                radius,
            } => sphere(segments.max(3), rings.max(2), radius),
            PrimitiveSpec::Torus {
                major_segments,
                minor_segments,
                major_radius,
                minor_radius,
            } => torus(
                major_segments.max(3),
                minor_segments.max(3),
                major_radius,
                minor_radius,
            ),
            PrimitiveSpec::Circle { segments, radius } => circle(segments.max(3), radius),
            PrimitiveSpec::Grid { cuts, size } => grid(cuts.max(1), size),
        }
    }
}

fn cube(size: Vec3) -> EditableMesh {
    let h = size * 0.5;
    let positions = vec![
        Vec3::new(-h.x, -h.y, -h.z),
        Vec3::new(h.x, -h.y, -h.z),
        Vec3::new(h.x, h.y, -h.z),
        Vec3::new(-h.x, h.y, -h.z),
        Vec3::new(-h.x, -h.y, h.z),
        Vec3::new(h.x, -h.y, h.z),
        Vec3::new(h.x, h.y, h.z),
        Vec3::new(-h.x, h.y, h.z),
    ];
    let faces = vec![
        Face::quad(0, 3, 2, 1), // bottom
        Face::quad(4, 5, 6, 7), // top
        Face::quad(0, 1, 5, 4), // -Y
        Face::quad(2, 3, 7, 6), // +Y
        Face::quad(1, 2, 6, 5), // +X
        Face::quad(3, 0, 4, 7), // -X
    ];
    EditableMesh { positions, faces }
}

/// Shared cylinder/cone surface of revolution: bottom ring at `-depth/2`,
/// top ring at `+depth/2`. A zero top radius collapses the top ring to an
/// apex vertex.
fn lathe(segments: u32, radius_bottom: f32, radius_top: f32, depth: f32) -> EditableMesh {
    let mut mesh = EditableMesh::new();
    let half = depth * 0.5;
    let pointed = radius_top.abs() < 1e-6;

    for i in 0..segments {
        let a = i as f32 / segments as f32 * TAU;
        mesh.positions
            .push(Vec3::new(a.cos() * radius_bottom, a.sin() * radius_bottom, -half));
    }
    if pointed {
        let apex = segments;
        mesh.positions.push(Vec3::new(0.0, 0.0, half));
        for i in 0..segments {
            let j = (i + 1) % segments;
            mesh.faces.push(Face::tri(i, j, apex));
        }
    } else {
        for i in 0..segments {
            let a = i as f32 / segments as f32 * TAU;
            mesh.positions
                .push(Vec3::new(a.cos() * radius_top, a.sin() * radius_top, half));
        }
        for i in 0..segments {
            let j = (i + 1) % segments;
            mesh.faces.push(Face::quad(i, j, segments + j, segments + i));
        }
        // top cap
        mesh.faces
            .push(Face::new((0..segments).rev().map(|i| segments + i).collect()));
    }
    // bottom cap
    mesh.faces.push(Face::new((0..segments).collect()));
    mesh
}

fn sphere(segments: u32, rings: u32, radius: f32) -> EditableMesh {
    let mut mesh = EditableMesh::new();
    // poles plus interior rings
    let south = 0u32;
    mesh.positions.push(Vec3::new(0.0, 0.0, -radius));
    for r in 1..rings {
        let phi = r as f32 / rings as f32 * std::f32::consts::PI;
        let z = -radius * phi.cos();
        let ring_r = radius * phi.sin();
        for s in 0..segments {
            let a = s as f32 / segments as f32 * TAU;
            mesh.positions
                .push(Vec3::new(a.cos() * ring_r, a.sin() * ring_r, z));
        }
    }
    let north = mesh.positions.len() as u32;
    mesh.positions.push(Vec3::new(0.0, 0.0, radius));

    let ring_start = |r: u32| 1 + (r - 1) * segments;
    // south fan
    for s in 0..segments {
        let a = ring_start(1) + s;
        let b = ring_start(1) + (s + 1) % segments;
        mesh.faces.push(Face::tri(south, b, a));
    }
    // interior quads
    for r in 1..rings.saturating_sub(1) {
        for s in 0..segments {
            let a = ring_start(r) + s;
            let b = ring_start(r) + (s + 1) % segments;
            let c = ring_start(r + 1) + (s + 1) % segments;
            let d = ring_start(r + 1) + s;
            mesh.faces.push(Face::quad(a, b, c, d));
        }
    }
    // north fan
    let last = rings - 1;
    for s in 0..segments {
        let a = ring_start(last) + s;
        let b = ring_start(last) + (s + 1) % segments;
        mesh.faces.push(Face::tri(a, b, north));
    }
    mesh
}

fn torus(
    major_segments: u32,
    minor_segments: u32,
    major_radius: f32,
    minor_radius: f32,
) -> EditableMesh {
    let mut mesh = EditableMesh::new();
    for i in 0..major_segments {
        let u = i as f32 / major_segments as f32 * TAU;
        let center = Vec3::new(u.cos() * major_radius, u.sin() * major_radius, 0.0);
        let radial = Vec3::new(u.cos(), u.sin(), 0.0);
        for j in 0..minor_segments {
            let v = j as f32 / minor_segments as f32 * TAU;
            let p = center + radial * (v.cos() * minor_radius) + Vec3::Z * (v.sin() * minor_radius);
            mesh.positions.push(p);
        }
    }
    for i in 0..major_segments {
        let i2 = (i + 1) % major_segments;
        for j in 0..minor_segments {
            let j2 = (j + 1) % minor_segments;
            let a = i * minor_segments + j;
            let b = i2 * minor_segments + j;
            let c = i2 * minor_segments + j2;
            let d = i * minor_segments + j2;
            mesh.faces.push(Face::quad(a, b, c, d));
        }
    }
    mesh
}

fn circle(segments: u32, radius: f32) -> EditableMesh {
    let mut mesh = EditableMesh::new();
    for i in 0..segments {
        let a = i as f32 / segments as f32 * TAU;
        mesh.positions
            .push(Vec3::new(a.cos() * radius, a.sin() * radius, 0.0));
    }
    mesh.faces.push(Face::new((0..segments).collect()));
    mesh
}

fn grid(cuts: u32, size: f32) -> EditableMesh {
    let mut mesh = EditableMesh::new();
    let n = cuts + 1;
    let step = size / cuts as f32;
    let half = size * 0.5;
    for y in 0..n {
        for x in 0..n {
            mesh.positions.push(Vec3::new(
                -half + x as f32 * step,
                -half + y as f32 * step,
                0.0,
            ));
        }
    }
    for y in 0..cuts {
        for x in 0..cuts {
            let a = y * n + x;
            let b = y * n + x + 1;
            let c = (y + 1) * n + x + 1;
            let d = (y + 1) * n + x;
            mesh.faces.push(Face::quad(a, b, c, d));
        }
    }
    mesh
}
