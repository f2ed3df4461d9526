//! Mesh data types.

use bevy::math::Vec3;

/// One polygon face: an ordered loop of vertex indices plus an optional
/// material slot. Arity is at least 3; caps of radial primitives are ngons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<u32>,
    pub material_slot: Option<u16>,
}

impl Face {
    pub fn new(indices: Vec<u32>) -> Self {
        Self {
            indices,
            material_slot: None,
        }
    }

    pub fn quad(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self::new(vec![a, b, c, d])
    }

    pub fn tri(a: u32, b: u32, c: u32) -> Self {
        Self::new(vec![a, b, c])
    }
}

/// Which axes a per-vertex edit is allowed to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxesMask {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl AxesMask {
    pub const ALL: Self = Self {
        x: true,
        y: true,
        z: true,
    };
    pub const Z_ONLY: Self = Self {
        x: false,
        y: false,
        z: true,
    };
    pub const XZ: Self = Self {
        x: true,
        y: false,
        z: true,
    };
}

/// Axis-aligned bounding box in the mesh's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Ordered vertex positions plus polygon faces. Owned exclusively by the
/// object that created it; mutated only inside a scene edit session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditableMesh {
    pub positions: Vec<Vec3>,
    pub faces: Vec<Face>,
}

impl EditableMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Arithmetic mean of a face's corner positions.
    pub fn face_centroid(&self, face: &Face) -> Vec3 {
        let mut sum = Vec3::ZERO;
        for &i in &face.indices {
            sum += self.positions[i as usize];
        }
        sum / face.indices.len() as f32
    }

    /// Face normal via Newell's method (robust for non-planar polygons).
    pub fn face_normal(&self, face: &Face) -> Vec3 {
        let mut normal = Vec3::ZERO;
        let n = face.indices.len();
        for k in 0..n {
            let a = self.positions[face.indices[k] as usize];
            let b = self.positions[face.indices[(k + 1) % n] as usize];
            normal.x += (a.y - b.y) * (a.z + b.z);
            normal.y += (a.z - b.z) * (a.x + b.x);
            normal.z += (a.x - b.x) * (a.y + b.y);
        }
        normal.normalize_or_zero()
    }

    /// Local-space bounds; `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Aabb> {
        let first = *self.positions.first()?;
        let mut min = first;
        let mut max = first;
        for &p in &self.positions[1..] {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Aabb { min, max })
    }

    /// Centroid of a vertex-index selection; `None` if the selection is empty.
    pub fn selection_centroid(&self, selection: &[u32]) -> Option<Vec3> {
        if selection.is_empty() {
            return None;
        }
        let mut sum = Vec3::ZERO;
        for &i in selection {
            sum += self.positions[i as usize];
        }
        Some(sum / selection.len() as f32)
    }

    /// Remove vertices not referenced by any face and remap face indices.
    pub(crate) fn drop_orphan_vertices(&mut self) {
        let mut used = vec![false; self.positions.len()];
        for face in &self.faces {
            for &i in &face.indices {
                used[i as usize] = true;
            }
        }
        let mut remap = vec![u32::MAX; self.positions.len()];
        let mut next = 0u32;
        let mut kept = Vec::with_capacity(self.positions.len());
        for (i, &keep) in used.iter().enumerate() {
            if keep {
                remap[i] = next;
                next += 1;
                kept.push(self.positions[i]);
            }
        }
        self.positions = kept;
        for face in &mut self.faces {
            for i in &mut face.indices {
                *i = remap[*i as usize];
            }
        }
    }
}
