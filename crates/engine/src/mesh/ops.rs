//! Vertex/face-level mesh edits.
//!
//! Every operation is a pure function over the mesh's vertex/face sets and
//! is idempotent on failure: an empty or malformed selection records a
//! diagnostic and leaves the mesh untouched. Nothing in this module panics
//! or returns an error; hard faults (stale sessions) are checked one level
//! up, in the scene's edit-session wrapper.

use bevy::math::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::diagnostics::Diagnostics;

use super::types::{AxesMask, EditableMesh, Face};

const COMPONENT: &str = "mesh";
const PLANE_EPS: f32 = 1e-5;

/// Which half-space survives a bisection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepSide {
    /// Keep geometry on the normal side of the plane.
    Above,
    /// Keep geometry opposite the normal.
    Below,
}

impl EditableMesh {
    /// Scale all vertices above `threshold_z` (local space) about their
    /// shared centroid in X and Y. Used for obelisk-style tower tops.
    ///
    /// Empty selections are a recorded no-op, not an error.
    pub fn taper(&mut self, threshold_z: f32, scale_xy: f32, diag: &mut Diagnostics) {
        let selection: Vec<u32> = (0..self.positions.len() as u32)
            .filter(|&i| self.positions[i as usize].z > threshold_z)
            .collect();
        let Some(center) = self.selection_centroid(&selection) else {
            diag.skip(
                COMPONENT,
                "taper",
                format!("no vertices above z threshold {threshold_z}"),
            );
            return;
        };
        for &i in &selection {
            let p = &mut self.positions[i as usize];
            p.x = center.x + (p.x - center.x) * scale_xy;
            p.y = center.y + (p.y - center.y) * scale_xy;
        }
    }

    /// Per-vertex Bernoulli jitter: each vertex passes an independent trial
    /// at `probability`, and on success receives uniform noise drawn from
    /// `magnitude` (min..max) on every unmasked axis. Magnitudes are
    /// tier-scaled by callers to avoid self-intersecting geometry.
    pub fn distort(
        &mut self,
        probability: f32,
        magnitude: (f32, f32),
        axes: AxesMask,
        rng: &mut ChaCha8Rng,
        diag: &mut Diagnostics,
    ) {
        if self.positions.is_empty() {
            diag.skip(COMPONENT, "distort", "mesh has no vertices");
            return;
        }
        if magnitude.0 >= magnitude.1 {
            diag.skip(
                COMPONENT,
                "distort",
                format!("degenerate magnitude range {:?}", magnitude),
            );
            return;
        }
        for p in &mut self.positions {
            if rng.gen::<f32>() >= probability {
                continue;
            }
            if axes.x {
                p.x += rng.gen_range(magnitude.0..magnitude.1);
            }
            if axes.y {
                p.y += rng.gen_range(magnitude.0..magnitude.1);
            }
            if axes.z {
                p.z += rng.gen_range(magnitude.0..magnitude.1);
            }
        }
    }

    /// Duplicate the face at `face_index`, stitch side walls between the old
    /// boundary and the new cap, translate the cap, and optionally scale it
    /// about its own centroid. Used for branch-like growths.
    pub fn extrude_region(
        &mut self,
        face_index: usize,
        translation: Vec3,
        post_scale: Option<f32>,
        diag: &mut Diagnostics,
    ) {
        if face_index >= self.faces.len() {
            diag.skip(
                COMPONENT,
                "extrude_region",
                format!("face index {face_index} out of range"),
            );
            return;
        }
        let source = self.faces[face_index].clone();
        let base = self.positions.len() as u32;
        let arity = source.indices.len() as u32;

        for &i in &source.indices {
            self.positions.push(self.positions[i as usize]);
        }
        // side walls between old loop and new cap
        for k in 0..arity {
            let k2 = (k + 1) % arity;
            self.faces.push(Face::quad(
                source.indices[k as usize],
                source.indices[k2 as usize],
                base + k2,
                base + k,
            ));
        }
        let cap = Face::new((base..base + arity).collect());
        let cap_indices = cap.indices.clone();
        // the cap replaces the source face, which is now interior
        self.faces[face_index] = cap;

        for &i in &cap_indices {
            self.positions[i as usize] += translation;
        }
        if let Some(scale) = post_scale {
            if let Some(center) = self.selection_centroid(&cap_indices) {
                for &i in &cap_indices {
                    let p = &mut self.positions[i as usize];
                    *p = center + (*p - center) * scale;
                }
            }
        }
    }

    /// Split all geometry crossing the plane and discard the non-kept side.
    /// Attempts to close the resulting open boundary with an ngon cap; if
    /// fewer than three boundary vertices survive, the failure is logged and
    /// the mesh is left open (non-fatal). Used to halve spheres into domes.
    pub fn bisect(
        &mut self,
        plane_origin: Vec3,
        plane_normal: Vec3,
        keep: KeepSide,
        diag: &mut Diagnostics,
    ) {
        let normal = plane_normal.normalize_or_zero();
        if normal == Vec3::ZERO {
            diag.skip(COMPONENT, "bisect", "degenerate plane normal");
            return;
        }
        let signed = |p: Vec3| -> f32 {
            let d = (p - plane_origin).dot(normal);
            match keep {
                KeepSide::Above => d,
                KeepSide::Below => -d,
            }
        };
        let distances: Vec<f32> = self.positions.iter().map(|&p| signed(p)).collect();
        if distances.iter().all(|&d| d >= -PLANE_EPS) {
            return; // nothing to cut
        }
        if distances.iter().all(|&d| d <= PLANE_EPS) {
            diag.skip(COMPONENT, "bisect", "entire mesh on discarded side");
            return;
        }

        // Clip each face polygon against the half-space, deduplicating the
        // intersection vertex created on each crossing edge.
        let mut edge_cut: std::collections::HashMap<(u32, u32), u32> =
            std::collections::HashMap::new();
        let mut positions = self.positions.clone();
        let mut cut_vertices: Vec<u32> = Vec::new();
        let mut new_faces: Vec<Face> = Vec::new();

        for face in &self.faces {
            let n = face.indices.len();
            let mut kept: Vec<u32> = Vec::with_capacity(n + 2);
            for k in 0..n {
                let ia = face.indices[k];
                let ib = face.indices[(k + 1) % n];
                let da = distances[ia as usize];
                let db = distances[ib as usize];
                if da >= -PLANE_EPS {
                    kept.push(ia);
                }
                let crossing = (da > PLANE_EPS && db < -PLANE_EPS)
                    || (da < -PLANE_EPS && db > PLANE_EPS);
                if crossing {
                    let key = (ia.min(ib), ia.max(ib));
                    let idx = *edge_cut.entry(key).or_insert_with(|| {
                        let t = da / (da - db);
                        let p = positions[ia as usize]
                            + (positions[ib as usize] - positions[ia as usize]) * t;
                        positions.push(p);
                        cut_vertices.push(positions.len() as u32 - 1);
                        positions.len() as u32 - 1
                    });
                    kept.push(idx);
                }
            }
            if kept.len() >= 3 {
                let mut clipped = Face::new(kept);
                clipped.material_slot = face.material_slot;
                new_faces.push(clipped);
            }
        }

        self.positions = positions;
        self.faces = new_faces;

        // Auto-cap: order the cut vertices by angle about their centroid in
        // the plane basis and close them with one ngon.
        if cut_vertices.len() >= 3 {
            let centroid = self
                .selection_centroid(&cut_vertices)
                .unwrap_or(plane_origin);
            let u = normal.any_orthonormal_vector();
            let v = normal.cross(u);
            let mut ordered = cut_vertices.clone();
            ordered.sort_by(|&a, &b| {
                let pa = self.positions[a as usize] - centroid;
                let pb = self.positions[b as usize] - centroid;
                let aa = pa.dot(v).atan2(pa.dot(u));
                let ab = pb.dot(v).atan2(pb.dot(u));
                aa.partial_cmp(&ab).unwrap_or(std::cmp::Ordering::Equal)
            });
            self.faces.push(Face::new(ordered));
        } else if !cut_vertices.is_empty() {
            diag.skip(
                COMPONENT,
                "bisect",
                "auto-cap failed, open boundary left uncapped",
            );
        }

        self.drop_orphan_vertices();
    }

    /// Uniform midpoint subdivision applied `cuts` times. Triangles split
    /// 1-to-4 and quads 1-to-4 (with a face-center vertex); higher-arity
    /// faces (ngon caps) are left intact so closed primitives stay closed.
    pub fn subdivide(&mut self, cuts: u32, diag: &mut Diagnostics) {
        if self.faces.iter().all(|f| f.indices.len() > 4) {
            diag.skip(COMPONENT, "subdivide", "no tri or quad faces to split");
            return;
        }
        for _ in 0..cuts {
            self.subdivide_once();
        }
    }

    fn subdivide_once(&mut self) {
        let mut midpoints: std::collections::HashMap<(u32, u32), u32> =
            std::collections::HashMap::new();
        let old_faces = std::mem::take(&mut self.faces);
        let mut mid = |positions: &mut Vec<Vec3>, a: u32, b: u32| -> u32 {
            let key = (a.min(b), a.max(b));
            *midpoints.entry(key).or_insert_with(|| {
                let p = (positions[a as usize] + positions[b as usize]) * 0.5;
                positions.push(p);
                positions.len() as u32 - 1
            })
        };
        for face in old_faces {
            match face.indices.len() {
                3 => {
                    let [a, b, c] = [face.indices[0], face.indices[1], face.indices[2]];
                    let ab = mid(&mut self.positions, a, b);
                    let bc = mid(&mut self.positions, b, c);
                    let ca = mid(&mut self.positions, c, a);
                    for tri in [[a, ab, ca], [ab, b, bc], [ca, bc, c], [ab, bc, ca]] {
                        let mut f = Face::tri(tri[0], tri[1], tri[2]);
                        f.material_slot = face.material_slot;
                        self.faces.push(f);
                    }
                }
                4 => {
                    let [a, b, c, d] = [
                        face.indices[0],
                        face.indices[1],
                        face.indices[2],
                        face.indices[3],
                    ];
                    let ab = mid(&mut self.positions, a, b);
                    let bc = mid(&mut self.positions, b, c);
                    let cd = mid(&mut self.positions, c, d);
                    let da = mid(&mut self.positions, d, a);
                    let center = (self.positions[a as usize]
                        + self.positions[b as usize]
                        + self.positions[c as usize]
                        + self.positions[d as usize])
                        * 0.25;
                    self.positions.push(center);
                    let m = self.positions.len() as u32 - 1;
                    for quad in [[a, ab, m, da], [ab, b, bc, m], [m, bc, c, cd], [da, m, cd, d]] {
                        let mut f = Face::quad(quad[0], quad[1], quad[2], quad[3]);
                        f.material_slot = face.material_slot;
                        self.faces.push(f);
                    }
                }
                _ => self.faces.push(face),
            }
        }
    }

    /// Midpoint subdivision followed by per-vertex jitter, for torn/organic
    /// surface variation (broken solar panels, shredded holo-ads).
    #[allow(clippy::too_many_arguments)]
    pub fn subdivide_and_jitter(
        &mut self,
        cuts: u32,
        probability: f32,
        magnitude: (f32, f32),
        axes: AxesMask,
        rng: &mut ChaCha8Rng,
        diag: &mut Diagnostics,
    ) {
        self.subdivide(cuts, diag);
        self.distort(probability, magnitude, axes, rng, diag);
    }

    /// Remove faces matching the predicate (given the face's centroid and
    /// normal), then drop any vertices left unreferenced. Used for skeletal
    /// spires and hole-punched surfaces.
    pub fn delete_faces_where(
        &mut self,
        mut predicate: impl FnMut(usize, Vec3, Vec3) -> bool,
        diag: &mut Diagnostics,
    ) {
        let doomed: Vec<usize> = (0..self.faces.len())
            .filter(|&i| {
                let centroid = self.face_centroid(&self.faces[i]);
                let normal = self.face_normal(&self.faces[i]);
                predicate(i, centroid, normal)
            })
            .collect();
        if doomed.is_empty() {
            diag.skip(COMPONENT, "delete_faces", "predicate matched no faces");
            return;
        }
        if doomed.len() == self.faces.len() {
            diag.skip(
                COMPONENT,
                "delete_faces",
                "refusing to delete every face of the mesh",
            );
            return;
        }
        let doomed_set: std::collections::HashSet<usize> = doomed.into_iter().collect();
        let mut kept = Vec::with_capacity(self.faces.len() - doomed_set.len());
        for (i, face) in std::mem::take(&mut self.faces).into_iter().enumerate() {
            if !doomed_set.contains(&i) {
                kept.push(face);
            }
        }
        self.faces = kept;
        self.drop_orphan_vertices();
    }
}
