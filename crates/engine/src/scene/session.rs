//! Exclusive, non-reentrant mesh edit sessions.

use bevy::math::Vec3;
use rand_chacha::ChaCha8Rng;

use crate::diagnostics::Diagnostics;
use crate::error::EngineError;
use crate::mesh::{AxesMask, EditableMesh, KeepSide};

/// Exclusive mutable access to one object's mesh, opened with
/// [`SceneGraph::begin_edit`] and committed with [`SceneGraph::end_edit`].
/// Every operation after commit fails with [`EngineError::StaleSession`].
/// Geometry-level faults inside an operation never fail the session; they
/// are recorded in the passed [`Diagnostics`] and skipped.
///
/// [`SceneGraph::begin_edit`]: super::SceneGraph::begin_edit
/// [`SceneGraph::end_edit`]: super::SceneGraph::end_edit
#[derive(Debug)]
pub struct EditSession {
    object: super::ObjectId,
    object_name: String,
    mesh: Option<EditableMesh>,
}

impl EditSession {
    pub(crate) fn new(
        object: super::ObjectId,
        object_name: String,
        mesh: EditableMesh,
    ) -> Self {
        Self {
            object,
            object_name,
            mesh: Some(mesh),
        }
    }

    pub fn object(&self) -> super::ObjectId {
        self.object
    }

    /// Read access to the in-flight mesh, for measurement between edits.
    pub fn mesh(&self) -> Result<&EditableMesh, EngineError> {
        self.mesh.as_ref().ok_or_else(|| self.stale())
    }

    pub fn taper(
        &mut self,
        threshold_z: f32,
        scale_xy: f32,
        diag: &mut Diagnostics,
    ) -> Result<(), EngineError> {
        self.mesh_mut()?.taper(threshold_z, scale_xy, diag);
        Ok(())
    }

    pub fn distort(
        &mut self,
        probability: f32,
        magnitude: (f32, f32),
        axes: AxesMask,
        rng: &mut ChaCha8Rng,
        diag: &mut Diagnostics,
    ) -> Result<(), EngineError> {
        self.mesh_mut()?.distort(probability, magnitude, axes, rng, diag);
        Ok(())
    }

    pub fn extrude_region(
        &mut self,
        face_index: usize,
        translation: Vec3,
        post_scale: Option<f32>,
        diag: &mut Diagnostics,
    ) -> Result<(), EngineError> {
        self.mesh_mut()?
            .extrude_region(face_index, translation, post_scale, diag);
        Ok(())
    }

    pub fn bisect(
        &mut self,
        plane_origin: Vec3,
        plane_normal: Vec3,
        keep: KeepSide,
        diag: &mut Diagnostics,
    ) -> Result<(), EngineError> {
        self.mesh_mut()?.bisect(plane_origin, plane_normal, keep, diag);
        Ok(())
    }

    pub fn subdivide(&mut self, cuts: u32, diag: &mut Diagnostics) -> Result<(), EngineError> {
        self.mesh_mut()?.subdivide(cuts, diag);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn subdivide_and_jitter(
        &mut self,
        cuts: u32,
        probability: f32,
        magnitude: (f32, f32),
        axes: AxesMask,
        rng: &mut ChaCha8Rng,
        diag: &mut Diagnostics,
    ) -> Result<(), EngineError> {
        self.mesh_mut()?
            .subdivide_and_jitter(cuts, probability, magnitude, axes, rng, diag);
        Ok(())
    }

    pub fn delete_faces_where(
        &mut self,
        predicate: impl FnMut(usize, Vec3, Vec3) -> bool,
        diag: &mut Diagnostics,
    ) -> Result<(), EngineError> {
        self.mesh_mut()?.delete_faces_where(predicate, diag);
        Ok(())
    }

    pub(crate) fn take_for_commit(
        &mut self,
    ) -> Result<(super::ObjectId, EditableMesh), EngineError> {
        let mesh = self.mesh.take().ok_or_else(|| self.stale())?;
        Ok((self.object, mesh))
    }

    fn mesh_mut(&mut self) -> Result<&mut EditableMesh, EngineError> {
        match self.mesh.as_mut() {
            Some(mesh) => Ok(mesh),
            None => Err(EngineError::StaleSession {
                object: self.object_name.clone(),
            }),
        }
    }

    fn stale(&self) -> EngineError {
        EngineError::StaleSession {
            object: self.object_name.clone(),
        }
    }
}
