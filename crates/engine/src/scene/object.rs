//! Scene object and group storage types.

use std::sync::Arc;

use bevy::prelude::Transform;

use crate::material::MaterialGraph;
use crate::mesh::EditableMesh;

/// Index into the scene's group arena. Invalidated by a full scene reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub(crate) usize);

/// Index into the scene's object arena. Invalidated by a full scene reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) usize);

/// One node of the named group hierarchy. Groups own no geometry
/// themselves; they hold object links and child groups.
#[derive(Debug, Clone)]
pub struct SceneGroup {
    pub(crate) name: String,
    #[allow(dead_code)]
    pub(crate) parent: Option<GroupId>,
    pub(crate) children: Vec<GroupId>,
    pub(crate) objects: Vec<ObjectId>,
}

impl SceneGroup {
    pub(crate) fn new(name: impl Into<String>, parent: Option<GroupId>) -> Self {
        Self {
            name: name.into(),
            parent,
            children: Vec::new(),
            objects: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[GroupId] {
        &self.children
    }

    pub fn objects(&self) -> &[ObjectId] {
        &self.objects
    }
}

/// A generated mesh object: unique name, world transform, owned mesh, and
/// shared material references. Created by [`SceneGraph::spawn`], mutated
/// only through edit sessions, never deleted outside a full reset.
///
/// [`SceneGraph::spawn`]: super::SceneGraph::spawn
#[derive(Debug, Clone)]
pub struct GeneratedObject {
    pub(crate) name: String,
    pub(crate) transform: Transform,
    pub(crate) mesh: EditableMesh,
    pub(crate) materials: Vec<Arc<MaterialGraph>>,
}

impl GeneratedObject {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn mesh(&self) -> &EditableMesh {
        &self.mesh
    }

    pub fn materials(&self) -> &[Arc<MaterialGraph>] {
        &self.materials
    }
}
