//! The scene graph: group hierarchy, object arena, and edit-session gate.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use bevy::log::warn;
use bevy::prelude::Transform;

use crate::error::EngineError;
use crate::material::MaterialGraph;
use crate::mesh::{Aabb, EditableMesh, PrimitiveSpec};

use super::object::{GeneratedObject, GroupId, ObjectId, SceneGroup};
use super::session::EditSession;

const ROOT_NAME: &str = "World";

/// Owns every group and object of a generation run. Single-threaded by
/// design: mesh mutation goes through non-reentrant edit sessions, and the
/// whole graph is torn down with [`SceneGraph::reset_all`] at the start of
/// each run.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    groups: Vec<SceneGroup>,
    objects: Vec<GeneratedObject>,
    /// Which group each object is linked into (index-parallel to `objects`).
    memberships: Vec<GroupId>,
    names: HashMap<String, ObjectId>,
    editing: HashSet<ObjectId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        let mut graph = Self::default();
        graph.groups.push(SceneGroup::new(ROOT_NAME, None));
        graph
    }

    pub fn root(&self) -> GroupId {
        GroupId(0)
    }

    // -----------------------------------------------------------------------
    // Groups
    // -----------------------------------------------------------------------

    /// Walk `path` from the root, creating any missing segments, and return
    /// the final group. An empty path is the root itself.
    pub fn get_or_create_group(&mut self, path: &[&str]) -> GroupId {
        let mut current = self.root();
        for segment in path {
            let existing = self.groups[current.0]
                .children
                .iter()
                .copied()
                .find(|&child| self.groups[child.0].name == *segment);
            current = match existing {
                Some(child) => child,
                None => {
                    let id = GroupId(self.groups.len());
                    self.groups.push(SceneGroup::new(*segment, Some(current)));
                    self.groups[current.0].children.push(id);
                    id
                }
            };
        }
        current
    }

    pub fn group(&self, id: GroupId) -> &SceneGroup {
        &self.groups[id.0]
    }

    /// Find a group by walking `path` without creating anything.
    pub fn find_group(&self, path: &[&str]) -> Option<GroupId> {
        let mut current = self.root();
        for segment in path {
            current = self.groups[current.0]
                .children
                .iter()
                .copied()
                .find(|&child| self.groups[child.0].name == *segment)?;
        }
        Some(current)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Objects linked into `group` or any group beneath it.
    pub fn objects_in_subtree(&self, group: GroupId) -> Vec<ObjectId> {
        let mut out = Vec::new();
        let mut stack = vec![group];
        while let Some(g) = stack.pop() {
            out.extend_from_slice(&self.groups[g.0].objects);
            stack.extend_from_slice(&self.groups[g.0].children);
        }
        out
    }

    // -----------------------------------------------------------------------
    // Objects
    // -----------------------------------------------------------------------

    /// Build a primitive and file it under `group`. Names are unique scene
    /// keys; a colliding name gets a numeric suffix (`.001`, `.002`, ...)
    /// and the collision is logged.
    pub fn spawn(
        &mut self,
        name: &str,
        spec: &PrimitiveSpec,
        transform: Transform,
        group: GroupId,
    ) -> ObjectId {
        self.spawn_mesh(name, spec.build(), transform, group)
    }

    /// File an already-built mesh (compound fixtures, clipped shells).
    pub fn spawn_mesh(
        &mut self,
        name: &str,
        mesh: EditableMesh,
        transform: Transform,
        group: GroupId,
    ) -> ObjectId {
        let unique = self.unique_name(name);
        let group = self.checked_group(group);
        let id = ObjectId(self.objects.len());
        self.objects.push(GeneratedObject {
            name: unique.clone(),
            transform,
            mesh,
            materials: Vec::new(),
        });
        self.memberships.push(group);
        self.groups[group.0].objects.push(id);
        self.names.insert(unique, id);
        id
    }

    pub fn object(&self, id: ObjectId) -> &GeneratedObject {
        &self.objects[id.0]
    }

    pub fn object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.names.get(name).copied()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// All objects in spawn order.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &GeneratedObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, o)| (ObjectId(i), o))
    }

    pub fn object_group(&self, id: ObjectId) -> GroupId {
        self.memberships[id.0]
    }

    pub fn set_transform(&mut self, id: ObjectId, transform: Transform) {
        self.objects[id.0].transform = transform;
    }

    /// Append a shared material reference (many objects per graph, no
    /// ownership transfer).
    pub fn assign_material(&mut self, id: ObjectId, graph: Arc<MaterialGraph>) {
        self.objects[id.0].materials.push(graph);
    }

    /// Re-link `object` into `group`, unlinking it from its current group.
    /// Already there: silent no-op, so generators can re-file safely. An
    /// object is never linked to two groups at once.
    pub fn move_to(&mut self, object: ObjectId, group: GroupId) {
        let group = self.checked_group(group);
        let current = self.memberships[object.0];
        if current == group {
            return;
        }
        self.groups[current.0].objects.retain(|&o| o != object);
        self.groups[group.0].objects.push(object);
        self.memberships[object.0] = group;
    }

    /// Mesh bounds in world space, via the object's transform. `None` for
    /// an empty mesh.
    pub fn world_bounds(&self, id: ObjectId) -> Option<Aabb> {
        let object = &self.objects[id.0];
        let mut points = object
            .mesh
            .positions
            .iter()
            .map(|&p| object.transform.transform_point(p));
        let first = points.next()?;
        let (mut min, mut max) = (first, first);
        for p in points {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Aabb { min, max })
    }

    // -----------------------------------------------------------------------
    // Edit sessions
    // -----------------------------------------------------------------------

    /// Open an exclusive edit session on an object's mesh. Sessions are not
    /// reentrant: a second `begin_edit` on the same object before `end_edit`
    /// fails with [`EngineError::SessionConflict`].
    pub fn begin_edit(&mut self, id: ObjectId) -> Result<EditSession, EngineError> {
        if !self.editing.insert(id) {
            return Err(EngineError::SessionConflict {
                object: self.objects[id.0].name.clone(),
            });
        }
        let mesh = std::mem::take(&mut self.objects[id.0].mesh);
        Ok(EditSession::new(id, self.objects[id.0].name.clone(), mesh))
    }

    /// Commit a session: the edited mesh is written back and the session
    /// handle is invalidated. A second commit of the same session fails
    /// with [`EngineError::StaleSession`].
    pub fn end_edit(&mut self, session: &mut EditSession) -> Result<(), EngineError> {
        let (id, mesh) = session.take_for_commit()?;
        self.objects[id.0].mesh = mesh;
        self.editing.remove(&id);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Teardown
    // -----------------------------------------------------------------------

    /// Discard every object and every group except the permanent root. The
    /// single global teardown point, called once at the start of a full
    /// generation run. Outstanding ids and sessions are invalidated; the
    /// caller clears its material cache alongside.
    pub fn reset_all(&mut self) {
        self.groups.truncate(1);
        self.groups[0].children.clear();
        self.groups[0].objects.clear();
        self.objects.clear();
        self.memberships.clear();
        self.names.clear();
        self.editing.clear();
    }

    fn unique_name(&self, name: &str) -> String {
        if !self.names.contains_key(name) {
            return name.to_string();
        }
        let mut n = 1;
        loop {
            let candidate = format!("{name}.{n:03}");
            if !self.names.contains_key(&candidate) {
                warn!("object name `{name}` taken, using `{candidate}`");
                return candidate;
            }
            n += 1;
        }
    }

    fn checked_group(&self, group: GroupId) -> GroupId {
        if group.0 < self.groups.len() {
            group
        } else {
            warn!("group id {} out of range, filing under root", group.0);
            self.root()
        }
    }
}
