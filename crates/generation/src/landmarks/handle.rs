//! Landmark handles: the read-only view downstream generators anchor to.

use std::collections::BTreeMap;

use engine::{GroupId, ObjectId};

use crate::config::Tier;

/// Named substructures of one generated landmark. Built once by the
/// landmark's generator and immutable afterwards; interiors, rooms, and
/// windows measure bounds through these ids instead of recomputing
/// geometry.
#[derive(Debug, Clone)]
pub struct LandmarkHandle {
    name: String,
    tier: Tier,
    group: GroupId,
    primary: ObjectId,
    parts: BTreeMap<String, ObjectId>,
    arrays: BTreeMap<String, Vec<ObjectId>>,
}

impl LandmarkHandle {
    pub(crate) fn new(name: &str, tier: Tier, group: GroupId, primary: ObjectId) -> Self {
        Self {
            name: name.to_string(),
            tier,
            group,
            primary,
            parts: BTreeMap::new(),
            arrays: BTreeMap::new(),
        }
    }

    pub(crate) fn insert_part(&mut self, key: &str, id: ObjectId) {
        self.parts.insert(key.to_string(), id);
    }

    pub(crate) fn push_part(&mut self, key: &str, id: ObjectId) {
        self.arrays.entry(key.to_string()).or_default().push(id);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// The landmark's leaf scene group.
    pub fn group(&self) -> GroupId {
        self.group
    }

    /// The structure everything else anchors to (tower, station hull,
    /// fortress block, ...).
    pub fn primary(&self) -> ObjectId {
        self.primary
    }

    pub fn part(&self, key: &str) -> Option<ObjectId> {
        self.parts.get(key).copied()
    }

    pub fn part_array(&self, key: &str) -> &[ObjectId] {
        self.arrays.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }
}
