//! Name-keyed material graph cache.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::EngineError;

use super::graph::MaterialGraph;
use super::stage::StageSpec;

/// Owns every built graph for a run. Graphs are cached by name: a second
/// `build_graph` call with an already-used name returns the existing graph
/// unchanged (same `Arc`), which is what makes whole-scene reruns
/// idempotent and keeps tier-wide materials shared across landmarks.
#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    graphs: HashMap<String, Arc<MaterialGraph>>,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and cache a graph, or return the cached one for `name`. The
    /// stage list is ignored on a cache hit; it is only validated when the
    /// name is first seen.
    pub fn build_graph(
        &mut self,
        name: &str,
        stages: Vec<StageSpec>,
    ) -> Result<Arc<MaterialGraph>, EngineError> {
        if let Some(existing) = self.graphs.get(name) {
            return Ok(Arc::clone(existing));
        }
        let graph = Arc::new(MaterialGraph::build(name, stages)?);
        self.graphs.insert(name.to_string(), Arc::clone(&graph));
        Ok(graph)
    }

    pub fn get(&self, name: &str) -> Option<Arc<MaterialGraph>> {
        self.graphs.get(name).map(Arc::clone)
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Drop every cached graph. Objects holding `Arc` references keep their
    /// materials alive; the next `build_graph` for a name rebuilds fresh.
    pub fn clear(&mut self) {
        self.graphs.clear();
    }
}
