//! Landmark generation pipeline.
//!
//! Builds the whole scene from declarative configuration: seven landmark
//! generators (`landmarks`), interior fixture and entrance builders
//! (`interiors`), the room/corridor layout engine (`rooms`), window
//! placement (`windows`), and the orchestration entry point
//! (`orchestrator`). All randomness flows from one seeded stream so runs
//! are reproducible.

pub mod config;
pub mod interiors;
pub mod landmarks;
pub mod orchestrator;
pub mod palette;
pub mod rooms;
pub mod windows;

#[cfg(test)]
mod integration_tests;

use engine::{Diagnostics, GenRng, MaterialLibrary, SceneGraph};

pub use orchestrator::{generate_city, generate_default_city, generate_roster, CityReport};

/// Everything a generator needs, threaded explicitly: the scene being
/// populated, the material cache, the seeded RNG stream, and the
/// diagnostics sink for soft faults.
pub struct GenContext {
    pub scene: SceneGraph,
    pub materials: MaterialLibrary,
    pub rng: GenRng,
    pub diagnostics: Diagnostics,
}

impl Default for GenContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GenContext {
    pub fn new() -> Self {
        Self {
            scene: SceneGraph::new(),
            materials: MaterialLibrary::new(),
            rng: GenRng::default(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: GenRng::from_seed_u64(seed),
            ..Self::new()
        }
    }

    /// The single teardown point: drop every object, group (except the
    /// root), cached material graph, and recorded diagnostic. Called once
    /// at the start of each full generation run.
    pub fn reset(&mut self) {
        self.scene.reset_all();
        self.materials.clear();
        self.diagnostics.clear();
    }
}
