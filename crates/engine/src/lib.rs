//! Core engine for procedural landmark generation.
//!
//! Three cooperating subsystems, all headless and fully synchronous:
//! - `mesh`: an editable in-memory mesh representation with primitive
//!   factories and session-scoped vertex/face edits.
//! - `material`: declarative shading-stage graphs with name-keyed caching.
//! - `scene`: the named group hierarchy that owns every generated object.
//!
//! Soft geometry faults (empty selections, failed caps) are recorded in
//! [`Diagnostics`] and skipped; structural faults (invalid graphs, stale
//! edit sessions) surface as [`EngineError`] and abort the run.

pub mod diagnostics;
pub mod error;
pub mod material;
pub mod mesh;
pub mod rng;
pub mod scene;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::EngineError;
pub use material::{MaterialGraph, MaterialLibrary, RampStop, StageKind, StageSpec, SurfaceSample};
pub use mesh::{AxesMask, EditableMesh, Face, KeepSide, PrimitiveSpec, Vec3Spec};
pub use rng::GenRng;
pub use scene::{EditSession, GeneratedObject, GroupId, ObjectId, SceneGraph, SceneGroup};
