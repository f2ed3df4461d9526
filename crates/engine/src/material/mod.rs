//! Declarative material graphs.
//!
//! Split into sub-modules:
//! - `stage`: the serializable stage descriptions landmark palettes are
//!   written in
//! - `graph`: validation (acyclic, single surface output, ramp ordering)
//!   and point-sampled evaluation
//! - `library`: the name-keyed cache that makes graphs shareable and
//!   reruns idempotent

mod graph;
mod library;
mod stage;
#[cfg(test)]
mod tests;

pub use graph::{MaterialGraph, SurfaceSample};
pub use library::MaterialLibrary;
pub use stage::{RampStop, StageKind, StageSpec};
