//! Scene graph management.
//!
//! Split into sub-modules:
//! - `object`: arena ids, `SceneGroup`, `GeneratedObject`
//! - `graph`: the `SceneGraph` itself (hierarchy walking, spawning,
//!   linking, world bounds, teardown)
//! - `session`: exclusive per-object mesh edit sessions

mod graph;
mod object;
mod session;
#[cfg(test)]
mod tests;

pub use graph::SceneGraph;
pub use object::{GeneratedObject, GroupId, ObjectId, SceneGroup};
pub use session::EditSession;
