//! Editable in-memory mesh representation.
//!
//! Split into sub-modules:
//! - `types`: `EditableMesh`, `Face`, selection masks, bounds
//! - `primitives`: parametric factories (cylinder, cube, plane, cone,
//!   sphere, torus, circle, grid)
//! - `ops`: vertex/face-level edits (taper, distort, extrude, bisect,
//!   subdivide, face deletion)

mod ops;
mod primitives;
#[cfg(test)]
mod tests;
mod types;

pub use ops::KeepSide;
pub use primitives::{PrimitiveSpec, Vec3Spec};
pub use types::{Aabb, AxesMask, EditableMesh, Face};
