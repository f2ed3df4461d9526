//! Interior generation: fixture assemblies and landmark entrances.
//!
//! Fixtures are the small multi-object assemblies (desks, racks,
//! holograms, doors) that the room engine's furnishing callbacks place;
//! entrances are the per-landmark street-level assemblies (sliding doors,
//! the Biotechnica airlock).

pub mod entrances;
pub mod fixtures;
#[cfg(test)]
mod tests;
