//! Hard-fault taxonomy.
//!
//! These errors indicate logic bugs (cyclic material graphs, misuse of edit
//! sessions), not unlucky random input. They propagate to the orchestration
//! entry point, which reports and halts. Recoverable geometry faults never
//! appear here; those go through [`crate::Diagnostics`] instead.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A second edit session was opened on an object that already has one.
    SessionConflict { object: String },
    /// An edit-session operation was attempted after the session committed.
    StaleSession { object: String },
    /// A material graph failed structural validation (cycle, multiple
    /// surface outputs, unknown input reference, schema violation).
    InvalidGraph { graph: String, reason: String },
    /// A color ramp's stop positions were not strictly increasing.
    InvalidRamp { graph: String, reason: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::SessionConflict { object } => {
                write!(f, "edit session already open on object '{object}'")
            }
            EngineError::StaleSession { object } => {
                write!(f, "edit session on object '{object}' used after commit")
            }
            EngineError::InvalidGraph { graph, reason } => {
                write!(f, "invalid material graph '{graph}': {reason}")
            }
            EngineError::InvalidRamp { graph, reason } => {
                write!(f, "invalid color ramp in graph '{graph}': {reason}")
            }
        }
    }
}

impl Error for EngineError {}
