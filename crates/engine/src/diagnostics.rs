//! Structured skip/failure records.
//!
//! Every recoverable fault emits one [`Diagnostic`] (component, operation,
//! reason) and a `warn!` log line, then generation continues. The sink is
//! the only observability surface the engine exposes to a host; tests
//! assert against it instead of capturing log output.

use bevy::log::warn;

/// One recorded skip or soft failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub component: &'static str,
    pub operation: String,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped operation. Logs a warning; never aborts.
    pub fn skip(
        &mut self,
        component: &'static str,
        operation: impl Into<String>,
        reason: impl Into<String>,
    ) {
        let operation = operation.into();
        let reason = reason.into();
        warn!("{component}: skipped {operation}: {reason}");
        self.records.push(Diagnostic {
            component,
            operation,
            reason,
        });
    }

    pub fn records(&self) -> &[Diagnostic] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records for a given component.
    pub fn count_for(&self, component: &str) -> usize {
        self.records
            .iter()
            .filter(|d| d.component == component)
            .count()
    }

    /// Number of records whose reason mentions an unresolved reference.
    /// Used by the layout tests to assert clean corridor resolution.
    pub fn unresolved_count(&self) -> usize {
        self.records
            .iter()
            .filter(|d| d.reason.contains("unresolved"))
            .count()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_records_in_order() {
        let mut diag = Diagnostics::new();
        diag.skip("mesh", "taper", "empty selection");
        diag.skip("rooms", "corridor Hub->Annex", "unresolved endpoint");
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.records()[0].component, "mesh");
        assert_eq!(diag.count_for("rooms"), 1);
        assert_eq!(diag.unresolved_count(), 1);
    }

    #[test]
    fn test_clear_empties_sink() {
        let mut diag = Diagnostics::new();
        diag.skip("mesh", "bisect", "open boundary left uncapped");
        diag.clear();
        assert!(diag.is_empty());
    }
}
