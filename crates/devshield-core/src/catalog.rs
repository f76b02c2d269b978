//! The ordered registry mapping method identifiers to detectors.

use std::collections::HashMap;

use tracing::debug;

use crate::checks;
use crate::detector::Detector;

/// Registry of detectors, keyed by their camelCase method identifier.
///
/// Built once at startup and read-only afterwards. Registration order is
/// preserved: it defines the order of `invokeAll` output and of
/// [`method_ids`](Self::method_ids).
#[derive(Default)]
pub struct DetectorCatalog {
    order: Vec<&'static str>,
    detectors: HashMap<&'static str, Box<dyn Detector>>,
}

impl DetectorCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The full standard catalog, one detector per
    /// [`CheckKind`](devshield_types::CheckKind) in declaration order.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        checks::register_all(&mut catalog);
        catalog
    }

    /// Register a detector under its kind's method identifier.
    ///
    /// Panics on a duplicate identifier: a catalog with ambiguous dispatch
    /// is a programming defect, not a runtime condition.
    pub fn register(&mut self, detector: Box<dyn Detector>) {
        let id = detector.kind().method_id();
        if self.detectors.contains_key(id) {
            panic!("duplicate detector registered for {id}");
        }
        debug!(check = id, "registering detector");
        self.detectors.insert(id, detector);
        self.order.push(id);
    }

    /// Look up a detector by method identifier.
    pub fn lookup(&self, method: &str) -> Option<&dyn Detector> {
        self.detectors.get(method).map(Box::as_ref)
    }

    /// Method identifiers in registration order.
    pub fn method_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// Number of registered detectors.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
