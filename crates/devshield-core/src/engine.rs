//! The diagnostic engine: panic-isolated dispatch over the catalog.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, warn};

use devshield_platform::DeviceHost;
use devshield_types::{EngineError, Finding};

use crate::catalog::DetectorCatalog;
use crate::detector::Detector;
use crate::report::PostureReport;

/// Evaluates detectors from a catalog against an injected host.
///
/// Both the catalog and the host are fixed at construction; the engine is
/// read-only afterwards, so concurrent invocations need no synchronization.
///
/// For a known identifier `invoke` never fails: a detector that panics is
/// converted into a safe-default finding with a diagnostic message, so one
/// broken probe can never abort a batch or crash the host application.
pub struct DiagnosticEngine {
    catalog: DetectorCatalog,
    host: Arc<dyn DeviceHost>,
}

impl DiagnosticEngine {
    /// Build an engine over an explicit catalog.
    pub fn new(catalog: DetectorCatalog, host: Arc<dyn DeviceHost>) -> Self {
        Self { catalog, host }
    }

    /// Build an engine over the standard 31-check catalog.
    pub fn standard(host: Arc<dyn DeviceHost>) -> Self {
        Self::new(DetectorCatalog::standard(), host)
    }

    /// The catalog this engine dispatches over.
    pub fn catalog(&self) -> &DetectorCatalog {
        &self.catalog
    }

    /// Evaluate one check by method identifier.
    ///
    /// `Err(UnknownCheck)` only for identifiers outside the catalog; a
    /// registered check always yields a finding.
    pub fn invoke(&self, method: &str) -> Result<Finding, EngineError> {
        let detector = self
            .catalog
            .lookup(method)
            .ok_or_else(|| EngineError::UnknownCheck(method.to_string()))?;
        debug!(check = method, "invoking detector");
        Ok(self.evaluate_guarded(detector))
    }

    /// Evaluate every registered check, lazily, in registration order.
    ///
    /// The iterator is restartable: evaluation is idempotent, so calling
    /// `invoke_all` again re-runs the catalog from the top. A panicking
    /// detector yields its safe-default finding and the iteration
    /// continues.
    pub fn invoke_all(&self) -> impl Iterator<Item = Finding> + '_ {
        self.catalog.method_ids().map(move |id| {
            // Ids come from the catalog itself, so lookup cannot miss.
            let detector = self
                .catalog
                .lookup(id)
                .unwrap_or_else(|| unreachable!("catalog id {id} without detector"));
            self.evaluate_guarded(detector)
        })
    }

    /// Run the full catalog and aggregate into a report.
    pub fn scan(&self) -> PostureReport {
        PostureReport::from_findings(self.invoke_all().collect())
    }

    fn evaluate_guarded(&self, detector: &dyn Detector) -> Finding {
        let kind = detector.kind();
        let host = self.host.as_ref();
        match catch_unwind(AssertUnwindSafe(|| detector.evaluate(host))) {
            Ok(finding) => finding,
            Err(_) => {
                warn!(check = %kind, "detector panicked, reporting safe default");
                Finding::new(
                    kind,
                    false,
                    format!("Check {kind} could not be evaluated on this host"),
                )
            }
        }
    }
}
