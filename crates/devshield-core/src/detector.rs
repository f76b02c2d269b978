//! The [`Detector`] trait and shared evaluation helpers.

use devshield_platform::DeviceHost;
use devshield_types::{CheckKind, Finding, ProbeResult};
use tracing::warn;

/// One security check.
///
/// Detectors own no mutable state and are pure with respect to the probe
/// reads they perform: the same host state yields the same finding. A
/// probe failure is absorbed into the detector's documented default
/// verdict, never propagated.
pub trait Detector: Send + Sync {
    /// The category this detector reports under.
    fn kind(&self) -> CheckKind;

    /// Evaluate the check against the given host.
    fn evaluate(&self, host: &dyn DeviceHost) -> Finding;
}

/// Resolve a boolean probe read, absorbing failure into `default`.
///
/// The default polarity is per-check: most checks default to `false` (do
/// not report a vulnerability the probe could not confirm), but checks that
/// assert the *absence* of a protection default to `true`.
pub(crate) fn signal_or(kind: CheckKind, probe: &str, read: ProbeResult<bool>, default: bool) -> bool {
    match read {
        Ok(value) => value,
        Err(err) => {
            warn!(check = %kind, probe, error = %err, default, "probe failed, absorbing");
            default
        }
    }
}

/// A detector that always returns the same verdict.
///
/// Used where no reliable automatic signal exists on any platform; the
/// message states that the check needs application-specific
/// instrumentation, which is what distinguishes "not checked" from
/// "checked and safe".
pub struct StubDetector {
    kind: CheckKind,
    vulnerable: bool,
    message: &'static str,
}

impl StubDetector {
    pub fn new(kind: CheckKind, vulnerable: bool, message: &'static str) -> Self {
        Self {
            kind,
            vulnerable,
            message,
        }
    }
}

impl Detector for StubDetector {
    fn kind(&self) -> CheckKind {
        self.kind
    }

    fn evaluate(&self, _host: &dyn DeviceHost) -> Finding {
        Finding::new(self.kind, self.vulnerable, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devshield_platform::StaticHost;
    use devshield_types::ProbeError;

    #[test]
    fn signal_or_passes_through_ok() {
        assert!(signal_or(CheckKind::DebuggableApp, "t", Ok(true), false));
        assert!(!signal_or(CheckKind::DebuggableApp, "t", Ok(false), true));
    }

    #[test]
    fn signal_or_uses_default_on_error() {
        let err = Err(ProbeError::Unavailable("t"));
        assert!(!signal_or(CheckKind::DebuggableApp, "t", err, false));
        let err = Err(ProbeError::Unavailable("t"));
        assert!(signal_or(CheckKind::ScreenLockNotEnforced, "t", err, true));
    }

    #[test]
    fn stub_detector_is_a_stable_constant() {
        let stub = StubDetector::new(
            CheckKind::ClipboardLeakage,
            true,
            "Clipboard not monitored for sensitive data",
        );
        let host = StaticHost::android();
        let first = stub.evaluate(&host);
        let second = stub.evaluate(&host);
        assert_eq!(first, second);
        assert!(first.vulnerable);
        assert!(first.message.contains("not monitored"));
    }
}
