//! Authentication and screen/output capture checks.

use devshield_platform::{DeviceHost, DeviceOs};
use devshield_types::{CheckKind, Finding};

use crate::detector::{Detector, StubDetector};

/// Biometric capability: no usable biometrics means authentication falls
/// back to weaker factors. When the capability cannot be read at all the
/// verdict is a non-vulnerable stub, since absence of the probe says
/// nothing about the device.
pub struct BiometricHandlingDetector;

impl Detector for BiometricHandlingDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::WeakBiometricHandling
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        match host.auth().biometrics_available() {
            Ok(true) => Finding::new(self.kind(), false, "Biometrics available"),
            Ok(false) => Finding::new(self.kind(), true, "Biometrics not available"),
            Err(_) => Finding::new(
                self.kind(),
                false,
                "Biometric check requires runtime implementation",
            ),
        }
    }
}

/// Biometric bypass resistance needs app-specific fallback-path analysis.
pub fn biometric_bypass_stub() -> StubDetector {
    StubDetector::new(
        CheckKind::BiometricBypass,
        false,
        "Biometric bypass check requires app-specific logic",
    )
}

/// Device credential (PIN/passcode/pattern), inverted: no credential is
/// the vulnerability. Probe failure defaults to vulnerable -- a lock that
/// cannot be confirmed is treated as not enforced.
pub struct ScreenLockDetector;

impl Detector for ScreenLockDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::ScreenLockNotEnforced
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        match host.auth().device_credential_set() {
            Ok(true) => Finding::new(self.kind(), false, "Screen lock is enabled"),
            Ok(false) => Finding::new(self.kind(), true, "Screen lock not enabled"),
            Err(_) => Finding::new(
                self.kind(),
                true,
                "Screen lock state unknown; assuming not enforced",
            ),
        }
    }
}

/// Capture restriction (FLAG_SECURE or equivalent), inverted. Probe
/// failure defaults to vulnerable: unless the host asserts the
/// restriction exists, screenshots are assumed possible.
pub struct ScreenshotDetector;

impl Detector for ScreenshotDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::ScreenshotNotRestricted
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        let restricted = host.screen().capture_restricted().unwrap_or(false);
        if restricted {
            Finding::new(self.kind(), false, "Screen capture restriction asserted")
        } else {
            Finding::new(
                self.kind(),
                true,
                "Screenshots not restricted (set FLAG_SECURE on sensitive windows)",
            )
        }
    }
}

/// Active screen capture/mirroring. Probe failure defaults to vulnerable,
/// matching the conservative "recording not restricted" posture.
pub struct ScreenRecordingDetector;

impl Detector for ScreenRecordingDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::ScreenRecordingNotRestricted
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        match host.screen().is_captured() {
            Ok(true) => Finding::new(self.kind(), true, "Screen is being recorded"),
            Ok(false) => Finding::new(self.kind(), false, "Screen not being recorded"),
            Err(_) => Finding::new(self.kind(), true, "Screen recording not restricted"),
        }
    }
}

/// Clipboard contents cannot be audited without app instrumentation.
pub fn clipboard_stub() -> StubDetector {
    StubDetector::new(
        CheckKind::ClipboardLeakage,
        true,
        "Clipboard not monitored for sensitive data",
    )
}

/// Overlay (tapjacking) detection needs elevated APIs on Android; iOS
/// blocks overlays at the system level, so the verdicts differ.
pub struct OverlayDetector;

impl Detector for OverlayDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::OverlayAttack
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        if host.os() == DeviceOs::Ios {
            Finding::new(
                self.kind(),
                false,
                "iOS provides system-level overlay protection",
            )
        } else {
            Finding::new(self.kind(), true, "Overlay detection not implemented")
        }
    }
}

/// Background snapshot protection needs app-specific logic.
pub fn background_data_stub() -> StubDetector {
    StubDetector::new(
        CheckKind::BackgroundDataExposure,
        true,
        "Background data exposure check requires app-specific logic",
    )
}

/// Task-switcher preview exposure; assumed present until the app hides it.
pub struct RecentAppsDetector;

impl Detector for RecentAppsDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::RecentAppsExposure
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        let message = if host.os() == DeviceOs::Ios {
            "App switcher preview not hidden"
        } else {
            "Recent apps exposure not prevented"
        };
        Finding::new(self.kind(), true, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devshield_platform::StaticHost;

    #[test]
    fn biometrics_present_is_safe() {
        let host = StaticHost::ios().with_biometrics(true);
        assert!(!BiometricHandlingDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn biometrics_absent_is_vulnerable() {
        let host = StaticHost::ios().with_biometrics(false);
        let finding = BiometricHandlingDetector.evaluate(&host);
        assert!(finding.vulnerable);
        assert_eq!(finding.message, "Biometrics not available");
    }

    #[test]
    fn unreadable_biometrics_is_a_stub_verdict() {
        let finding = BiometricHandlingDetector.evaluate(&StaticHost::android());
        assert!(!finding.vulnerable);
        assert!(finding.message.contains("requires runtime implementation"));
    }

    #[test]
    fn screen_lock_present_is_safe() {
        let host = StaticHost::android().with_credential(true);
        let finding = ScreenLockDetector.evaluate(&host);
        assert!(!finding.vulnerable);
        assert_eq!(finding.message, "Screen lock is enabled");
    }

    #[test]
    fn no_screen_lock_is_vulnerable() {
        let host = StaticHost::ios().with_credential(false);
        assert!(ScreenLockDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn unknown_screen_lock_defaults_vulnerable() {
        let finding = ScreenLockDetector.evaluate(&StaticHost::android());
        assert!(finding.vulnerable);
        assert!(finding.message.contains("unknown"));
    }

    #[test]
    fn capture_restriction_asserted_is_safe() {
        let host = StaticHost::android().with_capture_restricted(true);
        assert!(!ScreenshotDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn unasserted_restriction_defaults_vulnerable() {
        // The host cannot assert FLAG_SECURE exists -> conservative verdict.
        let finding = ScreenshotDetector.evaluate(&StaticHost::android());
        assert!(finding.vulnerable);
        assert!(finding.message.contains("FLAG_SECURE"));
    }

    #[test]
    fn active_recording_is_vulnerable() {
        let host = StaticHost::ios().with_captured(true);
        let finding = ScreenRecordingDetector.evaluate(&host);
        assert!(finding.vulnerable);
        assert_eq!(finding.message, "Screen is being recorded");
    }

    #[test]
    fn idle_screen_is_safe() {
        let host = StaticHost::ios().with_captured(false);
        assert!(!ScreenRecordingDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn unreadable_capture_state_defaults_vulnerable() {
        assert!(ScreenRecordingDetector.evaluate(&StaticHost::android()).vulnerable);
    }

    #[test]
    fn clipboard_stub_is_stable() {
        let stub = clipboard_stub();
        let host = StaticHost::android();
        let first = stub.evaluate(&host);
        assert!(first.vulnerable);
        assert!(first.message.contains("not monitored"));
        assert_eq!(first, stub.evaluate(&host));
    }

    #[test]
    fn overlay_verdict_differs_by_platform() {
        assert!(OverlayDetector.evaluate(&StaticHost::android()).vulnerable);
        assert!(!OverlayDetector.evaluate(&StaticHost::ios()).vulnerable);
    }

    #[test]
    fn recent_apps_always_flagged() {
        assert!(RecentAppsDetector.evaluate(&StaticHost::android()).vulnerable);
        assert!(RecentAppsDetector.evaluate(&StaticHost::ios()).vulnerable);
    }
}
