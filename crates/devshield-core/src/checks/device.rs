//! Device integrity and identity checks.

use std::path::Path;

use devshield_platform::{DeviceHost, DeviceOs};
use devshield_platform::device::SettingKey;
use devshield_types::{CheckKind, Finding};

use crate::detector::{signal_or, Detector};

/// Filesystem artifacts left by common Android root tools.
const SU_PATHS: [&str; 10] = [
    "/system/app/Superuser.apk",
    "/sbin/su",
    "/system/bin/su",
    "/system/xbin/su",
    "/data/local/xbin/su",
    "/data/local/bin/su",
    "/system/sd/xbin/su",
    "/system/bin/failsafe/su",
    "/data/local/su",
    "/su/bin/su",
];

/// Filesystem artifacts left by common iOS jailbreaks.
const JAILBREAK_PATHS: [&str; 8] = [
    "/Applications/Cydia.app",
    "/Library/MobileSubstrate/MobileSubstrate.dylib",
    "/bin/bash",
    "/usr/sbin/sshd",
    "/etc/apt",
    "/private/var/lib/apt/",
    "/Applications/Sileo.app",
    "/var/lib/cydia",
];

/// Sentinel path for the jailbreak write-access probe. A stock iOS app
/// cannot write under /private; succeeding means the sandbox is broken.
const JAILBREAK_SENTINEL: &str = "/private/jailbreak.txt";

/// Package identifiers flagged by the malware check.
const SUSPICIOUS_PACKAGES: [&str; 2] = ["com.example.malware", "com.suspicious.app"];

/// Root/jailbreak detection: OR over every indicator the platform offers.
///
/// Signals per OS -- Android: `test-keys` build tags, su artifact paths,
/// su on the binary search path. iOS: jailbreak artifact paths, a
/// non-empty `DYLD_INSERT_LIBRARIES`, write access outside the sandbox.
/// `Other` hosts run both path lists plus the tag, env, and binary
/// signals; the write probe is skipped there because desktop hosts may
/// legitimately allow it. Every probe error reads as "signal absent".
pub struct RootJailbreakDetector;

impl RootJailbreakDetector {
    fn test_keys_signal(host: &dyn DeviceHost) -> bool {
        host.build().info().tags.contains("test-keys")
    }

    fn su_path_signal(host: &dyn DeviceHost) -> bool {
        SU_PATHS.iter().any(|p| host.fs().exists(Path::new(p)))
    }

    fn su_binary_signal(host: &dyn DeviceHost) -> bool {
        host.binaries()
            .map(|b| b.locate("su").is_some())
            .unwrap_or(false)
    }

    fn jailbreak_path_signal(host: &dyn DeviceHost) -> bool {
        JAILBREAK_PATHS.iter().any(|p| host.fs().exists(Path::new(p)))
    }

    fn injected_library_signal(host: &dyn DeviceHost) -> bool {
        host.env()
            .get_var("DYLD_INSERT_LIBRARIES")
            .map(|v| !v.is_empty())
            .unwrap_or(false)
    }

    fn sandbox_escape_signal(host: &dyn DeviceHost) -> bool {
        host.fs().probe_write(Path::new(JAILBREAK_SENTINEL))
    }
}

impl Detector for RootJailbreakDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::RootedOrJailbroken
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        let compromised = match host.os() {
            DeviceOs::Android => {
                Self::test_keys_signal(host)
                    || Self::su_path_signal(host)
                    || Self::su_binary_signal(host)
            }
            DeviceOs::Ios => {
                Self::jailbreak_path_signal(host)
                    || Self::injected_library_signal(host)
                    || Self::sandbox_escape_signal(host)
            }
            DeviceOs::Other => {
                Self::test_keys_signal(host)
                    || Self::su_path_signal(host)
                    || Self::su_binary_signal(host)
                    || Self::jailbreak_path_signal(host)
                    || Self::injected_library_signal(host)
            }
        };

        let message = match (host.os(), compromised) {
            (DeviceOs::Ios, true) => "Device is jailbroken",
            (DeviceOs::Ios, false) => "Device is not jailbroken",
            (_, true) => "Device is rooted",
            (_, false) => "Device is not rooted",
        };
        Finding::new(self.kind(), compromised, message)
    }
}

/// Debuggable-build flag, read directly from app metadata.
/// Probe failure defaults to not vulnerable.
pub struct DebuggableDetector;

impl Detector for DebuggableDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::DebuggableApp
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        let debuggable = signal_or(self.kind(), "debuggable flag", host.app().is_debuggable(), false);
        let message = if debuggable {
            "App is debuggable"
        } else {
            "App is not debuggable"
        };
        Finding::new(self.kind(), debuggable, message)
    }
}

/// ADB debugging system setting. Android-only; iOS has no equivalent and
/// reports not applicable. Probe failure defaults to not vulnerable.
pub struct UsbDebuggingDetector;

impl Detector for UsbDebuggingDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::UsbDebugging
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        if host.os() == DeviceOs::Ios {
            return Finding::not_applicable(self.kind(), "Not applicable on iOS");
        }
        let enabled = signal_or(
            self.kind(),
            "adb setting",
            host.settings().flag(SettingKey::AdbEnabled),
            false,
        );
        let message = if enabled {
            "USB debugging is enabled"
        } else {
            "USB debugging is disabled"
        };
        Finding::new(self.kind(), enabled, message)
    }
}

/// Emulator/simulator detection: OR over build-identity heuristics.
pub struct EmulatorDetector;

impl Detector for EmulatorDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::EmulatorDetected
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        let b = host.build().info();
        let emulated = b.fingerprint.starts_with("generic")
            || b.fingerprint.starts_with("unknown")
            || b.model.contains("google_sdk")
            || b.model.contains("Emulator")
            || b.model.contains("Android SDK built for x86")
            || b.model.contains("Simulator")
            || b.manufacturer.contains("Genymotion")
            || (b.brand.starts_with("generic") && b.device.starts_with("generic"))
            || b.product == "google_sdk";

        let message = if emulated {
            "Running on emulator"
        } else {
            "Running on real device"
        };
        Finding::new(self.kind(), emulated, message)
    }
}

/// Known-bad package scan. On iOS the sandbox makes the check moot and the
/// verdict is a fixed negative. Probe failure defaults to not vulnerable.
pub struct MalwareDetector;

impl Detector for MalwareDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::MalwareExposure
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        if host.os() == DeviceOs::Ios {
            return Finding::new(self.kind(), false, "iOS sandbox provides malware protection");
        }
        let detected = SUSPICIOUS_PACKAGES.iter().any(|p| {
            signal_or(self.kind(), "package lookup", host.packages().is_installed(p), false)
        });
        let message = if detected {
            "Suspicious apps detected"
        } else {
            "No malware detected"
        };
        Finding::new(self.kind(), detected, message)
    }
}

/// Automatic network time setting, inverted: manual time is the
/// vulnerability. Probe failure defaults to vulnerable -- a device that
/// cannot assert network time may have had its clock manipulated. On iOS
/// the setting is unreadable and the verdict defers to server-side
/// validation.
pub struct DeviceTimeDetector;

impl Detector for DeviceTimeDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::TrustingDeviceTime
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        if host.os() == DeviceOs::Ios {
            return Finding::new(
                self.kind(),
                false,
                "Device time validation requires server-side verification",
            );
        }
        let auto_time = signal_or(
            self.kind(),
            "auto-time setting",
            host.settings().flag(SettingKey::AutoTime),
            false,
        );
        if auto_time {
            Finding::new(self.kind(), false, "Device uses network time")
        } else {
            Finding::new(self.kind(), true, "Device time can be manipulated")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devshield_platform::device::BuildInfo;
    use devshield_platform::StaticHost;

    #[test]
    fn clean_android_device_is_not_rooted() {
        let host = StaticHost::android();
        let finding = RootJailbreakDetector.evaluate(&host);
        assert!(!finding.vulnerable);
        assert_eq!(finding.message, "Device is not rooted");
    }

    #[test]
    fn single_su_path_flags_root() {
        // Exactly one of N signals true must flip the OR-verdict.
        let host = StaticHost::android().with_path("/system/xbin/su");
        let finding = RootJailbreakDetector.evaluate(&host);
        assert!(finding.vulnerable);
        assert_eq!(finding.message, "Device is rooted");
    }

    #[test]
    fn test_keys_build_tags_flag_root() {
        let host = StaticHost::android().with_build(BuildInfo {
            tags: "release-keys,test-keys".into(),
            ..Default::default()
        });
        assert!(RootJailbreakDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn su_on_path_flags_root() {
        let host = StaticHost::android().with_binary("su", "/system/xbin/su");
        assert!(RootJailbreakDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn missing_binary_lookup_is_not_a_root_signal() {
        let host = StaticHost::android().without_binary_lookup();
        assert!(!RootJailbreakDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn cydia_artifact_flags_jailbreak() {
        let host = StaticHost::ios().with_path("/Applications/Cydia.app");
        let finding = RootJailbreakDetector.evaluate(&host);
        assert!(finding.vulnerable);
        assert_eq!(finding.message, "Device is jailbroken");
    }

    #[test]
    fn injected_dylib_flags_jailbreak() {
        let host = StaticHost::ios().with_env("DYLD_INSERT_LIBRARIES", "/inject.dylib");
        assert!(RootJailbreakDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn empty_dyld_var_is_not_a_signal() {
        let host = StaticHost::ios().with_env("DYLD_INSERT_LIBRARIES", "");
        assert!(!RootJailbreakDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn sandbox_escape_write_flags_jailbreak() {
        let host = StaticHost::ios().with_writable("/private/jailbreak.txt");
        assert!(RootJailbreakDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn all_root_signals_false_is_safe() {
        // Scenario from the original catalog: tags clean, no su path,
        // su not on the binary path.
        let host = StaticHost::android()
            .with_build(BuildInfo { tags: "release-keys".into(), ..Default::default() })
            .with_binary("ls", "/system/bin/ls");
        let finding = RootJailbreakDetector.evaluate(&host);
        assert!(!finding.vulnerable);
    }

    #[test]
    fn debuggable_flag_true_is_vulnerable() {
        let host = StaticHost::android().with_debuggable(true);
        let finding = DebuggableDetector.evaluate(&host);
        assert!(finding.vulnerable);
        assert_eq!(finding.message, "App is debuggable");
    }

    #[test]
    fn debuggable_probe_failure_defaults_safe() {
        let host = StaticHost::android();
        assert!(!DebuggableDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn adb_enabled_is_vulnerable() {
        let host = StaticHost::android().with_setting(SettingKey::AdbEnabled, true);
        assert!(UsbDebuggingDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn usb_debugging_not_applicable_on_ios() {
        let finding = UsbDebuggingDetector.evaluate(&StaticHost::ios());
        assert!(!finding.applicable);
        assert!(!finding.vulnerable);
        assert_eq!(finding.message, "Not applicable on iOS");
    }

    #[test]
    fn generic_fingerprint_flags_emulator() {
        let host = StaticHost::android().with_build(BuildInfo {
            fingerprint: "generic/sdk_gphone/generic:14".into(),
            ..Default::default()
        });
        assert!(EmulatorDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn genymotion_manufacturer_flags_emulator() {
        let host = StaticHost::android().with_build(BuildInfo {
            manufacturer: "Genymotion".into(),
            ..Default::default()
        });
        assert!(EmulatorDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn real_device_build_is_safe() {
        let host = StaticHost::android().with_build(BuildInfo {
            fingerprint: "google/panther/panther:14/UQ1A".into(),
            model: "Pixel 7".into(),
            manufacturer: "Google".into(),
            brand: "google".into(),
            device: "panther".into(),
            product: "panther".into(),
            tags: "release-keys".into(),
        });
        let finding = EmulatorDetector.evaluate(&host);
        assert!(!finding.vulnerable);
        assert_eq!(finding.message, "Running on real device");
    }

    #[test]
    fn suspicious_package_flags_malware() {
        let host = StaticHost::android().with_packages(["com.suspicious.app"]);
        assert!(MalwareDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn unreadable_package_manager_is_safe() {
        let host = StaticHost::android();
        assert!(!MalwareDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn ios_malware_verdict_is_fixed() {
        let finding = MalwareDetector.evaluate(&StaticHost::ios());
        assert!(!finding.vulnerable);
        assert!(finding.message.contains("sandbox"));
    }

    #[test]
    fn manual_time_is_vulnerable() {
        // Inverted-signal scenario: auto-time off means the clock can be
        // manipulated.
        let host = StaticHost::android().with_setting(SettingKey::AutoTime, false);
        let finding = DeviceTimeDetector.evaluate(&host);
        assert!(finding.vulnerable);
        assert_eq!(finding.message, "Device time can be manipulated");
    }

    #[test]
    fn network_time_is_safe() {
        let host = StaticHost::android().with_setting(SettingKey::AutoTime, true);
        assert!(!DeviceTimeDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn unreadable_time_setting_defaults_vulnerable() {
        let host = StaticHost::android();
        assert!(DeviceTimeDetector.evaluate(&host).vulnerable);
    }

    #[test]
    fn ios_device_time_defers_to_server() {
        let finding = DeviceTimeDetector.evaluate(&StaticHost::ios());
        assert!(!finding.vulnerable);
        assert!(finding.message.contains("server-side"));
    }
}
