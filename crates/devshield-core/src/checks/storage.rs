//! Data-at-rest exposure checks.

use devshield_platform::{DeviceHost, DeviceOs};
use devshield_types::{CheckKind, Finding};

use crate::detector::{signal_or, Detector};

/// Extensions that mark a file as likely-plaintext application data.
const PLAINTEXT_EXTENSIONS: [&str; 4] = ["txt", "json", "xml", "plist"];

/// Unencrypted preference store (SharedPreferences / UserDefaults) in use.
/// Probe failure defaults to not vulnerable.
pub struct LocalStorageDetector;

impl Detector for LocalStorageDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::InsecureLocalStorage
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        let in_use = signal_or(
            self.kind(),
            "preference store",
            host.app().preference_store_in_use(),
            false,
        );
        let message = if in_use {
            "Unencrypted preference data found"
        } else {
            "Storage appears secure"
        };
        Finding::new(self.kind(), in_use, message)
    }
}

/// Plaintext files (txt/json/xml/plist) in the app's private files
/// directory. Unreadable directory defaults to not vulnerable.
pub struct PlaintextDataDetector;

impl Detector for PlaintextDataDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::PlaintextData
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        let Some(files_dir) = host.app().files_dir() else {
            return Finding::new(self.kind(), false, "Could not access documents directory");
        };
        let entries = match host.fs().list_dir(&files_dir) {
            Ok(entries) => entries,
            Err(_) => return Finding::new(self.kind(), false, "Error checking files"),
        };
        let has_plaintext = entries.iter().any(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .map(|e| PLAINTEXT_EXTENSIONS.contains(&e))
                .unwrap_or(false)
        });
        let message = if has_plaintext {
            "Plaintext files detected"
        } else {
            "No obvious plaintext storage"
        };
        Finding::new(self.kind(), has_plaintext, message)
    }
}

/// Keystore/Keychain usage audit: no automatic signal exists, so this is a
/// fixed negative with an instrumentation message (worded per platform).
pub struct KeystoreDetector;

impl Detector for KeystoreDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::ImproperKeystore
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        let message = if host.os() == DeviceOs::Ios {
            "Keychain check requires app-specific implementation"
        } else {
            "Keystore check requires app-specific implementation"
        };
        Finding::new(self.kind(), false, message)
    }
}

/// Files with read+write+execute permission bits in the app files
/// directory. The iOS sandbox owns file permissions, so the verdict there
/// is a fixed negative. Unreadable entries are skipped.
pub struct FilePermissionsDetector;

impl Detector for FilePermissionsDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::InsecureFilePermissions
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        if host.os() == DeviceOs::Ios {
            return Finding::new(self.kind(), false, "iOS sandbox handles file permissions");
        }
        let Some(files_dir) = host.app().files_dir() else {
            return Finding::new(self.kind(), false, "Could not access files directory");
        };
        let entries = match host.fs().list_dir(&files_dir) {
            Ok(entries) => entries,
            Err(_) => return Finding::new(self.kind(), false, "Error checking file permissions"),
        };
        let broad = entries.iter().any(|path| {
            host.fs()
                .permissions(path)
                .map(|mode| mode.is_broad())
                .unwrap_or(false)
        });
        let message = if broad {
            "Files with broad permissions found"
        } else {
            "File permissions OK"
        };
        Finding::new(self.kind(), broad, message)
    }
}

/// Files present in external (shared) storage. iOS has no external
/// storage and reports not applicable. Unreadable listing defaults to not
/// vulnerable.
pub struct ExternalStorageDetector;

impl Detector for ExternalStorageDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::ExternalStorageExposure
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        if host.os() == DeviceOs::Ios {
            return Finding::not_applicable(self.kind(), "Not applicable on iOS");
        }
        let Some(external) = host.app().external_files_dir() else {
            return Finding::new(self.kind(), false, "No external storage usage");
        };
        let has_files = host
            .fs()
            .list_dir(&external)
            .map(|entries| !entries.is_empty())
            .unwrap_or(false);
        let message = if has_files {
            "Files in external storage detected"
        } else {
            "No external storage usage"
        };
        Finding::new(self.kind(), has_files, message)
    }
}

/// OS backup allowed for app data. Android reads the manifest flag; on
/// iOS exclusion is per-file and the verdict is a fixed negative. Probe
/// failure defaults to not vulnerable.
pub struct BackupDetector;

impl Detector for BackupDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::BackupEnabled
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        if host.os() == DeviceOs::Ios {
            return Finding::new(
                self.kind(),
                false,
                "Backup exclusion requires file-specific implementation",
            );
        }
        let enabled = signal_or(self.kind(), "backup flag", host.app().allows_backup(), false);
        let message = if enabled {
            "Backup is enabled"
        } else {
            "Backup is disabled"
        };
        Finding::new(self.kind(), enabled, message)
    }
}
