//! Device-side probe families.
//!
//! These traits cover the facts only a real mobile host can answer:
//! application metadata, build identity, system settings, authentication
//! capabilities, screen-capture state, installed packages, and binary
//! lookup. A mobile embedding implements them against OS APIs; the desktop
//! [`LocalHost`](crate::LocalHost) reports most of them as unavailable and
//! [`StaticHost`](crate::StaticHost) scripts them for tests.

use std::path::PathBuf;

use devshield_types::ProbeResult;

/// Application metadata reads.
pub trait AppInfoProbe: Send + Sync {
    /// Whether the app was built/installed with the debuggable flag set.
    fn is_debuggable(&self) -> ProbeResult<bool>;

    /// Whether OS-level backup of app data is allowed.
    fn allows_backup(&self) -> ProbeResult<bool>;

    /// The app's private files directory, if known.
    fn files_dir(&self) -> Option<PathBuf>;

    /// The app's private data root, if known.
    fn data_dir(&self) -> Option<PathBuf>;

    /// The app's external (shared) storage directory, if any.
    fn external_files_dir(&self) -> Option<PathBuf>;

    /// Whether the platform preference store (SharedPreferences /
    /// UserDefaults) holds any data for this app.
    fn preference_store_in_use(&self) -> ProbeResult<bool>;
}

/// Device build/identity fields.
///
/// Unknown fields are empty strings; the heuristics that consume them are
/// substring tests, so empty never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInfo {
    pub tags: String,
    pub fingerprint: String,
    pub model: String,
    pub manufacturer: String,
    pub brand: String,
    pub device: String,
    pub product: String,
}

/// Device build identity reads.
pub trait BuildInfoProbe: Send + Sync {
    /// The device's build fields, with unknown fields left empty.
    fn info(&self) -> BuildInfo;
}

/// The boolean system settings the catalog reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// USB (ADB) debugging enabled.
    AdbEnabled,
    /// Automatic network time enabled.
    AutoTime,
}

/// System settings reads.
pub trait SettingsProbe: Send + Sync {
    /// The value of a boolean system setting.
    fn flag(&self, key: SettingKey) -> ProbeResult<bool>;
}

/// Authentication capability reads.
pub trait AuthProbe: Send + Sync {
    /// Whether biometric authentication is available and enrolled.
    fn biometrics_available(&self) -> ProbeResult<bool>;

    /// Whether a device credential (PIN/passcode/pattern) is set.
    fn device_credential_set(&self) -> ProbeResult<bool>;
}

/// Screen-capture state reads.
pub trait ScreenProbe: Send + Sync {
    /// Whether the app asserts a capture restriction (FLAG_SECURE or
    /// equivalent) on its windows.
    fn capture_restricted(&self) -> ProbeResult<bool>;

    /// Whether the screen is currently being captured or mirrored.
    fn is_captured(&self) -> ProbeResult<bool>;
}

/// Installed-package queries.
pub trait PackageProbe: Send + Sync {
    /// Whether a package with this identifier is installed.
    fn is_installed(&self, package: &str) -> ProbeResult<bool>;
}

/// Binary lookup on the host search path.
pub trait BinaryProbe: Send + Sync {
    /// Locate a binary by name, `None` when it is not on the path.
    fn locate(&self, name: &str) -> Option<PathBuf>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_info_default_is_empty() {
        let info = BuildInfo::default();
        assert!(info.fingerprint.is_empty());
        assert!(info.tags.is_empty());
    }

    #[test]
    fn setting_keys_are_distinct() {
        assert_ne!(SettingKey::AdbEnabled, SettingKey::AutoTime);
    }
}
