//! Scripted in-memory host for deterministic tests.
//!
//! [`StaticHost`] answers every probe from builder-configured state.
//! Anything not scripted answers [`ProbeError::Unavailable`], which is
//! exactly how detectors are exercised against failing probes without
//! touching a real filesystem or device.
//!
//! ```
//! use devshield_platform::{DeviceHost, StaticHost};
//! use devshield_platform::device::SettingKey;
//!
//! let host = StaticHost::android()
//!     .with_path("/system/xbin/su")
//!     .with_setting(SettingKey::AdbEnabled, true);
//! assert!(host.fs().exists(std::path::Path::new("/system/xbin/su")));
//! ```

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use devshield_types::{ProbeError, ProbeResult};

use crate::device::{
    AppInfoProbe, AuthProbe, BinaryProbe, BuildInfo, BuildInfoProbe, PackageProbe, ScreenProbe,
    SettingKey, SettingsProbe,
};
use crate::env::EnvProbe;
use crate::fs::{FileMode, FileProbe};
use crate::{DeviceHost, DeviceOs};

/// Fully scripted device host. Every probe answer comes from builder
/// state; unscripted answers are `Unavailable`.
pub struct StaticHost {
    os: DeviceOs,
    paths: HashSet<PathBuf>,
    dirs: HashMap<PathBuf, Vec<PathBuf>>,
    modes: HashMap<PathBuf, FileMode>,
    writable: HashSet<PathBuf>,
    env: HashMap<String, String>,
    debuggable: Option<bool>,
    backup: Option<bool>,
    files_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    external_dir: Option<PathBuf>,
    preference_store: Option<bool>,
    build: BuildInfo,
    settings: HashMap<SettingKey, bool>,
    biometrics: Option<bool>,
    credential: Option<bool>,
    capture_restricted: Option<bool>,
    captured: Option<bool>,
    packages: Option<HashSet<String>>,
    binaries: Option<HashMap<String, PathBuf>>,
}

impl StaticHost {
    /// A host reporting the given OS with nothing scripted.
    pub fn new(os: DeviceOs) -> Self {
        Self {
            os,
            paths: HashSet::new(),
            dirs: HashMap::new(),
            modes: HashMap::new(),
            writable: HashSet::new(),
            env: HashMap::new(),
            debuggable: None,
            backup: None,
            files_dir: None,
            data_dir: None,
            external_dir: None,
            preference_store: None,
            build: BuildInfo::default(),
            settings: HashMap::new(),
            biometrics: None,
            credential: None,
            capture_restricted: None,
            captured: None,
            packages: None,
            binaries: Some(HashMap::new()),
        }
    }

    /// An Android host with nothing scripted.
    pub fn android() -> Self {
        Self::new(DeviceOs::Android)
    }

    /// An iOS host with nothing scripted.
    pub fn ios() -> Self {
        Self::new(DeviceOs::Ios)
    }

    /// Mark a path as existing.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(path.into());
        self
    }

    /// Script a directory listing (also marks the directory as existing).
    pub fn with_dir(
        mut self,
        path: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = impl Into<PathBuf>>,
    ) -> Self {
        let path = path.into();
        self.paths.insert(path.clone());
        self.dirs
            .insert(path, entries.into_iter().map(Into::into).collect());
        self
    }

    /// Script permission bits for a path.
    pub fn with_mode(mut self, path: impl Into<PathBuf>, mode: FileMode) -> Self {
        self.modes.insert(path.into(), mode);
        self
    }

    /// Mark a path as accepting the write-sentinel probe.
    pub fn with_writable(mut self, path: impl Into<PathBuf>) -> Self {
        self.writable.insert(path.into());
        self
    }

    /// Script an environment variable.
    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Script the debuggable flag.
    pub fn with_debuggable(mut self, debuggable: bool) -> Self {
        self.debuggable = Some(debuggable);
        self
    }

    /// Script the backup-allowed flag.
    pub fn with_backup(mut self, allowed: bool) -> Self {
        self.backup = Some(allowed);
        self
    }

    /// Script the files directory.
    pub fn with_files_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.files_dir = Some(path.into());
        self
    }

    /// Script the data directory.
    pub fn with_data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(path.into());
        self
    }

    /// Script the external storage directory.
    pub fn with_external_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.external_dir = Some(path.into());
        self
    }

    /// Script whether the preference store holds data.
    pub fn with_preference_store(mut self, in_use: bool) -> Self {
        self.preference_store = Some(in_use);
        self
    }

    /// Script the device build fields.
    pub fn with_build(mut self, build: BuildInfo) -> Self {
        self.build = build;
        self
    }

    /// Script a system setting.
    pub fn with_setting(mut self, key: SettingKey, value: bool) -> Self {
        self.settings.insert(key, value);
        self
    }

    /// Script biometric availability.
    pub fn with_biometrics(mut self, available: bool) -> Self {
        self.biometrics = Some(available);
        self
    }

    /// Script whether a device credential is set.
    pub fn with_credential(mut self, set: bool) -> Self {
        self.credential = Some(set);
        self
    }

    /// Script whether capture restriction is asserted.
    pub fn with_capture_restricted(mut self, restricted: bool) -> Self {
        self.capture_restricted = Some(restricted);
        self
    }

    /// Script whether the screen is being captured.
    pub fn with_captured(mut self, captured: bool) -> Self {
        self.captured = Some(captured);
        self
    }

    /// Script the installed package set (enables the package probe).
    pub fn with_packages(
        mut self,
        packages: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.packages = Some(packages.into_iter().map(Into::into).collect());
        self
    }

    /// Script a locatable binary.
    pub fn with_binary(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.binaries
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), path.into());
        self
    }

    /// Remove binary lookup entirely (`binaries()` returns `None`).
    pub fn without_binary_lookup(mut self) -> Self {
        self.binaries = None;
        self
    }
}

impl DeviceHost for StaticHost {
    fn os(&self) -> DeviceOs {
        self.os
    }

    fn fs(&self) -> &dyn FileProbe {
        self
    }

    fn env(&self) -> &dyn EnvProbe {
        self
    }

    fn app(&self) -> &dyn AppInfoProbe {
        self
    }

    fn build(&self) -> &dyn BuildInfoProbe {
        self
    }

    fn settings(&self) -> &dyn SettingsProbe {
        self
    }

    fn auth(&self) -> &dyn AuthProbe {
        self
    }

    fn screen(&self) -> &dyn ScreenProbe {
        self
    }

    fn packages(&self) -> &dyn PackageProbe {
        self
    }

    fn binaries(&self) -> Option<&dyn BinaryProbe> {
        self.binaries.as_ref().map(|_| self as &dyn BinaryProbe)
    }
}

impl FileProbe for StaticHost {
    fn exists(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    fn list_dir(&self, path: &Path) -> ProbeResult<Vec<PathBuf>> {
        self.dirs
            .get(path)
            .cloned()
            .ok_or(ProbeError::Unavailable("directory listing"))
    }

    fn permissions(&self, path: &Path) -> ProbeResult<FileMode> {
        self.modes
            .get(path)
            .copied()
            .ok_or(ProbeError::Unavailable("permission bits"))
    }

    fn probe_write(&self, path: &Path) -> bool {
        self.writable.contains(path)
    }
}

impl EnvProbe for StaticHost {
    fn get_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }
}

impl AppInfoProbe for StaticHost {
    fn is_debuggable(&self) -> ProbeResult<bool> {
        self.debuggable.ok_or(ProbeError::Unavailable("debuggable flag"))
    }

    fn allows_backup(&self) -> ProbeResult<bool> {
        self.backup.ok_or(ProbeError::Unavailable("backup flag"))
    }

    fn files_dir(&self) -> Option<PathBuf> {
        self.files_dir.clone()
    }

    fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone()
    }

    fn external_files_dir(&self) -> Option<PathBuf> {
        self.external_dir.clone()
    }

    fn preference_store_in_use(&self) -> ProbeResult<bool> {
        self.preference_store
            .ok_or(ProbeError::Unavailable("preference store"))
    }
}

impl BuildInfoProbe for StaticHost {
    fn info(&self) -> BuildInfo {
        self.build.clone()
    }
}

impl SettingsProbe for StaticHost {
    fn flag(&self, key: SettingKey) -> ProbeResult<bool> {
        self.settings
            .get(&key)
            .copied()
            .ok_or(ProbeError::Unavailable("system settings"))
    }
}

impl AuthProbe for StaticHost {
    fn biometrics_available(&self) -> ProbeResult<bool> {
        self.biometrics
            .ok_or(ProbeError::Unavailable("biometric capability"))
    }

    fn device_credential_set(&self) -> ProbeResult<bool> {
        self.credential
            .ok_or(ProbeError::Unavailable("device credential"))
    }
}

impl ScreenProbe for StaticHost {
    fn capture_restricted(&self) -> ProbeResult<bool> {
        self.capture_restricted
            .ok_or(ProbeError::Unavailable("capture restriction"))
    }

    fn is_captured(&self) -> ProbeResult<bool> {
        self.captured.ok_or(ProbeError::Unavailable("capture state"))
    }
}

impl PackageProbe for StaticHost {
    fn is_installed(&self, package: &str) -> ProbeResult<bool> {
        match &self.packages {
            Some(installed) => Ok(installed.contains(package)),
            None => Err(ProbeError::Unavailable("package manager")),
        }
    }
}

impl BinaryProbe for StaticHost {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        self.binaries.as_ref()?.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscripted_probes_are_unavailable() {
        let host = StaticHost::android();
        assert!(host.app().is_debuggable().is_err());
        assert!(host.settings().flag(SettingKey::AutoTime).is_err());
        assert!(host.auth().device_credential_set().is_err());
        assert!(host.packages().is_installed("com.example").is_err());
    }

    #[test]
    fn scripted_paths_exist() {
        let host = StaticHost::android().with_path("/sbin/su");
        assert!(host.fs().exists(Path::new("/sbin/su")));
        assert!(!host.fs().exists(Path::new("/system/bin/su")));
    }

    #[test]
    fn scripted_dir_listing() {
        let host = StaticHost::ios().with_dir("/docs", ["/docs/a.txt", "/docs/b.dat"]);
        let entries = host.fs().list_dir(Path::new("/docs")).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn scripted_settings_and_env() {
        let host = StaticHost::android()
            .with_setting(SettingKey::AdbEnabled, true)
            .with_env("DYLD_INSERT_LIBRARIES", "/tmp/inject.dylib");
        assert_eq!(host.settings().flag(SettingKey::AdbEnabled).unwrap(), true);
        assert!(host.env().get_var("DYLD_INSERT_LIBRARIES").is_some());
    }

    #[test]
    fn binary_lookup_can_be_removed() {
        let host = StaticHost::android().with_binary("su", "/system/xbin/su");
        assert!(host.binaries().unwrap().locate("su").is_some());

        let host = StaticHost::android().without_binary_lookup();
        assert!(host.binaries().is_none());
    }

    #[test]
    fn packages_scripted_set() {
        let host = StaticHost::android().with_packages(["com.suspicious.app"]);
        assert!(host.packages().is_installed("com.suspicious.app").unwrap());
        assert!(!host.packages().is_installed("com.benign").unwrap());
    }
}
