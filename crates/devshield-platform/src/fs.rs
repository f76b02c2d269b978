//! Filesystem probes and the local implementation.
//!
//! Detectors only ever read filesystem *facts* (does a path exist, what is
//! in a directory, what are the permission bits, can the process write
//! here), never file contents. The [`FileProbe`] trait captures exactly
//! those reads; [`LocalFileProbe`] backs them with [`std::fs`].

use std::path::{Path, PathBuf};

use devshield_types::ProbeResult;

/// Coarse permission bits for one file, as seen by the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileMode {
    pub readable: bool,
    pub writable: bool,
    pub executable: bool,
}

impl FileMode {
    /// True when the file is readable, writable, and executable at once --
    /// the broad-permission pattern the file-permission check flags.
    pub fn is_broad(&self) -> bool {
        self.readable && self.writable && self.executable
    }
}

/// Platform-agnostic filesystem fact reads.
pub trait FileProbe: Send + Sync {
    /// Whether a path exists (file or directory). Errors read as absent.
    fn exists(&self, path: &Path) -> bool;

    /// Full paths of the entries in a directory, non-recursive.
    fn list_dir(&self, path: &Path) -> ProbeResult<Vec<PathBuf>>;

    /// Permission bits for one path.
    fn permissions(&self, path: &Path) -> ProbeResult<FileMode>;

    /// Test write access by creating and removing a sentinel file.
    ///
    /// Must be idempotent and residue-free: the sentinel is removed on
    /// success and never left behind on failure. Any error reads as
    /// "not writable".
    fn probe_write(&self, path: &Path) -> bool;
}

/// Native filesystem probe using [`std::fs`].
pub struct LocalFileProbe;

impl FileProbe for LocalFileProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> ProbeResult<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            entries.push(entry?.path());
        }
        Ok(entries)
    }

    fn permissions(&self, path: &Path) -> ProbeResult<FileMode> {
        let metadata = std::fs::metadata(path)?;
        let writable = !metadata.permissions().readonly();

        #[cfg(unix)]
        let executable = {
            use std::os::unix::fs::PermissionsExt;
            metadata.permissions().mode() & 0o111 != 0
        };
        #[cfg(not(unix))]
        let executable = false;

        Ok(FileMode {
            // Metadata was readable, so the file is visible to us.
            readable: true,
            writable,
            executable,
        })
    }

    fn probe_write(&self, path: &Path) -> bool {
        match std::fs::write(path, b"probe") {
            Ok(()) => {
                // Best-effort cleanup; the write succeeding is the signal.
                let _ = std::fs::remove_file(path);
                true
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "write probe failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devshield_types::ProbeError;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_test_path(prefix: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
        let pid = std::process::id();
        std::env::temp_dir().join(format!("devshield_test_{prefix}_{pid}_{id}"))
    }

    #[test]
    fn exists_true_and_false() {
        let fs = LocalFileProbe;
        let path = temp_test_path("exists");
        assert!(!fs.exists(&path));

        std::fs::write(&path, "x").unwrap();
        assert!(fs.exists(&path));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn list_dir_returns_entries() {
        let fs = LocalFileProbe;
        let dir = temp_test_path("listdir");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("a.txt"), "a").unwrap();
        std::fs::write(dir.join("b.json"), "b").unwrap();

        let entries = fs.list_dir(&dir).unwrap();
        assert_eq!(entries.len(), 2);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn list_dir_missing_is_error() {
        let fs = LocalFileProbe;
        let err = fs.list_dir(&temp_test_path("missing")).unwrap_err();
        assert!(matches!(err, ProbeError::Io(_)));
    }

    #[test]
    fn probe_write_leaves_no_residue() {
        let fs = LocalFileProbe;
        let path = temp_test_path("sentinel");
        assert!(fs.probe_write(&path));
        assert!(!path.exists(), "sentinel must be cleaned up");
        // Repeat invocation is safe.
        assert!(fs.probe_write(&path));
        assert!(!path.exists());
    }

    #[test]
    fn probe_write_unwritable_is_false() {
        let fs = LocalFileProbe;
        // Parent directory does not exist, so the write must fail cleanly.
        let path = temp_test_path("no_parent").join("deep").join("sentinel");
        assert!(!fs.probe_write(&path));
    }

    #[test]
    fn permissions_of_regular_file() {
        let fs = LocalFileProbe;
        let path = temp_test_path("mode");
        std::fs::write(&path, "x").unwrap();

        let mode = fs.permissions(&path).unwrap();
        assert!(mode.readable);
        assert!(mode.writable);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn broad_mode_requires_all_three() {
        let broad = FileMode { readable: true, writable: true, executable: true };
        assert!(broad.is_broad());
        let ro = FileMode { readable: true, ..Default::default() };
        assert!(!ro.is_broad());
    }
}
