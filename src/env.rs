//! Runtime environment configuration.
//!
//! The bootstrapper mutates the process PATH after `idaes get-extensions`
//! drops solver binaries into its install directory. Rather than reaching
//! into `std::env` from deep inside the install flow, [`RuntimeEnv`]
//! carries the ordered PATH entries and the Colab marker as an explicit
//! value: the installer edits it, child processes receive it, tests
//! assert on it, and the caller applies it to the process once.

use std::path::{Path, PathBuf};

/// Environment variable the Colab runtime exports into every process.
const COLAB_MARKER_VAR: &str = "COLAB_RELEASE_TAG";

/// Process environment as an explicit, injectable value.
#[derive(Debug, Clone)]
pub struct RuntimeEnv {
    path_entries: Vec<PathBuf>,
    colab: bool,
}

impl RuntimeEnv {
    /// Capture the current process environment.
    pub fn detect() -> Self {
        Self {
            path_entries: parse_system_path(),
            colab: colab_marker_present(),
        }
    }

    /// Build an environment from explicit PATH entries.
    ///
    /// The Colab marker defaults to off; see [`RuntimeEnv::with_colab`].
    pub fn with_path(entries: Vec<PathBuf>) -> Self {
        Self {
            path_entries: entries,
            colab: false,
        }
    }

    /// Override the Colab marker (for tests).
    pub fn with_colab(mut self, colab: bool) -> Self {
        self.colab = colab;
        self
    }

    /// Whether the hosting runtime is Google Colab.
    pub fn on_colab(&self) -> bool {
        self.colab
    }

    /// The ordered PATH entries.
    pub fn path_entries(&self) -> &[PathBuf] {
        &self.path_entries
    }

    /// Whether a directory is already on the PATH.
    pub fn contains(&self, dir: &Path) -> bool {
        self.path_entries.iter().any(|p| p == dir)
    }

    /// Prepend a directory to the PATH unless it is already present.
    ///
    /// Returns `true` if the PATH changed. Repeated calls with the same
    /// directory leave exactly one entry, however many times the
    /// bootstrapper runs.
    pub fn prepend_path(&mut self, dir: &Path) -> bool {
        if self.contains(dir) {
            return false;
        }
        self.path_entries.insert(0, dir.to_path_buf());
        true
    }

    /// Render the entries as a PATH string.
    pub fn path_string(&self) -> String {
        std::env::join_paths(&self.path_entries)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Write the PATH back to the process environment.
    pub fn apply(&self) {
        std::env::set_var("PATH", self.path_string());
    }
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Check the hosting runtime's Colab marker.
///
/// The runtime exports `COLAB_RELEASE_TAG` into every process; when that
/// is absent, fall back to probing the Python module registry directly.
fn colab_marker_present() -> bool {
    if std::env::var_os(COLAB_MARKER_VAR).is_some() {
        return true;
    }
    std::process::Command::new("python3")
        .args(["-c", "import google.colab"])
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}
