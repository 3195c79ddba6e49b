//! Executable availability probing.
//!
//! A solver is "available" if its executable resolves on the PATH entries
//! or the name is itself a path to an existing file. Some solvers ship
//! under a different executable name than the course materials use;
//! those cases live in the alias table as data rather than embedded
//! conditionals.

use crate::env::RuntimeEnv;
use std::path::{Path, PathBuf};

/// Logical name mapped to the executable actually probed.
const PROBE_ALIASES: &[(&str, &str)] = &[
    // glpk ships its solver binary as gpsol
    ("glpk", "gpsol"),
];

/// A single availability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// Resolve an executable name against the PATH entries.
    PathLookup(String),
    /// Check a literal filesystem path.
    FileCheck(PathBuf),
}

impl Probe {
    /// Run the probe against an environment.
    pub fn matches(&self, env: &RuntimeEnv) -> bool {
        match self {
            Probe::PathLookup(name) => resolve_tool_path(name, env.path_entries()).is_some(),
            Probe::FileCheck(path) => path.is_file(),
        }
    }
}

/// Resolve the executable name probed for a logical solver name.
pub fn probe_target(name: &str) -> &str {
    PROBE_ALIASES
        .iter()
        .find(|(logical, _)| *logical == name)
        .map(|(_, target)| *target)
        .unwrap_or(name)
}

/// The probes run for a logical name, in order.
pub fn probes_for(name: &str) -> Vec<Probe> {
    let target = probe_target(name);
    vec![
        Probe::PathLookup(target.to_string()),
        Probe::FileCheck(PathBuf::from(target)),
    ]
}

/// Check whether an executable is available in the environment.
pub fn is_available(name: &str, env: &RuntimeEnv) -> bool {
    probes_for(name).iter().any(|probe| probe.matches(env))
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command — `which` behavior varies across systems and
/// is sometimes a shell builtin with inconsistent error handling.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}
