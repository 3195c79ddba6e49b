//! Course folder walking and per-notebook linting.
//!
//! The course publishes one folder per module, `01-publish` through
//! `13-publish`, under a `notebooks/` root. The walk visits them in that
//! fixed order, lists each folder lexicographically, and lints every
//! notebook file it finds. Missing folders and unparseable notebooks are
//! reported and skipped rather than aborting the walk.

use crate::error::Result;
use crate::linkcheck::checker::{Disposition, LinkChecker};
use crate::linkcheck::notebook::read_notebook;
use crate::linkcheck::urls::extract_urls;
use crate::ui::UserInterface;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Course module numbers, walked in this order.
pub const COURSE_FOLDERS: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13",
];

/// Suffix appended to a module number to form its published folder name.
pub const FOLDER_SUFFIX: &str = "-publish";

/// Directory under the course root holding the published folders.
pub const NOTEBOOKS_DIR: &str = "notebooks";

/// Filter for notebook files.
static NOTEBOOK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(.*)\.ipynb$").unwrap());

/// Tallies from a lint run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LintStats {
    /// URLs that returned HTTP 200.
    pub ok: usize,
    /// URLs that responded with a non-200 status.
    pub warned: usize,
    /// URLs whose request failed at the transport layer.
    pub failed: usize,
}

impl LintStats {
    /// Total URLs checked.
    pub fn total(&self) -> usize {
        self.ok + self.warned + self.failed
    }

    fn absorb(&mut self, other: LintStats) {
        self.ok += other.ok;
        self.warned += other.warned;
        self.failed += other.failed;
    }
}

/// List notebook files in a folder, sorted lexicographically.
pub fn notebook_files(folder: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = std::fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    Ok(names
        .into_iter()
        .filter(|name| NOTEBOOK_RE.is_match(name))
        .collect())
}

/// Lint one notebook: walk its cells in document order and check every
/// URL found in markdown cells.
pub fn lint_notebook(
    checker: &LinkChecker,
    folder: &Path,
    file: &str,
    ui: &mut dyn UserInterface,
) -> Result<LintStats> {
    let path = folder.join(file);
    ui.message(&format!("\n {}", path.display()));

    let notebook = read_notebook(&path)?;

    ui.message("urls ...");
    let mut stats = LintStats::default();
    for cell in &notebook.cells {
        if !cell.is_markdown() {
            continue;
        }
        for url_match in extract_urls(&cell.source.text()) {
            let url = url_match.to_url();
            tracing::debug!(%url, "checking");
            match checker.report(&url, ui) {
                Disposition::Reachable => stats.ok += 1,
                Disposition::UnexpectedStatus(_) => stats.warned += 1,
                Disposition::Failed(_) => stats.failed += 1,
            }
        }
    }
    Ok(stats)
}

/// Walk every course folder under `root` and lint each notebook.
pub fn run(root: &Path, checker: &LinkChecker, ui: &mut dyn UserInterface) -> Result<LintStats> {
    let mut stats = LintStats::default();
    for folder in COURSE_FOLDERS {
        let folder_path = root
            .join(NOTEBOOKS_DIR)
            .join(format!("{}{}", folder, FOLDER_SUFFIX));
        ui.message(&format!("\n {}", folder_path.display()));

        if !folder_path.is_dir() {
            ui.warning(&format!("missing folder: {}", folder_path.display()));
            continue;
        }

        for file in notebook_files(&folder_path)? {
            match lint_notebook(checker, &folder_path, &file, ui) {
                Ok(s) => stats.absorb(s),
                Err(e) => ui.warning(&format!("skipping {}: {}", file, e)),
            }
        }
    }
    Ok(stats)
}
