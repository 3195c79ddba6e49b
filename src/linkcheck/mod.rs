//! Notebook link checking.
//!
//! Walks the course's published notebook folders, extracts every URL
//! cited in markdown cells, and reports reachability per URL. The report
//! is a plain line stream in document order; failures are per-URL and
//! never abort the walk.

pub mod checker;
pub mod notebook;
pub mod urls;
pub mod walker;

pub use checker::{Disposition, LinkChecker, DEFAULT_TIMEOUT};
pub use notebook::{read_notebook, Cell, Notebook, Source};
pub use urls::{extract_urls, UrlMatch};
pub use walker::{lint_notebook, notebook_files, LintStats, COURSE_FOLDERS};
