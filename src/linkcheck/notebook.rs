//! Notebook document reading.
//!
//! Consumes the Jupyter ipynb format: a JSON document carrying an
//! ordered `cells` list, each cell tagged with a type and a source-text
//! payload. Only the pieces the link checker needs are modeled.

use crate::error::{NbkitError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A parsed notebook document.
#[derive(Debug, Deserialize)]
pub struct Notebook {
    /// Cells in document order.
    #[serde(default)]
    pub cells: Vec<Cell>,
}

/// A single notebook cell.
#[derive(Debug, Deserialize)]
pub struct Cell {
    /// Cell type tag ("markdown", "code", "raw").
    pub cell_type: String,

    /// Source text payload.
    #[serde(default)]
    pub source: Source,
}

/// Cell source text.
///
/// The format stores either a joined string or a list of line strings;
/// both occur in the wild.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Source {
    Text(String),
    Lines(Vec<String>),
}

impl Default for Source {
    fn default() -> Self {
        Source::Text(String::new())
    }
}

impl Source {
    /// The full source text, with line lists joined.
    pub fn text(&self) -> String {
        match self {
            Source::Text(s) => s.clone(),
            Source::Lines(lines) => lines.concat(),
        }
    }
}

impl Cell {
    /// Whether this is a markdown cell.
    pub fn is_markdown(&self) -> bool {
        self.cell_type == "markdown"
    }
}

/// Read and parse one notebook file.
pub fn read_notebook(path: &Path) -> Result<Notebook> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| NbkitError::NotebookParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
