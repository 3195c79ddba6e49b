//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for styled terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! nbkit never prompts; the trait covers the channels its report
//! streams use.
//!
//! # Example
//!
//! ```
//! use nbkit::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.success("Environment ready");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::{Output, OutputMode};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, NbkitTheme};

/// Trait for user-facing output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);
}
