//! Command-line interface.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, InstallArgs, LinkcheckArgs};
pub use commands::dispatcher::{Command, CommandDispatcher, CommandResult};
