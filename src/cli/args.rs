//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// nbkit - Course notebook tooling.
#[derive(Debug, Parser)]
#[command(name = "nbkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install the IDAES platform and solvers into the notebook runtime
    Install(InstallArgs),

    /// Check URL reachability across the course notebooks
    Linkcheck(LinkcheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Skip the conda fallback channel for the primary solver
    #[arg(long)]
    pub no_fallback: bool,

    /// Also install glpk via the OS package manager (Colab only)
    #[arg(long)]
    pub with_glpk: bool,
}

/// Arguments for the `linkcheck` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LinkcheckArgs {
    /// Course root directory containing notebooks/
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Per-URL GET timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,
}

impl Default for LinkcheckArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            timeout: 10,
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
