//! Solver environment bootstrap.
//!
//! Installs the IDAES modeling platform and its bundled solvers into the
//! notebook runtime. The flow is idempotent and fail-fast: components
//! already present are skipped, and any managed command exiting non-zero
//! aborts the run with a propagated [`crate::NbkitError::CommandFailed`].
//!
//! Decision logic is separated from side effects through
//! [`InstallerContext`]: commands and the platform import probe are
//! injected closures, so tests exercise the flow without touching pip,
//! conda, or apt.

pub mod platform;
pub mod solvers;

pub use platform::{install_platform, PLATFORM_COMMAND, PLATFORM_PACKAGE};
pub use solvers::{
    install_glpk, install_solvers, EXTENSIONS_BIN_DIR, EXTENSION_SOLVERS, PRIMARY_SOLVER,
};

use crate::env::RuntimeEnv;
use crate::error::Result;
use crate::shell::{self, CommandOptions, CommandResult};
use crate::ui::UserInterface;

/// Mockable dependencies for the installer.
pub struct InstallerContext<'a> {
    /// Run a shell command in must-succeed mode, capturing output.
    /// The command sees the environment's PATH, not the ambient one.
    pub run: &'a dyn Fn(&str, &RuntimeEnv) -> Result<CommandResult>,

    /// Check whether the platform package is importable.
    pub platform_importable: &'a dyn Fn() -> bool,
}

/// Build the default `InstallerContext` for production use.
pub fn default_context() -> InstallerContext<'static> {
    InstallerContext {
        run: &|cmd, env| {
            let mut options = CommandOptions::default();
            options.env.insert("PATH".to_string(), env.path_string());
            shell::execute_checked(cmd, &options)
        },
        platform_importable: &|| shell::execute_check("python3 -c 'import idaes'"),
    }
}

/// Options for the full bootstrap flow.
#[derive(Debug, Clone, Copy)]
pub struct InstallOptions {
    /// Echo captured output from installs and probes.
    pub verbose: bool,

    /// Try the conda channel if the extensions install leaves the
    /// primary solver unavailable.
    pub conda_fallback: bool,

    /// Also install glpk via the OS package manager (Colab only).
    pub with_glpk: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            conda_fallback: true,
            with_glpk: false,
        }
    }
}

/// Install the platform and solvers in one step.
///
/// This is the documented entry point: platform first, then solvers with
/// the conda fallback enabled.
pub fn install_all(
    ctx: &InstallerContext<'_>,
    env: &mut RuntimeEnv,
    ui: &mut dyn UserInterface,
    opts: InstallOptions,
) -> Result<()> {
    install_platform(ctx, env, ui, opts.verbose)?;
    install_solvers(ctx, env, ui, opts.verbose, opts.conda_fallback)?;
    if opts.with_glpk {
        install_glpk(ctx, env, ui)?;
    }
    Ok(())
}
