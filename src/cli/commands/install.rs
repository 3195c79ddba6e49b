//! Install command implementation.
//!
//! `nbkit install` bootstraps the IDAES platform and solver executables
//! into the notebook runtime. Fail-fast: the first managed command that
//! exits non-zero aborts the run.

use crate::cli::args::InstallArgs;
use crate::env::RuntimeEnv;
use crate::error::Result;
use crate::installer::{self, InstallOptions};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(args: InstallArgs) -> Self {
        Self { args }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut env = RuntimeEnv::detect();
        tracing::debug!(colab = env.on_colab(), "runtime detected");

        let ctx = installer::default_context();
        let opts = InstallOptions {
            verbose: ui.output_mode().shows_command_output(),
            conda_fallback: !self.args.no_fallback,
            with_glpk: self.args.with_glpk,
        };

        installer::install_all(&ctx, &mut env, ui, opts)?;

        // Anything we exec later in this process sees the augmented PATH.
        env.apply();

        ui.success("Environment ready");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_command_holds_args() {
        let cmd = InstallCommand::new(InstallArgs {
            no_fallback: true,
            with_glpk: false,
        });
        assert!(cmd.args.no_fallback);
        assert!(!cmd.args.with_glpk);
    }
}
