//! Linkcheck command implementation.
//!
//! `nbkit linkcheck` walks the course notebook folders and reports the
//! reachability of every URL cited in markdown cells. Fail-soft: per-URL
//! failures, missing folders, and unparseable notebooks are reported and
//! skipped.

use std::time::Duration;

use crate::cli::args::LinkcheckArgs;
use crate::error::Result;
use crate::linkcheck::{walker, LinkChecker};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The linkcheck command implementation.
pub struct LinkcheckCommand {
    args: LinkcheckArgs,
}

impl LinkcheckCommand {
    /// Create a new linkcheck command.
    pub fn new(args: LinkcheckArgs) -> Self {
        Self { args }
    }
}

impl Command for LinkcheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let checker = LinkChecker::with_timeout(Duration::from_secs(self.args.timeout));
        let stats = walker::run(&self.args.root, &checker, ui)?;

        tracing::debug!(
            checked = stats.total(),
            ok = stats.ok,
            warned = stats.warned,
            failed = stats.failed,
            "linkcheck finished"
        );
        Ok(CommandResult::success())
    }
}
