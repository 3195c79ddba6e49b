//! Shell command execution.
//!
//! Every subprocess the bootstrapper manages — pip, conda, apt-get, the
//! platform CLI, solver version probes — goes through this module.
//! Output is captured as text; the must-succeed wrapper turns a non-zero
//! exit into [`NbkitError::CommandFailed`].

use crate::error::{NbkitError, Result};
use std::collections::HashMap;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<std::path::PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,
}

/// Execute a shell command, capturing stdout and stderr.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(shell_binary());
    cmd.arg(shell_flag());
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().map_err(|_| NbkitError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Execute a command in must-succeed mode.
///
/// A non-zero exit becomes [`NbkitError::CommandFailed`]; the bootstrap
/// flow never recovers from it.
pub fn execute_checked(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let result = execute(command, options)?;
    if result.success {
        Ok(result)
    } else {
        Err(NbkitError::CommandFailed {
            command: command.to_string(),
            code: result.exit_code,
        })
    }
}

/// Execute a command and return success/failure.
pub fn execute_check(command: &str) -> bool {
    execute(command, &CommandOptions::default())
        .map(|r| r.success)
        .unwrap_or(false)
}

/// The shell used to run commands.
///
/// Notebook runtimes are headless containers; a plain POSIX shell is
/// always present and login-shell initialization is irrelevant there.
fn shell_binary() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

/// Get the flag to pass commands to the shell.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
