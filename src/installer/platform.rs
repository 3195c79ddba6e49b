//! Platform package install.
//!
//! The IDAES platform is a Python package; its presence is checked by
//! importing it, not by probing the PATH. Importable means the install
//! is a no-op.

use crate::env::RuntimeEnv;
use crate::error::Result;
use crate::ui::UserInterface;

use super::InstallerContext;

/// Pip name of the platform package.
pub const PLATFORM_PACKAGE: &str = "idaes_pse";

/// The platform's own CLI, used to confirm the install.
pub const PLATFORM_COMMAND: &str = "idaes";

/// Install the platform package via pip if it is not already importable.
///
/// Idempotent: when the package imports cleanly, no installer process is
/// invoked. Otherwise pip runs in must-succeed mode and the platform CLI
/// confirms the result with its version output.
pub fn install_platform(
    ctx: &InstallerContext<'_>,
    env: &RuntimeEnv,
    ui: &mut dyn UserInterface,
    verbose: bool,
) -> Result<()> {
    if (ctx.platform_importable)() {
        ui.message("idaes was found! No need to install.");
        return Ok(());
    }

    ui.message("Installing idaes via pip...");
    tracing::debug!(package = PLATFORM_PACKAGE, "platform package not importable");
    let result = (ctx.run)(
        &format!("python3 -m pip install -q {}", PLATFORM_PACKAGE),
        env,
    )?;
    if verbose {
        ui.message(&result.stdout);
        ui.message(&result.stderr);
    }
    ui.message("idaes was successfully installed");

    let version = (ctx.run)(&format!("{} --version", PLATFORM_COMMAND), env)?;
    ui.message(&version.stdout);
    if !version.stderr.is_empty() {
        ui.message(&version.stderr);
    }
    Ok(())
}
