//! Solver installation via the platform's extension fetcher.
//!
//! `idaes get-extensions` drops prebuilt solver binaries into a fixed
//! install directory; that directory is prepended to the PATH (guarded
//! against duplication) and each expected solver is probed with its
//! version flag. A conda channel covers platforms the extensions build
//! does not.

use crate::env::RuntimeEnv;
use crate::error::Result;
use crate::probe;
use crate::ui::UserInterface;
use std::path::Path;

use super::InstallerContext;

/// The solver whose presence gates the extensions install.
pub const PRIMARY_SOLVER: &str = "ipopt";

/// Solvers shipped by `idaes get-extensions`, probed after install.
///
/// cbc and clp are excluded: invoking them with a version flag enters
/// their interactive scripting prompt instead of printing a version.
pub const EXTENSION_SOLVERS: &[&str] = &[
    "ipopt", "k_aug", "couenne", "bonmin", "ipopt_l1", "dot_sens",
];

/// Directory where get-extensions drops solver binaries.
pub const EXTENSIONS_BIN_DIR: &str = "/root/.idaes/bin/";

/// Install the primary solver and the rest of the extensions bundle.
///
/// When the primary solver is missing, fetches the platform's solver
/// extensions, prepends their install directory to the env PATH, and
/// probes every bundled solver. With `conda_fallback`, a still-missing
/// primary solver is retried through the conda channel and re-probed.
pub fn install_solvers(
    ctx: &InstallerContext<'_>,
    env: &mut RuntimeEnv,
    ui: &mut dyn UserInterface,
    verbose: bool,
    conda_fallback: bool,
) -> Result<()> {
    if !probe::is_available(PRIMARY_SOLVER, env) {
        ui.message("Running idaes get-extensions to install Ipopt, k_aug, and more...");
        let result = (ctx.run)("idaes get-extensions", env)?;
        if verbose {
            ui.message(&result.stdout);
            ui.message(&result.stderr);
        }

        env.prepend_path(Path::new(EXTENSIONS_BIN_DIR));
        tracing::debug!(path = %env.path_string(), "extensions bin dir on PATH");

        ui.message("Checking solver versions:");
        for solver in EXTENSION_SOLVERS {
            print_solver_version(ctx, env, ui, solver)?;
        }
    }

    // Check again; the extensions build may not cover this platform.
    if conda_fallback && !probe::is_available(PRIMARY_SOLVER, env) {
        ui.message("Installing Ipopt via conda...");
        let result = (ctx.run)(
            &format!("python3 -m conda install -c conda-forge {}", PRIMARY_SOLVER),
            env,
        )?;
        if verbose {
            ui.message(&result.stdout);
            ui.message(&result.stderr);
        }
        ui.message("Checking ipopt version:");
        print_solver_version(ctx, env, ui, PRIMARY_SOLVER)?;
    }

    Ok(())
}

/// Install glpk through the OS package manager.
///
/// Gated on both non-availability and the Colab runtime; anywhere else
/// the user manages glpk themselves.
pub fn install_glpk(
    ctx: &InstallerContext<'_>,
    env: &RuntimeEnv,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    if !probe::is_available("glpk", env) && env.on_colab() {
        ui.message("Installing glpk via apt-get...");
        (ctx.run)("apt-get install -y -qq glpk-utils", env)?;
    }
    Ok(())
}

/// Probe one solver with its version flag and print the output.
///
/// This is the primary check that a solver installed correctly and is
/// callable.
fn print_solver_version(
    ctx: &InstallerContext<'_>,
    env: &RuntimeEnv,
    ui: &mut dyn UserInterface,
    solver: &str,
) -> Result<()> {
    let result = (ctx.run)(&format!("{} -v", solver), env)?;
    ui.message(&result.stdout);
    if !result.stderr.is_empty() {
        ui.message(&result.stderr);
    }
    Ok(())
}
