//! Library-level tests for the bootstrap flow.
//!
//! These exercise the installer's decision logic through an injected
//! context: no pip, conda, or apt process is ever spawned.

use nbkit::env::RuntimeEnv;
use nbkit::installer::{
    install_all, InstallOptions, InstallerContext, EXTENSIONS_BIN_DIR, EXTENSION_SOLVERS,
};
use nbkit::shell::CommandResult;
use nbkit::ui::MockUI;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn ok_result() -> CommandResult {
    CommandResult::success(String::new(), String::new(), Duration::ZERO)
}

fn fake_solver_dir(names: &[&str]) -> tempfile::TempDir {
    let temp = tempfile::TempDir::new().unwrap();
    for name in names {
        let path = temp.path().join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }
    temp
}

#[test]
fn fresh_runtime_runs_the_full_sequence() {
    let mut env = RuntimeEnv::with_path(vec![PathBuf::from("/usr/bin")]);

    let commands: RefCell<Vec<String>> = RefCell::new(Vec::new());
    let run = |cmd: &str, _env: &RuntimeEnv| {
        commands.borrow_mut().push(cmd.to_string());
        Ok(ok_result())
    };
    let ctx = InstallerContext {
        run: &run,
        platform_importable: &|| false,
    };

    let mut ui = MockUI::new();
    install_all(&ctx, &mut env, &mut ui, InstallOptions::default()).unwrap();

    let commands = commands.borrow();
    // pip install, version confirm, get-extensions, six probes, conda
    // fallback, one re-probe.
    assert_eq!(commands[0], "python3 -m pip install -q idaes_pse");
    assert_eq!(commands[1], "idaes --version");
    assert_eq!(commands[2], "idaes get-extensions");
    assert_eq!(commands.len(), 3 + EXTENSION_SOLVERS.len() + 2);
    assert!(env.contains(Path::new(EXTENSIONS_BIN_DIR)));
}

#[test]
fn second_run_with_everything_present_is_silent() {
    let solvers = fake_solver_dir(&["ipopt", "gpsol"]);
    let mut env = RuntimeEnv::with_path(vec![solvers.path().to_path_buf()]).with_colab(true);

    let commands: RefCell<Vec<String>> = RefCell::new(Vec::new());
    let run = |cmd: &str, _env: &RuntimeEnv| {
        commands.borrow_mut().push(cmd.to_string());
        Ok(ok_result())
    };
    let ctx = InstallerContext {
        run: &run,
        platform_importable: &|| true,
    };

    let mut ui = MockUI::new();
    let opts = InstallOptions {
        with_glpk: true,
        ..Default::default()
    };
    install_all(&ctx, &mut env, &mut ui, opts).unwrap();

    assert!(commands.borrow().is_empty());
}

#[test]
fn repeated_bootstraps_never_duplicate_the_path_entry() {
    let mut env = RuntimeEnv::with_path(vec![PathBuf::from("/usr/bin")]);

    let run = |_cmd: &str, _env: &RuntimeEnv| Ok(ok_result());
    let ctx = InstallerContext {
        run: &run,
        platform_importable: &|| true,
    };

    let mut ui = MockUI::new();
    for _ in 0..5 {
        install_all(&ctx, &mut env, &mut ui, InstallOptions::default()).unwrap();
    }

    let count = env
        .path_entries()
        .iter()
        .filter(|p| **p == PathBuf::from(EXTENSIONS_BIN_DIR))
        .count();
    assert_eq!(count, 1);
}

#[test]
fn failure_mid_sequence_stops_later_steps() {
    let mut env = RuntimeEnv::with_path(vec![]);

    let commands: RefCell<Vec<String>> = RefCell::new(Vec::new());
    let run = |cmd: &str, _env: &RuntimeEnv| {
        commands.borrow_mut().push(cmd.to_string());
        if cmd == "idaes get-extensions" {
            return Err(nbkit::NbkitError::CommandFailed {
                command: cmd.to_string(),
                code: Some(1),
            });
        }
        Ok(ok_result())
    };
    let ctx = InstallerContext {
        run: &run,
        platform_importable: &|| true,
    };

    let mut ui = MockUI::new();
    let err = install_all(&ctx, &mut env, &mut ui, InstallOptions::default()).unwrap_err();

    assert!(err.to_string().contains("get-extensions"));
    // Nothing after the failing command ran.
    assert_eq!(
        commands.borrow().last().map(String::as_str),
        Some("idaes get-extensions")
    );
}
