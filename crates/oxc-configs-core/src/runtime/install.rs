//! Dev dependency installation and config formatting

use super::command::CommandToRun;
use super::package_manager::PackageManager;
use crate::templates::ConfigFile;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Packages every setup installs
pub const BASE_PACKAGES: &[&str] = &["oxlint", "oxfmt"];

/// Extra package needed for type-aware linting
pub const TYPE_AWARE_PACKAGE: &str = "oxlint-tsgolint";

/// Version tag pinned on install
pub const INSTALL_VERSION: &str = "latest";

/// Formatter runner and its fixed leading arguments
const FORMATTER: (&str, &[&str]) = ("bunx", &["--silent", "oxfmt@latest"]);

/// Packages to install for the chosen linting mode
pub fn oxc_packages(type_aware: bool) -> Vec<&'static str> {
    let mut packages = BASE_PACKAGES.to_vec();
    if type_aware {
        packages.push(TYPE_AWARE_PACKAGE);
    }
    packages
}

/// Run a command quietly in `dir`, failing on spawn error or non-zero exit
async fn run_quiet(program: &str, args: &[String], dir: &Path) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .with_context(|| format!("Failed to run {}", program))?;

    if !status.success() {
        anyhow::bail!(
            "{} exited with code {}",
            program,
            status.code().unwrap_or(-1)
        );
    }

    Ok(())
}

/// Add `packages` at their latest version as dev dependencies of the project in `dir`
pub async fn install_dependencies<S: AsRef<str>>(
    manager: PackageManager,
    packages: &[S],
    dir: &Path,
) -> Result<CommandToRun> {
    let command = CommandToRun::build(packages, manager, Some(INSTALL_VERSION));
    run_quiet(command.exe.executable(), &command.args, dir)
        .await
        .with_context(|| format!("`{}` failed", command))?;
    Ok(command)
}

/// Arguments passed to the formatter runner for `files`
pub fn formatter_args(files: &[ConfigFile]) -> Vec<String> {
    FORMATTER
        .1
        .iter()
        .map(|a| a.to_string())
        .chain(files.iter().map(|f| f.file_name().to_string()))
        .collect()
}

/// Reformat the written config files in place with oxfmt
pub async fn format_configs(files: &[ConfigFile], dir: &Path) -> Result<()> {
    run_quiet(FORMATTER.0, &formatter_args(files), dir)
        .await
        .context("Failed to format config files with oxfmt")
}
