//! Package manager detection from lockfiles and installed executables

use std::fmt;
use std::path::Path;
use std::process::Stdio;
use tokio::fs;
use tokio::process::Command;

/// Supported JavaScript package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Detection priority, highest first
    pub const PRIORITY: [PackageManager; 4] = [
        PackageManager::Yarn,
        PackageManager::Pnpm,
        PackageManager::Bun,
        PackageManager::Npm,
    ];

    /// Name of the executable on PATH
    pub fn executable(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Lockfile names whose presence implies this manager
    pub fn lockfiles(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["package-lock.json"],
            PackageManager::Yarn => &["yarn.lock"],
            PackageManager::Pnpm => &["pnpm-lock.yaml"],
            PackageManager::Bun => &["bun.lock", "bun.lockb"],
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable())
    }
}

/// How a package manager was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSource {
    /// Implied by a lockfile; the executable itself has not been checked
    Lockfile,
    /// The executable answered `--version`
    Installed,
}

/// Detection result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub manager: PackageManager,
    pub source: DetectionSource,
}

/// First manager flagged `true`, by [`PackageManager::PRIORITY`]
///
/// The order of `results` does not matter.
pub fn first_by_priority(results: &[(PackageManager, bool)]) -> Option<PackageManager> {
    PackageManager::PRIORITY.into_iter().find(|pm| {
        results
            .iter()
            .any(|(candidate, found)| candidate == pm && *found)
    })
}

async fn has_lockfile(dir: &Path, pm: PackageManager) -> bool {
    for name in pm.lockfiles() {
        if fs::try_exists(dir.join(name)).await.unwrap_or(false) {
            return true;
        }
    }
    false
}

/// Check every manager's lockfiles in `dir` concurrently
pub async fn scan_lockfiles(dir: &Path) -> Vec<(PackageManager, bool)> {
    let (yarn, pnpm, bun, npm) = tokio::join!(
        has_lockfile(dir, PackageManager::Yarn),
        has_lockfile(dir, PackageManager::Pnpm),
        has_lockfile(dir, PackageManager::Bun),
        has_lockfile(dir, PackageManager::Npm),
    );

    vec![
        (PackageManager::Yarn, yarn),
        (PackageManager::Pnpm, pnpm),
        (PackageManager::Bun, bun),
        (PackageManager::Npm, npm),
    ]
}

/// Lockfile-implied manager for `dir`, if any
pub async fn lockfile_manager(dir: &Path) -> Option<PackageManager> {
    first_by_priority(&scan_lockfiles(dir).await)
}

/// Check if a package manager is invocable (`<pm> --version` succeeds)
pub async fn has_global_installation(pm: PackageManager) -> bool {
    Command::new(pm.executable())
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .is_ok_and(|status| status.success())
}

/// Check every manager concurrently
pub async fn installed_managers() -> Vec<(PackageManager, bool)> {
    let (yarn, pnpm, bun, npm) = tokio::join!(
        has_global_installation(PackageManager::Yarn),
        has_global_installation(PackageManager::Pnpm),
        has_global_installation(PackageManager::Bun),
        has_global_installation(PackageManager::Npm),
    );

    vec![
        (PackageManager::Yarn, yarn),
        (PackageManager::Pnpm, pnpm),
        (PackageManager::Bun, bun),
        (PackageManager::Npm, npm),
    ]
}

/// Detect the package manager for the project in `dir`
///
/// Lockfiles win; without one, the first installed manager is used.
pub async fn detect(dir: &Path) -> Option<Detection> {
    if let Some(manager) = lockfile_manager(dir).await {
        return Some(Detection {
            manager,
            source: DetectionSource::Lockfile,
        });
    }

    first_by_priority(&installed_managers().await).map(|manager| Detection {
        manager,
        source: DetectionSource::Installed,
    })
}
