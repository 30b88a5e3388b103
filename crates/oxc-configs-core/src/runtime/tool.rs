//! External CLI tool checks
//!
//! Used by the authenticated product to make sure the GitHub CLI is present
//! and logged in before any template is requested.

use std::process::Stdio;
use tokio::process::Command;

/// Configuration for a CLI tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "gh")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// Subcommand that exits successfully only when the user is logged in
    pub auth_status_args: &'static [&'static str],
    /// Command the user should run to log in
    pub login_command: &'static str,
    /// Where to get the tool
    pub install_url: &'static str,
}

/// Manager for checking CLI tools
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    /// Create a new tool manager with the given configuration
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Get the tool configuration
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Check if the tool is installed and available in PATH
    pub async fn is_installed(&self) -> bool {
        Command::new(self.config.name)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok_and(|status| status.success())
    }

    /// Get the installed tool version (first line of `--version`)
    pub async fn get_version(&self) -> Option<String> {
        Command::new(self.config.name)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .and_then(|s| s.lines().next().map(|l| l.trim().to_string()))
                } else {
                    None
                }
            })
    }

    /// Check whether the user is logged in
    pub async fn is_authenticated(&self) -> bool {
        Command::new(self.config.name)
            .args(self.config.auth_status_args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok_and(|status| status.success())
    }

    /// Diagnostic for a missing tool
    pub fn missing_message(&self) -> String {
        format!(
            "{} is not installed. Install it from {} and try again.",
            self.config.display_name, self.config.install_url
        )
    }

    /// Diagnostic for a logged-out user
    pub fn unauthenticated_message(&self) -> String {
        format!(
            "You are not logged in to {}. Run `{}` and try again.",
            self.config.display_name, self.config.login_command
        )
    }
}

/// Pre-configured tool manager for the GitHub CLI
pub fn gh_tool() -> ToolManager {
    ToolManager::new(ToolConfig {
        name: "gh",
        display_name: "GitHub CLI",
        auth_status_args: &["auth", "status"],
        login_command: "gh auth login",
        install_url: "https://cli.github.com",
    })
}
