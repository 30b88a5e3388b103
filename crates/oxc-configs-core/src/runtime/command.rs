//! Dev-dependency install command construction

use super::package_manager::PackageManager;
use std::fmt;

/// A package manager invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandToRun {
    pub exe: PackageManager,
    pub args: Vec<String>,
}

impl CommandToRun {
    /// Build the command that adds `packages` as dev dependencies
    ///
    /// Names are trimmed and blanks dropped. With a `version`, every name
    /// becomes `name@version`.
    pub fn build<S: AsRef<str>>(
        packages: &[S],
        manager: PackageManager,
        version: Option<&str>,
    ) -> Self {
        let mut args: Vec<String> = match manager {
            PackageManager::Bun | PackageManager::Pnpm | PackageManager::Yarn => {
                vec!["add".to_string(), "-D".to_string()]
            }
            PackageManager::Npm => vec!["install".to_string(), "-D".to_string()],
        };

        args.extend(
            packages
                .iter()
                .map(|p| p.as_ref().trim())
                .filter(|p| !p.is_empty())
                .map(|p| match version {
                    Some(v) => format!("{}@{}", p, v),
                    None => p.to_string(),
                }),
        );

        Self {
            exe: manager,
            args,
        }
    }
}

impl fmt::Display for CommandToRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.exe)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(command: &CommandToRun) -> Vec<&str> {
        command.args.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_adds_multiple_packages() {
        let command = CommandToRun::build(&["oxlint", "oxfmt"], PackageManager::Npm, None);
        assert_eq!(command.exe, PackageManager::Npm);
        assert_eq!(args(&command), ["install", "-D", "oxlint", "oxfmt"]);
    }

    #[test]
    fn test_version_applied_per_package() {
        let command = CommandToRun::build(
            &["oxlint", "oxfmt", "oxlint-tsgolint"],
            PackageManager::Bun,
            Some("latest"),
        );
        assert_eq!(command.exe, PackageManager::Bun);
        assert_eq!(
            args(&command),
            [
                "add",
                "-D",
                "oxlint@latest",
                "oxfmt@latest",
                "oxlint-tsgolint@latest"
            ]
        );
    }

    #[test]
    fn test_add_style_managers() {
        for pm in [
            PackageManager::Bun,
            PackageManager::Pnpm,
            PackageManager::Yarn,
        ] {
            let command = CommandToRun::build(&["oxlint"], pm, None);
            assert_eq!(&command.args[..2], ["add", "-D"], "{}", pm);
        }
    }

    #[test]
    fn test_blank_names_dropped() {
        let command =
            CommandToRun::build(&[" oxlint ", "", "  ", "oxfmt"], PackageManager::Npm, None);
        assert_eq!(args(&command), ["install", "-D", "oxlint", "oxfmt"]);
    }

    #[test]
    fn test_version_keeps_order_and_trims() {
        let command =
            CommandToRun::build(&[" oxfmt", "oxlint "], PackageManager::Pnpm, Some("1.2.0"));
        assert_eq!(args(&command), ["add", "-D", "oxfmt@1.2.0", "oxlint@1.2.0"]);
    }

    #[test]
    fn test_empty_package_list() {
        let packages: [&str; 0] = [];
        let command = CommandToRun::build(&packages, PackageManager::Yarn, Some("latest"));
        assert_eq!(args(&command), ["add", "-D"]);
    }

    #[test]
    fn test_display() {
        let command =
            CommandToRun::build(&["oxlint", "oxfmt"], PackageManager::Yarn, Some("latest"));
        assert_eq!(command.to_string(), "yarn add -D oxlint@latest oxfmt@latest");
    }
}
