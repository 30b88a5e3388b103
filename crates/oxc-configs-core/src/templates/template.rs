//! Template flavors and the config files each one provides

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Project flavor a pair of configs is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    ReactTypeScript,
    TypeScript,
    JavaScript,
}

/// Returned when a string names no known template
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown template: {0}")]
pub struct UnknownTemplate(pub String);

impl Template {
    /// All templates, in the order they are offered
    pub const ALL: [Template; 3] = [
        Template::ReactTypeScript,
        Template::TypeScript,
        Template::JavaScript,
    ];

    /// Directory name in the template repository
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::ReactTypeScript => "react-typescript",
            Template::TypeScript => "typescript",
            Template::JavaScript => "javascript",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Template::ReactTypeScript => "React + TypeScript",
            Template::TypeScript => "TypeScript",
            Template::JavaScript => "JavaScript",
        }
    }

    /// Type-aware linting needs a TypeScript project
    pub fn supports_type_aware(&self) -> bool {
        !matches!(self, Template::JavaScript)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

/// One of the two config files a template provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFile {
    Formatter,
    Linter,
}

impl ConfigFile {
    /// Both files, in the order they are fetched
    pub const ALL: [ConfigFile; 2] = [ConfigFile::Formatter, ConfigFile::Linter];

    pub fn file_name(&self) -> &'static str {
        match self {
            ConfigFile::Formatter => ".oxfmtrc.json",
            ConfigFile::Linter => ".oxlintrc.json",
        }
    }
}

impl fmt::Display for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_templates() {
        assert_eq!(
            "react-typescript".parse::<Template>(),
            Ok(Template::ReactTypeScript)
        );
        assert_eq!("typescript".parse::<Template>(), Ok(Template::TypeScript));
        assert_eq!("javascript".parse::<Template>(), Ok(Template::JavaScript));
    }

    #[test]
    fn test_parse_unknown_template() {
        let err = "vue".parse::<Template>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown template: vue");
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("TypeScript".parse::<Template>().is_err());
        assert!(" typescript".parse::<Template>().is_err());
        assert!("".parse::<Template>().is_err());
    }

    #[test]
    fn test_type_aware_support() {
        assert!(Template::ReactTypeScript.supports_type_aware());
        assert!(Template::TypeScript.supports_type_aware());
        assert!(!Template::JavaScript.supports_type_aware());
    }

    #[test]
    fn test_formatter_config_comes_first() {
        assert_eq!(ConfigFile::ALL[0].file_name(), ".oxfmtrc.json");
        assert_eq!(ConfigFile::ALL[1].file_name(), ".oxlintrc.json");
    }
}
