//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface that each product (oxc-configs,
//! oxc-configs-gh) must implement to configure where templates come from and
//! which optional steps run.

use crate::templates::JsonStyle;

/// How a product retrieves template files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Unauthenticated GET against a raw-content base URL
    Raw,
    /// `gh api` call against the GitHub contents endpoint
    GitHubApi,
}

/// Configuration trait for different CLI products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Template source kind and location
/// - Which optional steps (install, format) are offered
/// - How fetched JSON is written back
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, user agent)
    fn name(&self) -> &'static str;

    /// Human-readable display name shown in the intro banner
    fn display_name(&self) -> &'static str;

    /// Which retrieval strategy this product uses
    fn source_kind(&self) -> SourceKind;

    /// Default template location: a base URL for `Raw`, `owner/repo` for `GitHubApi`
    fn default_template_location(&self) -> &'static str;

    /// Environment variable name for overriding the template location
    fn template_location_env(&self) -> &'static str;

    /// Whether the install/update dependencies step is offered
    fn offers_dependency_install(&self) -> bool;

    /// Whether the external formatter runs on the written configs
    fn formats_configs(&self) -> bool;

    /// Output style for written config files
    fn json_style(&self) -> JsonStyle;

    /// Whether the GitHub CLI must be installed and authenticated
    fn requires_gh_auth(&self) -> bool {
        self.source_kind() == SourceKind::GitHubApi
    }

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
