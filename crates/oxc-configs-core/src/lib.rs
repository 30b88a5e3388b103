//! OXC Configs Core - Shared library for the oxc-configs CLIs
//!
//! This library fetches the OXC formatter (`.oxfmtrc.json`) and linter
//! (`.oxlintrc.json`) configs from a template repository, and optionally
//! installs the related dev dependencies with the project's package manager.
//! It is used by several binaries (`oxc-configs`, `oxc-configs-gh`) that share
//! the same flow but differ in how templates are retrieved.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Package manager detection, install command
//!   building, template fetching and config file syncing
//! - **Layer 2: Product Configuration** - `ProductConfig` trait selecting the
//!   template source and which optional steps a binary runs
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use oxc_configs_core::{runtime, ConfigFetcher, ConfigFile, Template};
//!
//! let pm = runtime::detect(&dir).await;
//! let fetcher = ConfigFetcher::from_config(&MyConfig)?;
//! let config = fetcher.fetch(Template::TypeScript, ConfigFile::Linter).await?;
//! ```

pub mod exit;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use exit::{exit_code, Abort, CancelExt};
pub use product::{ProductConfig, SourceKind};
pub use runtime::{CommandToRun, Detection, DetectionSource, PackageManager};
pub use templates::{
    sync_config, ConfigFetcher, ConfigFile, ConfigSource, JsonStyle, SyncOutcome, SyncPrompt,
    Template,
};

#[cfg(feature = "tui")]
pub use tui::{report, run, RunArgs};
