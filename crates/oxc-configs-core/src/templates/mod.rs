//! Template selection, fetching, and config syncing
//!
//! This module provides:
//! - Template and config file types
//! - Config fetching from a raw URL, the GitHub API, or a local directory
//! - Replace-or-skip syncing of config files into the project

pub mod fetcher;
pub mod sync;
pub mod template;

pub use fetcher::{decode_contents, ConfigFetcher, ConfigSource};
pub use sync::{sync_config, JsonStyle, SyncOutcome, SyncPrompt};
pub use template::{ConfigFile, Template, UnknownTemplate};
