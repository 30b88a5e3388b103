//! Replace-or-skip syncing of a single config file

use super::fetcher::ConfigFetcher;
use super::template::{ConfigFile, Template};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

/// How fetched JSON is written back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    /// Indented, with a trailing newline
    Pretty,
    /// Single line, exactly as `serde_json::to_string` emits it
    Compact,
}

impl JsonStyle {
    pub fn render(&self, value: &Value) -> Result<String> {
        match self {
            JsonStyle::Pretty => {
                let mut out = serde_json::to_string_pretty(value)?;
                out.push('\n');
                Ok(out)
            }
            JsonStyle::Compact => Ok(serde_json::to_string(value)?),
        }
    }
}

/// Result of syncing one config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Written(PathBuf),
    Skipped,
}

/// User interaction hooks for [`sync_config`]
pub trait SyncPrompt {
    /// Ask whether an existing file should be replaced
    fn confirm_replace(&mut self, file: ConfigFile) -> Result<bool>;

    /// The existing file is kept
    fn skipped(&mut self, _file: ConfigFile) -> Result<()> {
        Ok(())
    }

    /// Retrieval is about to start
    fn fetching(&mut self, _file: ConfigFile) {}

    /// The file has been written
    fn written(&mut self, _file: ConfigFile) {}

    /// Retrieval or writing failed; the error is returned right after
    fn failed(&mut self, _file: ConfigFile) {}
}

/// Fetch `file` for `template` into `dir`, asking before replacing an existing file
///
/// Nothing is written unless the whole fetch and parse succeeds.
pub async fn sync_config<P: SyncPrompt>(
    fetcher: &ConfigFetcher,
    template: Template,
    file: ConfigFile,
    dir: &Path,
    style: JsonStyle,
    prompt: &mut P,
) -> Result<SyncOutcome> {
    let path = dir.join(file.file_name());

    let exists = fs::try_exists(&path)
        .await
        .with_context(|| format!("Failed to check {}", path.display()))?;

    if exists && !prompt.confirm_replace(file)? {
        prompt.skipped(file)?;
        return Ok(SyncOutcome::Skipped);
    }

    prompt.fetching(file);

    match fetch_and_write(fetcher, template, file, &path, style).await {
        Ok(()) => {
            prompt.written(file);
            Ok(SyncOutcome::Written(path))
        }
        Err(e) => {
            prompt.failed(file);
            Err(e)
        }
    }
}

async fn fetch_and_write(
    fetcher: &ConfigFetcher,
    template: Template,
    file: ConfigFile,
    path: &Path,
    style: JsonStyle,
) -> Result<()> {
    let config = fetcher.fetch(template, file).await?;
    let content = style.render(&config)?;
    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
