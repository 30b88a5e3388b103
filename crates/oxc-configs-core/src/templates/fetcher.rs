//! Config retrieval from the template repository
//!
//! Three interchangeable sources:
//! - Raw: public raw-content URL, JSON body returned directly
//! - GitHubApi: `gh api` contents endpoint, base64 payload
//! - Local: a templates directory on disk (development use)

use super::template::{ConfigFile, Template};
use crate::product::{ProductConfig, SourceKind};
use anyhow::{Context, Result};
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::fs;
use tokio::process::Command;
use url::Url;

/// Where template files come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Raw(Url),
    GitHubApi { repo: String },
    Local(PathBuf),
}

impl ConfigSource {
    /// Create the remote source for a product, honoring its env override
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let location = std::env::var(config.template_location_env())
            .unwrap_or_else(|_| config.default_template_location().to_string());
        Self::from_location(config.source_kind(), &location)
    }

    /// Parse a location string for the given source kind
    pub fn from_location(kind: SourceKind, location: &str) -> Result<Self> {
        match kind {
            SourceKind::Raw => {
                let url = Url::parse(location)
                    .with_context(|| format!("Invalid template URL: {}", location))?;
                Ok(Self::Raw(url))
            }
            SourceKind::GitHubApi => {
                let mut parts = location.split('/');
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                        Ok(Self::GitHubApi {
                            repo: location.to_string(),
                        })
                    }
                    _ => anyhow::bail!(
                        "Invalid template repository: {} (expected owner/name)",
                        location
                    ),
                }
            }
        }
    }

    /// Create a local template source from a path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }
}

/// Response body of the GitHub contents endpoint (fields we use)
#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: String,
    encoding: String,
}

/// Decode a GitHub contents API response into the JSON it carries
pub fn decode_contents(body: &str) -> Result<Value> {
    let response: ContentsResponse =
        serde_json::from_str(body).context("Failed to parse GitHub contents response")?;

    if response.encoding != "base64" {
        anyhow::bail!("Unsupported content encoding: {}", response.encoding);
    }

    // GitHub wraps the payload at 60 columns
    let packed: String = response
        .content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(packed)
        .context("Failed to decode base64 content")?;

    serde_json::from_slice(&bytes).context("Template file is not valid JSON")
}

/// Config fetcher - retrieves template files from the configured source
pub struct ConfigFetcher {
    source: ConfigSource,
    client: reqwest::Client,
}

impl ConfigFetcher {
    /// Create a new fetcher with a custom user agent
    pub fn new(source: ConfigSource, user_agent: &str) -> Self {
        Self {
            source,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a fetcher from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let source = ConfigSource::from_config(config)?;
        Ok(Self::new(source, config.user_agent()))
    }

    /// Create a fetcher for local templates
    pub fn from_local(path: PathBuf, user_agent: &str) -> Self {
        Self::new(ConfigSource::local(path), user_agent)
    }

    /// Build a URL by appending path segments, preserving query parameters
    fn build_url(base: &Url, segments: &[&str]) -> Result<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("URL cannot have path segments: {}", base))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fetch and parse `{template}/{file}`
    pub async fn fetch(&self, template: Template, file: ConfigFile) -> Result<Value> {
        match &self.source {
            ConfigSource::Raw(base_url) => {
                let url = Self::build_url(base_url, &[template.as_str(), file.file_name()])?;
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch {}", url))?;

                if !response.status().is_success() {
                    anyhow::bail!("Failed to fetch {}: HTTP {}", url, response.status());
                }

                let content = response.text().await?;
                serde_json::from_str(&content)
                    .with_context(|| format!("{} from {} is not valid JSON", file, url))
            }
            ConfigSource::GitHubApi { repo } => {
                let endpoint = format!(
                    "repos/{}/contents/{}/{}",
                    repo,
                    template.as_str(),
                    file.file_name()
                );
                let output = Command::new("gh")
                    .args(["api", endpoint.as_str()])
                    .stdin(Stdio::null())
                    .output()
                    .await
                    .context("Failed to execute gh CLI")?;

                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    anyhow::bail!("gh api {} failed: {}", endpoint, stderr.trim());
                }

                decode_contents(&String::from_utf8_lossy(&output.stdout))
                    .with_context(|| format!("Failed to read {} from {}", file, endpoint))
            }
            ConfigSource::Local(path) => {
                let file_path = path.join(template.as_str()).join(file.file_name());
                let content = fs::read_to_string(&file_path)
                    .await
                    .with_context(|| format!("Failed to read {}", file_path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("{} is not valid JSON", file_path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_fetcher(url: &str) -> ConfigFetcher {
        let source = ConfigSource::from_location(SourceKind::Raw, url).unwrap();
        ConfigFetcher::new(source, "oxc-configs-test")
    }

    #[test]
    fn test_build_url_appends_template_and_file() {
        let base = Url::parse("https://raw.githubusercontent.com/simek/oxc-configs/HEAD").unwrap();
        let url =
            ConfigFetcher::build_url(&base, &["typescript", ".oxlintrc.json"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://raw.githubusercontent.com/simek/oxc-configs/HEAD/typescript/.oxlintrc.json"
        );
    }

    #[test]
    fn test_build_url_trailing_slash() {
        let base = Url::parse("https://example.com/configs/").unwrap();
        let url = ConfigFetcher::build_url(&base, &["javascript", ".oxfmtrc.json"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/configs/javascript/.oxfmtrc.json");
    }

    #[test]
    fn test_repo_location_must_be_owner_and_name() {
        assert_eq!(
            ConfigSource::from_location(SourceKind::GitHubApi, "simek/oxc-configs").unwrap(),
            ConfigSource::GitHubApi {
                repo: "simek/oxc-configs".to_string()
            }
        );
        assert!(ConfigSource::from_location(SourceKind::GitHubApi, "oxc-configs").is_err());
        assert!(ConfigSource::from_location(SourceKind::GitHubApi, "a/b/c").is_err());
        assert!(ConfigSource::from_location(SourceKind::GitHubApi, "/b").is_err());
    }

    #[test]
    fn test_invalid_raw_url() {
        assert!(ConfigSource::from_location(SourceKind::Raw, "not a url").is_err());
    }

    #[test]
    fn test_decode_contents() {
        // {"printWidth": 100} split across lines the way GitHub returns it
        let body = r#"{"name": ".oxfmtrc.json", "encoding": "base64", "content": "eyJwcmludFdp\nZHRoIjogMTAwfQ==\n"}"#;
        assert_eq!(decode_contents(body).unwrap(), json!({"printWidth": 100}));
    }

    #[test]
    fn test_decode_contents_rejects_other_encodings() {
        let body = r#"{"encoding": "none", "content": ""}"#;
        assert!(decode_contents(body).is_err());
    }

    #[test]
    fn test_decode_contents_rejects_bad_json() {
        // "not json"
        let body = r#"{"encoding": "base64", "content": "bm90IGpzb24="}"#;
        assert!(decode_contents(body).is_err());
    }

    #[tokio::test]
    async fn test_raw_fetch() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/typescript/.oxlintrc.json")
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body(r#"{"plugins": ["typescript"]}"#)
            .expect(1)
            .create_async()
            .await;

        let fetcher = raw_fetcher(&server.url());
        let config = fetcher
            .fetch(Template::TypeScript, ConfigFile::Linter)
            .await
            .unwrap();

        assert_eq!(config, json!({"plugins": ["typescript"]}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_raw_fetch_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/javascript/.oxfmtrc.json")
            .with_status(404)
            .create_async()
            .await;

        let fetcher = raw_fetcher(&server.url());
        let err = fetcher
            .fetch(Template::JavaScript, ConfigFile::Formatter)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_raw_fetch_malformed_json() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/javascript/.oxfmtrc.json")
            .with_status(200)
            .with_body("{ printWidth: ")
            .create_async()
            .await;

        let fetcher = raw_fetcher(&server.url());
        assert!(fetcher
            .fetch(Template::JavaScript, ConfigFile::Formatter)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_local_fetch() {
        let dir = tempfile::TempDir::new().unwrap();
        let template_dir = dir.path().join("react-typescript");
        std::fs::create_dir(&template_dir).unwrap();
        std::fs::write(template_dir.join(".oxfmtrc.json"), r#"{"semi": false}"#).unwrap();

        let fetcher = ConfigFetcher::from_local(dir.path().to_path_buf(), "oxc-configs-test");
        let config = fetcher
            .fetch(Template::ReactTypeScript, ConfigFile::Formatter)
            .await
            .unwrap();
        assert_eq!(config, json!({"semi": false}));

        assert!(fetcher
            .fetch(Template::ReactTypeScript, ConfigFile::Linter)
            .await
            .is_err());
    }
}
