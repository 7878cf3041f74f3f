use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Contents listing of the club's lectures repository
pub const DEFAULT_SOURCE_URL: &str =
    "https://api.github.com/repos/TJHSST-Dev-Club/lectures/contents/lectures";

/// Published site root, relative to the working directory
pub const DEFAULT_OUT_DIR: &str = "public";

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Listing endpoint; each entry carries a `url` to its content
    pub source_url: String,

    /// Directory the artifact is written into
    pub out_dir: PathBuf,

    /// Sent as a bearer token when present
    pub github_token: Option<String>,
}

impl FetcherConfig {
    pub fn from_env() -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read the working directory")?;
        Ok(Self::from_vars(|key| env::var(key).ok(), cwd))
    }

    /// Build from any variable lookup. Relative output directories resolve
    /// against `cwd`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>, cwd: PathBuf) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let out_dir = non_empty("LECTURES_OUT_DIR").unwrap_or_else(|| DEFAULT_OUT_DIR.to_string());

        Self {
            source_url: non_empty("LECTURES_SOURCE_URL")
                .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string()),
            out_dir: cwd.join(out_dir),
            github_token: non_empty("GITHUB_TOKEN"),
        }
    }
}
