use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::FetcherConfig;
use crate::error::FetchError;

const USER_AGENT: &str = concat!("devclub-lecture-fetcher/", env!("CARGO_PKG_VERSION"));

/// One item of the remote listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// Where the entry's content is retrieved from
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ListingEntry {
    /// Name for log lines, falling back to the content URL
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.url)
    }
}

/// Body of a content-retrieval call. `content` is base64 and may be
/// wrapped across lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentResponse {
    pub content: String,
}

/// Where lecture records come from
#[async_trait]
pub trait LectureSource: Send + Sync {
    async fn list_entries(&self) -> Result<Vec<ListingEntry>, FetchError>;

    async fn fetch_content(&self, entry: &ListingEntry) -> Result<ContentResponse, FetchError>;
}

/// GitHub contents API
pub struct GithubSource {
    client: Client,
    listing_url: String,
}

impl GithubSource {
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.github_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            listing_url: config.source_url.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl LectureSource for GithubSource {
    async fn list_entries(&self) -> Result<Vec<ListingEntry>, FetchError> {
        self.get_json(&self.listing_url).await
    }

    async fn fetch_content(&self, entry: &ListingEntry) -> Result<ContentResponse, FetchError> {
        self.get_json(&entry.url).await
    }
}
