//! GitHub REST API client.
//!
//! Exactly two lookups are needed per run: resolving the release to compare
//! from, and fetching the commit comparison. Both responses are validated at
//! this boundary; an upstream error payload becomes [`GithubError::Api`]
//! rather than surfacing as a shape mismatch deeper in.

use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::github::error::GithubError;

/// Production GitHub API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// A published release, as returned by the releases endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// The release's git tag.
    pub tag_name: String,
    /// Link to the release page.
    pub html_url: String,
}

/// Commit payload inside a comparison entry.
#[derive(Deserialize)]
struct RawCommit {
    message: String,
}

/// One entry of the comparison's commit list.
#[derive(Deserialize)]
struct CommitEntry {
    commit: RawCommit,
}

/// Successful comparison response.
#[derive(Deserialize)]
struct Comparison {
    commits: Vec<CommitEntry>,
}

/// Error payload the API returns in place of a resource.
#[derive(Deserialize)]
struct ErrorPayload {
    message: String,
    #[serde(default)]
    documentation_url: String,
}

/// Either the expected resource or the API's error payload.
#[derive(Deserialize)]
#[serde(untagged)]
enum ApiResponse<T> {
    Resource(T),
    Failure(ErrorPayload),
}

impl From<ErrorPayload> for GithubError {
    fn from(payload: ErrorPayload) -> Self {
        GithubError::Api {
            message: payload.message,
            documentation_url: payload.documentation_url,
        }
    }
}

/// Client for the two release-notes lookups against one repository.
pub struct GithubClient {
    client: Client,
    base_url: String,
    repo: String,
}

impl GithubClient {
    /// Creates a client for `repo` (an `owner/name` slug) against the given
    /// API base URL.
    pub fn new(repo: &str, base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("relnotes/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GithubError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            repo: repo.to_string(),
        })
    }

    /// Fetches one endpoint and separates resource from error payload.
    async fn get<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, GithubError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GithubError::NetworkError(e.to_string()))?;

        let payload: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| GithubError::InvalidResponseFormat(e.to_string()))?;

        match payload {
            ApiResponse::Resource(resource) => Ok(resource),
            ApiResponse::Failure(failure) => Err(failure.into()),
        }
    }

    /// Looks up a release by tag, or the latest published release when
    /// `tag` is `None`.
    pub async fn release(&self, tag: Option<&str>) -> Result<Release, GithubError> {
        let tag = tag.unwrap_or("latest");
        let url = format!("{}/repos/{}/releases/{tag}", self.base_url, self.repo);
        self.get(&url).await
    }

    /// Fetches the commit messages introduced between `from` and `to`, in
    /// the order the comparison endpoint returns them.
    pub async fn compare(&self, from: &str, to: &str) -> Result<Vec<String>, GithubError> {
        let url = format!(
            "{}/repos/{}/compare/{from}...{to}",
            self.base_url, self.repo
        );
        let comparison: Comparison = self.get(&url).await?;
        Ok(comparison
            .commits
            .into_iter()
            .map(|entry| entry.commit.message)
            .collect())
    }
}
