//! GitHub API error handling.

use thiserror::Error;

/// GitHub REST API specific errors.
#[derive(Error, Debug)]
pub enum GithubError {
    /// The API answered with an error payload instead of the expected
    /// resource.
    #[error("GitHub API error: {message} {documentation_url}")]
    Api {
        /// Error message from the upstream payload.
        message: String,
        /// Documentation link from the upstream payload.
        documentation_url: String,
    },

    /// Response body did not match the expected shape.
    #[error("Invalid response format from GitHub API: {0}")]
    InvalidResponseFormat(String),

    /// Network connectivity error.
    #[error("Network error: {0}")]
    NetworkError(String),
}

// Note: anyhow already has a blanket impl for thiserror::Error types
