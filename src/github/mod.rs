//! GitHub REST API lookups.

pub mod client;
pub mod error;

pub use client::{GithubClient, Release, DEFAULT_API_BASE};
pub use error::GithubError;
