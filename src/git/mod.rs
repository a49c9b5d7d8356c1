//! Local git repository identity.

pub mod remote;

pub use remote::github_slug;

use anyhow::{Context, Result};
use git2::Repository;

/// Opens the git repository enclosing the current directory.
pub fn discover_repository() -> Result<Repository> {
    Repository::discover(".")
        .context("Could not find a git repository in the current directory")
}
