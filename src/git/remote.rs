//! GitHub remote detection.

use anyhow::Result;
use git2::Repository;

/// Finds the `owner/name` slug of the repository's GitHub remote.
///
/// Remotes are scanned in the order git reports them; the first one whose
/// URL points at github.com wins. Fails when the repository has no GitHub
/// remote at all, before any network activity happens.
pub fn github_slug(repo: &Repository) -> Result<String> {
    let remotes = repo.remotes()?;
    for name in remotes.iter().flatten() {
        if let Ok(remote) = repo.find_remote(name) {
            if let Some(slug) = remote.url().and_then(extract_github_slug) {
                return Ok(slug);
            }
        }
    }
    anyhow::bail!("No GitHub remote found in repository configuration")
}

/// Extracts `owner/name` from an SSH or HTTPS GitHub remote URL.
fn extract_github_slug(url: &str) -> Option<String> {
    let rest = if let Some(rest) = url.strip_prefix("git@github.com:") {
        rest
    } else {
        // Covers https://github.com/... and ssh://git@github.com/... forms
        url.split("github.com/").nth(1)?
    };

    let slug = rest.strip_suffix(".git").unwrap_or(rest).trim_end_matches('/');
    if slug.split('/').count() == 2 && !slug.starts_with('/') {
        Some(slug.to_string())
    } else {
        None
    }
}
