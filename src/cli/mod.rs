//! CLI interface for relnotes.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::git;
use crate::github::{GithubClient, DEFAULT_API_BASE};
use crate::notes;

/// relnotes: categorized release changelog generator
#[derive(Parser)]
#[command(name = "relnotes")]
#[command(about = "Generates a changelog for a GitHub repository", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Release tag to compare from. Defaults to the last published release.
    #[arg(long, value_name = "TAG")]
    pub from: Option<String>,

    /// Git ref to compare up to. Defaults to HEAD of master.
    #[arg(long, value_name = "REF", default_value = "master")]
    pub to: String,
}

impl Cli {
    /// Executes the changelog generation and writes the report to stdout.
    pub async fn execute(self) -> Result<()> {
        let repo = git::discover_repository()?;
        let slug = git::github_slug(&repo)?;
        debug!("Using GitHub repository {slug}");

        let client = GithubClient::new(&slug, DEFAULT_API_BASE)?;

        let release = client
            .release(self.from.as_deref())
            .await
            .context("Failed to resolve the release to compare from")?;
        debug!("Comparing {}...{}", release.tag_name, self.to);

        let messages = client
            .compare(&release.tag_name, &self.to)
            .await
            .context("Failed to fetch the commit comparison")?;
        debug!("Classifying {} commits", messages.len());

        let report = notes::aggregate(messages.iter().map(String::as_str))?;
        print!("{}", report.render(&release.tag_name, &release.html_url));

        Ok(())
    }
}
