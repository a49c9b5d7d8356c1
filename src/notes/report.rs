//! Release report aggregation and rendering.

use anyhow::{Context, Result};

use crate::notes::classify::classify;

/// The release-note taxonomy: category keys and their display titles, in the
/// order sections appear in the report.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("security", "SECURITY"),
    ("breaking", "BREAKING"),
    ("feature", "FEATURE / ENHANCEMENT"),
    ("vpat", "UI / UX"),
    ("bugfix", "BUGFIX"),
    ("refactor", "REFACTOR"),
    ("dependency", "SUPPORTING REPOSITORIES & VENDOR PACKAGES"),
    ("testing", "TESTING / BUILD"),
    ("documentation", "DOCUMENTATION"),
];

/// One category's slice of the report.
#[derive(Debug, Clone)]
pub struct CategorySection {
    /// Lower-case category key.
    pub key: &'static str,
    /// Display title for the section.
    pub title: &'static str,
    /// Rendered commit messages, sorted ascending.
    pub lines: Vec<String>,
}

/// A classified, grouped changelog. Sections always cover the full taxonomy
/// in its fixed order, empty or not.
#[derive(Debug, Clone)]
pub struct ReleaseReport {
    sections: Vec<CategorySection>,
}

/// Classifies every commit message and buckets the results by category.
///
/// Fails if a classification resolves to a key outside the taxonomy, which
/// only happens for a tag whose subtype stood in for an unrecognized type
/// and is itself unrecognized. No partial report is produced in that case.
pub fn aggregate<'a>(commits: impl IntoIterator<Item = &'a str>) -> Result<ReleaseReport> {
    let keys: Vec<&str> = CATEGORIES.iter().map(|(key, _)| *key).collect();
    let mut buckets: Vec<Vec<String>> = vec![Vec::new(); CATEGORIES.len()];

    for message in commits {
        let classified = classify(message, &keys);
        let index = CATEGORIES
            .iter()
            .position(|(key, _)| *key == classified.category)
            .with_context(|| {
                format!(
                    "Invalid commit category '{}' from message '{message}'",
                    classified.category
                )
            })?;
        buckets[index].push(classified.rendered);
    }

    for bucket in &mut buckets {
        bucket.sort();
    }

    let sections = CATEGORIES
        .iter()
        .zip(buckets)
        .map(|(&(key, title), lines)| CategorySection { key, title, lines })
        .collect();

    Ok(ReleaseReport { sections })
}

impl ReleaseReport {
    /// The report's sections in taxonomy order.
    pub fn sections(&self) -> &[CategorySection] {
        &self.sections
    }

    /// Renders the report as a text document, headed by a link to the
    /// release the comparison started from.
    pub fn render(&self, from_tag: &str, from_url: &str) -> String {
        let mut out = format!("*Previous Release Notes:* [{from_tag}]({from_url})\n");
        out.push('\n');

        for section in &self.sections {
            out.push_str(section.title);
            out.push_str("\n\n");
            if section.lines.is_empty() {
                out.push_str("*None*\n");
            } else {
                for line in &section.lines {
                    out.push_str("* ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            out.push('\n');
        }

        out
    }
}
