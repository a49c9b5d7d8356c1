//! Commit-message classification.
//!
//! Commit authors tag the first line of a message with a bracketed prefix
//! such as `[Feature] ...` or `[Bugfix:Testing] ...`. The tags are free-form
//! and historically inconsistent, so classification runs a cascade of
//! corrections that absorbs the known misspellings and synonyms before
//! deriving the release-note category.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a `[Type]` or `[Type:Subtype]` prefix followed by the message body.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([a-zA-Z0-9/ ]+):?([a-zA-Z0-9/ ]*)\](.*)").unwrap());

/// A commit message after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCommit {
    /// The message rebuilt from the corrected tag, `[Type:Subtype] body`.
    pub rendered: String,
    /// Lower-case release-note category key.
    pub category: String,
}

/// The bracketed prefix split into its segments.
struct ParsedTag {
    tag_type: String,
    subtype: String,
    body: String,
}

/// Splits the first line against the bracketed-tag pattern.
///
/// Spaces inside the type and subtype segments are stripped, so `[Bug fix]`
/// reads as `Bugfix`.
fn parse_tag(line: &str) -> Option<ParsedTag> {
    let caps = TAG_PATTERN.captures(line)?;
    Some(ParsedTag {
        tag_type: caps[1].replace(' ', ""),
        subtype: caps[2].replace(' ', ""),
        body: caps[3].trim().to_string(),
    })
}

/// Classifies one raw commit message.
///
/// Only the first line of `message` is considered. `known_keys` is the
/// lower-case set of valid category keys; a type tag outside it collapses to
/// the subtype, or to `Bugfix` when there is none. A first line that does not
/// carry a bracketed tag at all falls back to `Bugfix` with the line kept
/// verbatim as the body.
pub fn classify(message: &str, known_keys: &[&str]) -> ClassifiedCommit {
    let first_line = message.lines().next().unwrap_or("").trim();

    let Some(parsed) = parse_tag(first_line) else {
        return ClassifiedCommit {
            rendered: format!("[Bugfix] {first_line}"),
            category: "bugfix".to_string(),
        };
    };

    let ParsedTag {
        mut tag_type,
        mut subtype,
        body,
    } = parsed;
    let mut category_override = None;

    if subtype.ends_with("IU") {
        // Trailing "IU" is a reversed typo for "UI". The truncation length
        // is derived from the type segment, not the subtype; historical
        // output depends on that arithmetic, so it stays.
        let end = tag_type.len().saturating_sub(2).min(subtype.len());
        subtype = format!("{}UI", &subtype[..end]);
    } else if subtype.eq_ignore_ascii_case("submissions") {
        subtype = "Submission".to_string();
    }

    let lower_type = tag_type.to_lowercase();
    if lower_type == "ui" || lower_type == "ui/ux" {
        tag_type = "Feature".to_string();
        if subtype.is_empty() {
            subtype = "UI/UX".to_string();
        }
    } else if matches!(
        subtype.to_lowercase().as_str(),
        "testing" | "test" | "tests" | "vagrant"
    ) {
        subtype = "Testing".to_string();
    }

    let lower_type = tag_type.to_lowercase();
    if lower_type == "devdependency" || lower_type == "dependencydev" {
        tag_type = "DevDependency".to_string();
        category_override = Some("dependency".to_string());
    } else if !known_keys.contains(&lower_type.as_str()) {
        tag_type = if subtype.is_empty() {
            "Bugfix".to_string()
        } else {
            subtype.clone()
        };
    } else if subtype.eq_ignore_ascii_case("testing") {
        subtype = std::mem::replace(&mut tag_type, "Testing".to_string());
    }

    let category = category_override.unwrap_or_else(|| tag_type.to_lowercase());

    let rendered = if subtype.is_empty() {
        format!("[{tag_type}] {body}")
    } else {
        format!("[{tag_type}:{subtype}] {body}")
    };

    ClassifiedCommit { rendered, category }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const KNOWN: &[&str] = &[
        "security",
        "breaking",
        "feature",
        "vpat",
        "bugfix",
        "refactor",
        "dependency",
        "testing",
        "documentation",
    ];

    fn check(message: &str, rendered: &str, category: &str) {
        let result = classify(message, KNOWN);
        assert_eq!(result.rendered, rendered, "message: {message:?}");
        assert_eq!(result.category, category, "message: {message:?}");
    }

    #[test]
    fn plain_tag_passes_through() {
        check("[Feature] Add widget", "[Feature] Add widget", "feature");
    }

    #[test]
    fn untagged_message_falls_back_to_bugfix() {
        check("Fix the thing", "[Bugfix] Fix the thing", "bugfix");
    }

    #[test]
    fn fallback_trims_surrounding_whitespace() {
        check("   loose commit   ", "[Bugfix] loose commit", "bugfix");
    }

    #[test]
    fn only_first_line_is_used() {
        check(
            "[Documentation] Update install guide\n\nLong body here.",
            "[Documentation] Update install guide",
            "documentation",
        );
    }

    #[test]
    fn spaces_inside_tag_segments_are_stripped() {
        check("[Bug fix] broken link", "[Bugfix] broken link", "bugfix");
    }

    #[test]
    fn ui_type_becomes_feature_with_default_subtype() {
        check("[UI] Fix button", "[Feature:UI/UX] Fix button", "feature");
    }

    #[test]
    fn ui_ux_type_keeps_existing_subtype() {
        check(
            "[UI/UX:Gradeable] polish table",
            "[Feature:Gradeable] polish table",
            "feature",
        );
    }

    #[test]
    fn reversed_iu_typo_is_corrected() {
        // type "Bugfix" is 6 chars, so the subtype is cut at 4 before "UI"
        // is re-appended.
        check(
            "[Bugfix:SiteIU] fix layout",
            "[Bugfix:SiteUI] fix layout",
            "bugfix",
        );
    }

    #[test]
    fn submissions_subtype_is_singularized() {
        check(
            "[Feature:Submissions] allow zip upload",
            "[Feature:Submission] allow zip upload",
            "feature",
        );
    }

    #[test]
    fn testing_subtype_swaps_roles_with_type() {
        check(
            "[Bugfix:Testing] flaky test",
            "[Testing:Bugfix] flaky test",
            "testing",
        );
    }

    #[test]
    fn test_like_subtypes_normalize_then_swap() {
        check(
            "[Refactor:Vagrant] update box",
            "[Testing:Refactor] update box",
            "testing",
        );
        check(
            "[Feature:tests] cover parser",
            "[Testing:Feature] cover parser",
            "testing",
        );
    }

    #[test]
    fn dev_dependency_routes_to_dependency_category() {
        check(
            "[DevDependency] bump lib",
            "[DevDependency] bump lib",
            "dependency",
        );
        check(
            "[dependencydev] bump other lib",
            "[DevDependency] bump other lib",
            "dependency",
        );
    }

    #[test]
    fn unknown_type_collapses_to_bugfix() {
        check("[Chore] tidy scripts", "[Bugfix] tidy scripts", "bugfix");
    }

    #[test]
    fn unknown_type_with_subtype_takes_subtype() {
        check(
            "[Chore:Refactor] tidy scripts",
            "[Refactor:Refactor] tidy scripts",
            "refactor",
        );
    }

    #[test]
    fn unknown_category_leaks_out_for_aggregation_to_reject() {
        let result = classify("[Chore:Widgets] odd tag", KNOWN);
        assert_eq!(result.category, "widgets");
    }

    #[test]
    fn empty_message_falls_back_to_bugfix() {
        check("", "[Bugfix] ", "bugfix");
    }
}
