//! # relnotes
//!
//! Generates a categorized release changelog for a GitHub repository.
//!
//! Given a "from" release tag (defaulting to the latest published release)
//! and a "to" ref (defaulting to the tip of `master`), relnotes fetches the
//! commits introduced between them, classifies each commit by the bracketed
//! tag on its first message line, and renders a grouped, deterministic
//! report.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod git;
pub mod github;
pub mod notes;

pub use crate::cli::Cli;

/// The current version of relnotes.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
