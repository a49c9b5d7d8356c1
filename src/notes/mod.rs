//! Release-note classification and report building.

pub mod classify;
pub mod report;

pub use classify::{classify, ClassifiedCommit};
pub use report::{aggregate, CategorySection, ReleaseReport, CATEGORIES};
