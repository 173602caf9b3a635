//! Author selection.

use std::collections::BTreeSet;

use ahash::AHashSet;
use log::{info, warn};

use crate::corpus::work::Work;

/// Keep the works whose author exactly matches one of `authors`.
///
/// No script conversion happens here, so traditional and simplified
/// spellings must both be listed to match both.
pub fn filter_works_by_author<S: AsRef<str>>(works: Vec<Work>, authors: &[S]) -> Vec<Work> {
    if works.is_empty() {
        return works;
    }

    let targets: AHashSet<&str> = authors.iter().map(AsRef::as_ref).collect();
    let filtered: Vec<Work> = works
        .into_iter()
        .filter(|work| targets.contains(work.author.as_str()))
        .collect();

    let found: BTreeSet<&str> = filtered.iter().map(|w| w.author.as_str()).collect();
    info!("Selected {} works by the configured authors", filtered.len());
    if found.is_empty() {
        warn!("No works matched the configured authors; check the author list or the corpus");
    } else {
        info!("Authors found: {}", found.into_iter().collect::<Vec<_>>().join(", "));
    }

    filtered
}
