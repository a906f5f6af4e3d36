//! Domain-specific assertions for evidex harnesses.
//!
//! These wrap plain panics with context-rich failure messages that make it
//! clear *which* engine invariant was violated and on which record.

use evidex_core::Study;

// ---------------------------------------------------------------------------
// Search result assertions
// ---------------------------------------------------------------------------

/// Assert that search hits are ordered best-rank-first: rank values must be
/// non-decreasing through the result list.
///
/// ```rust
/// assert_rank_ordered!(engine.search("curcumin"));
/// ```
#[macro_export]
macro_rules! assert_rank_ordered {
    ($hits:expr) => {{
        let hits: &[evidex::SearchHit] = &$hits;
        for window in hits.windows(2) {
            if window[0].rank > window[1].rank {
                panic!(
                    "assert_rank_ordered! failed: {:?} ({:?}) appears before {:?} ({:?})",
                    window[0].item.title, window[0].rank, window[1].item.title, window[1].rank,
                );
            }
        }
    }};
}

/// Assert that every study in a result set satisfies a predicate.
///
/// ```rust
/// assert_studies_all!(results, |s| s.study_type == StudyType::Rct);
/// ```
#[macro_export]
macro_rules! assert_studies_all {
    ($results:expr, $pred:expr) => {{
        let results: &[evidex_core::Study] = &$results;
        let pred: fn(&evidex_core::Study) -> bool = $pred;
        let failing: Vec<_> = results.iter().filter(|s| !pred(s)).collect();
        if !failing.is_empty() {
            panic!(
                "assert_studies_all! failed: {} of {} studies did not satisfy predicate: {:?}",
                failing.len(),
                results.len(),
                failing.iter().map(|s| &s.id).collect::<Vec<_>>(),
            );
        }
    }};
}

/// Assert that a result set contains a study with the given id.
#[macro_export]
macro_rules! assert_studies_contain {
    ($results:expr, $id:expr) => {{
        let results: &[evidex_core::Study] = &$results;
        let id: &str = $id;
        if !results.iter().any(|s| s.id == id) {
            panic!(
                "assert_studies_contain! failed: study {:?} not in results.\n  Present: {:?}",
                id,
                results.iter().map(|s| &s.id).collect::<Vec<_>>(),
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Set-relation helpers
// ---------------------------------------------------------------------------

/// Assert that `narrow` is a subset of `broad`, compared by study id. Used
/// by the monotonic-narrowing checks: adding a facet must never surface a
/// study the looser facet set excluded.
pub fn assert_study_subset(narrow: &[Study], broad: &[Study]) {
    for study in narrow {
        assert!(
            broad.iter().any(|s| s.id == study.id),
            "study {:?} present in narrowed results but absent from the broader set",
            study.id,
        );
    }
}
