//! Text matcher — decides whether a record matches a free-text query and
//! assigns a coarse relevance rank.
//!
//! Ranking is a fixed ladder rather than a scoring model: the corpus is
//! small and deterministic ordering matters more than nuanced relevance.
//! The first satisfied rung wins.
//!
//! | Rank | Rule |
//! |------|------|
//! | [`MatchRank::Exact`] | query equals the title |
//! | [`MatchRank::TitlePrefix`] | query is a prefix of the title |
//! | [`MatchRank::Substring`] | query occurs in title, description, or any tag |
//! | [`MatchRank::TokenSet`] | every query token occurs somewhere in the record |
//!
//! All comparisons are locale-invariant simple-lowercase. An empty or
//! whitespace-only query matches nothing — consumers render an empty state
//! before the user has typed anything.

use evidex_core::SearchItem;
use serde::Serialize;

/// Match quality, best first. The derived `Ord` makes `Exact` sort before
/// `TokenSet`, which is exactly the output order the engine wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchRank {
    /// Case-insensitive equality of query and title.
    Exact,
    /// Query is a prefix of the title.
    TitlePrefix,
    /// Query occurs as a substring of title, description, or a tag.
    Substring,
    /// Every whitespace-delimited query token occurs as a substring of the
    /// record's combined text. Lets "curcumin inflammation" match records
    /// containing both words non-contiguously.
    TokenSet,
}

impl MatchRank {
    /// Numeric rank, 0 (best) through 3.
    pub fn as_u8(self) -> u8 {
        match self {
            MatchRank::Exact => 0,
            MatchRank::TitlePrefix => 1,
            MatchRank::Substring => 2,
            MatchRank::TokenSet => 3,
        }
    }
}

/// Test `item` against `query`, returning the best satisfied rank or `None`.
pub fn matches(query: &str, item: &SearchItem) -> Option<MatchRank> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    let title = item.title.to_lowercase();
    if title == query {
        return Some(MatchRank::Exact);
    }
    if title.starts_with(&query) {
        return Some(MatchRank::TitlePrefix);
    }

    let description = item.description.to_lowercase();
    if title.contains(&query)
        || description.contains(&query)
        || item.tags.iter().any(|t| t.to_lowercase().contains(&query))
    {
        return Some(MatchRank::Substring);
    }

    // Token-AND over the concatenated record text. Tokens may land in
    // different fields; the single-space join keeps field boundaries from
    // fusing words together.
    let mut haystack = title;
    haystack.push(' ');
    haystack.push_str(&description);
    for tag in &item.tags {
        haystack.push(' ');
        haystack.push_str(&tag.to_lowercase());
    }
    if query.split_whitespace().all(|token| haystack.contains(token)) {
        return Some(MatchRank::TokenSet);
    }

    None
}
