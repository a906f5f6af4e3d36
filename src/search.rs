//! Search orchestrator — the public query surface over an immutable corpus.
//!
//! [`Engine`] composes the matcher, facet filter, classifier, and tier
//! mapper into the operations the presentation layer consumes. Every
//! operation is a pure function of its arguments plus the corpus snapshot;
//! the engine keeps no query state between calls. Callers own current
//! query/filter/page state and re-invoke on each change.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use evidex_core::{Compound, Condition, Corpus, SearchItem, Study, StudyType};
use serde::Serialize;

use crate::classify::{self, ALL_CATEGORY};
use crate::facet::{self, StudyFacets};
use crate::matcher::{self, MatchRank};

/// A single search result: the projected item plus its match rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub item: SearchItem,
    pub rank: MatchRank,
}

/// One page of a result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub page_items: Vec<T>,
    pub total_pages: usize,
}

/// Outcome of resolving a list of soft name references: the compounds that
/// resolved, and the names that did not. Misses are reported, never errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    pub found: Vec<&'a Compound>,
    pub missing: Vec<String>,
}

/// Sort orders for condition listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    TitleAsc,
    TitleDesc,
    StudiesDesc,
    StudiesAsc,
}

/// The search engine: an immutable corpus plus precomputed classification.
///
/// Construction classifies every condition once — the corpus never changes,
/// so this doubles as the classifier memo consulted by category counting
/// and category filtering.
pub struct Engine {
    corpus: Corpus,
    condition_categories: HashMap<String, BTreeSet<&'static str>>,
}

impl Engine {
    pub fn new(corpus: Corpus) -> Self {
        let condition_categories = corpus
            .conditions()
            .iter()
            .map(|c| (c.id.clone(), classify::categorize(c)))
            .collect();
        tracing::debug!(
            conditions = corpus.conditions().len(),
            compounds = corpus.compounds().len(),
            therapies = corpus.therapies().len(),
            studies = corpus.studies().len(),
            "engine initialised"
        );
        Engine {
            corpus,
            condition_categories,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Free-text search across all four collections, projected to
    /// [`SearchItem`]. Results are ordered best rank first; within a rank,
    /// input order is preserved (stable sort — reproducible fixtures depend
    /// on this).
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let mut hits: Vec<SearchHit> = Vec::new();
        for item in self.all_items() {
            if let Some(rank) = matcher::matches(query, &item) {
                hits.push(SearchHit { item, rank });
            }
        }
        hits.sort_by_key(|h| h.rank);
        hits
    }

    /// Narrow `base` to the studies satisfying `facets`. See [`facet::apply`].
    pub fn filter_studies(&self, base: &[Study], facets: &StudyFacets) -> Vec<Study> {
        facet::apply(base, facets)
    }

    /// Categories for a corpus condition, from the construction-time memo.
    pub fn categories_for(&self, condition_id: &str) -> Option<&BTreeSet<&'static str>> {
        self.condition_categories.get(condition_id)
    }

    /// Per-category condition counts for rendering category pills.
    ///
    /// Includes the `all` pseudo-category (total condition count) and the
    /// `other` fallback where populated; real categories appear only when
    /// at least one condition matched them.
    pub fn categorize_all(&self) -> BTreeMap<&'static str, usize> {
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        counts.insert(ALL_CATEGORY, self.corpus.conditions().len());
        for categories in self.condition_categories.values() {
            for &id in categories {
                *counts.entry(id).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Conditions belonging to `category`, in corpus order. The `all`
    /// pseudo-category returns every condition.
    pub fn conditions_in_category(&self, category: &str) -> Vec<&Condition> {
        self.corpus
            .conditions()
            .iter()
            .filter(|c| {
                category == ALL_CATEGORY
                    || self
                        .condition_categories
                        .get(&c.id)
                        .is_some_and(|cats| cats.contains(category))
            })
            .collect()
    }

    /// Deduplicated, sorted compound names mentioned by any study —
    /// feeds the compound facet dropdown.
    pub fn compound_names(&self) -> Vec<String> {
        let names: BTreeSet<String> = self
            .corpus
            .studies()
            .iter()
            .flat_map(|s| s.compounds.iter().cloned())
            .collect();
        names.into_iter().collect()
    }

    /// Studies associated with a compound, by case-insensitive name or
    /// latin-name equality, or mutual name containment ("Curcumin" matches
    /// a study tagged "Curcumin Extract" and vice versa).
    pub fn studies_for_compound(&self, compound: &Compound) -> Vec<&Study> {
        let name = compound.name.to_lowercase();
        let latin = compound.latin_name.to_lowercase();
        self.corpus
            .studies()
            .iter()
            .filter(|study| {
                study.compounds.iter().any(|c| {
                    let c = c.to_lowercase();
                    c == name || c == latin || name.contains(&c) || c.contains(&name)
                })
            })
            .collect()
    }

    /// Resolve a compound's related-compound name list through the corpus
    /// name index. Unresolved names are returned in `missing` rather than
    /// dropped — the references are soft by design.
    pub fn related_compounds(&self, compound: &Compound) -> Resolved<'_> {
        let mut found = Vec::new();
        let mut missing = Vec::new();
        for name in &compound.related_compounds {
            match self.corpus.compound_by_name(name) {
                Some(related) => found.push(related),
                None => missing.push(name.clone()),
            }
        }
        Resolved { found, missing }
    }

    /// Study counts per type, in evidence-hierarchy order — feeds the
    /// distribution chart.
    pub fn study_type_counts(&self) -> Vec<(StudyType, usize)> {
        StudyType::ALL
            .iter()
            .map(|&ty| {
                let count = self
                    .corpus
                    .studies()
                    .iter()
                    .filter(|s| s.study_type == ty)
                    .count();
                (ty, count)
            })
            .collect()
    }

    /// Publication years of all studies, ascending — feeds the timeline.
    pub fn publication_years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.corpus.studies().iter().map(|s| s.year).collect();
        years.sort_unstable();
        years
    }

    /// Project every record to a [`SearchItem`], in stable corpus order:
    /// conditions, compounds, therapies, studies.
    fn all_items(&self) -> Vec<SearchItem> {
        let corpus = &self.corpus;
        let mut items = Vec::with_capacity(
            corpus.conditions().len()
                + corpus.compounds().len()
                + corpus.therapies().len()
                + corpus.studies().len(),
        );
        items.extend(corpus.conditions().iter().map(SearchItem::from));
        items.extend(corpus.compounds().iter().map(SearchItem::from));
        items.extend(corpus.therapies().iter().map(SearchItem::from));
        items.extend(corpus.studies().iter().map(SearchItem::from));
        items
    }
}

/// Sort conditions in place. Title comparisons are plain byte-wise `str`
/// ordering; the corpus titles are ASCII.
pub fn sort_conditions(conditions: &mut [Condition], order: SortOrder) {
    match order {
        SortOrder::TitleAsc => conditions.sort_by(|a, b| a.title.cmp(&b.title)),
        SortOrder::TitleDesc => conditions.sort_by(|a, b| b.title.cmp(&a.title)),
        SortOrder::StudiesDesc => conditions.sort_by(|a, b| b.studies.cmp(&a.studies)),
        SortOrder::StudiesAsc => conditions.sort_by(|a, b| a.studies.cmp(&b.studies)),
    }
}

/// Slice out one page of `items`.
///
/// `page` is 1-based. `total_pages = ceil(len / page_size)`. A page outside
/// `1..=total_pages` yields an empty `page_items` — out-of-range requests
/// are NOT clamped to the last page. `page_size` of zero yields an empty
/// zero-page result rather than dividing by zero.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    if page_size == 0 {
        return Page {
            page_items: Vec::new(),
            total_pages: 0,
        };
    }
    let total_pages = items.len().div_ceil(page_size);
    if page == 0 || page > total_pages {
        return Page {
            page_items: Vec::new(),
            total_pages,
        };
    }
    let start = (page - 1) * page_size;
    let end = usize::min(start + page_size, items.len());
    Page {
        page_items: items[start..end].to_vec(),
        total_pages,
    }
}
