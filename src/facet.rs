//! Facet filter — conjunctive narrowing of study lists.
//!
//! Each facet is independently toggleable; an unset facet imposes no
//! constraint. Set facets compose with logical AND, so the result is the
//! intersection of the individually-filtered sets. Evaluation per study
//! short-circuits on the first failing predicate.

use evidex_core::{EvidenceLevel, Study, StudyType};

/// Active facet selections for filtering studies. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyFacets {
    pub study_type: Option<StudyType>,
    pub evidence: Option<EvidenceLevel>,
    /// Matched case-insensitively against each entry in a study's
    /// associated-compound list.
    pub compound: Option<String>,
}

impl StudyFacets {
    pub fn is_unconstrained(&self) -> bool {
        self.study_type.is_none() && self.evidence.is_none() && self.compound.is_none()
    }

    /// Whether a single study satisfies every set facet.
    pub fn accepts(&self, study: &Study) -> bool {
        if let Some(ty) = self.study_type {
            if study.study_type != ty {
                return false;
            }
        }
        if let Some(level) = self.evidence {
            if study.evidence != level {
                return false;
            }
        }
        if let Some(compound) = &self.compound {
            let wanted = compound.to_lowercase();
            if !study.compounds.iter().any(|c| c.to_lowercase() == wanted) {
                return false;
            }
        }
        true
    }
}

/// Narrow `studies` to those satisfying `facets`, preserving input order.
pub fn apply(studies: &[Study], facets: &StudyFacets) -> Vec<Study> {
    studies
        .iter()
        .filter(|s| facets.accepts(s))
        .cloned()
        .collect()
}
