//! Corpus — the static, in-memory record store.
//!
//! [`Corpus::load`] parses the corpus snapshot embedded in the binary,
//! validates load-time invariants (unique ids, 4-digit years; enum values
//! are checked structurally by serde), and builds the derived indices the
//! query layers depend on: id→record maps per collection and a
//! case-insensitive name→compound lookup covering both display and latin
//! names. The corpus is read-only after construction — every query operation
//! is a pure function over this snapshot.

use std::collections::HashMap;

use crate::types::{Compound, Condition, Study, Therapy};

const CORPUS_SRC: &str = include_str!("data/corpus.json");

/// Load-time corpus validation failure. All variants are fatal: they mean
/// the embedded data file is corrupt, not that a query went wrong.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("malformed corpus snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate {kind} id {id:?}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("study {id:?} has out-of-range publication year {year}")]
    InvalidYear { id: String, year: u16 },
}

#[derive(serde::Deserialize)]
struct RawCorpus {
    conditions: Vec<Condition>,
    compounds: Vec<Compound>,
    therapies: Vec<Therapy>,
    studies: Vec<Study>,
}

/// The complete static collection of research records, plus derived indices.
#[derive(Debug, Clone)]
pub struct Corpus {
    conditions: Vec<Condition>,
    compounds: Vec<Compound>,
    therapies: Vec<Therapy>,
    studies: Vec<Study>,
    /// Lowercased compound name AND latin name → index into `compounds`.
    compound_names: HashMap<String, usize>,
    condition_ids: HashMap<String, usize>,
    compound_ids: HashMap<String, usize>,
    therapy_ids: HashMap<String, usize>,
    study_ids: HashMap<String, usize>,
}

impl Corpus {
    /// Parse and validate the embedded corpus snapshot.
    pub fn load() -> Result<Self, CorpusError> {
        let raw: RawCorpus = serde_json::from_str(CORPUS_SRC)?;
        Self::from_records(raw.conditions, raw.compounds, raw.therapies, raw.studies)
    }

    /// Build a corpus from explicit record collections.
    ///
    /// This is the constructor tests use for fixture corpora; [`Corpus::load`]
    /// goes through it too, so fixtures and the embedded snapshot get
    /// identical validation and indexing.
    pub fn from_records(
        conditions: Vec<Condition>,
        compounds: Vec<Compound>,
        therapies: Vec<Therapy>,
        studies: Vec<Study>,
    ) -> Result<Self, CorpusError> {
        let condition_ids = index_ids("condition", conditions.iter().map(|c| c.id.as_str()))?;
        let compound_ids = index_ids("compound", compounds.iter().map(|c| c.id.as_str()))?;
        let therapy_ids = index_ids("therapy", therapies.iter().map(|t| t.id.as_str()))?;
        let study_ids = index_ids("study", studies.iter().map(|s| s.id.as_str()))?;

        for study in &studies {
            if !(1000..=9999).contains(&study.year) {
                return Err(CorpusError::InvalidYear {
                    id: study.id.clone(),
                    year: study.year,
                });
            }
        }

        // Display name and latin name both resolve to the compound. Later
        // entries never shadow earlier ones, matching input order precedence.
        let mut compound_names = HashMap::new();
        for (idx, compound) in compounds.iter().enumerate() {
            compound_names
                .entry(compound.name.to_lowercase())
                .or_insert(idx);
            compound_names
                .entry(compound.latin_name.to_lowercase())
                .or_insert(idx);
        }

        Ok(Corpus {
            conditions,
            compounds,
            therapies,
            studies,
            compound_names,
            condition_ids,
            compound_ids,
            therapy_ids,
            study_ids,
        })
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    pub fn therapies(&self) -> &[Therapy] {
        &self.therapies
    }

    pub fn studies(&self) -> &[Study] {
        &self.studies
    }

    /// Case-insensitive lookup by display or latin name. Returns `None` on a
    /// resolution miss — soft references to absent compounds are tolerated.
    pub fn compound_by_name(&self, name: &str) -> Option<&Compound> {
        self.compound_names
            .get(&name.to_lowercase())
            .map(|&idx| &self.compounds[idx])
    }

    pub fn condition_by_id(&self, id: &str) -> Option<&Condition> {
        self.condition_ids.get(id).map(|&idx| &self.conditions[idx])
    }

    pub fn compound_by_id(&self, id: &str) -> Option<&Compound> {
        self.compound_ids.get(id).map(|&idx| &self.compounds[idx])
    }

    pub fn therapy_by_id(&self, id: &str) -> Option<&Therapy> {
        self.therapy_ids.get(id).map(|&idx| &self.therapies[idx])
    }

    pub fn study_by_id(&self, id: &str) -> Option<&Study> {
        self.study_ids.get(id).map(|&idx| &self.studies[idx])
    }
}

fn index_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>, CorpusError> {
    let mut map = HashMap::new();
    for (idx, id) in ids.enumerate() {
        if map.insert(id.to_string(), idx).is_some() {
            return Err(CorpusError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(map)
}
