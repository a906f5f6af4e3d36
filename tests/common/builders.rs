//! Test builders — ergonomic constructors for corpus records and fixture
//! corpora.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning
//! `Result`.

use evidex_core::{
    Compound, Condition, Corpus, EvidenceLevel, Study, StudyType, Therapy,
};

// ---------------------------------------------------------------------------
// StudyBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Study`] test fixtures.
///
/// # Example
///
/// ```rust
/// let study = StudyBuilder::new("s1", "Berberine and HbA1c")
///     .study_type(StudyType::Rct)
///     .evidence(EvidenceLevel::High)
///     .compound("Berberine")
///     .build();
/// ```
pub struct StudyBuilder {
    study: Study,
}

impl StudyBuilder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            study: Study {
                doi: format!("10.1000/test.{id}"),
                id,
                title: title.into(),
                abstract_text: String::new(),
                study_type: StudyType::Observational,
                evidence: EvidenceLevel::Moderate,
                year: 2020,
                journal: "Test Journal".to_string(),
                institution: "Test Institution".to_string(),
                sample_size: None,
                pmid: None,
                compounds: vec![],
                conditions: vec![],
                safety_notes: None,
            },
        }
    }

    pub fn study_type(mut self, ty: StudyType) -> Self {
        self.study.study_type = ty;
        self
    }

    pub fn evidence(mut self, level: EvidenceLevel) -> Self {
        self.study.evidence = level;
        self
    }

    pub fn year(mut self, year: u16) -> Self {
        self.study.year = year;
        self
    }

    pub fn abstract_text(mut self, text: impl Into<String>) -> Self {
        self.study.abstract_text = text.into();
        self
    }

    pub fn compound(mut self, name: impl Into<String>) -> Self {
        self.study.compounds.push(name.into());
        self
    }

    pub fn condition(mut self, name: impl Into<String>) -> Self {
        self.study.conditions.push(name.into());
        self
    }

    pub fn pmid(mut self, pmid: impl Into<String>) -> Self {
        self.study.pmid = Some(pmid.into());
        self
    }

    pub fn build(self) -> Study {
        self.study
    }
}

// ---------------------------------------------------------------------------
// Record constructors
// ---------------------------------------------------------------------------

/// Build a condition with the given tags; id is derived from the title.
pub fn condition(title: &str, description: &str, tags: &[&str]) -> Condition {
    let id = slug(title);
    Condition {
        link: format!("/condition/{id}"),
        id,
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        studies: 100,
    }
}

/// Build a therapy record; id is derived from the title.
pub fn therapy(title: &str, description: &str, tags: &[&str]) -> Therapy {
    let id = slug(title);
    Therapy {
        link: "/integrative-therapies".to_string(),
        id,
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        studies: 50,
    }
}

/// Build a compound with related-compound name references.
pub fn compound(name: &str, latin_name: &str, related: &[&str]) -> Compound {
    Compound {
        id: slug(name),
        name: name.to_string(),
        latin_name: latin_name.to_string(),
        category: "Herbal Compound".to_string(),
        studies: 100,
        description: format!("{name} research summary"),
        key_benefits: vec![],
        mechanisms: vec![],
        related_compounds: related.iter().map(|r| r.to_string()).collect(),
    }
}

fn slug(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}

// ---------------------------------------------------------------------------
// Corpus helpers
// ---------------------------------------------------------------------------

/// Assemble a corpus from record collections, panicking on invalid fixtures.
pub fn corpus_of(
    conditions: Vec<Condition>,
    compounds: Vec<Compound>,
    therapies: Vec<Therapy>,
    studies: Vec<Study>,
) -> Corpus {
    Corpus::from_records(conditions, compounds, therapies, studies)
        .expect("fixture corpus must be valid")
}

/// Build `n` studies with sequential ids and years, cycling through study
/// types, evidence levels, and the compound names given.
pub fn build_study_corpus(n: usize, compounds: &[&str]) -> Vec<Study> {
    (0..n)
        .map(|i| {
            let mut builder = StudyBuilder::new(format!("s{i}"), format!("study number {i}"))
                .study_type(StudyType::ALL[i % StudyType::ALL.len()])
                .evidence(EvidenceLevel::ALL[i % EvidenceLevel::ALL.len()])
                .year(2000 + (i % 25) as u16);
            if !compounds.is_empty() {
                builder = builder.compound(compounds[i % compounds.len()]);
            }
            builder.build()
        })
        .collect()
}
