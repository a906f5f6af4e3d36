//! Core types for evidex-core.
//!
//! This module defines the record types that make up the research corpus —
//! [`Condition`], [`Compound`], [`Therapy`], and [`Study`] — together with
//! the closed enumerations [`StudyType`] and [`EvidenceLevel`] and the
//! [`SearchItem`] projection that the text matcher operates on.

use serde::{Deserialize, Serialize};

/// A health condition record.
///
/// Category membership is *derived* by the classifier from title,
/// description, and tags; it is never stored on the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Stable identifier, unique within the condition collection.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-form tag strings used by the matcher and the classifier.
    pub tags: Vec<String>,
    /// Number of studies associated with this condition.
    pub studies: u32,
    /// Site-relative link target for this record.
    pub link: String,
}

/// A natural compound record.
///
/// `related_compounds` holds display names, not ids — a soft reference
/// resolved through the corpus name index at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    /// Stable identifier, unique within the compound collection.
    pub id: String,
    pub name: String,
    /// Latin / scientific name ("Withania somnifera", "Curcuma longa", …).
    pub latin_name: String,
    /// Display category label ("Adaptogen", "Functional Mushroom", …).
    pub category: String,
    /// Number of studies associated with this compound.
    pub studies: u32,
    pub description: String,
    pub key_benefits: Vec<String>,
    pub mechanisms: Vec<String>,
    /// Names of related compounds. May reference compounds absent from the
    /// corpus; resolution misses are tolerated, not errors.
    pub related_compounds: Vec<String>,
}

/// An integrative therapy record. Same shape as [`Condition`] but kept as a
/// distinct collection so consumers can browse the two separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Therapy {
    /// Stable identifier, unique within the therapy collection.
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub studies: u32,
    pub link: String,
}

/// A curated research study record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Study {
    /// Stable identifier, unique within the study collection.
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub study_type: StudyType,
    pub evidence: EvidenceLevel,
    /// 4-digit publication year, usable for chronological sorting.
    pub year: u16,
    pub journal: String,
    pub institution: String,
    /// Human-readable sample size ("n=120"), where applicable.
    #[serde(default)]
    pub sample_size: Option<String>,
    /// PubMed identifier, where the study is indexed.
    #[serde(default)]
    pub pmid: Option<String>,
    pub doi: String,
    /// Names of compounds this study concerns (soft references).
    #[serde(default)]
    pub compounds: Vec<String>,
    /// Names of conditions this study concerns (soft references).
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub safety_notes: Option<String>,
}

impl Study {
    /// External link for the study: PubMed when a PMID exists, DOI otherwise.
    pub fn source_url(&self) -> String {
        match &self.pmid {
            Some(pmid) => format!("https://pubmed.ncbi.nlm.nih.gov/{pmid}/"),
            None => format!("https://doi.org/{}", self.doi),
        }
    }
}

/// Study methodology, drawn from a closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudyType {
    InVitro,
    Animal,
    Observational,
    Rct,
    MetaAnalysis,
}

impl StudyType {
    /// Every variant, in evidence-hierarchy order (weakest first).
    pub const ALL: [StudyType; 5] = [
        StudyType::InVitro,
        StudyType::Animal,
        StudyType::Observational,
        StudyType::Rct,
        StudyType::MetaAnalysis,
    ];

    /// Display label for filter dropdowns and badges.
    pub fn label(&self) -> &'static str {
        match self {
            StudyType::InVitro => "In Vitro",
            StudyType::Animal => "Animal",
            StudyType::Observational => "Observational",
            StudyType::Rct => "RCT",
            StudyType::MetaAnalysis => "Meta-Analysis",
        }
    }
}

impl std::fmt::Display for StudyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudyType::InVitro => write!(f, "in-vitro"),
            StudyType::Animal => write!(f, "animal"),
            StudyType::Observational => write!(f, "observational"),
            StudyType::Rct => write!(f, "rct"),
            StudyType::MetaAnalysis => write!(f, "meta-analysis"),
        }
    }
}

impl std::str::FromStr for StudyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-vitro" => Ok(StudyType::InVitro),
            "animal" => Ok(StudyType::Animal),
            "observational" => Ok(StudyType::Observational),
            "rct" => Ok(StudyType::Rct),
            "meta-analysis" => Ok(StudyType::MetaAnalysis),
            other => Err(format!("unknown study type {other:?}")),
        }
    }
}

/// Evidentiary strength of a study, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceLevel {
    Preliminary,
    Moderate,
    High,
}

impl EvidenceLevel {
    /// Every variant, strongest first (badge/legend display order).
    pub const ALL: [EvidenceLevel; 3] = [
        EvidenceLevel::High,
        EvidenceLevel::Moderate,
        EvidenceLevel::Preliminary,
    ];
}

impl std::fmt::Display for EvidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvidenceLevel::Preliminary => write!(f, "preliminary"),
            EvidenceLevel::Moderate => write!(f, "moderate"),
            EvidenceLevel::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for EvidenceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preliminary" => Ok(EvidenceLevel::Preliminary),
            "moderate" => Ok(EvidenceLevel::Moderate),
            "high" => Ok(EvidenceLevel::High),
            other => Err(format!("unknown evidence level {other:?}")),
        }
    }
}

/// Which collection a [`SearchItem`] was projected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Condition,
    Compound,
    Therapy,
    Research,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Condition => write!(f, "condition"),
            ItemKind::Compound => write!(f, "compound"),
            ItemKind::Therapy => write!(f, "therapy"),
            ItemKind::Research => write!(f, "research"),
        }
    }
}

/// Normalized projection of any record type, consumed by the text matcher.
///
/// All four collections are adapted to this shape before matching, so the
/// matcher never needs to know which collection an item came from. The shape
/// is also compatible with externally fetched article records (title /
/// description / link), so consumers can render both through one path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    pub kind: ItemKind,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub studies: Option<u32>,
    pub link: String,
}

impl From<&Condition> for SearchItem {
    fn from(c: &Condition) -> Self {
        SearchItem {
            kind: ItemKind::Condition,
            title: c.title.clone(),
            description: c.description.clone(),
            tags: c.tags.clone(),
            studies: Some(c.studies),
            link: c.link.clone(),
        }
    }
}

impl From<&Therapy> for SearchItem {
    fn from(t: &Therapy) -> Self {
        SearchItem {
            kind: ItemKind::Therapy,
            title: t.title.clone(),
            description: t.description.clone(),
            tags: t.tags.clone(),
            studies: Some(t.studies),
            link: t.link.clone(),
        }
    }
}

impl From<&Compound> for SearchItem {
    fn from(c: &Compound) -> Self {
        SearchItem {
            kind: ItemKind::Compound,
            title: c.name.clone(),
            description: c.description.clone(),
            // Compounds carry no free-form tags; the scientific name and
            // category label stand in so queries like "adaptogen" still hit.
            tags: vec![c.latin_name.clone(), c.category.clone()],
            studies: Some(c.studies),
            link: format!("/compound/{}", c.id),
        }
    }
}

impl From<&Study> for SearchItem {
    fn from(s: &Study) -> Self {
        let mut tags = s.compounds.clone();
        tags.extend(s.conditions.iter().cloned());
        SearchItem {
            kind: ItemKind::Research,
            title: s.title.clone(),
            description: s.abstract_text.clone(),
            tags,
            studies: None,
            link: s.source_url(),
        }
    }
}
