//! Fixture corpora used across harnesses.
//!
//! `small_corpus` is hand-assembled so that each harness can make exact
//! assertions about ids and ordering. Harnesses that only need realistic
//! data load the embedded snapshot through `Corpus::load` instead.

use evidex_core::{Corpus, EvidenceLevel, StudyType};

use super::builders::*;

/// A compact corpus covering all four collections:
///
/// - three conditions (autoimmune, metabolic, and one matching no category)
/// - two compounds ("Curcumin", "Berberine"; Curcumin relates to the absent
///   "Boswellia")
/// - one therapy ("Acupuncture")
/// - four studies (one RCT + one in-vitro for Curcumin, one RCT for
///   Berberine, one meta-analysis with no compound)
pub fn small_corpus() -> Corpus {
    let conditions = vec![
        condition(
            "Rheumatoid Arthritis",
            "Autoimmune joint inflammation research",
            &["autoimmune", "joint"],
        ),
        condition(
            "Metabolic Disorders",
            "Diabetes and blood sugar research",
            &["diabetes", "blood sugar"],
        ),
        condition("Hiccups", "Involuntary diaphragm contractions", &[]),
    ];
    let compounds = vec![
        compound("Curcumin", "Curcuma longa", &["Berberine", "Boswellia"]),
        compound("Berberine", "Berberis vulgaris", &["Curcumin"]),
    ];
    let therapies = vec![therapy(
        "Acupuncture",
        "Fine-needle stimulation for pain",
        &["pain", "tcm"],
    )];
    let studies = vec![
        StudyBuilder::new("curcumin-rct", "Curcumin in Active Rheumatoid Arthritis")
            .study_type(StudyType::Rct)
            .evidence(EvidenceLevel::High)
            .year(2021)
            .abstract_text("Randomized controlled trial of curcumin on inflammation markers")
            .compound("Curcumin")
            .condition("Rheumatoid Arthritis")
            .pmid("11111111")
            .build(),
        StudyBuilder::new("curcumin-vitro", "Curcumin Modulates NF-kB In Vitro")
            .study_type(StudyType::InVitro)
            .evidence(EvidenceLevel::Preliminary)
            .year(2017)
            .abstract_text("Cell-line characterization of curcumin signaling effects")
            .compound("Curcumin")
            .build(),
        StudyBuilder::new("berberine-rct", "Berberine and Glycemic Control")
            .study_type(StudyType::Rct)
            .evidence(EvidenceLevel::Moderate)
            .year(2022)
            .abstract_text("Randomized trial of berberine on fasting glucose and HbA1c")
            .compound("Berberine")
            .condition("Metabolic Disorders")
            .build(),
        StudyBuilder::new("acupuncture-meta", "Acupuncture for Chronic Pain: Meta-Analysis")
            .study_type(StudyType::MetaAnalysis)
            .evidence(EvidenceLevel::High)
            .year(2018)
            .abstract_text("Pooled analysis of acupuncture trials for chronic pain")
            .build(),
    ];
    corpus_of(conditions, compounds, therapies, studies)
}
