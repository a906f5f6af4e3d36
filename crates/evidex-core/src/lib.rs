//! evidex-core — core data model and record store for evidex.
//!
//! This crate owns everything below the query layers: the record types
//! shared across the engine, the [`Corpus`] snapshot with its load-time
//! validation and derived indices, and application configuration.
//!
//! # Architecture
//!
//! ```text
//! Corpus ──► Matcher / Classifier / Tier Mapper ──► Facet Filter ──► Engine
//! ```
//!
//! The corpus is built once at startup and never mutated; every layer above
//! it is a pure function over the snapshot.

pub mod config;
pub mod corpus;
pub mod types;

pub use corpus::{Corpus, CorpusError};
pub use types::{
    Compound, Condition, EvidenceLevel, ItemKind, SearchItem, Study, StudyType, Therapy,
};
