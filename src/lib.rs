//! evidex — research search & classification engine.
//!
//! Free-text search, facet filtering, category classification, and evidence
//! tiering over a static corpus of integrative-medicine research records.
//! This crate exposes the engine layers as public modules so that
//! integration tests and downstream consumers can import them directly.
//!
//! # Architecture
//!
//! ```text
//! Corpus ──► Matcher ──┐
//!        ──► Classify ─┼──► Engine (search / filter / categorize / paginate)
//!        ──► Evidence ─┘
//!              Facet ──┘
//! ```
//!
//! The corpus (from `evidex-core`) is loaded once and never mutated; every
//! layer above it is a pure, synchronous function over that snapshot. There
//! is no I/O and no shared mutable state anywhere in the engine.

pub mod classify;
pub mod evidence;
pub mod facet;
pub mod matcher;
pub mod search;

pub use facet::StudyFacets;
pub use matcher::MatchRank;
pub use search::{paginate, sort_conditions, Engine, Page, Resolved, SearchHit, SortOrder};
