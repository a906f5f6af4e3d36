//! Evidence tier mapper — display tier for each evidence level.
//!
//! Pure total mapping over the closed [`EvidenceLevel`] enum; an
//! unrecognized level is a load-time data error caught by serde, so no
//! fallback branch exists here. Tier ranks order high > moderate >
//! preliminary and drive both badge styling and evidence-based sorting.

use evidex_core::EvidenceLevel;
use serde::Serialize;

/// Display tier for an evidence level: badge label, sort rank, and the
/// style class key consumers map to their own visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvidenceTier {
    pub label: &'static str,
    /// Higher is stronger: preliminary 1, moderate 2, high 3.
    pub rank: u8,
    pub class_key: &'static str,
}

/// Map an evidence level to its display tier.
pub fn tier(level: EvidenceLevel) -> EvidenceTier {
    match level {
        EvidenceLevel::High => EvidenceTier {
            label: "Strong Evidence",
            rank: 3,
            class_key: "emerald",
        },
        EvidenceLevel::Moderate => EvidenceTier {
            label: "Moderate Evidence",
            rank: 2,
            class_key: "amber",
        },
        EvidenceLevel::Preliminary => EvidenceTier {
            label: "Preliminary",
            rank: 1,
            class_key: "slate",
        },
    }
}
