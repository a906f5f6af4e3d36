//! Category classifier — keyword-heuristic topical categories for conditions.
//!
//! Categories come from a fixed, hand-authored vocabulary: each category id
//! maps to a list of lowercase keyword substrings. A condition belongs to a
//! category when *any* keyword occurs as a substring of its concatenated
//! title + description + tags. Matching is deliberately permissive —
//! substring over the whole concatenation, not whole-word — which keeps the
//! small curated keyword lists effective and the per-category counts stable.
//!
//! A condition matching no category falls back to the `"other"` bucket, so
//! `categorize` never returns an empty set. The `"all"` pseudo-category is
//! a counting artifact (total condition count) and never matches directly.

use std::collections::BTreeSet;

use evidex_core::Condition;

/// Pseudo-category representing the whole condition collection.
pub const ALL_CATEGORY: &str = "all";
/// Fallback bucket for conditions matching no real category.
pub const OTHER_CATEGORY: &str = "other";

/// A topical category: display label plus its keyword list.
pub struct Category {
    pub label: &'static str,
    /// Lowercase substrings; any single hit places a condition in the category.
    pub keywords: &'static [&'static str],
}

/// Category ids in canonical display order. Excludes the `all` and `other`
/// pseudo-categories.
pub const CATEGORY_IDS: &[&str] = &[
    "autoimmune",
    "cancer",
    "cardiovascular",
    "digestive",
    "hormonal",
    "infections",
    "longevity",
    "mental-health",
    "metabolic",
    "neurological",
    "pain",
    "respiratory",
    "skin",
    "urinary",
    "womens-health",
    "mens-health",
    "eye",
];

/// The controlled vocabulary, keyed by category id.
pub static CATEGORY_TABLE: phf::Map<&'static str, Category> = phf::phf_map! {
    "autoimmune" => Category {
        label: "Autoimmune",
        keywords: &["autoimmune", "lupus", "sle", "rheumatoid", "scleroderma", "sjogrens", "myasthenia"],
    },
    "cancer" => Category {
        label: "Cancer & Oncology",
        keywords: &["cancer", "oncology", "tumor"],
    },
    "cardiovascular" => Category {
        label: "Cardiovascular",
        keywords: &["heart", "cardiovascular", "blood pressure", "hypertension", "circulation", "cardiac"],
    },
    "digestive" => Category {
        label: "Digestive & Gut",
        keywords: &["digestive", "gut", "bowel", "ibs", "ibd", "crohns", "colitis", "stomach", "liver", "intestine", "gastro"],
    },
    "hormonal" => Category {
        label: "Hormonal & Endocrine",
        keywords: &["hormonal", "thyroid", "diabetes", "pcos", "menopause", "testosterone", "adrenal", "insulin", "endocrine"],
    },
    "infections" => Category {
        label: "Infections",
        keywords: &["infection", "virus", "viral", "bacterial", "fungal", "lyme", "covid", "herpes", "ebv"],
    },
    "longevity" => Category {
        label: "Longevity & Aging",
        keywords: &["aging", "longevity", "senescence", "telomere", "mitochondrial", "oxidative", "cognitive decline", "sarcopenia"],
    },
    "mental-health" => Category {
        label: "Mental Health",
        keywords: &["mental health", "anxiety", "depression", "ptsd", "ocd", "bipolar", "adhd", "autism", "stress", "mood"],
    },
    "metabolic" => Category {
        label: "Metabolic",
        keywords: &["metabolic", "obesity", "weight", "blood sugar", "insulin resistance"],
    },
    "neurological" => Category {
        label: "Neurological",
        keywords: &["neurological", "brain", "dementia", "alzheimers", "parkinsons", "cognitive", "memory", "neurodegenerative"],
    },
    "pain" => Category {
        label: "Pain & Fatigue",
        keywords: &["pain", "fatigue", "fibromyalgia", "chronic fatigue", "migraine", "headache", "neuropathy"],
    },
    "respiratory" => Category {
        label: "Respiratory",
        keywords: &["respiratory", "lungs", "asthma", "copd", "breathing", "bronchitis", "pulmonary"],
    },
    "skin" => Category {
        label: "Skin & Dermatology",
        keywords: &["skin", "dermatology", "psoriasis", "eczema", "acne", "rosacea", "vitiligo"],
    },
    "urinary" => Category {
        label: "Urinary & Kidney",
        keywords: &["kidney", "renal", "urinary", "bladder", "prostate", "uti"],
    },
    "womens-health" => Category {
        label: "Women's Health",
        keywords: &["women", "fertility", "endometriosis", "ovary", "uterus", "menstrual", "pregnancy", "perimenopause"],
    },
    "mens-health" => Category {
        label: "Men's Health",
        keywords: &["men", "testosterone", "prostate", "erectile", "libido"],
    },
    "eye" => Category {
        label: "Eye & Vision",
        keywords: &["eye", "vision", "retina", "macular", "glaucoma", "cataracts"],
    },
};

/// Display label for a category id, covering the pseudo-categories too.
pub fn category_label(id: &str) -> &'static str {
    match id {
        ALL_CATEGORY => "All Categories",
        OTHER_CATEGORY => "Other",
        _ => CATEGORY_TABLE.get(id).map(|c| c.label).unwrap_or("Other"),
    }
}

/// Assign topical categories to a condition. Never returns an empty set:
/// conditions matching nothing land in `{"other"}`.
pub fn categorize(condition: &Condition) -> BTreeSet<&'static str> {
    // Tags, then title, then description, space-joined and lowercased.
    // Keywords may match anywhere in this concatenation.
    let mut haystack = String::new();
    for tag in &condition.tags {
        haystack.push_str(&tag.to_lowercase());
        haystack.push(' ');
    }
    haystack.push_str(&condition.title.to_lowercase());
    haystack.push(' ');
    haystack.push_str(&condition.description.to_lowercase());

    let mut matched: BTreeSet<&'static str> = BTreeSet::new();
    for &id in CATEGORY_IDS {
        let Some(category) = CATEGORY_TABLE.get(id) else {
            continue;
        };
        if category.keywords.iter().any(|kw| haystack.contains(kw)) {
            matched.insert(id);
        }
    }

    if matched.is_empty() {
        matched.insert(OTHER_CATEGORY);
    }
    matched
}
