//! Relationship-type classification into display groups and colors

pub mod grouping;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Color used for labels that have no color of their own
pub const FALLBACK_COLOR: &str = "#9ca3af";

/// Semantic family groups, declared in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RelationshipGroup {
    Grandparents,
    Parents,
    Spouse,
    Children,
    Siblings,
    Grandchildren,
    InLaws,
    AuntsUncles,
    Cousins,
    Other,
}

impl RelationshipGroup {
    /// All groups in priority order
    pub const ALL: [RelationshipGroup; 10] = [
        RelationshipGroup::Grandparents,
        RelationshipGroup::Parents,
        RelationshipGroup::Spouse,
        RelationshipGroup::Children,
        RelationshipGroup::Siblings,
        RelationshipGroup::Grandchildren,
        RelationshipGroup::InLaws,
        RelationshipGroup::AuntsUncles,
        RelationshipGroup::Cousins,
        RelationshipGroup::Other,
    ];

    /// Section ordering used by presentation, 1 (first) to 10 (last)
    pub fn priority(self) -> u8 {
        match self {
            RelationshipGroup::Grandparents => 1,
            RelationshipGroup::Parents => 2,
            RelationshipGroup::Spouse => 3,
            RelationshipGroup::Children => 4,
            RelationshipGroup::Siblings => 5,
            RelationshipGroup::Grandchildren => 6,
            RelationshipGroup::InLaws => 7,
            RelationshipGroup::AuntsUncles => 8,
            RelationshipGroup::Cousins => 9,
            RelationshipGroup::Other => 10,
        }
    }

    /// Section heading
    pub fn label(self) -> &'static str {
        match self {
            RelationshipGroup::Grandparents => "Grandparents",
            RelationshipGroup::Parents => "Parents",
            RelationshipGroup::Spouse => "Spouse",
            RelationshipGroup::Children => "Children",
            RelationshipGroup::Siblings => "Siblings",
            RelationshipGroup::Grandchildren => "Grandchildren",
            RelationshipGroup::InLaws => "In-Laws",
            RelationshipGroup::AuntsUncles => "Aunts & Uncles",
            RelationshipGroup::Cousins => "Cousins",
            RelationshipGroup::Other => "Other Family Connections",
        }
    }

    /// Accent color for the whole section
    pub fn color(self) -> &'static str {
        match self {
            RelationshipGroup::Grandparents => "#7c3aed",
            RelationshipGroup::Parents => "#2563eb",
            RelationshipGroup::Spouse => "#db2777",
            RelationshipGroup::Children => "#16a34a",
            RelationshipGroup::Siblings => "#ea580c",
            RelationshipGroup::Grandchildren => "#0d9488",
            RelationshipGroup::InLaws => "#ca8a04",
            RelationshipGroup::AuntsUncles => "#4f46e5",
            RelationshipGroup::Cousins => "#0891b2",
            RelationshipGroup::Other => FALLBACK_COLOR,
        }
    }
}

/// Result of classifying one relationship-type label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub group: RelationshipGroup,
    pub color: &'static str,
}

/// Known labels (normalized), their group, and their own color if any
const RELATIONSHIP_TABLE: &[(&str, RelationshipGroup, Option<&str>)] = &[
    // Grandparents
    ("paternalgrandfather", RelationshipGroup::Grandparents, Some("#6d28d9")),
    ("paternalgrandmother", RelationshipGroup::Grandparents, Some("#8b5cf6")),
    ("maternalgrandfather", RelationshipGroup::Grandparents, Some("#5b21b6")),
    ("maternalgrandmother", RelationshipGroup::Grandparents, Some("#a78bfa")),
    ("grandfather", RelationshipGroup::Grandparents, Some("#4c1d95")),
    ("grandmother", RelationshipGroup::Grandparents, Some("#c4b5fd")),
    // Parents
    ("father", RelationshipGroup::Parents, Some("#1d4ed8")),
    ("mother", RelationshipGroup::Parents, Some("#3b82f6")),
    ("stepfather", RelationshipGroup::Parents, None),
    ("stepmother", RelationshipGroup::Parents, None),
    // Spouse
    ("husband", RelationshipGroup::Spouse, Some("#be185d")),
    ("wife", RelationshipGroup::Spouse, Some("#ec4899")),
    ("spouse", RelationshipGroup::Spouse, Some("#f472b6")),
    // Children
    ("son", RelationshipGroup::Children, Some("#15803d")),
    ("daughter", RelationshipGroup::Children, Some("#22c55e")),
    ("child", RelationshipGroup::Children, Some("#4ade80")),
    ("stepson", RelationshipGroup::Children, None),
    ("stepdaughter", RelationshipGroup::Children, None),
    // Siblings
    ("brother", RelationshipGroup::Siblings, Some("#c2410c")),
    ("sister", RelationshipGroup::Siblings, Some("#f97316")),
    ("elderbrother", RelationshipGroup::Siblings, Some("#9a3412")),
    ("youngerbrother", RelationshipGroup::Siblings, Some("#fb923c")),
    ("eldersister", RelationshipGroup::Siblings, Some("#7c2d12")),
    ("youngersister", RelationshipGroup::Siblings, Some("#fdba74")),
    ("halfbrother", RelationshipGroup::Siblings, None),
    ("halfsister", RelationshipGroup::Siblings, None),
    // Grandchildren
    ("grandson", RelationshipGroup::Grandchildren, Some("#0f766e")),
    ("granddaughter", RelationshipGroup::Grandchildren, Some("#14b8a6")),
    ("grandchild", RelationshipGroup::Grandchildren, Some("#2dd4bf")),
    // In-laws
    ("fatherinlaw", RelationshipGroup::InLaws, Some("#a16207")),
    ("motherinlaw", RelationshipGroup::InLaws, Some("#eab308")),
    ("soninlaw", RelationshipGroup::InLaws, Some("#854d0e")),
    ("daughterinlaw", RelationshipGroup::InLaws, Some("#facc15")),
    ("brotherinlaw", RelationshipGroup::InLaws, Some("#713f12")),
    ("sisterinlaw", RelationshipGroup::InLaws, Some("#fde047")),
    ("elderbrotherinlaw", RelationshipGroup::InLaws, None),
    ("youngerbrotherinlaw", RelationshipGroup::InLaws, None),
    ("eldersisterinlaw", RelationshipGroup::InLaws, None),
    ("youngersisterinlaw", RelationshipGroup::InLaws, None),
    // Aunts & uncles
    ("uncle", RelationshipGroup::AuntsUncles, Some("#4338ca")),
    ("aunt", RelationshipGroup::AuntsUncles, Some("#6366f1")),
    ("paternaluncle", RelationshipGroup::AuntsUncles, Some("#3730a3")),
    ("paternalaunt", RelationshipGroup::AuntsUncles, Some("#818cf8")),
    ("maternaluncle", RelationshipGroup::AuntsUncles, Some("#312e81")),
    ("maternalaunt", RelationshipGroup::AuntsUncles, Some("#a5b4fc")),
    // Cousins
    ("cousin", RelationshipGroup::Cousins, Some("#0e7490")),
    ("nephew", RelationshipGroup::Cousins, Some("#06b6d4")),
    ("niece", RelationshipGroup::Cousins, Some("#67e8f9")),
];

static CLASSIFICATIONS: LazyLock<HashMap<&'static str, Classification>> = LazyLock::new(|| {
    RELATIONSHIP_TABLE
        .iter()
        .map(|&(label, group, color)| {
            let color = color.unwrap_or(FALLBACK_COLOR);
            (label, Classification { group, color })
        })
        .collect()
});

/// Lower-case a label and drop whitespace, hyphens and underscores
pub fn normalize_type(relationship_type: &str) -> String {
    relationship_type
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Classify a raw relationship-type label. Unknown labels fall into `Other`.
pub fn classify(relationship_type: &str) -> Classification {
    let key = normalize_type(relationship_type);
    match CLASSIFICATIONS.get(key.as_str()) {
        Some(classification) => *classification,
        None => {
            log::debug!("Unrecognized relationship type {:?}", relationship_type);
            Classification {
                group: RelationshipGroup::Other,
                color: FALLBACK_COLOR,
            }
        }
    }
}

/// Whether the label matches an entry in the static table
pub fn is_known_type(relationship_type: &str) -> bool {
    CLASSIFICATIONS.contains_key(normalize_type(relationship_type).as_str())
}
