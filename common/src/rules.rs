//! Table des catégories de travaux
//!
//! Évaluée dans l'ordre: la première règle dont un mot-clé apparaît gagne.

/// Règle de catégorie: (catégorie, responsable, mots-clés)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: &'static str,
    pub owner: &'static str,
    pub keywords: &'static [&'static str],
}

/// Catégorie attribuée quand aucune règle ne correspond
pub const FALLBACK_CATEGORY: &str = "Autres";

/// Responsable attribué quand aucune règle ne correspond
pub const FALLBACK_OWNER: &str = "À assigner";

pub const DEFAULT_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: "Visibilité/Électrique",
        owner: "Jessy",
        keywords: &["visibilite", "visibilité", "electrique", "électrique"],
    },
    CategoryRule {
        category: "Freins/Pneumatique/Camion",
        owner: "Sebastien",
        keywords: &["freins", "frein", "pneumatique", "camion"],
    },
    CategoryRule {
        category: "Agricole/Hydraulique agricole",
        owner: "Simon",
        keywords: &["agricole", "hydraulique agricole"],
    },
    CategoryRule {
        category: "Conformité/VAD/Loi 430",
        owner: "Jean-Philippe",
        keywords: &["conformite", "conformité", "vad", "loi 430"],
    },
    CategoryRule {
        category: "Soudure/Structure",
        owner: "Maxime",
        keywords: &["soudure", "structure"],
    },
];
