//! Classement des lignes prêtes
//!
//! La catégorie et la priorité sont déduites séparément du même texte:
//! pièce requise + commentaires. La correspondance est une sous-chaîne
//! insensible à la casse, pas un mot entier.

use crate::mapping::{FieldMapping, LogicalField};
use crate::priority::PriorityConfig;
use crate::rules::{CategoryRule, FALLBACK_CATEGORY, FALLBACK_OWNER};
use crate::types::{ClassifiedRecord, Record};

/// Minuscules + suppression des espaces en bordure
pub fn normalize(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

/// Le mot-clé apparaît dans le texte (sous-chaîne, insensible à la casse)
pub fn matches_keyword(text: &str, keyword: &str) -> bool {
    normalize(text).contains(&normalize(keyword))
}

/// Texte de recherche d'une ligne
pub fn combined_text(record: &Record, mapping: &FieldMapping) -> String {
    let part = mapping.value(record, LogicalField::PartRequired);
    let comments = mapping.value(record, LogicalField::Comments);
    format!("{} {}", part, comments).trim().to_string()
}

/// Première règle correspondante, avec tous ses mots-clés trouvés
fn match_rule<'r>(rules: &'r [CategoryRule], text: &str) -> Option<(&'r CategoryRule, Vec<String>)> {
    rules.iter().find_map(|rule| {
        let reasons: Vec<String> = rule
            .keywords
            .iter()
            .filter(|keyword| matches_keyword(text, keyword))
            .map(|keyword| keyword.to_string())
            .collect();

        if reasons.is_empty() {
            None
        } else {
            Some((rule, reasons))
        }
    })
}

/// Classe une ligne déjà filtrée comme prête
pub fn classify(
    record: &Record,
    mapping: &FieldMapping,
    rules: &[CategoryRule],
    priorities: &PriorityConfig,
) -> ClassifiedRecord {
    let text = combined_text(record, mapping);
    let priority = priorities.deduce(&text);

    let (category, owner, reasons) = match match_rule(rules, &text) {
        Some((rule, reasons)) => (rule.category, rule.owner, reasons),
        None => (FALLBACK_CATEGORY, FALLBACK_OWNER, Vec::new()),
    };

    ClassifiedRecord {
        record: record.clone(),
        category: category.to_string(),
        owner: owner.to_string(),
        priority,
        reasons,
    }
}
