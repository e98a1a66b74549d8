//! Construction du plan PRÊT À FAIRE
//!
//! filtre → classement → tri stable par priorité → rendu texte.
//! Le rendu est déterministe: mêmes entrées, mêmes octets.

use crate::classifier::classify;
use crate::mapping::{FieldMapping, LogicalField};
use crate::priority::PriorityConfig;
use crate::readiness::is_ready;
use crate::rules::CategoryRule;
use crate::types::{ClassifiedRecord, Record};

/// Texte rendu quand aucune ligne n'est prête
pub const EMPTY_PLAN_TEXT: &str = "Aucune tâche PRÊT À FAIRE trouvée.";

pub const PLAN_HEADER: &str = "Plan PRÊT À FAIRE";

/// Valeur affichée pour une unité ou une pièce vide
pub const NOT_AVAILABLE: &str = "N/A";

/// Lignes prêtes, classées, P1 d'abord
///
/// À priorité égale, l'ordre d'origine est conservé.
pub fn build_ready_list(
    records: &[Record],
    mapping: &FieldMapping,
    rules: &[CategoryRule],
    priorities: &PriorityConfig,
) -> Vec<ClassifiedRecord> {
    let mut ready: Vec<ClassifiedRecord> = records
        .iter()
        .filter(|record| is_ready(record, mapping))
        .map(|record| classify(record, mapping, rules, priorities))
        .collect();

    // sort_by_key est stable
    ready.sort_by_key(|item| item.priority);
    ready
}

fn or_not_available(value: &str) -> &str {
    if value.is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}

/// Une ligne numérotée du plan (index à partir de 1)
pub fn plan_line(index: usize, item: &ClassifiedRecord, mapping: &FieldMapping) -> String {
    let unit = or_not_available(mapping.value(&item.record, LogicalField::Unit));
    let part = or_not_available(mapping.value(&item.record, LogicalField::PartRequired));

    format!(
        "{}. [{}] Unité {} - {} | {} ({})",
        index, item.priority, unit, part, item.category, item.owner
    )
}

/// Plan texte: en-tête puis une ligne par tâche, sans saut de ligne final
pub fn build_plan_text(items: &[ClassifiedRecord], mapping: &FieldMapping) -> String {
    if items.is_empty() {
        return EMPTY_PLAN_TEXT.to_string();
    }

    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(PLAN_HEADER.to_string());
    lines.extend(
        items
            .iter()
            .enumerate()
            .map(|(i, item)| plan_line(i + 1, item, mapping)),
    );

    lines.join("\n")
}
