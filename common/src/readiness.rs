//! Filtre « PRÊT À FAIRE »
//!
//! Une ligne est prête quand la pièce est reçue (valeur non vide) et que
//! « pièces installées » vaut exactement un jeton faux. Toute autre valeur,
//! y compris vide, exclut la ligne.

use crate::classifier::normalize;
use crate::mapping::{FieldMapping, LogicalField};
use crate::types::Record;

/// Jetons reconnus comme « non installé » (après normalisation)
pub const FALSE_TOKENS: &[&str] = &["faux", "false", "non", "no", "0"];

pub fn is_ready(record: &Record, mapping: &FieldMapping) -> bool {
    let received = mapping.value(record, LogicalField::PartReceived);
    let installed = mapping.value(record, LogicalField::PartsInstalled);

    let not_installed = FALSE_TOKENS.contains(&normalize(installed).as_str());

    !received.trim().is_empty() && not_installed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> FieldMapping {
        FieldMapping {
            unit: "UNITÉ".to_string(),
            part_required: "PIÈCE REQUISE".to_string(),
            part_received: "PIÈCE REÇUE".to_string(),
            parts_installed: "PIÈCES INSTALLÉES".to_string(),
            comments: "COMMENTAIRES".to_string(),
        }
    }

    fn row(received: &str, installed: &str) -> Record {
        let mut record = Record::new();
        record.insert("PIÈCE REÇUE".to_string(), received.to_string());
        record.insert("PIÈCES INSTALLÉES".to_string(), installed.to_string());
        record
    }

    #[test]
    fn test_ready_with_false_tokens() {
        for token in ["FAUX", "faux", " False ", "NON", "no", "0"] {
            assert!(is_ready(&row("2024-01-01", token), &mapping()), "jeton: {:?}", token);
        }
    }

    #[test]
    fn test_not_ready_when_installed_not_false() {
        for token in ["VRAI", "true", "oui", "1", "", "  ", "non installé", "n"] {
            assert!(!is_ready(&row("2024-01-01", token), &mapping()), "jeton: {:?}", token);
        }
    }

    #[test]
    fn test_not_ready_when_received_blank() {
        assert!(!is_ready(&row("", "FAUX"), &mapping()));
        assert!(!is_ready(&row("   ", "FAUX"), &mapping()));
        assert!(!is_ready(&row("\t", "0"), &mapping()));
    }

    #[test]
    fn test_missing_columns_are_not_ready() {
        assert!(!is_ready(&Record::new(), &mapping()));
        assert!(!is_ready(&row("2024-01-01", "FAUX"), &FieldMapping::default()));
    }
}
