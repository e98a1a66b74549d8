//! Mapping des colonnes: surcharges en ligne de commande et saisie interactive

use crate::error::{JournalError, Result};
use dialoguer::Select;
use journal_bord_common::{FieldMapping, LogicalField};

/// Surcharge `champ=EN-TÊTE` passée avec `--map`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingOverride {
    pub field: LogicalField,
    pub header: String,
}

impl std::str::FromStr for MappingOverride {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (field, header) = s
            .split_once('=')
            .ok_or_else(|| format!("format attendu champ=EN-TÊTE: {}", s))?;

        let field: LogicalField = field.parse().map_err(|e| format!("{}", e))?;
        let header = header.trim();
        if header.is_empty() {
            return Err(format!("en-tête vide pour {}", field.key()));
        }

        Ok(Self {
            field,
            header: header.to_string(),
        })
    }
}

/// Applique les surcharges; chaque en-tête doit exister dans le fichier
pub fn apply_overrides(
    mapping: &mut FieldMapping,
    headers: &[String],
    overrides: &[MappingOverride],
) -> Result<()> {
    for item in overrides {
        if !headers.iter().any(|h| h == &item.header) {
            return Err(JournalError::UnknownColumn {
                field: item.field.label().to_string(),
                header: item.header.clone(),
            });
        }
        mapping.bind(item.field, item.header.clone());
    }
    Ok(())
}

/// Exige les cinq champs liés avant de construire un plan
pub fn ensure_complete(mapping: &FieldMapping) -> Result<()> {
    let missing = mapping.missing_fields();
    if missing.is_empty() {
        return Ok(());
    }

    let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
    Err(JournalError::IncompleteMapping(labels.join(", ")))
}

/// Affiche le mapping courant, un champ par ligne
pub fn describe(mapping: &FieldMapping) -> String {
    LogicalField::ALL
        .iter()
        .map(|field| {
            let header = mapping.header(*field);
            let shown = if header.is_empty() { "-- Choisir une colonne --" } else { header };
            format!("  {:<18} → {}", field.label(), shown)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Confirme chaque champ avec une liste de choix
pub fn prompt_mapping(headers: &[String], initial: &FieldMapping) -> Result<FieldMapping> {
    let mut mapping = initial.clone();

    let mut items = vec!["-- Choisir une colonne --".to_string()];
    items.extend(headers.iter().cloned());

    for field in LogicalField::ALL {
        let current = initial.header(field);
        let default = headers
            .iter()
            .position(|h| h == current)
            .map(|i| i + 1)
            .unwrap_or(0);

        let choice = Select::new()
            .with_prompt(field.label())
            .items(&items)
            .default(default)
            .interact()
            .map_err(|e| JournalError::Prompt(e.to_string()))?;

        let header = if choice == 0 { String::new() } else { headers[choice - 1].clone() };
        mapping.bind(field, header);
    }

    Ok(mapping)
}
