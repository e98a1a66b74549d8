//! Lecture des fichiers tabulaires (CSV, classeurs)
//!
//! La première ligne est l'en-tête. Les lignes entièrement vides sont
//! ignorées; toutes les valeurs sont des chaînes.

pub mod delimited;
pub mod spreadsheet;

use crate::error::{JournalError, Result};
use journal_bord_common::Record;
use std::path::Path;

/// En-têtes + lignes d'un fichier importé
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

const DELIMITED_EXTENSIONS: &[&str] = &["csv", "txt"];
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

/// Ligne entièrement vide (toutes les valeurs sont blanches)
pub(crate) fn is_blank<'a>(values: impl IntoIterator<Item = &'a str>) -> bool {
    values.into_iter().all(|v| v.trim().is_empty())
}

/// Construit une ligne à partir des valeurs, en ignorant les colonnes sans en-tête
///
/// Un en-tête en double garde la première valeur.
pub(crate) fn build_record(headers: &[String], values: &[String]) -> Record {
    let mut record = Record::new();
    for (header, value) in headers.iter().zip(values.iter()) {
        if header.is_empty() {
            continue;
        }
        record.entry(header.clone()).or_insert_with(|| value.clone());
    }
    record
}

/// En-têtes non vides, dans l'ordre, sans doublon
pub(crate) fn visible_headers(headers: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut visible = Vec::new();
    for header in headers {
        if !header.is_empty() && seen.insert(header.as_str()) {
            visible.push(header.clone());
        }
    }
    visible
}

/// Contenu texte d'un fichier, décodé en UTF-8 avec remplacement
///
/// Un export Windows-1252 reste lisible: seuls les octets invalides
/// deviennent U+FFFD.
fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    if let std::borrow::Cow::Owned(_) = content {
        tracing::warn!(path = %path.display(), "file is not valid UTF-8, invalid bytes replaced");
    }
    Ok(content.into_owned())
}

/// Lit un fichier selon son extension
///
/// `delimiter` s'applique aux fichiers texte; `.tsv` utilise la tabulation.
pub fn read_table(path: &Path, delimiter: char) -> Result<Table> {
    if !path.exists() {
        return Err(JournalError::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let table = if extension == "tsv" {
        delimited::parse_delimited(&read_text(path)?, '\t')?
    } else if DELIMITED_EXTENSIONS.contains(&extension.as_str()) {
        delimited::parse_delimited(&read_text(path)?, delimiter)?
    } else if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        spreadsheet::read_first_sheet(path)?
    } else {
        return Err(JournalError::UnsupportedFormat(path.display().to_string()));
    };

    if table.headers.is_empty() {
        return Err(JournalError::EmptyTable(path.display().to_string()));
    }

    tracing::debug!(
        path = %path.display(),
        headers = table.headers.len(),
        rows = table.rows.len(),
        "table loaded"
    );

    Ok(table)
}
