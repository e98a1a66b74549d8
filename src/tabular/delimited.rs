//! Texte délimité (CSV, TSV, texte collé)

use super::{build_record, is_blank, visible_headers, Table};
use crate::error::{JournalError, Result};

/// Analyse un texte délimité dont la première ligne est l'en-tête
///
/// Les lignes courtes sont acceptées (colonnes manquantes = chaîne vide).
pub fn parse_delimited(content: &str, delimiter: char) -> Result<Table> {
    if !delimiter.is_ascii() {
        return Err(JournalError::InvalidDelimiter(delimiter));
    }

    let content = content.trim_start_matches('\u{feff}');
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let raw_headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if is_blank(record.iter()) {
            continue;
        }
        let values: Vec<String> = record.iter().map(str::to_string).collect();
        rows.push(build_record(&raw_headers, &values));
    }

    Ok(Table {
        headers: visible_headers(&raw_headers),
        rows,
    })
}
