//! Classeurs (xlsx, xls, ods): première feuille seulement

use super::{build_record, is_blank, visible_headers, Table};
use crate::error::{JournalError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::{NaiveDateTime, Timelike};
use std::path::Path;

/// Date ISO; l'heure n'apparaît que si elle n'est pas minuit
fn format_datetime(datetime: &NaiveDateTime) -> String {
    if datetime.num_seconds_from_midnight() == 0 {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Convertit une cellule en chaîne
///
/// Les nombres entiers perdent leur `.0`, les booléens deviennent VRAI/FAUX
/// comme à l'affichage d'Excel en français, les dates passent en ISO.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(true) => "VRAI".to_string(),
        Data::Bool(false) => "FAUX".to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) if dt.is_datetime() => format_datetime(&datetime),
            _ => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}

pub fn read_first_sheet(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| JournalError::EmptyTable(path.display().to_string()))??;

    let mut rows_iter = range.rows();
    let raw_headers: Vec<String> = match rows_iter.next() {
        Some(first) => first.iter().map(|c| cell_to_string(c).trim().to_string()).collect(),
        None => return Err(JournalError::EmptyTable(path.display().to_string())),
    };

    let mut rows = Vec::new();
    for row in rows_iter {
        let values: Vec<String> = row.iter().map(cell_to_string).collect();
        if is_blank(values.iter().map(String::as_str)) {
            continue;
        }
        rows.push(build_record(&raw_headers, &values));
    }

    Ok(Table {
        headers: visible_headers(&raw_headers),
        rows,
    })
}
