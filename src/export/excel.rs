//! Export Excel du plan (une ligne par tâche, dans l'ordre du plan)

use crate::error::Result;
use journal_bord_common::{ClassifiedRecord, FieldMapping, LogicalField};
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use std::path::Path;

const COLUMNS: &[(&str, f64)] = &[
    ("Priorité", 10.0),
    ("Unité", 12.0),
    ("Pièce requise", 36.0),
    ("Catégorie", 30.0),
    ("Responsable", 16.0),
    ("Commentaires", 40.0),
    ("Raisons", 24.0),
];

fn row_values(item: &ClassifiedRecord, mapping: &FieldMapping) -> [String; 7] {
    [
        item.priority.to_string(),
        mapping.value(&item.record, LogicalField::Unit).to_string(),
        mapping.value(&item.record, LogicalField::PartRequired).to_string(),
        item.category.clone(),
        item.owner.clone(),
        mapping.value(&item.record, LogicalField::Comments).to_string(),
        item.reasons.join(", "),
    ]
}

pub fn generate_excel(items: &[ClassifiedRecord], mapping: &FieldMapping, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Plan")?;

    for (col, (title, width)) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *title, &header_format)?;
        worksheet.set_column_width(col, *width)?;
    }

    for (i, item) in items.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, value) in row_values(item, mapping).iter().enumerate() {
            worksheet.write_string(row, col as u16, value)?;
        }
    }

    worksheet.set_freeze_panes(1, 0)?;
    workbook.save(output_path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_bord_common::{Priority, Record};
    use tempfile::tempdir;

    fn item() -> (ClassifiedRecord, FieldMapping) {
        let mapping = FieldMapping::detect(
            &["UNITÉ", "PIÈCE REQUISE", "PIÈCE REÇUE", "PIÈCES INSTALLÉES", "COMMENTAIRES"]
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>(),
            None,
        );

        let mut record = Record::new();
        record.insert("UNITÉ".to_string(), "12".to_string());
        record.insert("PIÈCE REQUISE".to_string(), "Freins avant".to_string());
        record.insert("COMMENTAIRES".to_string(), "camion 4".to_string());

        let classified = ClassifiedRecord {
            record,
            category: "Freins/Pneumatique/Camion".to_string(),
            owner: "Sebastien".to_string(),
            priority: Priority::P1,
            reasons: vec!["freins".to_string(), "frein".to_string(), "camion".to_string()],
        };
        (classified, mapping)
    }

    #[test]
    fn test_row_values() {
        let (classified, mapping) = item();
        let values = row_values(&classified, &mapping);
        assert_eq!(values[0], "P1");
        assert_eq!(values[1], "12");
        assert_eq!(values[5], "camion 4");
        assert_eq!(values[6], "freins, frein, camion");
    }

    #[test]
    fn test_generate_excel() {
        let dir = tempdir().expect("Failed to create temp dir");
        let output_path = dir.path().join("plan.xlsx");
        let (classified, mapping) = item();

        generate_excel(&[classified], &mapping, &output_path).expect("génération Excel échouée");

        let metadata = std::fs::metadata(&output_path).expect("métadonnées introuvables");
        assert!(metadata.len() > 0, "fichier Excel vide");
    }

    #[test]
    fn test_generate_excel_empty() {
        let dir = tempdir().expect("Failed to create temp dir");
        let output_path = dir.path().join("vide.xlsx");
        let result = generate_excel(&[], &FieldMapping::default(), &output_path);
        assert!(result.is_ok(), "Excel vide en échec: {:?}", result.err());
    }
}
