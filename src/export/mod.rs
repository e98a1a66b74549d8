pub mod excel;

use crate::cli::PlanFormat;
use crate::error::{JournalError, Result};
use journal_bord_common::{build_plan_text, ClassifiedRecord, FieldMapping};
use std::path::{Path, PathBuf};

const DEFAULT_FILE_STEM: &str = "plan-pret-a-faire";

/// Chemin de sortie: un dossier (ou un chemin sans extension) reçoit le nom par défaut
pub fn output_path_for_format(output: &Path, format: &PlanFormat) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", DEFAULT_FILE_STEM, format.extension()))
    } else {
        output.to_path_buf()
    }
}

/// Contenu texte d'un format non binaire
pub fn render(items: &[ClassifiedRecord], mapping: &FieldMapping, format: &PlanFormat) -> Result<String> {
    match format {
        PlanFormat::Text => Ok(build_plan_text(items, mapping)),
        PlanFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        PlanFormat::Excel => Err(JournalError::MissingOutput),
    }
}

/// Écrit le plan; sans `output`, le texte va sur la sortie standard
///
/// Retourne le chemin écrit, le cas échéant.
pub fn export_plan(
    items: &[ClassifiedRecord],
    mapping: &FieldMapping,
    format: &PlanFormat,
    output: Option<&Path>,
) -> Result<Option<PathBuf>> {
    let Some(output) = output else {
        println!("{}", render(items, mapping, format)?);
        return Ok(None);
    };

    let output_path = output_path_for_format(output, format);
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    match format {
        PlanFormat::Excel => excel::generate_excel(items, mapping, &output_path)?,
        _ => std::fs::write(&output_path, render(items, mapping, format)?)?,
    }

    tracing::info!(path = %output_path.display(), items = items.len(), "plan exported");
    Ok(Some(output_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_output_path_for_directory() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = output_path_for_format(dir.path(), &PlanFormat::Excel);
        assert_eq!(path, dir.path().join("plan-pret-a-faire.xlsx"));
    }

    #[test]
    fn test_output_path_with_extension() {
        let path = output_path_for_format(Path::new("sortie/plan.txt"), &PlanFormat::Text);
        assert_eq!(path, PathBuf::from("sortie/plan.txt"));
    }

    #[test]
    fn test_render_empty_text() {
        let text = render(&[], &FieldMapping::default(), &PlanFormat::Text).unwrap();
        assert_eq!(text, "Aucune tâche PRÊT À FAIRE trouvée.");

        let json = render(&[], &FieldMapping::default(), &PlanFormat::Json).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_render_excel_needs_output() {
        let err = render(&[], &FieldMapping::default(), &PlanFormat::Excel).unwrap_err();
        assert!(matches!(err, JournalError::MissingOutput));
    }

    #[test]
    fn test_export_text_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let output = dir.path().join("plan.txt");

        let written = export_plan(&[], &FieldMapping::default(), &PlanFormat::Text, Some(output.as_path())).unwrap();
        assert_eq!(written, Some(output.clone()));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "Aucune tâche PRÊT À FAIRE trouvée.");
    }
}
