//! Types partagés du planificateur
//!
//! - Record: une ligne du journal d'entretien, indexée par en-tête de colonne
//! - Priority: palier P1/P2/P3
//! - ClassifiedRecord: ligne prête, classée (catégorie, responsable, priorité)
//! - ImportedDataset: dernier import conservé par le magasin de paramètres

use crate::mapping::FieldMapping;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Une ligne importée: en-tête → valeur
pub type Record = BTreeMap<String, String>;

/// Palier de priorité (P1 passe avant P2, P2 avant P3)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    #[default]
    P3,
}

impl Priority {
    /// Ordre fixe et total des paliers
    pub const ALL: [Priority; 3] = [Priority::P1, Priority::P2, Priority::P3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ligne prête à faire, classée
///
/// Recréée à chaque construction du plan; la ligne d'origine est clonée.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedRecord {
    pub record: Record,
    pub category: String,
    pub owner: String,
    pub priority: Priority,
    /// Mots-clés de la règle gagnante trouvés dans le texte
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// Jeu de données importé
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedDataset {
    pub id: String,

    /// Horodatage RFC 3339 de l'import
    pub imported_at: String,

    #[serde(default)]
    pub headers: Vec<String>,

    #[serde(default)]
    pub rows: Vec<Record>,

    #[serde(default)]
    pub mapping: FieldMapping,
}
