//! Correspondance des colonnes (résolution des champs logiques)
//!
//! Un champ logique (unité, pièce requise, ...) est lié à un en-tête de
//! colonne. Une absence se dégrade toujours en chaîne vide: « absent » et
//! « présent mais vide » sont traités pareil.

use crate::error::{Error, Result};
use crate::types::Record;
use serde::{Deserialize, Serialize};

/// Champ logique attendu par le moteur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    Unit,
    PartRequired,
    PartReceived,
    PartsInstalled,
    Comments,
}

impl LogicalField {
    pub const ALL: [LogicalField; 5] = [
        LogicalField::Unit,
        LogicalField::PartRequired,
        LogicalField::PartReceived,
        LogicalField::PartsInstalled,
        LogicalField::Comments,
    ];

    /// Clé camelCase (format persistant)
    pub fn key(&self) -> &'static str {
        match self {
            LogicalField::Unit => "unit",
            LogicalField::PartRequired => "partRequired",
            LogicalField::PartReceived => "partReceived",
            LogicalField::PartsInstalled => "partsInstalled",
            LogicalField::Comments => "comments",
        }
    }

    /// Libellé affiché à l'utilisateur
    pub fn label(&self) -> &'static str {
        match self {
            LogicalField::Unit => "UNITÉ",
            LogicalField::PartRequired => "PIÈCE REQUISE",
            LogicalField::PartReceived => "PIÈCE REÇUE",
            LogicalField::PartsInstalled => "PIÈCES INSTALLÉES",
            LogicalField::Comments => "COMMENTAIRES",
        }
    }

    /// Indices de détection automatique (comparés à l'en-tête en minuscules)
    fn detection_hints(&self) -> &'static [&'static str] {
        match self {
            LogicalField::Unit => &["unité", "unite"],
            LogicalField::PartRequired => &["pièce requise", "piece requise"],
            LogicalField::PartReceived => &["pièce reçue", "piece recue", "réception", "reception"],
            LogicalField::PartsInstalled => &["pièces installées", "pieces installees", "install"],
            LogicalField::Comments => &["comment"],
        }
    }
}

impl std::fmt::Display for LogicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for LogicalField {
    type Err = Error;

    /// Accepte la clé (`partRequired`, `part-required`) ou le libellé (`PIÈCE REQUISE`)
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        let simplified = wanted.replace(['-', '_'], "").to_lowercase();

        LogicalField::ALL
            .into_iter()
            .find(|field| {
                field.key().to_lowercase() == simplified
                    || field.label().to_lowercase() == wanted.to_lowercase()
            })
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// Correspondance champ logique → en-tête de colonne
///
/// Chaîne vide = champ non lié.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldMapping {
    pub unit: String,
    pub part_required: String,
    pub part_received: String,
    pub parts_installed: String,
    pub comments: String,
}

impl FieldMapping {
    /// En-tête lié au champ (vide si non lié)
    pub fn header(&self, field: LogicalField) -> &str {
        match field {
            LogicalField::Unit => &self.unit,
            LogicalField::PartRequired => &self.part_required,
            LogicalField::PartReceived => &self.part_received,
            LogicalField::PartsInstalled => &self.parts_installed,
            LogicalField::Comments => &self.comments,
        }
    }

    /// Valeur du champ dans la ligne (vide si non lié ou en-tête absent)
    pub fn value<'a>(&self, record: &'a Record, field: LogicalField) -> &'a str {
        let header = self.header(field);
        if header.is_empty() {
            return "";
        }
        record.get(header).map(String::as_str).unwrap_or("")
    }

    pub fn bind(&mut self, field: LogicalField, header: impl Into<String>) {
        let slot = match field {
            LogicalField::Unit => &mut self.unit,
            LogicalField::PartRequired => &mut self.part_required,
            LogicalField::PartReceived => &mut self.part_received,
            LogicalField::PartsInstalled => &mut self.parts_installed,
            LogicalField::Comments => &mut self.comments,
        };
        *slot = header.into();
    }

    /// Champs encore non liés, dans l'ordre canonique
    pub fn missing_fields(&self) -> Vec<LogicalField> {
        LogicalField::ALL
            .into_iter()
            .filter(|field| self.header(*field).trim().is_empty())
            .collect()
    }

    /// Les cinq champs sont liés
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Champs liés à un en-tête qui n'existe pas dans `headers`
    pub fn validate_against(&self, headers: &[String]) -> Vec<LogicalField> {
        LogicalField::ALL
            .into_iter()
            .filter(|field| {
                let header = self.header(*field);
                !header.is_empty() && !headers.iter().any(|h| h == header)
            })
            .collect()
    }

    /// Correspondance initiale pour un nouvel import
    ///
    /// Avec une correspondance précédente, seules ses liaisons encore
    /// présentes dans `headers` sont conservées. Sinon chaque champ prend le
    /// premier en-tête contenant un de ses indices.
    pub fn detect(headers: &[String], previous: Option<&FieldMapping>) -> Self {
        let mut mapping = FieldMapping::default();

        for field in LogicalField::ALL {
            let header = match previous {
                Some(prev) => {
                    let bound = prev.header(field);
                    headers
                        .iter()
                        .find(|h| !bound.is_empty() && h.as_str() == bound)
                        .cloned()
                        .unwrap_or_default()
                }
                None => headers
                    .iter()
                    .find(|h| {
                        let lower = h.to_lowercase();
                        field.detection_hints().iter().any(|hint| lower.contains(hint))
                    })
                    .cloned()
                    .unwrap_or_default(),
            };
            mapping.bind(field, header);
        }

        mapping
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let mapping: Self = serde_json::from_str(json)?;
        Ok(mapping)
    }
}
