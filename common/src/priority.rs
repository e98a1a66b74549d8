//! Configuration des priorités
//!
//! Trois listes de mots-clés, une par palier. P1 l'emporte sur P2, P2 sur P3;
//! un texte qui ne correspond à rien tombe en P3.

use crate::classifier::matches_keyword;
use crate::error::Result;
use crate::types::Priority;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityConfig {
    #[serde(rename = "P1", default)]
    pub p1: Vec<String>,
    #[serde(rename = "P2", default)]
    pub p2: Vec<String>,
    #[serde(rename = "P3", default)]
    pub p3: Vec<String>,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            p1: vec!["visibilite".into(), "visibilité".into(), "freins".into()],
            p2: vec!["electrique".into(), "électrique".into()],
            p3: vec!["confort".into()],
        }
    }
}

impl PriorityConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn keywords(&self, tier: Priority) -> &[String] {
        match tier {
            Priority::P1 => &self.p1,
            Priority::P2 => &self.p2,
            Priority::P3 => &self.p3,
        }
    }

    /// Remplace les mots-clés d'un palier à partir d'une liste séparée par des virgules
    ///
    /// Les entrées vides sont ignorées: `"a, , b,"` donne `["a", "b"]`.
    pub fn set_tier_from_list(&mut self, tier: Priority, list: &str) {
        let keywords = list
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();

        match tier {
            Priority::P1 => self.p1 = keywords,
            Priority::P2 => self.p2 = keywords,
            Priority::P3 => self.p3 = keywords,
        }
    }

    /// Palier du texte: premier palier (P1 puis P2) dont un mot-clé apparaît
    ///
    /// Les mots-clés P3 ne sont jamais consultés: P3 est le palier par défaut.
    pub fn deduce(&self, text: &str) -> Priority {
        if self.p1.iter().any(|keyword| matches_keyword(text, keyword)) {
            return Priority::P1;
        }

        if self.p2.iter().any(|keyword| matches_keyword(text, keyword)) {
            return Priority::P2;
        }

        Priority::P3
    }
}
