//! Journal de bord: moteur de planification
//!
//! Détermine les tâches PRÊT À FAIRE d'un journal d'entretien, les classe
//! (catégorie, responsable, priorité) et rend un plan texte déterministe.
//! Aucune E/S: l'analyse des fichiers et la persistance vivent dans la CLI.

pub mod types;
pub mod error;
pub mod mapping;
pub mod rules;
pub mod priority;
pub mod readiness;
pub mod classifier;
pub mod plan;

pub use types::{ClassifiedRecord, ImportedDataset, Priority, Record};
pub use error::{Error, Result};
pub use mapping::{FieldMapping, LogicalField};
pub use rules::{CategoryRule, DEFAULT_RULES, FALLBACK_CATEGORY, FALLBACK_OWNER};
pub use priority::PriorityConfig;
pub use readiness::{is_ready, FALSE_TOKENS};
pub use classifier::classify;
pub use plan::{build_plan_text, build_ready_list, EMPTY_PLAN_TEXT};
