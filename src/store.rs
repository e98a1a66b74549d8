//! Magasin de paramètres (clé → fichier JSON)
//!
//! Conserve le dernier import, le mapping et la configuration des priorités
//! sous des clés fixes. Une clé absente donne `None`, jamais une erreur.

use crate::error::Result;
use crate::tabular::Table;
use journal_bord_common::{FieldMapping, ImportedDataset, PriorityConfig, Record};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DATASET_KEY: &str = "dataset";
pub const MAPPING_KEY: &str = "mapping";
pub const PRIORITY_CONFIG_KEY: &str = "priorityConfig";

const ALL_KEYS: &[&str] = &[DATASET_KEY, MAPPING_KEY, PRIORITY_CONFIG_KEY];

#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Contenu JSON brut d'une clé, `None` si absente
    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.read_raw(key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Écrit `<clé>.json.tmp` puis le renomme: le fichier en place reste lisible
    fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.key_path(key);
        let tmp_path = path.with_extension("json.tmp");

        let mut writer = BufWriter::new(File::create(&tmp_path)?);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
        drop(writer);

        std::fs::rename(&tmp_path, &path)?;
        tracing::debug!(key, dir = %self.dir.display(), "settings saved");
        Ok(())
    }

    pub fn save_dataset(&self, dataset: &ImportedDataset) -> Result<()> {
        self.put(DATASET_KEY, dataset)
    }

    pub fn load_dataset(&self) -> Result<Option<ImportedDataset>> {
        self.get(DATASET_KEY)
    }

    pub fn save_mapping(&self, mapping: &FieldMapping) -> Result<()> {
        self.put(MAPPING_KEY, mapping)
    }

    pub fn load_mapping(&self) -> Result<Option<FieldMapping>> {
        let mapping = self
            .read_raw(MAPPING_KEY)?
            .map(|json| FieldMapping::from_json(&json))
            .transpose()?;
        Ok(mapping)
    }

    pub fn save_priority_config(&self, config: &PriorityConfig) -> Result<()> {
        self.put(PRIORITY_CONFIG_KEY, config)
    }

    pub fn load_priority_config(&self) -> Result<Option<PriorityConfig>> {
        let config = self
            .read_raw(PRIORITY_CONFIG_KEY)?
            .map(|json| PriorityConfig::from_json(&json))
            .transpose()?;
        Ok(config)
    }

    /// Configuration enregistrée, ou celle par défaut
    pub fn load_priority_config_or_default(&self) -> Result<PriorityConfig> {
        Ok(self.load_priority_config()?.unwrap_or_default())
    }

    /// Supprime toutes les clés; retourne le nombre de fichiers supprimés
    pub fn clear(&self) -> Result<usize> {
        let mut removed = 0;
        for key in ALL_KEYS {
            let path = self.key_path(key);
            if path.exists() {
                std::fs::remove_file(&path)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// Identifiant d'un import: empreinte SHA-256 des en-têtes et des lignes
pub fn dataset_id(headers: &[String], rows: &[Record]) -> String {
    let mut hasher = Sha256::new();
    for header in headers {
        hasher.update(header.as_bytes());
        hasher.update(b"\x1f");
    }
    for row in rows {
        hasher.update(b"\x1e");
        for (key, value) in row {
            hasher.update(key.as_bytes());
            hasher.update(b"\x1f");
            hasher.update(value.as_bytes());
            hasher.update(b"\x1f");
        }
    }
    let digest = hasher.finalize();
    hex::encode(&digest[..8])
}

/// Nouveau jeu de données horodaté à partir d'un tableau lu et d'un mapping confirmé
pub fn new_dataset(table: Table, mapping: FieldMapping) -> ImportedDataset {
    ImportedDataset {
        id: dataset_id(&table.headers, &table.rows),
        imported_at: chrono::Utc::now().to_rfc3339(),
        headers: table.headers,
        rows: table.rows,
        mapping,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournalError;
    use journal_bord_common::Priority;
    use tempfile::tempdir;

    fn table() -> Table {
        let mut row = Record::new();
        row.insert("UNITÉ".to_string(), "12".to_string());
        Table {
            headers: vec!["UNITÉ".to_string()],
            rows: vec![row],
        }
    }

    #[test]
    fn test_absent_keys_are_none() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = SettingsStore::open(dir.path().join("store"));

        assert!(store.load_dataset().unwrap().is_none());
        assert!(store.load_mapping().unwrap().is_none());
        assert!(store.load_priority_config().unwrap().is_none());
        assert_eq!(store.load_priority_config_or_default().unwrap(), PriorityConfig::default());
    }

    #[test]
    fn test_priority_config_persisted() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = SettingsStore::open(dir.path());

        let mut config = PriorityConfig::default();
        config.set_tier_from_list(Priority::P3, "tapis, siège");
        store.save_priority_config(&config).unwrap();

        assert_eq!(store.load_priority_config_or_default().unwrap(), config);
        assert!(store.key_path(PRIORITY_CONFIG_KEY).ends_with("priorityConfig.json"));
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = SettingsStore::open(dir.path());

        store.save_mapping(&FieldMapping::default()).unwrap();
        store.save_dataset(&new_dataset(table(), FieldMapping::default())).unwrap();

        assert_eq!(store.clear().unwrap(), 2);
        assert!(store.load_mapping().unwrap().is_none());
        assert_eq!(store.clear().unwrap(), 0);
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = SettingsStore::open(dir.path());
        std::fs::write(store.key_path(MAPPING_KEY), "{ invalide").unwrap();
        std::fs::write(store.key_path(PRIORITY_CONFIG_KEY), "\"texte\"").unwrap();

        assert!(matches!(store.load_mapping(), Err(JournalError::Common(_))));
        assert!(matches!(store.load_priority_config(), Err(JournalError::Common(_))));
    }

    #[test]
    fn test_save_replaces_without_leftover() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = SettingsStore::open(dir.path());

        let mut mapping = FieldMapping::default();
        mapping.unit = "UNITÉ".to_string();
        store.save_mapping(&FieldMapping::default()).unwrap();
        store.save_mapping(&mapping).unwrap();

        assert_eq!(store.load_mapping().unwrap(), Some(mapping));
        assert!(!dir.path().join("mapping.json.tmp").exists());
    }

    #[test]
    fn test_interrupted_write_keeps_previous_value() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = SettingsStore::open(dir.path());

        let mut config = PriorityConfig::default();
        config.set_tier_from_list(Priority::P1, "moteur");
        store.save_priority_config(&config).unwrap();

        // écriture coupée en cours de route: seul le fichier temporaire est tronqué
        std::fs::write(dir.path().join("priorityConfig.json.tmp"), "{\"P1\": [\"mot").unwrap();

        assert_eq!(store.load_priority_config().unwrap(), Some(config.clone()));

        // l'enregistrement suivant écrase le reste temporaire
        store.save_priority_config(&PriorityConfig::default()).unwrap();
        assert_eq!(store.load_priority_config_or_default().unwrap(), PriorityConfig::default());
        assert!(!dir.path().join("priorityConfig.json.tmp").exists());
    }

    #[test]
    fn test_dataset_id_is_content_hash() {
        let a = table();
        let mut b = table();
        assert_eq!(dataset_id(&a.headers, &a.rows), dataset_id(&b.headers, &b.rows));
        assert_eq!(dataset_id(&a.headers, &a.rows).len(), 16);

        b.rows[0].insert("UNITÉ".to_string(), "13".to_string());
        assert_ne!(dataset_id(&a.headers, &a.rows), dataset_id(&b.headers, &b.rows));
    }

    #[test]
    fn test_new_dataset() {
        let dataset = new_dataset(table(), FieldMapping::default());
        assert_eq!(dataset.headers, vec!["UNITÉ".to_string()]);
        assert_eq!(dataset.rows.len(), 1);
        assert!(chrono::DateTime::parse_from_rfc3339(&dataset.imported_at).is_ok());
    }
}
