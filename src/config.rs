use crate::error::{JournalError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store_dir: Option<PathBuf>,
    pub delimiter: char,
    pub default_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: None,
            delimiter: ',',
            default_format: "text".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.json"))
    }

    fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| JournalError::Config("dossier personnel introuvable".into()))?;
        Ok(home.join(".config").join("journal-bord"))
    }

    /// Dossier du magasin de paramètres
    ///
    /// `override_dir` (option `--store` ou `JOURNAL_BORD_STORE`) passe avant
    /// la configuration, qui passe avant le dossier par défaut.
    pub fn store_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }

        match &self.store_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::base_dir()?.join("store")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.default_format, "text");
        assert!(config.store_dir.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"delimiter": ";"}"#).unwrap();
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.default_format, "text");
    }

    #[test]
    fn test_store_dir_precedence() {
        let config = Config {
            store_dir: Some(PathBuf::from("/srv/journal")),
            ..Config::default()
        };
        assert_eq!(config.store_dir(None).unwrap(), PathBuf::from("/srv/journal"));
        assert_eq!(
            config.store_dir(Some(Path::new("/tmp/magasin"))).unwrap(),
            PathBuf::from("/tmp/magasin")
        );
    }
}
