//! Types d'erreur du moteur

use thiserror::Error;

/// Erreur commune
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Champ inconnu: {0}")]
    UnknownField(String),
}

/// Alias de Result
pub type Result<T> = std::result::Result<T, Error>;
