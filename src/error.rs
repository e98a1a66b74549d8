use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Erreur de configuration: {0}")]
    Config(String),

    #[error("Fichier introuvable: {0}")]
    FileNotFound(String),

    #[error("Format de fichier non pris en charge: {0} (csv, tsv, txt, xlsx, xls, ods)")]
    UnsupportedFormat(String),

    #[error("Séparateur invalide: {0:?} (un caractère ASCII est requis)")]
    InvalidDelimiter(char),

    #[error("Aucune ligne d'en-tête trouvée: {0}")]
    EmptyTable(String),

    #[error("Mapping incomplet, colonnes à choisir: {0}")]
    IncompleteMapping(String),

    #[error("Colonne introuvable pour {field}: {header}")]
    UnknownColumn { field: String, header: String },

    #[error("Aucun import trouvé. Lancez `journal-bord import FICHIER` d'abord")]
    NoDataset,

    #[error("Le format excel exige --output")]
    MissingOutput,

    #[error("Saisie interactive: {0}")]
    Prompt(String),

    #[error("Erreur d'import CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Erreur de lecture du classeur: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Erreur de génération Excel: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),

    #[error("Erreur JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] journal_bord_common::Error),
}

pub type Result<T> = std::result::Result<T, JournalError>;
