use crate::mapping_prompt::MappingOverride;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "journal-bord")]
#[command(about = "Journal d'entretien → plan PRÊT À FAIRE", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Journalisation détaillée
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Dossier du magasin de paramètres (prioritaire sur la configuration)
    #[arg(long, global = true, env = "JOURNAL_BORD_STORE")]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Importe un journal (CSV/XLSX) et enregistre le mapping des colonnes
    Import {
        /// Fichier CSV, TSV, XLSX, XLS ou ODS
        #[arg(required = true)]
        input: PathBuf,

        /// Séparateur des fichiers texte (défaut: configuration, sinon ',')
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Liaison champ=EN-TÊTE (répétable), ex. --map unit=UNITÉ
        #[arg(short, long = "map")]
        map: Vec<MappingOverride>,

        /// Confirmer chaque colonne avec une liste de choix
        #[arg(short, long)]
        interactive: bool,
    },

    /// Génère le plan PRÊT À FAIRE
    Plan {
        /// Fichier à planifier directement (sinon: dernier import)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Séparateur des fichiers texte
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Liaison champ=EN-TÊTE pour --input (répétable)
        #[arg(short, long = "map")]
        map: Vec<MappingOverride>,

        /// Fichier ou dossier de sortie (défaut: sortie standard)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Format de sortie (text/json/excel)
        #[arg(short, long)]
        format: Option<PlanFormat>,
    },

    /// Affiche ou modifie les mots-clés de priorité
    Priorities {
        /// Afficher la configuration
        #[arg(long)]
        show: bool,

        /// Mots-clés P1 séparés par des virgules
        #[arg(long)]
        p1: Option<String>,

        /// Mots-clés P2 séparés par des virgules
        #[arg(long)]
        p2: Option<String>,

        /// Mots-clés P3 séparés par des virgules
        #[arg(long)]
        p3: Option<String>,

        /// Revenir aux mots-clés par défaut
        #[arg(long)]
        reset: bool,
    },

    /// Affiche ou corrige le mapping du dernier import
    Mapping {
        /// Liaison champ=EN-TÊTE (répétable)
        #[arg(short, long = "map")]
        map: Vec<MappingOverride>,

        /// Confirmer chaque colonne avec une liste de choix
        #[arg(short, long)]
        interactive: bool,
    },

    /// Affiche ou modifie la configuration
    Config {
        /// Afficher la configuration
        #[arg(long)]
        show: bool,

        /// Dossier du magasin de paramètres
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Séparateur par défaut
        #[arg(long)]
        set_delimiter: Option<char>,

        /// Format de sortie par défaut (text/json/excel)
        #[arg(long)]
        set_format: Option<PlanFormat>,
    },

    /// Efface le dernier import, le mapping et les priorités enregistrés
    Clear,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PlanFormat {
    #[default]
    Text,
    Json,
    Excel,
}

impl PlanFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            PlanFormat::Text => "txt",
            PlanFormat::Json => "json",
            PlanFormat::Excel => "xlsx",
        }
    }
}

impl std::str::FromStr for PlanFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "texte" => Ok(PlanFormat::Text),
            "json" => Ok(PlanFormat::Json),
            "excel" | "xlsx" => Ok(PlanFormat::Excel),
            _ => Err(format!("Format inconnu: {}. Utilisez text, json ou excel", s)),
        }
    }
}

impl std::fmt::Display for PlanFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanFormat::Text => write!(f, "text"),
            PlanFormat::Json => write!(f, "json"),
            PlanFormat::Excel => write!(f, "excel"),
        }
    }
}
