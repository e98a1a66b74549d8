use anyhow::{bail, Context, Result};
use clap::Parser;
use journal_bord::cli::{Cli, Commands, PlanFormat};
use journal_bord::config::Config;
use journal_bord::mapping_prompt::{self, MappingOverride};
use journal_bord::store::{self, SettingsStore};
use journal_bord::{export, tabular};
use journal_bord::error::JournalError;
use journal_bord_common::{build_ready_list, FieldMapping, Priority, PriorityConfig, DEFAULT_RULES};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Mapping initial d'un fichier: dernier mapping enregistré, surcharges, puis saisie
fn resolve_mapping(
    headers: &[String],
    previous: Option<&FieldMapping>,
    overrides: &[MappingOverride],
    interactive: bool,
) -> Result<FieldMapping> {
    let mut mapping = FieldMapping::detect(headers, previous);
    mapping_prompt::apply_overrides(&mut mapping, headers, overrides)?;

    if interactive {
        mapping = mapping_prompt::prompt_mapping(headers, &mapping)?;
    }

    Ok(mapping)
}

fn print_priorities(store: &SettingsStore) -> Result<()> {
    let config = store.load_priority_config_or_default()?;
    println!("Priorités:");
    for tier in Priority::ALL {
        println!("  {}: {}", tier, config.keywords(tier).join(", "));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load().context("lecture de la configuration")?;
    let store = SettingsStore::open(config.store_dir(cli.store.as_deref())?);
    tracing::debug!(store = %store.dir().display(), "settings store");

    match cli.command {
        Commands::Import { input, delimiter, map, interactive } => {
            let table = tabular::read_table(&input, delimiter.unwrap_or(config.delimiter))
                .with_context(|| format!("import de {}", input.display()))?;
            println!("✔ {}: {} colonnes, {} lignes", input.display(), table.headers.len(), table.len());

            let previous = store.load_mapping()?;
            let mapping = resolve_mapping(&table.headers, previous.as_ref(), &map, interactive)?;
            println!("Mapping des colonnes:\n{}", mapping_prompt::describe(&mapping));

            mapping_prompt::ensure_complete(&mapping)
                .context("complétez le mapping avec --map champ=EN-TÊTE ou --interactive")?;

            let dataset = store::new_dataset(table, mapping.clone());
            store.save_mapping(&mapping)?;
            store.save_dataset(&dataset)?;
            tracing::info!(id = %dataset.id, rows = dataset.rows.len(), "dataset saved");

            println!("✔ Mapping et données sauvegardés ({})", store.dir().display());
        }

        Commands::Plan { input, delimiter, map, output, format } => {
            let format = match format {
                Some(format) => format,
                None => config
                    .default_format
                    .parse::<PlanFormat>()
                    .map_err(anyhow::Error::msg)
                    .context("format par défaut de la configuration")?,
            };

            let (rows, mapping) = match input {
                Some(path) => {
                    let table = tabular::read_table(&path, delimiter.unwrap_or(config.delimiter))
                        .with_context(|| format!("import de {}", path.display()))?;
                    let previous = store.load_mapping()?;
                    let mapping = resolve_mapping(&table.headers, previous.as_ref(), &map, false)?;
                    (table.rows, mapping)
                }
                None => {
                    if !map.is_empty() {
                        bail!("--map s'utilise avec --input; pour le dernier import: `journal-bord mapping --map ...`");
                    }
                    let dataset = store
                        .load_dataset()?
                        .ok_or(JournalError::NoDataset)?;
                    tracing::debug!(id = %dataset.id, imported_at = %dataset.imported_at, "using saved dataset");
                    (dataset.rows, dataset.mapping)
                }
            };

            mapping_prompt::ensure_complete(&mapping)?;

            let priorities = store.load_priority_config_or_default()?;
            let ready = build_ready_list(&rows, &mapping, DEFAULT_RULES, &priorities);
            eprintln!("{} tâche(s) prête(s) à faire sur {} ligne(s).", ready.len(), rows.len());

            if let Some(path) = export::export_plan(&ready, &mapping, &format, output.as_deref())? {
                eprintln!("✔ Plan ({}) écrit: {}", format, path.display());
            }
        }

        Commands::Priorities { show, p1, p2, p3, reset } => {
            let mut priorities = if reset {
                PriorityConfig::default()
            } else {
                store.load_priority_config_or_default()?
            };

            let updates = [(Priority::P1, p1), (Priority::P2, p2), (Priority::P3, p3)];
            let changed = reset || updates.iter().any(|(_, list)| list.is_some());

            for (tier, list) in updates {
                if let Some(list) = list {
                    priorities.set_tier_from_list(tier, &list);
                }
            }

            if changed {
                store.save_priority_config(&priorities)?;
                println!("✔ Priorités enregistrées");
            }

            if show || !changed {
                print_priorities(&store)?;
            }
        }

        Commands::Mapping { map, interactive } => {
            let Some(mut dataset) = store.load_dataset()? else {
                if !map.is_empty() || interactive {
                    return Err(JournalError::NoDataset.into());
                }
                match store.load_mapping()? {
                    Some(mapping) => println!("Mapping enregistré:\n{}", mapping_prompt::describe(&mapping)),
                    None => println!("Aucun mapping enregistré"),
                }
                return Ok(());
            };

            if !map.is_empty() || interactive {
                let mapping = resolve_mapping(&dataset.headers, Some(&dataset.mapping), &map, interactive)?;
                mapping_prompt::ensure_complete(&mapping)?;
                store.save_mapping(&mapping)?;
                dataset.mapping = mapping;
                store.save_dataset(&dataset)?;
                println!("✔ Mapping enregistré");
            }

            println!("Import {} ({})", dataset.id, dataset.imported_at);
            println!("Mapping des colonnes:\n{}", mapping_prompt::describe(&dataset.mapping));

            let unknown = dataset.mapping.validate_against(&dataset.headers);
            if !unknown.is_empty() {
                let labels: Vec<&str> = unknown.iter().map(|f| f.label()).collect();
                tracing::warn!(fields = %labels.join(", "), "mapped columns missing from dataset headers");
            }
        }

        Commands::Config { show, set_store_dir, set_delimiter, set_format } => {
            let mut config = config;
            let mut changed = false;

            if let Some(dir) = set_store_dir {
                config.store_dir = Some(dir);
                changed = true;
            }
            if let Some(delimiter) = set_delimiter {
                config.delimiter = delimiter;
                changed = true;
            }
            if let Some(format) = set_format {
                config.default_format = format.to_string();
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ Configuration enregistrée: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Configuration:");
                println!("  Magasin: {}", config.store_dir(cli.store.as_deref())?.display());
                println!("  Séparateur: {:?}", config.delimiter);
                println!("  Format par défaut: {}", config.default_format);
            }
        }

        Commands::Clear => {
            let removed = store.clear()?;
            if removed == 0 {
                println!("Rien à effacer ({})", store.dir().display());
            } else {
                println!("✔ {} élément(s) effacé(s) ({})", removed, store.dir().display());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_mapping_auto_detects() {
        let headers: Vec<String> = ["UNITÉ", "PIÈCE REQUISE", "PIÈCE REÇUE", "PIÈCES INSTALLÉES", "COMMENTAIRES"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mapping = resolve_mapping(&headers, None, &[], false).unwrap();
        assert!(mapping.is_complete());
    }

    #[test]
    fn test_resolve_mapping_rejects_unknown_override() {
        let headers = vec!["A".to_string()];
        let overrides = vec!["unit=B".parse::<MappingOverride>().unwrap()];
        assert!(resolve_mapping(&headers, None, &overrides, false).is_err());
    }
}
