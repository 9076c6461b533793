//! CLI entry point for ticklist.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ticklist_store_json::JsonStore;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use config::Config;

mod config;
mod tui;

/// Terminal task list backed by a single JSON file.
#[derive(Parser, Debug)]
#[command(
    name = "ticklist",
    version,
    about = "ticklist: a terminal task list with filtering, search, and a JSON file backend"
)]
struct Cli {
    /// Path of the task file (defaults to the configured or platform location).
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let Cli { file } = Cli::parse();

    install_tracing();

    let config = Config::load().context("failed to load configuration")?;
    let path = resolve_task_file(file, &config)
        .context("could not determine where to keep the task file")?;
    tracing::debug!(path = %path.display(), "resolved task file");

    let store = JsonStore::open(path);
    tui::run(store)
}

/// Pick the task file location: CLI flag, then config file, then platform default.
fn resolve_task_file(flag: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    flag.or_else(|| config.storage.path.clone())
        .or_else(|| dirs::data_dir().map(|dir| dir.join("ticklist").join("tasks.json")))
}

fn install_tracing() {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use std::path::Path;

    #[test]
    fn parse_without_flags() {
        let cli = Cli::parse_from(["ticklist"]);
        assert!(cli.file.is_none());
    }

    #[test]
    fn parse_file_override() {
        let cli = Cli::parse_from(["ticklist", "--file", "/tmp/tasks.json"]);
        assert_eq!(cli.file.as_deref(), Some(Path::new("/tmp/tasks.json")));
    }

    #[test]
    fn flag_beats_config() {
        let config = Config {
            storage: StorageConfig {
                path: Some(PathBuf::from("/from/config.json")),
            },
        };
        let resolved = resolve_task_file(Some(PathBuf::from("/from/flag.json")), &config);
        assert_eq!(resolved.as_deref(), Some(Path::new("/from/flag.json")));
    }

    #[test]
    fn config_beats_platform_default() {
        let config = Config {
            storage: StorageConfig {
                path: Some(PathBuf::from("/from/config.json")),
            },
        };
        let resolved = resolve_task_file(None, &config);
        assert_eq!(resolved.as_deref(), Some(Path::new("/from/config.json")));
    }
}
