use clap::Parser;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::state::catalog::CatalogSource;

/// Command line flags. Each one overrides the settings file.
#[derive(Parser, Debug, Default)]
#[command(name = "movieslib", version, about = "Browse a local movie catalog")]
pub struct Cli {
    /// Catalog JSON file to open instead of the bundled one
    #[arg(long, env = "MOVIESLIB_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Directory holding poster images
    #[arg(long, env = "MOVIESLIB_ASSETS")]
    pub assets: Option<PathBuf>,

    /// Settings file (defaults to the per-user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Contents of `settings.json`; every key is optional
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub assets_dir: Option<PathBuf>,
}

/// Fully resolved startup configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub catalog: CatalogSource,
    pub assets_dir: PathBuf,
}

/// Get the path where the settings file lives by default
/// - Linux: ~/.config/movieslib/settings.json
/// - macOS: ~/Library/Application Support/movieslib/settings.json
/// - Windows: %APPDATA%\movieslib\settings.json
pub fn default_settings_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("movieslib");
    path.push("settings.json");
    Some(path)
}

/// Read a settings file. A missing file means "no settings".
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl AppConfig {
    /// Combine flags, settings and defaults, in that order of precedence
    pub fn resolve(cli: &Cli, settings: Settings) -> Self {
        let catalog = match cli.catalog.clone().or(settings.catalog_path) {
            Some(path) => CatalogSource::File(path),
            None => CatalogSource::Bundled,
        };

        let assets_dir = cli
            .assets
            .clone()
            .or(settings.assets_dir)
            .unwrap_or_else(|| PathBuf::from("assets"));

        Self { catalog, assets_dir }
    }

    /// Resolve the configuration for this run.
    ///
    /// A broken settings file is reported and ignored.
    pub fn load(cli: &Cli) -> Self {
        let settings_path = cli.config.clone().or_else(default_settings_path);

        let settings = match settings_path {
            Some(path) => load_settings(&path).unwrap_or_else(|e| {
                warn!("⚠️  {}; using defaults", e);
                Settings::default()
            }),
            None => Settings::default(),
        };

        let config = Self::resolve(cli, settings);
        info!(
            "⚙️  Catalog: {}, posters: {}",
            config.catalog,
            config.assets_dir.display()
        );
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = AppConfig::resolve(&Cli::default(), Settings::default());
        assert_eq!(config.catalog, CatalogSource::Bundled);
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_settings_override_defaults() {
        let settings = Settings {
            catalog_path: Some(PathBuf::from("/data/movies.json")),
            assets_dir: Some(PathBuf::from("/data/posters")),
        };
        let config = AppConfig::resolve(&Cli::default(), settings);

        assert_eq!(config.catalog, CatalogSource::File(PathBuf::from("/data/movies.json")));
        assert_eq!(config.assets_dir, PathBuf::from("/data/posters"));
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli {
            catalog: Some(PathBuf::from("cli.json")),
            ..Cli::default()
        };
        let settings = Settings {
            catalog_path: Some(PathBuf::from("settings.json")),
            assets_dir: Some(PathBuf::from("posters")),
        };
        let config = AppConfig::resolve(&cli, settings);

        assert_eq!(config.catalog, CatalogSource::File(PathBuf::from("cli.json")));
        assert_eq!(config.assets_dir, PathBuf::from("posters"));
    }

    #[test]
    fn test_missing_settings_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"assets_dir": "/srv/posters"}"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.catalog_path, None);
        assert_eq!(settings.assets_dir, Some(PathBuf::from("/srv/posters")));
    }

    #[test]
    fn test_malformed_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_settings(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_falls_back_on_broken_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"catalog_path": 42}"#).unwrap();

        let cli = Cli {
            config: Some(path),
            ..Cli::default()
        };
        assert_eq!(AppConfig::load(&cli).catalog, CatalogSource::Bundled);
    }
}
