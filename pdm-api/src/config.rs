//! Configuration resolution for pdm-api
//!
//! Per-key priority: CLI flag (with env fallback) first, then the TOML
//! file, then the compiled default. The goals sheet URL has no default
//! and is required at startup; the secretariats sheet URL is optional.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pdm_common::{Error, Result};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Command-line arguments for pdm-api
#[derive(Parser, Debug, Default)]
#[command(name = "pdm-api")]
#[command(about = "Development-plan metrics service", long_about = None)]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PDM_PORT")]
    pub port: Option<u16>,

    /// Allowed CORS origin ("*" for permissive)
    #[arg(long, env = "PDM_CORS_ORIGIN")]
    pub cors_origin: Option<String>,

    /// Published CSV export of the product-goal sheet
    #[arg(long, env = "PDM_GOALS_SHEET_URL")]
    pub goals_sheet_url: Option<String>,

    /// Published CSV export of the secretariats sheet
    #[arg(long, env = "PDM_SECRETARIATS_SHEET_URL")]
    pub secretariats_sheet_url: Option<String>,

    /// Cache time-to-live in seconds
    #[arg(long, env = "PDM_CACHE_TTL_SECS")]
    pub cache_ttl_secs: Option<u64>,

    /// TOML config file path
    #[arg(long, env = "PDM_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Keys loadable from the TOML config file; all optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub cors_origin: Option<String>,
    pub goals_sheet_url: Option<String>,
    pub secretariats_sheet_url: Option<String>,
    pub cache_ttl_secs: Option<u64>,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub goals_sheet_url: String,
    pub secretariats_sheet_url: Option<String>,
    pub cache_ttl: Duration,
}

impl Config {
    /// Resolve the runtime configuration from arguments and the TOML
    /// file. A missing default-location file is fine; an explicitly
    /// given missing file, or a malformed one, is an error.
    pub fn resolve(args: &Args) -> Result<Config> {
        let file = load_file_config(args.config.clone())?;

        let goals_sheet_url = args
            .goals_sheet_url
            .clone()
            .or_else(|| file.goals_sheet_url.clone())
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                Error::Config(
                    "Goals sheet URL not configured. Please configure using one of:\n  \
                     1. Flag: --goals-sheet-url <published CSV url>\n  \
                     2. Environment: PDM_GOALS_SHEET_URL=<published CSV url>\n  \
                     3. TOML config: ~/.config/pdm/pdm-api.toml (goals_sheet_url = \"...\")"
                        .to_string(),
                )
            })?;

        let cors_origin = args
            .cors_origin
            .clone()
            .or_else(|| file.cors_origin.clone())
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        Ok(Config {
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            cors_origin: cors_origin.trim().trim_end_matches('/').to_string(),
            goals_sheet_url,
            secretariats_sheet_url: args
                .secretariats_sheet_url
                .clone()
                .or_else(|| file.secretariats_sheet_url.clone())
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty()),
            cache_ttl: Duration::from_secs(
                args.cache_ttl_secs
                    .or(file.cache_ttl_secs)
                    .unwrap_or(DEFAULT_CACHE_TTL_SECS),
            ),
        })
    }
}

/// Read the TOML file when one exists.
fn load_file_config(path: Option<PathBuf>) -> Result<FileConfig> {
    let (path, explicit) = match path {
        Some(p) => (p, true),
        None => match default_config_path() {
            Some(p) => (p, false),
            None => return Ok(FileConfig::default()),
        },
    };

    if !path.exists() {
        if explicit {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return Ok(FileConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|e| {
        Error::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// `~/.config/pdm/pdm-api.toml` (or the platform equivalent).
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pdm").join("pdm-api.toml"))
}
