//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::catalog::{Coordinates, StoreType};
use crate::compare::DEFAULT_MAX_DISTANCE_KM;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the exported catalog snapshot (JSON)
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,

    /// Currency used for totals when the data carries none
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// User location as `[lat, lon]`, used for nearby-store filtering
    #[serde(default)]
    pub location: Option<Coordinates>,

    /// Radius for nearby stores in kilometres
    #[serde(default = "default_max_distance_km")]
    pub max_distance_km: f64,

    /// Rank offers by goods price plus delivery fee
    #[serde(default = "default_include_delivery")]
    pub include_delivery: bool,

    /// Filter: only stores that deliver
    #[serde(default)]
    pub delivery_only: bool,

    /// Filter: only stores of this type
    #[serde(default)]
    pub store_type: Option<StoreType>,
}

fn default_catalog() -> PathBuf {
    PathBuf::from("catalog.json")
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_max_distance_km() -> f64 {
    DEFAULT_MAX_DISTANCE_KM
}

fn default_include_delivery() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            currency: default_currency(),
            format: OutputFormat::Table,
            location: None,
            max_distance_km: default_max_distance_km(),
            include_delivery: default_include_delivery(),
            delivery_only: false,
            store_type: None,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("pricewise.toml");
        if local_config.exists() {
            debug!("Found pricewise.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("pricewise").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(catalog) = std::env::var("PRICEWISE_CATALOG") {
            self.catalog = PathBuf::from(catalog);
        }

        if let Ok(currency) = std::env::var("PRICEWISE_CURRENCY") {
            self.currency = currency.to_uppercase();
        }

        if let Ok(location) = std::env::var("PRICEWISE_LOCATION") {
            if let Ok(l) = location.parse() {
                self.location = Some(l);
            }
        }

        if let Ok(distance) = std::env::var("PRICEWISE_MAX_DISTANCE") {
            if let Ok(d) = distance.parse() {
                self.max_distance_km = d;
            }
        }

        self
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
