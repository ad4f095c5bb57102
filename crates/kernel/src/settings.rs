use std::path::Path;

use anyhow::{anyhow, Context};
use rust_decimal::Decimal;
use serde::Deserialize;
use shelf_catalog::{CatalogEntry, EntryFields, EntryKind, StockLine};

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub library: LibrarySettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, environment overlay
    /// and `SHELF__*` variables.
    ///
    /// `config_dir` defaults to the `config` directory under the current
    /// working directory.
    pub fn load_from(environment: &str, config_dir: Option<&Path>) -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let config_dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir()
                .map(|cwd| cwd.join("config"))
                .with_context(|| "unable to resolve current directory")?,
        };

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(config::Environment::with_prefix("SHELF").separator("__"));

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        // Override environment field with parsed enum variant.
        settings.environment = match environment {
            "local" => Environment::Local,
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            other => {
                return Err(anyhow!(
                    "unsupported environment '{}'; expected local/staging/production",
                    other
                ));
            }
        };

        tracing::debug!(
            env = ?settings.environment,
            config_dir = %config_dir.display(),
            "settings loaded"
        );
        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LibrarySettings {
    #[serde(default = "LibrarySettings::default_name")]
    pub name: String,
    #[serde(default = "LibrarySettings::default_assistant")]
    pub assistant: String,
    /// Stock the collection that ships with the application.
    #[serde(default = "LibrarySettings::default_builtin_collection")]
    pub builtin_collection: bool,
    /// Extra titles declared in configuration.
    #[serde(default)]
    pub stock: Vec<StockSettings>,
}

impl LibrarySettings {
    fn default_name() -> String {
        "The Wall".to_string()
    }

    fn default_assistant() -> String {
        "Alica".to_string()
    }

    fn default_builtin_collection() -> bool {
        true
    }
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            assistant: Self::default_assistant(),
            builtin_collection: Self::default_builtin_collection(),
            stock: Vec::new(),
        }
    }
}

/// Catalog kind of a configured stock line.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StockKind {
    #[default]
    Standard,
    Illustrated,
    Collectible,
}

/// One `[[library.stock]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct StockSettings {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genre: Option<String>,
    pub pages: i32,
    #[serde(default)]
    pub language: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
    #[serde(default)]
    pub kind: StockKind,
    #[serde(default)]
    pub has_illustrations: bool,
    #[serde(default)]
    pub signed: bool,
    #[serde(default)]
    pub rare: bool,
}

impl StockSettings {
    pub fn entry_kind(&self) -> EntryKind {
        match self.kind {
            StockKind::Standard => EntryKind::Standard,
            StockKind::Illustrated => EntryKind::Illustrated {
                has_illustrations: self.has_illustrations,
            },
            StockKind::Collectible => EntryKind::Collectible {
                signed: self.signed,
                rare: self.rare,
            },
        }
    }

    /// Validate the configured fields into a stock line.
    pub fn to_stock_line(&self) -> anyhow::Result<StockLine> {
        let fields = EntryFields {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            page_count: self.pages,
            language: self.language.clone(),
            base_price: self.price,
        };
        let entry = CatalogEntry::new(fields, self.entry_kind())
            .with_context(|| format!("invalid stock entry '{}'", self.title))?;
        Ok(StockLine::new(entry, self.quantity))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default = "TelemetrySettings::default_filter")]
    pub filter: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl TelemetrySettings {
    fn default_filter() -> String {
        "warn".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            filter: Self::default_filter(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
