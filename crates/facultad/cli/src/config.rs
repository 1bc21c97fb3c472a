//! Configuration for the facultad CLI

use facultad_electoral::RegistrarDefaults;
use facultad_store::StoreConfig;
use serde::{Deserialize, Serialize};

/// Main CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultadConfig {
    /// Storage configuration
    #[serde(default = "default_storage")]
    pub storage: StoreConfig,

    /// Attributes stamped by the census registrar
    #[serde(default)]
    pub registrar: RegistrarDefaults,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for FacultadConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            registrar: RegistrarDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_storage() -> StoreConfig {
    StoreConfig::Sqlite {
        url: "sqlite://facultad.db".to_string(),
        max_connections: 4,
        connect_timeout_secs: 5,
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl FacultadConfig {
    /// Load configuration: defaults, then the optional file, then
    /// `FACULTAD__`-prefixed environment variables (`FACULTAD__STORAGE__URL`).
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&FacultadConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // Field names contain underscores, so nesting uses a double separator.
        builder = builder.add_source(
            config::Environment::with_prefix("FACULTAD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Point the on-disk store at `url`, keeping pool settings.
    pub fn with_database_url(mut self, url: String) -> Self {
        self.storage = match self.storage {
            StoreConfig::Sqlite {
                max_connections,
                connect_timeout_secs,
                ..
            } => StoreConfig::Sqlite {
                url,
                max_connections,
                connect_timeout_secs,
            },
            StoreConfig::Memory => StoreConfig::Sqlite {
                url,
                max_connections: 4,
                connect_timeout_secs: 5,
            },
        };
        self
    }
}
