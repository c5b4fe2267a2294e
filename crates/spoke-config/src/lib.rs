//! # spoke-config
//!
//! Layered configuration loading for spoke using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SPOKE_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.spoke/config.toml`
//! 4. User-level `~/.config/spoke/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SPOKE_CATALOG__PATH` -> `catalog.path`,
//! `SPOKE_RULES__STRUCTURE` -> `rules.structure`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use spoke_config::SpokeConfig;
//!
//! let config = SpokeConfig::load_with_dotenv(None).expect("config");
//! let schema = config.catalog_schema().expect("schema");
//! println!("auditing {} for {:?}", config.catalog.path.display(), schema.goals);
//! ```

mod catalog;
mod error;
mod personas;
mod rules;
mod schema;

pub use catalog::{CatalogConfig, DEFAULT_CATALOG_PATH};
pub use error::ConfigError;
pub use personas::PersonaConfig;
pub use rules::RulesConfig;
pub use schema::SchemaConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use spoke_core::persona::Persona;
use spoke_core::schema::{CatalogSchema, RuleSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpokeConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub schema: SchemaConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default = "personas::default_personas")]
    pub personas: Vec<PersonaConfig>,
}

impl Default for SpokeConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            schema: SchemaConfig::default(),
            rules: RulesConfig::default(),
            personas: personas::default_personas(),
        }
    }
}

impl SpokeConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// support. `explicit` is an extra TOML file layered above the project
    /// file; it must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `explicit` is not a file,
    /// and [`ConfigError::Figment`] when a source cannot be read or a value
    /// has the wrong type.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::invalid(
                    "config",
                    format!("{} is not a file", path.display()),
                ));
            }
        }
        Self::figment(explicit).extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".spoke/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("SPOKE_").split("__"))
    }

    /// The validated catalog shape, including the root label.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] for unusable label lists.
    pub fn catalog_schema(&self) -> Result<CatalogSchema, ConfigError> {
        self.schema.to_schema(self.catalog.root_label.as_deref())
    }

    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] for a blank marker.
    pub fn rule_set(&self) -> Result<RuleSet, ConfigError> {
        self.rules.to_rules()
    }

    /// The configured personas. Ids are unique: an entry whose derived id is
    /// already taken gets its one-based list position appended.
    #[must_use]
    pub fn persona_panel(&self) -> Vec<Persona> {
        let mut panel: Vec<Persona> = Vec::with_capacity(self.personas.len());
        for (position, entry) in self.personas.iter().enumerate() {
            let mut persona = entry.to_persona();
            if panel.iter().any(|other| other.id == persona.id) {
                persona.id = format!("{}-{}", persona.id, position + 1);
            }
            panel.push(persona);
        }
        panel
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("spoke").join("config.toml"))
    }
}
