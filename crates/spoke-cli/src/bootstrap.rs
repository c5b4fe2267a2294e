use std::path::{Path, PathBuf};

use anyhow::Context;
use spoke_config::SpokeConfig;
use spoke_core::enums::StructureCheck;
use spoke_core::persona::Persona;
use spoke_core::schema::{CatalogSchema, RuleSet};

use crate::cli::GlobalFlags;

/// Everything a catalog command needs, resolved once from configuration.
#[derive(Debug)]
pub struct AuditContext {
    pub config: SpokeConfig,
    pub schema: CatalogSchema,
    pub rules: RuleSet,
    pub personas: Vec<Persona>,
}

impl AuditContext {
    pub fn load(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = SpokeConfig::load_with_dotenv(flags.config.as_deref())
            .context("failed to load spoke configuration")?;
        Self::from_config(config, flags.strict)
    }

    fn from_config(config: SpokeConfig, strict: bool) -> anyhow::Result<Self> {
        let schema = config.catalog_schema()?;
        let mut rules = config.rule_set()?;
        if strict {
            rules.structure = StructureCheck::Blocking;
        }
        let personas = config.persona_panel();

        tracing::debug!(
            goals = schema.goals.len(),
            structure = rules.structure.as_str(),
            personas = personas.len(),
            "audit context ready"
        );

        Ok(Self {
            config,
            schema,
            rules,
            personas,
        })
    }

    /// Read the catalog document named on the command line, falling back to
    /// `catalog.path`.
    pub fn read_catalog(&self, path: Option<&Path>) -> anyhow::Result<(PathBuf, String)> {
        let path = path.map_or_else(|| self.config.catalog.path.clone(), Path::to_path_buf);
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read catalog");
        Ok((path, text))
    }
}
