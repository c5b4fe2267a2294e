//! Content rules applied to every variant.

use serde::{Deserialize, Serialize};
use spoke_core::enums::StructureCheck;
use spoke_core::schema::RuleSet;

use crate::error::ConfigError;

fn default_main_marker() -> String {
    RuleSet::default().main_marker
}

fn default_warmup_marker() -> String {
    RuleSet::default().warmup_marker
}

fn default_cooldown_marker() -> String {
    RuleSet::default().cooldown_marker
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RulesConfig {
    #[serde(default = "default_main_marker")]
    pub main_marker: String,
    #[serde(default = "default_warmup_marker")]
    pub warmup_marker: String,
    #[serde(default = "default_cooldown_marker")]
    pub cooldown_marker: String,

    /// `off`, `advisory` or `blocking`.
    #[serde(default)]
    pub structure: StructureCheck,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            main_marker: default_main_marker(),
            warmup_marker: default_warmup_marker(),
            cooldown_marker: default_cooldown_marker(),
            structure: StructureCheck::default(),
        }
    }
}

impl RulesConfig {
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] for a blank marker.
    pub fn to_rules(&self) -> Result<RuleSet, ConfigError> {
        for (field, marker) in [
            ("rules.main_marker", &self.main_marker),
            ("rules.warmup_marker", &self.warmup_marker),
            ("rules.cooldown_marker", &self.cooldown_marker),
        ] {
            if marker.trim().is_empty() {
                return Err(ConfigError::invalid(field, "marker must not be blank"));
            }
        }

        Ok(RuleSet {
            main_marker: self.main_marker.clone(),
            warmup_marker: self.warmup_marker.clone(),
            cooldown_marker: self.cooldown_marker.clone(),
            structure: self.structure,
        })
    }
}
