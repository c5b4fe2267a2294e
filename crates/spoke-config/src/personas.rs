//! Scenario persona panel.

use serde::{Deserialize, Serialize};
use spoke_core::enums::ExperienceLevel;
use spoke_core::persona::{Persona, default_panel};

/// One `[[personas]]` entry. The persona id is derived, not configured.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PersonaConfig {
    pub name: String,
    pub level: ExperienceLevel,
    pub goal: String,
    pub preferred_variant: String,
    pub ftp_watts: u32,
}

impl From<&Persona> for PersonaConfig {
    fn from(persona: &Persona) -> Self {
        Self {
            name: persona.name.clone(),
            level: persona.level,
            goal: persona.goal.clone(),
            preferred_variant: persona.preferred_variant.clone(),
            ftp_watts: persona.ftp_watts,
        }
    }
}

impl PersonaConfig {
    #[must_use]
    pub fn to_persona(&self) -> Persona {
        Persona::new(
            &self.name,
            self.level,
            &self.goal,
            &self.preferred_variant,
            self.ftp_watts,
        )
    }
}

pub(crate) fn default_personas() -> Vec<PersonaConfig> {
    default_panel().iter().map(PersonaConfig::from).collect()
}
