use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ExperienceLevel;

/// Synthetic rider profile used to drive scenario spot-checks.
///
/// Personas only select which goal and variant get highlighted in scenario
/// reports. They never influence validation outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub level: ExperienceLevel,
    pub goal: String,
    pub preferred_variant: String,
    /// Functional threshold power in watts.
    pub ftp_watts: u32,
}

impl Persona {
    #[must_use]
    pub fn new(
        name: &str,
        level: ExperienceLevel,
        goal: &str,
        preferred_variant: &str,
        ftp_watts: u32,
    ) -> Self {
        Self {
            id: format!("{goal}-{level}-{}", slug(name)),
            name: name.to_string(),
            level,
            goal: goal.to_string(),
            preferred_variant: preferred_variant.to_string(),
            ftp_watts,
        }
    }
}

/// Lowercase ASCII alphanumerics, every other run of characters as one `-`.
fn slug(name: &str) -> String {
    name.split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// The nine-tester panel: one beginner, intermediate and advanced rider per
/// default goal, preferring the short, medium and long variant respectively.
#[must_use]
pub fn default_panel() -> Vec<Persona> {
    use ExperienceLevel::{Advanced, Beginner, Intermediate};

    vec![
        Persona::new("Sarah", Beginner, "ftp", "short", 180),
        Persona::new("Mike", Intermediate, "ftp", "medium", 250),
        Persona::new("Alex", Advanced, "ftp", "long", 320),
        Persona::new("Emma", Beginner, "climbing", "short", 170),
        Persona::new("Tom", Intermediate, "climbing", "medium", 240),
        Persona::new("Lisa", Advanced, "climbing", "long", 300),
        Persona::new("John", Beginner, "granfondo", "short", 190),
        Persona::new("Maria", Intermediate, "granfondo", "medium", 260),
        Persona::new("Chris", Advanced, "granfondo", "long", 310),
    ]
}
