//! Finding kinds, rule severities, and persona levels for spoke.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// FindingKind
// ---------------------------------------------------------------------------

/// Defect taxonomy produced by the validator.
///
/// Variant-scoped kinds reference exactly one workout × variant check slot.
/// `GoalSetMismatch` is the only catalog-scoped kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// A declared workout has no block for one of its variant labels.
    MissingVariant,
    InvalidDuration,
    MissingDisplayName,
    MissingDetails,
    MissingMainSection,
    /// Details lack the warm-up or cool-down marker.
    IncompleteStructure,
    GoalSetMismatch,
}

impl FindingKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingVariant => "missing_variant",
            Self::InvalidDuration => "invalid_duration",
            Self::MissingDisplayName => "missing_display_name",
            Self::MissingDetails => "missing_details",
            Self::MissingMainSection => "missing_main_section",
            Self::IncompleteStructure => "incomplete_structure",
            Self::GoalSetMismatch => "goal_set_mismatch",
        }
    }

    /// Whether a finding of this kind fails its check under `structure`.
    ///
    /// Every kind blocks except `IncompleteStructure`, which only blocks when
    /// the structure rule is configured as [`StructureCheck::Blocking`].
    #[must_use]
    pub const fn is_blocking(self, structure: StructureCheck) -> bool {
        match self {
            Self::IncompleteStructure => matches!(structure, StructureCheck::Blocking),
            _ => true,
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StructureCheck
// ---------------------------------------------------------------------------

/// Severity of the warm-up / cool-down structure rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StructureCheck {
    /// The rule is not evaluated.
    Off,
    /// Findings are reported but never fail a check.
    #[default]
    Advisory,
    /// Findings fail their check like any other defect.
    Blocking,
}

impl StructureCheck {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Advisory => "advisory",
            Self::Blocking => "blocking",
        }
    }
}

impl fmt::Display for StructureCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ExperienceLevel
// ---------------------------------------------------------------------------

/// Rider experience level of a scenario persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
