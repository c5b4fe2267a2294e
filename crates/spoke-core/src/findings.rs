use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::Workout;
use crate::enums::FindingKind;

/// Identifies one check slot: a single workout × variant label pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct CheckRef {
    pub goal: String,
    pub intensity: String,
    /// Position of the workout inside its bucket.
    pub workout_index: usize,
    pub workout: String,
    pub variant: String,
}

impl CheckRef {
    #[must_use]
    pub fn of(goal: &str, intensity: &str, workout: &Workout, variant: &str) -> Self {
        Self {
            goal: goal.to_string(),
            intensity: intensity.to_string(),
            workout_index: workout.index,
            workout: workout.display_name(),
            variant: variant.to_string(),
        }
    }
}

impl std::fmt::Display for CheckRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.goal, self.intensity, self.workout, self.variant
        )
    }
}

/// What a finding is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum FindingScope {
    /// A single workout × variant check slot.
    Variant(CheckRef),
    /// The catalog as a whole; `goal` names the goal involved, if any.
    Catalog { goal: Option<String> },
}

/// A single reported defect. Produced only by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationFinding {
    pub scope: FindingScope,
    pub kind: FindingKind,
    pub message: String,
}

impl ValidationFinding {
    #[must_use]
    pub fn variant(check: CheckRef, kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            scope: FindingScope::Variant(check),
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn catalog(goal: Option<String>, kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            scope: FindingScope::Catalog { goal },
            kind,
            message: message.into(),
        }
    }

    /// The check slot this finding references, if variant-scoped.
    #[must_use]
    pub const fn check(&self) -> Option<&CheckRef> {
        match &self.scope {
            FindingScope::Variant(check) => Some(check),
            FindingScope::Catalog { .. } => None,
        }
    }
}
