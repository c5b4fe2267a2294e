//! Report types returned as JSON by `spoke` commands.
//!
//! These structs define the shape of output for `spoke check`,
//! `spoke scenarios` and `spoke inventory`. They carry plain structured
//! values; presentation is left to the CLI renderer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::{BuildWarning, Catalog};
use crate::counts::{Counts, Tally};
use crate::enums::ExperienceLevel;
use crate::findings::ValidationFinding;

/// Response from `spoke check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditReport {
    pub catalog: Catalog,
    pub warnings: Vec<BuildWarning>,
    pub findings: Vec<ValidationFinding>,
    pub counts: Counts,
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

/// A preferred-variant entry surfaced for one persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Highlight {
    pub intensity: String,
    pub workout: String,
    pub variant: String,
    pub duration: Option<u32>,
    pub passed: bool,
}

/// Outcome of walking one persona through its goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScenarioResult {
    pub persona_id: String,
    pub name: String,
    pub level: ExperienceLevel,
    pub goal: String,
    pub preferred_variant: String,
    pub ftp_watts: u32,
    pub goal_found: bool,
    pub workouts: u32,
    pub checks: Tally,
    /// Goal found and no failed checks.
    pub success: bool,
    pub highlights: Vec<Highlight>,
}

/// Per-goal rollup across every persona targeting that goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GoalScenarioSummary {
    pub goal: String,
    pub testers: u32,
    pub workouts: u32,
    pub checks: Tally,
}

/// Response from `spoke scenarios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScenarioReport {
    pub results: Vec<ScenarioResult>,
    pub by_goal: Vec<GoalScenarioSummary>,
    pub overall: Tally,
}

impl ScenarioReport {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|result| !result.success)
    }
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VariantCount {
    pub label: String,
    pub present: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailsInventory {
    pub present: u32,
    pub with_main: u32,
    pub with_full_structure: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BucketInventory {
    pub label: String,
    pub declared: bool,
    pub workouts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GoalInventory {
    pub goal: String,
    pub workouts: u32,
    /// Declared variant slots, i.e. `workouts × variant labels`.
    pub expected_variants: u32,
    pub buckets: Vec<BucketInventory>,
}

/// Response from `spoke inventory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Inventory {
    /// Distinct top-level labels declared by the document.
    pub declared_goals: Vec<String>,
    /// Labels declared more than once.
    pub duplicate_goals: Vec<String>,
    pub missing_goals: Vec<String>,
    pub unexpected_goals: Vec<String>,
    pub workouts: u32,
    pub variants: Vec<VariantCount>,
    pub details: DetailsInventory,
    pub goals: Vec<GoalInventory>,
}
