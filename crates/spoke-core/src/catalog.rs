//! In-memory catalog model produced by the record builder.
//!
//! ```text
//! Catalog
//! └── Goal (schema order)
//!     └── IntensityBucket (schema order, always one per intensity label)
//!         └── Workout (document order)
//!             └── VariantSlot (schema order, always one per variant label)
//!                 └── Variant | missing
//! ```
//!
//! Field-level absence is carried as `None` rather than rejected, so the
//! validator can report exactly which field is missing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The extracted goal → intensity → workout → variant tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Catalog {
    /// Expected goals that were located, in schema order.
    pub goals: Vec<Goal>,
    /// Every top-level label declared by the document, in document order,
    /// duplicates preserved.
    pub declared_goals: Vec<String>,
}

impl Catalog {
    #[must_use]
    pub fn goal(&self, name: &str) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.name == name)
    }

    /// Total number of workouts across all goals and buckets.
    #[must_use]
    pub fn workout_count(&self) -> usize {
        self.goals.iter().map(Goal::workout_count).sum()
    }

    /// Every workout × variant slot, in walk order.
    pub fn slots(&self) -> impl Iterator<Item = (&Goal, &IntensityBucket, &Workout, &VariantSlot)> {
        self.goals.iter().flat_map(|goal| {
            goal.workouts().flat_map(move |(bucket, workout)| {
                workout
                    .variants
                    .iter()
                    .map(move |slot| (goal, bucket, workout, slot))
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Goal {
    pub name: String,
    pub buckets: Vec<IntensityBucket>,
}

impl Goal {
    #[must_use]
    pub fn workout_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.workouts.len()).sum()
    }

    /// Iterate `(bucket, workout)` pairs in walk order.
    pub fn workouts(&self) -> impl Iterator<Item = (&IntensityBucket, &Workout)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.workouts.iter().map(move |workout| (bucket, workout)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IntensityBucket {
    pub label: String,
    /// `false` when the goal has no block for this intensity label.
    pub declared: bool,
    pub workouts: Vec<Workout>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Workout {
    /// Zero-based position inside its bucket.
    pub index: usize,
    /// `None` when the `name` key is not followed by a quoted value.
    pub name: Option<String>,
    pub description: Option<String>,
    /// Effort label such as `"65% FTP"`.
    pub intensity: Option<String>,
    pub tips: Option<String>,
    pub variants: Vec<VariantSlot>,
}

impl Workout {
    /// Name for reports; unnamed workouts are labeled by position.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("<unnamed #{}>", self.index + 1))
    }

    #[must_use]
    pub fn variant(&self, label: &str) -> Option<&Variant> {
        self.variants
            .iter()
            .find(|slot| slot.label == label)
            .and_then(|slot| slot.variant.as_ref())
    }
}

/// One declared variant label of a workout. `variant` is `None` when the
/// workout has no block for the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VariantSlot {
    pub label: String,
    pub variant: Option<Variant>,
}

/// A duration-scaled rendition of a workout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Variant {
    /// Minutes.
    pub duration: Option<u32>,
    pub display_name: Option<String>,
    pub details: Option<String>,
}

/// Non-fatal extraction problems. The model simply omits what was not found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildWarning {
    GoalNotFound { goal: String },
    BucketNotFound { goal: String, intensity: String },
}

impl std::fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoalNotFound { goal } => write!(f, "goal '{goal}' not found"),
            Self::BucketNotFound { goal, intensity } => {
                write!(f, "goal '{goal}' has no '{intensity}' bucket")
            }
        }
    }
}
