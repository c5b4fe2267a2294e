//! Fixed catalog shape and content rules.
//!
//! The record builder never discovers the catalog shape from the document:
//! goal names, intensity labels and variant labels are supplied up front as a
//! [`CatalogSchema`]. The validator is driven by a [`RuleSet`]. Both are plain
//! immutable values passed into the pipeline.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::StructureCheck;
use crate::errors::CoreError;

/// The goal → intensity → workout → variant shape the document must follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogSchema {
    /// Expected goal labels, in reporting order.
    pub goals: Vec<String>,
    /// Intensity bucket labels, in walk order.
    pub intensities: Vec<String>,
    /// Variant labels every workout must expose, in walk order.
    pub variants: Vec<String>,
    /// Label of the enclosing catalog block (e.g. `WORKOUTS_DB`), if any.
    pub root_label: Option<String>,
}

impl Default for CatalogSchema {
    fn default() -> Self {
        Self {
            goals: labels(&["ftp", "climbing", "granfondo"]),
            intensities: labels(&["easy", "moderate", "hard"]),
            variants: labels(&["short", "medium", "long"]),
            root_label: None,
        }
    }
}

impl CatalogSchema {
    /// Check that every label list is non-empty, duplicate-free, and made of
    /// identifier-shaped labels the block locator can anchor on.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSchema`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_labels("goals", &self.goals)?;
        check_labels("intensities", &self.intensities)?;
        check_labels("variants", &self.variants)?;
        match &self.root_label {
            Some(root) if !is_label(root) => Err(invalid(
                "root_label",
                format!("'{root}' is not a valid label"),
            )),
            _ => Ok(()),
        }
    }
}

/// Content markers and severities applied to every variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RuleSet {
    /// Substring that marks the main phase of a workout.
    pub main_marker: String,
    pub warmup_marker: String,
    pub cooldown_marker: String,
    /// How the warm-up / cool-down rule is evaluated.
    pub structure: StructureCheck,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            main_marker: "Main:".to_string(),
            warmup_marker: "Warm-up:".to_string(),
            cooldown_marker: "Cool-down:".to_string(),
            structure: StructureCheck::Advisory,
        }
    }
}

impl RuleSet {
    /// Whether `details` carries warm-up, main and cool-down markers.
    #[must_use]
    pub fn has_full_structure(&self, details: &str) -> bool {
        details.contains(&self.warmup_marker)
            && details.contains(&self.main_marker)
            && details.contains(&self.cooldown_marker)
    }
}

/// A label the locator can anchor on: ASCII letters, digits, `_` and `$`,
/// not starting with a digit.
fn is_label(label: &str) -> bool {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$')
}

fn check_labels(field: &'static str, values: &[String]) -> Result<(), CoreError> {
    if values.is_empty() {
        return Err(invalid(field, "must list at least one label".to_string()));
    }
    for (idx, value) in values.iter().enumerate() {
        if !is_label(value) {
            return Err(invalid(field, format!("'{value}' is not a valid label")));
        }
        if values[..idx].contains(value) {
            return Err(invalid(field, format!("'{value}' is listed twice")));
        }
    }
    Ok(())
}

const fn invalid(field: &'static str, reason: String) -> CoreError {
    CoreError::InvalidSchema { field, reason }
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schema_is_valid() {
        let schema = CatalogSchema::default();
        schema.validate().expect("defaults validate");
        assert_eq!(schema.goals, vec!["ftp", "climbing", "granfondo"]);
        assert_eq!(schema.variants, vec!["short", "medium", "long"]);
    }

    #[test]
    fn rejects_repeated_label() {
        let schema = CatalogSchema {
            intensities: labels(&["easy", "easy"]),
            ..CatalogSchema::default()
        };
        let err = schema.validate().expect_err("duplicate should fail");
        assert!(matches!(
            err,
            CoreError::InvalidSchema { field: "intensities", ref reason } if reason == "'easy' is listed twice"
        ));
    }

    #[test]
    fn rejects_empty_list_and_bad_labels() {
        let empty = CatalogSchema {
            goals: Vec::new(),
            ..CatalogSchema::default()
        };
        assert!(empty.validate().is_err());

        let spaced = CatalogSchema {
            variants: labels(&["short", "extra long"]),
            ..CatalogSchema::default()
        };
        assert!(spaced.validate().is_err());

        let root = CatalogSchema {
            root_label: Some("WORKOUTS DB".into()),
            ..CatalogSchema::default()
        };
        let err = root.validate().expect_err("spaced root");
        assert!(matches!(err, CoreError::InvalidSchema { field: "root_label", .. }));
    }

    #[test]
    fn full_structure_requires_all_three_markers() {
        let rules = RuleSet::default();
        assert!(rules.has_full_structure("Warm-up: 5. Main: 20. Cool-down: 5."));
        assert!(!rules.has_full_structure("Warm-up: 5. Cool-down: 5."));
    }
}
