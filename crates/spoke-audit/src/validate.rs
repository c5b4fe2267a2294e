//! Validator.
//!
//! Variant rules are evaluated independently, so one variant can yield
//! several findings. Findings come out in walk order (goal, intensity,
//! workout, variant) followed by the catalog-level goal set findings.

use spoke_core::catalog::{Catalog, Variant};
use spoke_core::enums::{FindingKind, StructureCheck};
use spoke_core::findings::{CheckRef, ValidationFinding};
use spoke_core::schema::{CatalogSchema, RuleSet};

/// Every defect in `catalog` under `schema` and `rules`.
#[must_use]
pub fn validate(
    catalog: &Catalog,
    schema: &CatalogSchema,
    rules: &RuleSet,
) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();

    for (goal, bucket, workout, slot) in catalog.slots() {
        let check = CheckRef::of(&goal.name, &bucket.label, workout, &slot.label);
        match &slot.variant {
            Some(variant) => check_variant(check, variant, rules, &mut findings),
            None => {
                let message = format!(
                    "workout '{}' has no '{}' variant",
                    check.workout, check.variant
                );
                findings.push(ValidationFinding::variant(
                    check,
                    FindingKind::MissingVariant,
                    message,
                ));
            }
        }
    }

    check_goal_set(catalog, schema, &mut findings);

    tracing::debug!(findings = findings.len(), "validated catalog");
    findings
}

fn check_variant(
    check: CheckRef,
    variant: &Variant,
    rules: &RuleSet,
    findings: &mut Vec<ValidationFinding>,
) {
    let mut report = |kind: FindingKind, message: String| {
        findings.push(ValidationFinding::variant(check.clone(), kind, message));
    };

    match variant.duration {
        Some(minutes) if minutes > 0 => {}
        Some(_) => report(
            FindingKind::InvalidDuration,
            "duration must be greater than zero".to_string(),
        ),
        None => report(
            FindingKind::InvalidDuration,
            "duration is missing or not a positive integer".to_string(),
        ),
    }

    if non_blank(variant.display_name.as_deref()).is_none() {
        report(
            FindingKind::MissingDisplayName,
            "displayName is missing or empty".to_string(),
        );
    }

    let Some(details) = non_blank(variant.details.as_deref()) else {
        report(
            FindingKind::MissingDetails,
            "details are missing or empty".to_string(),
        );
        return;
    };

    if !details.contains(&rules.main_marker) {
        report(
            FindingKind::MissingMainSection,
            format!("details have no '{}' section", rules.main_marker),
        );
    }

    if rules.structure == StructureCheck::Off {
        return;
    }
    let absent: Vec<&str> = [&rules.warmup_marker, &rules.cooldown_marker]
        .into_iter()
        .filter(|marker| !details.contains(marker.as_str()))
        .map(String::as_str)
        .collect();
    if !absent.is_empty() {
        report(
            FindingKind::IncompleteStructure,
            format!("details lack {}", quoted_list(&absent)),
        );
    }
}

fn check_goal_set(catalog: &Catalog, schema: &CatalogSchema, findings: &mut Vec<ValidationFinding>) {
    let diff = GoalSetDiff::between(&catalog.declared_goals, &schema.goals);
    if diff.is_exact() {
        tracing::debug!(goals = diff.distinct.len(), "goal set matches");
        return;
    }

    for (goal, times) in diff.duplicates {
        let message = format!("goal '{goal}' is declared {times} times");
        findings.push(ValidationFinding::catalog(
            Some(goal),
            FindingKind::GoalSetMismatch,
            message,
        ));
    }
    for goal in diff.missing {
        let message = format!("expected goal '{goal}' is not declared");
        findings.push(ValidationFinding::catalog(
            Some(goal),
            FindingKind::GoalSetMismatch,
            message,
        ));
    }
    for goal in diff.unexpected {
        let message = format!("goal '{goal}' is not an expected goal");
        findings.push(ValidationFinding::catalog(
            Some(goal),
            FindingKind::GoalSetMismatch,
            message,
        ));
    }
}

/// Differences between the declared goal labels and the expected set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalSetDiff {
    /// Distinct declared labels, in document order.
    pub distinct: Vec<String>,
    /// Labels declared more than once, with their declaration count.
    pub duplicates: Vec<(String, usize)>,
    /// Expected labels never declared, in expected order.
    pub missing: Vec<String>,
    /// Declared labels outside the expected set, in document order.
    pub unexpected: Vec<String>,
}

impl GoalSetDiff {
    #[must_use]
    pub fn between(declared: &[String], expected: &[String]) -> Self {
        let mut diff = Self::default();

        for label in declared {
            if diff.distinct.contains(label) {
                continue;
            }
            diff.distinct.push(label.clone());

            let times = declared.iter().filter(|other| *other == label).count();
            if times > 1 {
                diff.duplicates.push((label.clone(), times));
            }
            if !expected.contains(label) {
                diff.unexpected.push(label.clone());
            }
        }

        diff.missing = expected
            .iter()
            .filter(|goal| !declared.contains(*goal))
            .cloned()
            .collect();
        diff
    }

    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.duplicates.is_empty() && self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// `None` for absent, empty or whitespace-only text.
fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|value| !value.trim().is_empty())
}

fn quoted_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(" and ")
}
