//! Aggregator.
//!
//! One check per workout × variant slot, whether or not the variant was
//! found. A check passes iff no blocking finding references it. Catalog-level
//! findings feed the separate one-check goal set tally.

use std::collections::HashMap;

use spoke_core::catalog::Catalog;
use spoke_core::counts::{CheckOutcome, Counts, GoalCounts, Tally};
use spoke_core::enums::{FindingKind, StructureCheck};
use spoke_core::findings::{CheckRef, ValidationFinding};

use crate::count;

/// Outcome of every check slot in walk order.
#[must_use]
pub fn outcomes(
    catalog: &Catalog,
    findings: &[ValidationFinding],
    structure: StructureCheck,
) -> Vec<CheckOutcome> {
    let mut by_check: HashMap<&CheckRef, Vec<FindingKind>> = HashMap::new();
    for finding in findings {
        if let Some(check) = finding.check() {
            by_check.entry(check).or_default().push(finding.kind);
        }
    }

    catalog
        .slots()
        .map(|(goal, bucket, workout, slot)| {
            let check = CheckRef::of(&goal.name, &bucket.label, workout, &slot.label);
            let kinds = by_check.remove(&check).unwrap_or_default();
            let passed = !kinds.iter().any(|kind| kind.is_blocking(structure));
            CheckOutcome {
                check,
                passed,
                kinds,
            }
        })
        .collect()
}

/// Pass/fail counts for `catalog` given its findings.
#[must_use]
pub fn aggregate(
    catalog: &Catalog,
    findings: &[ValidationFinding],
    structure: StructureCheck,
) -> Counts {
    let outcomes = outcomes(catalog, findings, structure);

    let by_goal: Vec<GoalCounts> = catalog
        .goals
        .iter()
        .map(|goal| GoalCounts {
            goal: goal.name.clone(),
            workouts: count(goal.workout_count()),
            checks: tally(outcomes.iter().filter(|o| o.check.goal == goal.name)),
        })
        .collect();

    let mut goal_set = Tally::default();
    goal_set.record(
        !findings
            .iter()
            .any(|finding| finding.kind == FindingKind::GoalSetMismatch),
    );

    Counts {
        overall: tally(outcomes.iter()),
        by_goal,
        goal_set,
        advisory_findings: count(
            findings
                .iter()
                .filter(|finding| !finding.kind.is_blocking(structure))
                .count(),
        ),
    }
}

/// Tally of the given outcomes.
pub fn tally<'a>(outcomes: impl Iterator<Item = &'a CheckOutcome>) -> Tally {
    outcomes.fold(Tally::default(), |mut tally, outcome| {
        tally.record(outcome.passed);
        tally
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use spoke_core::catalog::{Goal, IntensityBucket, Variant, VariantSlot, Workout};

    use super::*;

    fn slot(label: &str, present: bool) -> VariantSlot {
        VariantSlot {
            label: label.into(),
            variant: present.then(Variant::default),
        }
    }

    fn catalog() -> Catalog {
        let workout = |index: usize, name: &str| Workout {
            index,
            name: Some(name.into()),
            description: None,
            intensity: None,
            tips: None,
            variants: vec![slot("short", true), slot("long", false)],
        };
        Catalog {
            goals: vec![
                Goal {
                    name: "ftp".into(),
                    buckets: vec![IntensityBucket {
                        label: "easy".into(),
                        declared: true,
                        workouts: vec![workout(0, "A"), workout(1, "B")],
                    }],
                },
                Goal {
                    name: "climbing".into(),
                    buckets: vec![IntensityBucket {
                        label: "hard".into(),
                        declared: true,
                        workouts: Vec::new(),
                    }],
                },
            ],
            declared_goals: vec!["ftp".into(), "climbing".into()],
        }
    }

    fn finding(workout: &str, index: usize, variant: &str, kind: FindingKind) -> ValidationFinding {
        ValidationFinding::variant(
            CheckRef {
                goal: "ftp".into(),
                intensity: "easy".into(),
                workout_index: index,
                workout: workout.into(),
                variant: variant.into(),
            },
            kind,
            "x",
        )
    }

    #[test]
    fn every_slot_is_a_check_even_without_findings() {
        let counts = aggregate(&catalog(), &[], StructureCheck::Advisory);
        assert_eq!(counts.overall, Tally { total: 4, passed: 4, failed: 0 });
        assert_eq!(counts.goal("climbing").map(|g| g.checks.total), Some(0));
        assert_eq!(counts.goal_set, Tally { total: 1, passed: 1, failed: 0 });
        assert!(!counts.has_failures());
    }

    #[test]
    fn multiple_findings_on_one_slot_fail_it_once() {
        let findings = vec![
            finding("A", 0, "short", FindingKind::InvalidDuration),
            finding("A", 0, "short", FindingKind::MissingDetails),
            finding("B", 1, "long", FindingKind::MissingVariant),
        ];
        let counts = aggregate(&catalog(), &findings, StructureCheck::Advisory);
        assert_eq!(counts.overall, Tally { total: 4, passed: 2, failed: 2 });

        let ftp = counts.goal("ftp").expect("ftp counts");
        assert_eq!(ftp.workouts, 2);
        assert_eq!(ftp.checks.failed, 2);
    }

    #[test]
    fn structure_findings_follow_the_configured_severity() {
        let findings = vec![finding("A", 0, "short", FindingKind::IncompleteStructure)];

        let advisory = aggregate(&catalog(), &findings, StructureCheck::Advisory);
        assert_eq!(advisory.overall.failed, 0);
        assert_eq!(advisory.advisory_findings, 1);

        let blocking = aggregate(&catalog(), &findings, StructureCheck::Blocking);
        assert_eq!(blocking.overall.failed, 1);
        assert_eq!(blocking.advisory_findings, 0);
    }

    #[test]
    fn goal_set_mismatch_fails_the_catalog_check_only() {
        let findings = vec![ValidationFinding::catalog(
            Some("sprint".into()),
            FindingKind::GoalSetMismatch,
            "unexpected",
        )];
        let counts = aggregate(&catalog(), &findings, StructureCheck::Advisory);
        assert_eq!(counts.overall.failed, 0);
        assert_eq!(counts.goal_set.failed, 1);
        assert!(counts.has_failures());
    }

    #[test]
    fn outcomes_carry_kinds_in_walk_order() {
        let findings = vec![finding("B", 1, "short", FindingKind::IncompleteStructure)];
        let outcomes = outcomes(&catalog(), &findings, StructureCheck::Advisory);
        let walked: Vec<String> = outcomes.iter().map(|o| o.check.to_string()).collect();
        assert_eq!(
            walked,
            vec!["ftp/easy/A/short", "ftp/easy/A/long", "ftp/easy/B/short", "ftp/easy/B/long"]
        );
        assert!(outcomes[2].passed);
        assert_eq!(outcomes[2].kinds, vec![FindingKind::IncompleteStructure]);
    }
}
