//! End-to-end properties of the audit pipeline.

use pretty_assertions::assert_eq;
use rstest::rstest;
use spoke_audit::run;
use spoke_core::counts::Tally;
use spoke_core::enums::FindingKind;
use spoke_core::findings::FindingScope;
use spoke_core::schema::{CatalogSchema, RuleSet};

const CLEAN: &str = include_str!("../../spoke-parser/tests/fixtures/workouts-db.js");
const DEFECTS: &str = include_str!("../../spoke-parser/tests/fixtures/workouts-defects.js");

const FULL_DETAILS: &str = "Warm-up: 5 min. Main: 20 min steady. Cool-down: 5 min.";

fn goals(names: &[&str]) -> CatalogSchema {
    CatalogSchema {
        goals: names.iter().map(ToString::to_string).collect(),
        ..CatalogSchema::default()
    }
}

fn variant(label: &str, duration: u32, details: &str) -> String {
    format!(r#"{label}: {{ duration: {duration}, displayName: "{label} ride", details: "{details}" }}"#)
}

fn workout(name: &str, variants: &[String]) -> String {
    format!(r#"{{ name: "{name}", variants: {{ {} }} }}"#, variants.join(", "))
}

fn full_workout(name: &str) -> String {
    workout(
        name,
        &[
            variant("short", 30, FULL_DETAILS),
            variant("medium", 45, FULL_DETAILS),
            variant("long", 60, FULL_DETAILS),
        ],
    )
}

#[test]
fn repeated_runs_are_identical() {
    for text in [CLEAN, DEFECTS] {
        let first = run(text, &CatalogSchema::default(), &RuleSet::default()).expect("first run");
        let second = run(text, &CatalogSchema::default(), &RuleSet::default()).expect("second run");

        assert_eq!(
            serde_json::to_string(&first.findings).expect("serialize"),
            serde_json::to_string(&second.findings).expect("serialize")
        );
        assert_eq!(
            serde_json::to_string(&first.counts).expect("serialize"),
            serde_json::to_string(&second.counts).expect("serialize")
        );
    }
}

#[test]
fn every_workout_contributes_three_checks_even_when_empty() {
    let text = format!("ftp: {{ easy: [ {} ] }}", workout("Hollow", &[]));
    let report = run(&text, &goals(&["ftp"]), &RuleSet::default()).expect("run");

    assert_eq!(report.counts.overall, Tally { total: 3, passed: 0, failed: 3 });
    assert!(
        report
            .findings
            .iter()
            .all(|finding| finding.kind == FindingKind::MissingVariant)
    );
    assert_eq!(report.findings.len(), 3);
}

#[rstest]
#[case::negative("-5")]
#[case::quoted("\"45\"")]
#[case::overflowing("99999999999")]
fn unreadable_duration_is_not_a_positive_integer(#[case] raw: &str) {
    let text = format!(
        r#"ftp: {{ easy: [ {{ name: "Odd", variants: {{ short: {{ duration: {raw}, displayName: "Odd", details: "{FULL_DETAILS}" }} }} }} ] }}"#
    );
    let report = run(&text, &goals(&["ftp"]), &RuleSet::default()).expect("run");

    let messages: Vec<&str> = report
        .findings
        .iter()
        .filter(|finding| finding.kind == FindingKind::InvalidDuration)
        .map(|finding| finding.message.as_str())
        .collect();
    assert_eq!(messages, vec!["duration is missing or not a positive integer"]);
}

#[test]
fn zero_duration_is_invalid_and_fails_its_check() {
    let text = format!(
        "ftp: {{ easy: [ {} ] }}",
        workout(
            "Zero",
            &[
                variant("short", 0, FULL_DETAILS),
                variant("medium", 45, FULL_DETAILS),
                variant("long", 60, FULL_DETAILS),
            ],
        )
    );
    let report = run(&text, &goals(&["ftp"]), &RuleSet::default()).expect("run");

    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].kind, FindingKind::InvalidDuration);
    assert_eq!(
        report.findings[0].check().map(|check| check.variant.as_str()),
        Some("short")
    );
    assert_eq!(report.counts.overall, Tally { total: 3, passed: 2, failed: 1 });
}

#[test]
fn details_without_main_marker_yield_exactly_one_finding() {
    let text = format!(
        "ftp: {{ easy: [ {} ] }}",
        workout(
            "No Main",
            &[
                variant("short", 30, FULL_DETAILS),
                variant("medium", 45, "Warm-up: 5 min. Cool-down: 5 min."),
                variant("long", 60, FULL_DETAILS),
            ],
        )
    );
    let report = run(&text, &goals(&["ftp"]), &RuleSet::default()).expect("run");

    let kinds: Vec<FindingKind> = report.findings.iter().map(|f| f.kind).collect();
    assert_eq!(kinds, vec![FindingKind::MissingMainSection]);
    assert_eq!(report.counts.overall.failed, 1);
}

#[test]
fn duplicated_goal_is_a_goal_set_mismatch() {
    let block = format!("ftp: {{ easy: [ {} ] }}", full_workout("Steady State"));
    let text = format!("{block},\n{block}");
    let report = run(&text, &goals(&["ftp"]), &RuleSet::default()).expect("run");

    assert_eq!(report.findings.len(), 1);
    let finding = &report.findings[0];
    assert_eq!(finding.kind, FindingKind::GoalSetMismatch);
    assert_eq!(
        finding.scope,
        FindingScope::Catalog {
            goal: Some("ftp".into())
        }
    );
    assert!(finding.message.contains("'ftp'"));
    assert_eq!(report.counts.overall.failed, 0);
    assert!(report.counts.has_failures());
}

#[test]
fn similar_goal_labels_extract_independently() {
    let text = format!(
        "climbing: {{ easy: [ {} ] }},\nclimb: {{ easy: [ {}, {} ] }}",
        full_workout("Long Ascent"),
        full_workout("Short Ramp"),
        full_workout("Steep Ramp"),
    );
    let report = run(&text, &goals(&["climb", "climbing"]), &RuleSet::default()).expect("run");

    let names = |goal: &str| -> Vec<String> {
        report
            .catalog
            .goal(goal)
            .map(|goal| goal.workouts().map(|(_, w)| w.display_name()).collect())
            .unwrap_or_default()
    };
    assert_eq!(names("climbing"), vec!["Long Ascent"]);
    assert_eq!(names("climb"), vec!["Short Ramp", "Steep Ramp"]);
    assert!(report.findings.is_empty());
}

#[test]
fn steady_state_scenario_passes_cleanly() {
    let text = format!("ftp: {{ easy: [ {} ] }}", full_workout("Steady State"));
    let report = run(&text, &goals(&["ftp"]), &RuleSet::default()).expect("run");

    assert!(report.findings.is_empty());
    assert_eq!(
        report.counts.goal("ftp").map(|counts| counts.checks),
        Some(Tally { total: 3, passed: 3, failed: 0 })
    );
    assert!(!report.counts.has_failures());
}
