//! JSON shape of the values reports are made of.

use pretty_assertions::assert_eq;
use serde_json::json;
use spoke_core::catalog::BuildWarning;
use spoke_core::counts::{Counts, Tally};
use spoke_core::enums::{FindingKind, StructureCheck};
use spoke_core::findings::{CheckRef, ValidationFinding};

fn check() -> CheckRef {
    CheckRef {
        goal: "climbing".into(),
        intensity: "hard".into(),
        workout_index: 1,
        workout: "Hill Repeats".into(),
        variant: "long".into(),
    }
}

#[test]
fn variant_finding_flattens_its_check_under_scope() {
    let finding = ValidationFinding::variant(check(), FindingKind::MissingMainSection, "no main");
    assert_eq!(
        serde_json::to_value(&finding).unwrap(),
        json!({
            "scope": {
                "scope": "variant",
                "goal": "climbing",
                "intensity": "hard",
                "workout_index": 1,
                "workout": "Hill Repeats",
                "variant": "long"
            },
            "kind": "missing_main_section",
            "message": "no main"
        })
    );
}

#[test]
fn catalog_finding_names_its_goal() {
    let finding = ValidationFinding::catalog(
        Some("sprint".into()),
        FindingKind::GoalSetMismatch,
        "goal 'sprint' is not an expected goal",
    );
    let value = serde_json::to_value(&finding).unwrap();
    assert_eq!(value["scope"], json!({ "scope": "catalog", "goal": "sprint" }));
    assert!(finding.check().is_none());

    let back: ValidationFinding = serde_json::from_value(value).unwrap();
    assert_eq!(back, finding);
}

#[test]
fn warnings_are_tagged_by_kind() {
    let warning = BuildWarning::BucketNotFound {
        goal: "ftp".into(),
        intensity: "hard".into(),
    };
    assert_eq!(
        serde_json::to_value(&warning).unwrap(),
        json!({ "kind": "bucket_not_found", "goal": "ftp", "intensity": "hard" })
    );
    assert_eq!(warning.to_string(), "goal 'ftp' has no 'hard' bucket");
}

#[test]
fn structure_check_reads_from_config_strings() {
    for (text, expected) in [
        ("\"off\"", StructureCheck::Off),
        ("\"advisory\"", StructureCheck::Advisory),
        ("\"blocking\"", StructureCheck::Blocking),
    ] {
        assert_eq!(serde_json::from_str::<StructureCheck>(text).unwrap(), expected);
    }
    assert!(serde_json::from_str::<StructureCheck>("\"strict\"").is_err());
}

#[test]
fn counts_serialize_every_tally() {
    let counts = Counts {
        overall: Tally { total: 3, passed: 3, failed: 0 },
        goal_set: Tally { total: 1, passed: 1, failed: 0 },
        ..Counts::default()
    };
    let value = serde_json::to_value(&counts).unwrap();
    assert_eq!(value["overall"], json!({ "total": 3, "passed": 3, "failed": 0 }));
    assert_eq!(value["by_goal"], json!([]));
    assert_eq!(value["advisory_findings"], json!(0));
}

#[test]
fn check_ref_displays_as_path() {
    assert_eq!(check().to_string(), "climbing/hard/Hill Repeats/long");
}
