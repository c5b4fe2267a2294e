//! Persona scenarios.
//!
//! Each persona walks every check of its goal and gets the entries for its
//! preferred variant highlighted. Personas see check outcomes only; they
//! never change them.

use spoke_core::catalog::Catalog;
use spoke_core::counts::{CheckOutcome, Tally};
use spoke_core::persona::Persona;
use spoke_core::responses::{GoalScenarioSummary, Highlight, ScenarioReport, ScenarioResult};

use crate::aggregate::tally;
use crate::count;

/// Run every persona against the catalog's check outcomes.
#[must_use]
pub fn simulate(
    catalog: &Catalog,
    outcomes: &[CheckOutcome],
    personas: &[Persona],
) -> ScenarioReport {
    let results: Vec<ScenarioResult> = personas
        .iter()
        .map(|persona| walk(catalog, outcomes, persona))
        .collect();

    let mut by_goal: Vec<GoalScenarioSummary> = Vec::new();
    for result in &results {
        let idx = match by_goal.iter().position(|s| s.goal == result.goal) {
            Some(idx) => idx,
            None => {
                by_goal.push(GoalScenarioSummary {
                    goal: result.goal.clone(),
                    testers: 0,
                    workouts: 0,
                    checks: Tally::default(),
                });
                by_goal.len() - 1
            }
        };
        let summary = &mut by_goal[idx];
        summary.testers += 1;
        summary.workouts += result.workouts;
        summary.checks = summary.checks.merged(result.checks);
    }

    let overall = results
        .iter()
        .fold(Tally::default(), |acc, result| acc.merged(result.checks));

    ScenarioReport {
        results,
        by_goal,
        overall,
    }
}

fn walk(catalog: &Catalog, outcomes: &[CheckOutcome], persona: &Persona) -> ScenarioResult {
    let mut result = ScenarioResult {
        persona_id: persona.id.clone(),
        name: persona.name.clone(),
        level: persona.level,
        goal: persona.goal.clone(),
        preferred_variant: persona.preferred_variant.clone(),
        ftp_watts: persona.ftp_watts,
        goal_found: false,
        workouts: 0,
        checks: Tally::default(),
        success: false,
        highlights: Vec::new(),
    };

    let Some(goal) = catalog.goal(&persona.goal) else {
        tracing::warn!(persona = %persona.id, goal = %persona.goal, "persona goal not in catalog");
        return result;
    };

    let relevant: Vec<&CheckOutcome> = outcomes
        .iter()
        .filter(|outcome| outcome.check.goal == goal.name)
        .collect();

    result.goal_found = true;
    result.workouts = count(goal.workout_count());
    result.checks = tally(relevant.iter().copied());
    result.success = result.checks.failed == 0;
    result.highlights = relevant
        .into_iter()
        .filter(|outcome| outcome.check.variant == persona.preferred_variant)
        .map(|outcome| {
            let check = &outcome.check;
            let duration = goal
                .buckets
                .iter()
                .find(|bucket| bucket.label == check.intensity)
                .and_then(|bucket| bucket.workouts.get(check.workout_index))
                .and_then(|workout| workout.variant(&check.variant))
                .and_then(|variant| variant.duration);
            Highlight {
                intensity: check.intensity.clone(),
                workout: check.workout.clone(),
                variant: check.variant.clone(),
                duration,
                passed: outcome.passed,
            }
        })
        .collect();

    tracing::debug!(
        persona = %persona.id,
        checks = result.checks.total,
        failed = result.checks.failed,
        "walked scenario"
    );
    result
}
