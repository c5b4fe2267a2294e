//! Text in, report out.
//!
//! Runs extraction, validation and aggregation over one in-memory document.
//! The only early exit is a [`StructuralError`] from extraction.

use spoke_core::persona::Persona;
use spoke_core::responses::{AuditReport, ScenarioReport};
use spoke_core::schema::{CatalogSchema, RuleSet};
use spoke_parser::{BuildOutput, StructuralError, build};

use crate::aggregate::{aggregate, outcomes};
use crate::scenarios::simulate;
use crate::validate::validate;

/// Build, validate and count.
///
/// # Errors
///
/// Returns [`StructuralError`] when the document cannot be extracted.
pub fn run(
    text: &str,
    schema: &CatalogSchema,
    rules: &RuleSet,
) -> Result<AuditReport, StructuralError> {
    let BuildOutput { catalog, warnings } = build(text, schema)?;
    let findings = validate(&catalog, schema, rules);
    let counts = aggregate(&catalog, &findings, rules.structure);

    tracing::info!(
        goals = catalog.goals.len(),
        workouts = catalog.workout_count(),
        checks = counts.overall.total,
        failed = counts.overall.failed,
        findings = findings.len(),
        warnings = warnings.len(),
        "audit complete"
    );

    Ok(AuditReport {
        catalog,
        warnings,
        findings,
        counts,
    })
}

/// Audit the document, then walk `personas` over the resulting outcomes.
///
/// # Errors
///
/// Returns [`StructuralError`] when the document cannot be extracted.
pub fn run_scenarios(
    text: &str,
    schema: &CatalogSchema,
    rules: &RuleSet,
    personas: &[Persona],
) -> Result<ScenarioReport, StructuralError> {
    let report = run(text, schema, rules)?;
    let outcomes = outcomes(&report.catalog, &report.findings, rules.structure);
    Ok(simulate(&report.catalog, &outcomes, personas))
}
