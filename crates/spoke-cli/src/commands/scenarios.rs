use anyhow::Context;
use spoke_core::responses::ScenarioReport;

use crate::bootstrap::AuditContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::CatalogArgs;
use crate::commands::Verdict;
use crate::output::{TableView, output_report};

/// Handle `spoke scenarios`.
pub fn handle(args: &CatalogArgs, ctx: &AuditContext, flags: &GlobalFlags) -> anyhow::Result<Verdict> {
    let (path, text) = ctx.read_catalog(args.path.as_deref())?;
    let report = spoke_audit::run_scenarios(&text, &ctx.schema, &ctx.rules, &ctx.personas)
        .with_context(|| format!("failed to extract catalog from {}", path.display()))?;

    output_report(&report, flags.format)?;
    Ok(Verdict::from_failures(report.has_failures()))
}

impl TableView for ScenarioReport {
    fn headers(&self) -> Vec<&'static str> {
        vec![
            "persona", "level", "goal", "variant", "workouts", "checks", "failed", "status",
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.results
            .iter()
            .map(|result| {
                let status = if !result.goal_found {
                    "missing"
                } else if result.success {
                    "pass"
                } else {
                    "fail"
                };
                vec![
                    result.name.clone(),
                    result.level.as_str().to_string(),
                    result.goal.clone(),
                    result.preferred_variant.clone(),
                    result.workouts.to_string(),
                    result.checks.total.to_string(),
                    result.checks.failed.to_string(),
                    status.to_string(),
                ]
            })
            .collect()
    }

    fn summary(&self) -> Option<String> {
        let succeeded = self.results.iter().filter(|result| result.success).count();
        Some(format!(
            "{succeeded}/{} personas succeeded; {} checks, {} failed ({:.1}% success)",
            self.results.len(),
            self.overall.total,
            self.overall.failed,
            self.overall.success_rate(),
        ))
    }
}
