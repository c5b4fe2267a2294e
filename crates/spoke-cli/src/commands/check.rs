use anyhow::Context;
use serde::{Serialize, Serializer};
use spoke_core::enums::StructureCheck;
use spoke_core::findings::FindingScope;
use spoke_core::responses::AuditReport;

use crate::bootstrap::AuditContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::CatalogArgs;
use crate::commands::Verdict;
use crate::output::{TableView, output_report};

/// Handle `spoke check`.
pub fn handle(args: &CatalogArgs, ctx: &AuditContext, flags: &GlobalFlags) -> anyhow::Result<Verdict> {
    let (path, text) = ctx.read_catalog(args.path.as_deref())?;
    let report = spoke_audit::run(&text, &ctx.schema, &ctx.rules)
        .with_context(|| format!("failed to extract catalog from {}", path.display()))?;

    let verdict = Verdict::from_failures(report.counts.has_failures());
    output_report(
        &CheckView {
            report: &report,
            structure: ctx.rules.structure,
        },
        flags.format,
    )?;
    Ok(verdict)
}

/// An audit report together with the structure setting it was produced under,
/// so table rows can tell blocking findings from advisory ones.
struct CheckView<'a> {
    report: &'a AuditReport,
    structure: StructureCheck,
}

impl Serialize for CheckView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.report.serialize(serializer)
    }
}

impl TableView for CheckView<'_> {
    fn headers(&self) -> Vec<&'static str> {
        vec!["check", "kind", "severity", "message"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let warnings = self.report.warnings.iter().map(|warning| {
            vec![
                String::from("catalog"),
                String::from("warning"),
                String::from("warning"),
                warning.to_string(),
            ]
        });

        let findings = self.report.findings.iter().map(|finding| {
            let check = match &finding.scope {
                FindingScope::Variant(check) => check.to_string(),
                FindingScope::Catalog { goal: Some(goal) } => goal.clone(),
                FindingScope::Catalog { goal: None } => String::from("catalog"),
            };
            let severity = if finding.kind.is_blocking(self.structure) {
                "blocking"
            } else {
                "advisory"
            };
            vec![
                check,
                finding.kind.to_string(),
                severity.to_string(),
                finding.message.clone(),
            ]
        });

        warnings.chain(findings).collect()
    }

    fn summary(&self) -> Option<String> {
        let counts = &self.report.counts;
        let goal_set = if counts.goal_set.failed == 0 {
            "passed"
        } else {
            "failed"
        };
        Some(format!(
            "{} checks, {} passed, {} failed ({:.1}% success); {} advisory; goal set {goal_set}",
            counts.overall.total,
            counts.overall.passed,
            counts.overall.failed,
            counts.overall.success_rate(),
            counts.advisory_findings,
        ))
    }
}
