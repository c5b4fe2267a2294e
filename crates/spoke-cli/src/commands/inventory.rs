use anyhow::Context;
use spoke_core::responses::Inventory;

use crate::bootstrap::AuditContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::CatalogArgs;
use crate::commands::Verdict;
use crate::output::{TableView, output_report};

/// Handle `spoke inventory`. Descriptive only, so it passes unless the
/// document cannot be extracted at all.
pub fn handle(args: &CatalogArgs, ctx: &AuditContext, flags: &GlobalFlags) -> anyhow::Result<Verdict> {
    let (path, text) = ctx.read_catalog(args.path.as_deref())?;
    let built = spoke_parser::build(&text, &ctx.schema)
        .with_context(|| format!("failed to extract catalog from {}", path.display()))?;

    let inventory = spoke_audit::inventory(&built.catalog, &ctx.schema, &ctx.rules);
    output_report(&inventory, flags.format)?;
    Ok(Verdict::Pass)
}

impl TableView for Inventory {
    fn headers(&self) -> Vec<&'static str> {
        vec!["goal", "bucket", "declared", "workouts", "names"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.goals
            .iter()
            .flat_map(|goal| {
                goal.buckets.iter().map(|bucket| {
                    vec![
                        goal.goal.clone(),
                        bucket.label.clone(),
                        if bucket.declared { "declared" } else { "undeclared" }.to_string(),
                        bucket.workouts.len().to_string(),
                        bucket.workouts.join(", "),
                    ]
                })
            })
            .collect()
    }

    fn summary(&self) -> Option<String> {
        let variants = self
            .variants
            .iter()
            .map(|count| format!("{} {}", count.present, count.label))
            .collect::<Vec<_>>()
            .join(", ");
        let mut summary = format!(
            "{} workouts; variants: {variants}; details: {} present, {} with main, {} fully structured",
            self.workouts,
            self.details.present,
            self.details.with_main,
            self.details.with_full_structure,
        );
        for (label, goals) in [
            ("duplicate", &self.duplicate_goals),
            ("missing", &self.missing_goals),
            ("unexpected", &self.unexpected_goals),
        ] {
            if !goals.is_empty() {
                summary.push_str(&format!("\n{label} goals: {}", goals.join(", ")));
            }
        }
        Some(summary)
    }
}
