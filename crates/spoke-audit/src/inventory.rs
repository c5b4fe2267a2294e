//! Descriptive totals over an extracted catalog. Nothing here passes or
//! fails.

use spoke_core::catalog::{Catalog, Workout};
use spoke_core::responses::{
    BucketInventory, DetailsInventory, GoalInventory, Inventory, VariantCount,
};
use spoke_core::schema::{CatalogSchema, RuleSet};

use crate::count;
use crate::validate::GoalSetDiff;

#[must_use]
pub fn inventory(catalog: &Catalog, schema: &CatalogSchema, rules: &RuleSet) -> Inventory {
    let diff = GoalSetDiff::between(&catalog.declared_goals, &schema.goals);

    let variants = schema
        .variants
        .iter()
        .map(|label| VariantCount {
            label: label.clone(),
            present: count(
                catalog
                    .slots()
                    .filter(|(_, _, _, slot)| &slot.label == label && slot.variant.is_some())
                    .count(),
            ),
        })
        .collect();

    let mut details = DetailsInventory::default();
    for text in catalog
        .slots()
        .filter_map(|(_, _, _, slot)| slot.variant.as_ref()?.details.as_deref())
        .filter(|text| !text.trim().is_empty())
    {
        details.present += 1;
        if text.contains(&rules.main_marker) {
            details.with_main += 1;
        }
        if rules.has_full_structure(text) {
            details.with_full_structure += 1;
        }
    }

    let goals = catalog
        .goals
        .iter()
        .map(|goal| {
            let workouts = count(goal.workout_count());
            GoalInventory {
                goal: goal.name.clone(),
                workouts,
                expected_variants: workouts.saturating_mul(count(schema.variants.len())),
                buckets: goal
                    .buckets
                    .iter()
                    .map(|bucket| BucketInventory {
                        label: bucket.label.clone(),
                        declared: bucket.declared,
                        workouts: bucket.workouts.iter().map(Workout::display_name).collect(),
                    })
                    .collect(),
            }
        })
        .collect();

    Inventory {
        declared_goals: diff.distinct,
        duplicate_goals: diff.duplicates.into_iter().map(|(goal, _)| goal).collect(),
        missing_goals: diff.missing,
        unexpected_goals: diff.unexpected,
        workouts: count(catalog.workout_count()),
        variants,
        details,
        goals,
    }
}
