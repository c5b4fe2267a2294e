//! Record Builder.
//!
//! Walks the fixed goal → intensity → workout → variant hierarchy with the
//! block locator and field extractor and produces a [`Catalog`].
//!
//! Goals, buckets and variants are visited in schema order. Workouts inside
//! a bucket follow document order. The same text always yields the same
//! catalog.

use spoke_core::catalog::{
    BuildWarning, Catalog, Goal, IntensityBucket, Variant, VariantSlot, Workout,
};
use spoke_core::schema::CatalogSchema;

use crate::error::StructuralError;
use crate::fields::{extract_int, extract_string};
use crate::locator::{
    LabeledBlock, check_balance, locate, locate_root, split_records, top_level_blocks,
};
use crate::span::Span;

/// Key that starts every workout record.
const WORKOUT_KEY: &str = "name";
/// Key of the block holding a workout's variants.
const VARIANTS_KEY: &str = "variants";

/// Result of a successful build: the catalog plus recovered problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutput {
    pub catalog: Catalog,
    pub warnings: Vec<BuildWarning>,
}

/// Extract the catalog described by `schema` from `text`.
///
/// # Errors
///
/// Returns a [`StructuralError`] when the document is unbalanced, when the
/// configured root label is absent, or when the document declares no labeled
/// block at all. Every other absence is recorded in the catalog or as a
/// [`BuildWarning`].
pub fn build(text: &str, schema: &CatalogSchema) -> Result<BuildOutput, StructuralError> {
    check_balance(text)?;

    let scope = match &schema.root_label {
        Some(label) => locate_root(text, label)?.ok_or_else(|| StructuralError::MissingRoot {
            label: label.clone(),
        })?,
        None => Span::of(text),
    };

    let declared = top_level_blocks(text, scope)?;
    if declared.is_empty() {
        return Err(StructuralError::EmptyCatalog);
    }

    let mut warnings = Vec::new();
    let mut goals = Vec::with_capacity(schema.goals.len());

    for name in &schema.goals {
        let Some(span) = first_labeled(&declared, name) else {
            tracing::warn!(goal = %name, "goal block not found");
            warnings.push(BuildWarning::GoalNotFound { goal: name.clone() });
            continue;
        };
        tracing::debug!(goal = %name, %span, "located goal");
        goals.push(build_goal(text, span, name, schema, &mut warnings)?);
    }

    Ok(BuildOutput {
        catalog: Catalog {
            goals,
            declared_goals: declared.into_iter().map(|block| block.label).collect(),
        },
        warnings,
    })
}

/// Span of the first block labeled `label`. Goals and buckets are looked up
/// among the direct children of their parent only.
fn first_labeled(blocks: &[LabeledBlock], label: &str) -> Option<Span> {
    blocks
        .iter()
        .find(|block| block.label == label)
        .map(|block| block.span)
}

fn build_goal(
    text: &str,
    span: Span,
    name: &str,
    schema: &CatalogSchema,
    warnings: &mut Vec<BuildWarning>,
) -> Result<Goal, StructuralError> {
    let children = top_level_blocks(text, span)?;
    let mut buckets = Vec::with_capacity(schema.intensities.len());

    for label in &schema.intensities {
        let Some(bucket_span) = first_labeled(&children, label) else {
            tracing::warn!(goal = %name, intensity = %label, "intensity bucket not found");
            warnings.push(BuildWarning::BucketNotFound {
                goal: name.to_string(),
                intensity: label.clone(),
            });
            buckets.push(IntensityBucket {
                label: label.clone(),
                declared: false,
                workouts: Vec::new(),
            });
            continue;
        };

        let workouts = split_records(text, bucket_span, WORKOUT_KEY)
            .into_iter()
            .enumerate()
            .map(|(index, record)| build_workout(text, record, index, schema))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(goal = %name, intensity = %label, workouts = workouts.len(), "located bucket");

        buckets.push(IntensityBucket {
            label: label.clone(),
            declared: true,
            workouts,
        });
    }

    Ok(Goal {
        name: name.to_string(),
        buckets,
    })
}

fn build_workout(
    text: &str,
    record: Span,
    index: usize,
    schema: &CatalogSchema,
) -> Result<Workout, StructuralError> {
    // Descriptive fields live in the record header, before its variants.
    let header = match locate(text, record, VARIANTS_KEY)? {
        Some(variants) => Span::new(record.start, variants.start),
        None => record,
    };

    let mut variants = Vec::with_capacity(schema.variants.len());
    for label in &schema.variants {
        let variant = locate(text, record, label)?.map(|block| Variant {
            duration: extract_int(text, block, "duration"),
            display_name: extract_string(text, block, "displayName"),
            details: extract_string(text, block, "details"),
        });
        variants.push(VariantSlot {
            label: label.clone(),
            variant,
        });
    }

    Ok(Workout {
        index,
        name: extract_string(text, record, WORKOUT_KEY),
        description: extract_string(text, header, "description"),
        intensity: extract_string(text, header, "intensity"),
        tips: extract_string(text, header, "tips"),
        variants,
    })
}
