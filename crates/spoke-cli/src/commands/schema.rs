use anyhow::bail;
use spoke_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::commands::Verdict;
use crate::output::output;

/// Handle `spoke schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<Verdict> {
    let registry = SchemaRegistry::new();

    match args.name.as_deref() {
        None => output(&registry.list(), flags.format)?,
        Some(name) => {
            let Some(schema) = registry.get(name) else {
                bail!(
                    "unknown schema '{name}' (available: {})",
                    registry.list().join(", ")
                );
            };
            output(schema, flags.format)?;
        }
    }

    Ok(Verdict::Pass)
}
