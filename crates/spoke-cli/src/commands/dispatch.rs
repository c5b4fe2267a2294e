use crate::bootstrap::AuditContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands::{self, Verdict};

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    ctx: &AuditContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Verdict> {
    match command {
        Commands::Check(args) => commands::check::handle(&args, ctx, flags),
        Commands::Scenarios(args) => commands::scenarios::handle(&args, ctx, flags),
        Commands::Inventory(args) => commands::inventory::handle(&args, ctx, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
