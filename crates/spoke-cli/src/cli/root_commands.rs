use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract and validate the catalog, then report findings and counts.
    Check(CatalogArgs),
    /// Walk the persona panel through the catalog.
    Scenarios(CatalogArgs),
    /// Describe what the catalog contains, without pass/fail.
    Inventory(CatalogArgs),
    /// Print the JSON Schema of a report type, or list the registered names.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CatalogArgs {
    /// Catalog document (defaults to `catalog.path` from config).
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name, e.g. `audit_report`.
    pub name: Option<String>,
}
