//! Catalog document location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the workout catalog lives in a checkout of the app.
pub const DEFAULT_CATALOG_PATH: &str = "public_html/app/assets/js/config/workouts-db.js";

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_PATH)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Catalog document, relative to the working directory.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Label of the enclosing catalog block, e.g. `WORKOUTS_DB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_label: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            root_label: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_app_catalog() {
        let config = CatalogConfig::default();
        assert!(config.path.ends_with("workouts-db.js"));
        assert!(config.root_label.is_none());
    }
}
