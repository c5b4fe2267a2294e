//! Expected catalog shape.

use serde::{Deserialize, Serialize};
use spoke_core::errors::CoreError;
use spoke_core::schema::CatalogSchema;

use crate::error::ConfigError;

fn default_goals() -> Vec<String> {
    CatalogSchema::default().goals
}

fn default_intensities() -> Vec<String> {
    CatalogSchema::default().intensities
}

fn default_variants() -> Vec<String> {
    CatalogSchema::default().variants
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchemaConfig {
    #[serde(default = "default_goals")]
    pub goals: Vec<String>,
    #[serde(default = "default_intensities")]
    pub intensities: Vec<String>,
    #[serde(default = "default_variants")]
    pub variants: Vec<String>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            goals: default_goals(),
            intensities: default_intensities(),
            variants: default_variants(),
        }
    }
}

impl SchemaConfig {
    /// Build the core schema, rejecting lists the locator cannot work with.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] naming the offending key when a list is
    /// empty, repeats a label, or holds a label that is not identifier-shaped.
    pub fn to_schema(&self, root_label: Option<&str>) -> Result<CatalogSchema, ConfigError> {
        let schema = CatalogSchema {
            goals: self.goals.clone(),
            intensities: self.intensities.clone(),
            variants: self.variants.clone(),
            root_label: root_label.map(str::to_string),
        };
        schema.validate().map_err(|CoreError::InvalidSchema { field, reason }| {
            let key = match field {
                "root_label" => String::from("catalog.root_label"),
                list => format!("schema.{list}"),
            };
            ConfigError::invalid(&key, reason)
        })?;
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_convert() {
        let schema = SchemaConfig::default().to_schema(Some("WORKOUTS_DB")).expect("valid");
        assert_eq!(schema.goals, vec!["ftp", "climbing", "granfondo"]);
        assert_eq!(schema.root_label.as_deref(), Some("WORKOUTS_DB"));
    }

    #[test]
    fn rejects_empty_and_repeated_lists() {
        let empty = SchemaConfig {
            variants: Vec::new(),
            ..SchemaConfig::default()
        };
        let err = empty.to_schema(None).expect_err("empty variants");
        assert!(err.to_string().contains("schema.variants"));

        let repeated = SchemaConfig {
            goals: vec!["ftp".into(), "ftp".into()],
            ..SchemaConfig::default()
        };
        let err = repeated.to_schema(None).expect_err("repeated goal");
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn rejects_non_identifier_labels() {
        let spaced = SchemaConfig {
            intensities: vec!["easy".into(), "very hard".into()],
            ..SchemaConfig::default()
        };
        let err = spaced.to_schema(None).expect_err("spaced intensity");
        assert!(err.to_string().contains("schema.intensities"));
        assert!(err.to_string().contains("'very hard' is not a valid label"));

        let err = SchemaConfig::default()
            .to_schema(Some(""))
            .expect_err("empty root label");
        assert!(err.to_string().contains("catalog.root_label"));
    }
}
