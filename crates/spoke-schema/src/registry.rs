//! Central schema registry for spoke report types.
//!
//! The `SchemaRegistry` builds JSON Schemas from spoke-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Every JSON Schema spoke can emit, keyed by name.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Command reports (3) ---
        register!(schemas, "audit_report", spoke_core::responses::AuditReport);
        register!(
            schemas,
            "scenario_report",
            spoke_core::responses::ScenarioReport
        );
        register!(schemas, "inventory", spoke_core::responses::Inventory);

        // --- Report parts (5) ---
        register!(schemas, "catalog", spoke_core::catalog::Catalog);
        register!(schemas, "build_warning", spoke_core::catalog::BuildWarning);
        register!(
            schemas,
            "validation_finding",
            spoke_core::findings::ValidationFinding
        );
        register!(schemas, "counts", spoke_core::counts::Counts);
        register!(schemas, "persona", spoke_core::persona::Persona);

        // --- Run parameters (2) ---
        register!(schemas, "catalog_schema", spoke_core::schema::CatalogSchema);
        register!(schemas, "rule_set", spoke_core::schema::RuleSet);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// All registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
