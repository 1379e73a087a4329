//! Column type resolution.
//!
//! The resolver maps a column's native type name to a [`TypeRef`]. Known
//! scalar names go through the engine's static table; anything else is
//! looked up among the catalog's enums. Names that match neither resolve to
//! [`TypeTag::Any`] with a diagnostic, and the run continues.

use crate::model::{TypeRef, TypeTag};
use crate::naming::{default_name, model_name};
use crate::postgres;
use querytype_catalog::{Catalog, Column, Engine, Settings};
use std::collections::HashMap;

/// Native enum type names mapped to derived enum names.
///
/// Keys are `enum` for the default schema and `schema.enum` elsewhere. Built
/// once per run; on a duplicate key the first schema in catalog order wins.
#[derive(Debug, Clone, Default)]
pub struct EnumIndex {
    by_type: HashMap<String, String>,
}

impl EnumIndex {
    /// Builds the index over every non-system schema.
    #[must_use]
    pub fn build(catalog: &Catalog, settings: &Settings) -> Self {
        let mut by_type = HashMap::new();

        for schema in catalog.user_schemas() {
            for enum_def in &schema.enums {
                let key = if catalog.is_default_schema(&schema.name) {
                    enum_def.name.clone()
                } else {
                    format!("{}.{}", schema.name, enum_def.name)
                };
                by_type.entry(key).or_insert_with(|| {
                    model_name(
                        &default_name(catalog, &schema.name, &enum_def.name),
                        settings,
                    )
                });
            }
        }

        Self { by_type }
    }

    /// Returns the derived enum name for a native type name.
    #[must_use]
    pub fn get(&self, data_type: &str) -> Option<&str> {
        self.by_type.get(data_type).map(String::as_str)
    }
}

/// Resolves column types for one generation run.
#[derive(Debug, Clone)]
pub struct TypeResolver {
    engine: Engine,
    enums: EnumIndex,
    namespace: Option<String>,
}

impl TypeResolver {
    /// Creates a resolver for the catalog and settings of a run.
    ///
    /// An unsupported engine is reported here, once; every column then
    /// resolves to [`TypeTag::Unknown`].
    #[must_use]
    pub fn new(catalog: &Catalog, settings: &Settings) -> Self {
        if !settings.engine.is_supported() {
            tracing::warn!(
                "unsupported engine '{}': every column resolves to unknown",
                settings.engine
            );
        }

        Self {
            engine: settings.engine.clone(),
            enums: EnumIndex::build(catalog, settings),
            namespace: settings.models_namespace.clone(),
        }
    }

    /// Resolves the full type of a column.
    #[must_use]
    pub fn resolve(&self, column: &Column) -> TypeRef {
        TypeRef::new(self.resolve_tag(column))
            .array(column.is_array)
            .nullable(!column.not_null)
    }

    /// Resolves the base tag of a column.
    #[must_use]
    pub fn resolve_tag(&self, column: &Column) -> TypeTag {
        match self.engine {
            Engine::Postgresql => self.postgres_tag(column),
            Engine::Unsupported(_) => TypeTag::Unknown,
        }
    }

    fn postgres_tag(&self, column: &Column) -> TypeTag {
        let data_type = column.data_type();

        if let Some(tag) = postgres::scalar_tag(&data_type) {
            return tag;
        }

        if let Some(name) = self.enums.get(&data_type) {
            return TypeTag::Enum {
                namespace: self.namespace.clone(),
                name: name.to_string(),
            };
        }

        tracing::warn!("unknown PostgreSQL type: {}", data_type);
        TypeTag::Any
    }

    /// Returns the enum index built for this run.
    #[must_use]
    pub fn enums(&self) -> &EnumIndex {
        &self.enums
    }
}
