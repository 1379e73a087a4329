//! Table record derivation.

use crate::model::{FieldDescriptor, RecordDescriptor};
use crate::naming::{default_name, model_name};
use crate::resolver::TypeResolver;
use querytype_catalog::{Catalog, Identifier, Settings};
use std::sync::Arc;

/// Builder for table record descriptors.
pub struct RecordBuilder<'a> {
    catalog: &'a Catalog,
    settings: &'a Settings,
    resolver: &'a TypeResolver,
}

impl<'a> RecordBuilder<'a> {
    /// Creates a new record builder.
    #[must_use]
    pub fn new(catalog: &'a Catalog, settings: &'a Settings, resolver: &'a TypeResolver) -> Self {
        Self {
            catalog,
            settings,
            resolver,
        }
    }

    /// Builds one record per table of every non-system schema, sorted by
    /// derived name.
    ///
    /// Field types drop enum namespace qualification: table records live
    /// alongside the enums they reference.
    #[must_use]
    pub fn build(&self) -> Vec<Arc<RecordDescriptor>> {
        let mut records = Vec::new();

        for schema in self.catalog.user_schemas() {
            for table in &schema.tables {
                let name = model_name(
                    &default_name(self.catalog, &schema.name, &table.rel.name),
                    self.settings,
                );
                let fields = table
                    .columns
                    .iter()
                    .map(|column| FieldDescriptor {
                        name: column.name.clone(),
                        ty: self.resolver.resolve(column).unqualified(),
                        comment: column.comment.clone(),
                    })
                    .collect();

                records.push(RecordDescriptor {
                    name,
                    source_table: Some(Identifier::new(&schema.name, &table.rel.name)),
                    comment: table.comment.clone(),
                    fields,
                });
            }
        }

        records.sort_by(|a, b| a.name.cmp(&b.name));
        records.into_iter().map(Arc::new).collect()
    }
}
