//! Enum descriptor derivation.

use crate::model::{ConstantDescriptor, EnumDescriptor};
use crate::naming::{default_name, model_name, to_pascal_case};
use querytype_catalog::{Catalog, Settings};

/// Builder for enum descriptors.
pub struct EnumBuilder<'a> {
    catalog: &'a Catalog,
    settings: &'a Settings,
}

impl<'a> EnumBuilder<'a> {
    /// Creates a new enum builder.
    #[must_use]
    pub fn new(catalog: &'a Catalog, settings: &'a Settings) -> Self {
        Self { catalog, settings }
    }

    /// Builds one descriptor per enum of every non-system schema, sorted by
    /// derived name.
    #[must_use]
    pub fn build(&self) -> Vec<EnumDescriptor> {
        let mut enums = Vec::new();

        for schema in self.catalog.user_schemas() {
            for enum_def in &schema.enums {
                let name = model_name(
                    &default_name(self.catalog, &schema.name, &enum_def.name),
                    self.settings,
                );
                let constants = enum_def
                    .vals
                    .iter()
                    .map(|val| ConstantDescriptor {
                        name: to_pascal_case(val),
                        value: val.clone(),
                    })
                    .collect();

                enums.push(EnumDescriptor {
                    name,
                    comment: enum_def.comment.clone(),
                    constants,
                });
            }
        }

        enums.sort_by(|a, b| a.name.cmp(&b.name));
        enums
    }
}
