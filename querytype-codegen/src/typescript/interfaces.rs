//! Record interface code generation.

use super::{comment_lines, property_name, ts_type};
use crate::model::{RecordDescriptor, TypeModel};

/// Generator for record interfaces.
pub struct InterfaceGenerator<'a> {
    model: &'a TypeModel,
}

impl<'a> InterfaceGenerator<'a> {
    /// Creates a new interface generator.
    #[must_use]
    pub fn new(model: &'a TypeModel) -> Self {
        Self { model }
    }

    /// Generates table records, then every record synthesized for a query.
    #[must_use]
    pub fn generate(&self) -> String {
        self.model
            .records
            .iter()
            .chain(self.model.emitted_records())
            .map(|r| self.generate_interface(r))
            .collect()
    }

    /// Generates one interface.
    fn generate_interface(&self, record: &RecordDescriptor) -> String {
        let mut output = comment_lines(&record.comment, "");

        output.push_str(&format!("export interface {} {{\n", record.name));
        for field in &record.fields {
            output.push_str(&comment_lines(&field.comment, "  "));
            output.push_str(&format!(
                "  {}: {};\n",
                property_name(&field.name),
                ts_type(&field.ty)
            ));
        }
        output.push_str("}\n\n");

        output
    }
}
