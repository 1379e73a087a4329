//! Enum code generation.

use super::comment_lines;
use crate::model::{EnumDescriptor, TypeModel};

/// Generator for enum declarations.
pub struct EnumGenerator<'a> {
    model: &'a TypeModel,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(model: &'a TypeModel) -> Self {
        Self { model }
    }

    /// Generates every enum declaration, in model order.
    #[must_use]
    pub fn generate(&self) -> String {
        self.model
            .enums
            .iter()
            .map(|e| self.generate_enum(e))
            .collect()
    }

    /// Generates one string enum.
    fn generate_enum(&self, descriptor: &EnumDescriptor) -> String {
        let mut output = comment_lines(&descriptor.comment, "");

        output.push_str(&format!("export enum {} {{\n", descriptor.name));
        for constant in &descriptor.constants {
            output.push_str(&format!(
                "  {} = '{}',\n",
                constant.name,
                escape_literal(&constant.value)
            ));
        }
        output.push_str("}\n\n");

        output
    }
}

/// Escapes a value for a single-quoted string literal.
fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
