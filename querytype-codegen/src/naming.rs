//! Naming transforms shared by every descriptor builder.

use querytype_catalog::{Catalog, Column, Parameter, Settings};

/// Converts a snake_case name to PascalCase by capitalizing each `_`
/// segment and concatenating them.
///
/// Within a segment, letters that follow a non-alphanumeric character are
/// capitalized as well; every other character is kept as written.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for segment in s.split('_') {
        let mut capitalize_next = true;
        for c in segment.chars() {
            if capitalize_next && c.is_alphabetic() {
                result.extend(c.to_uppercase());
            } else {
                result.push(c);
            }
            capitalize_next = !c.is_alphanumeric();
        }
    }

    result
}

/// Lower-cases the first character of `s`.
#[must_use]
pub fn lower_title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns the default-derived name of a schema object: the bare name in
/// the default schema, `schema_name` elsewhere.
#[must_use]
pub fn default_name(catalog: &Catalog, schema: &str, name: &str) -> String {
    if catalog.is_default_schema(schema) {
        name.to_string()
    } else {
        format!("{}_{}", schema, name)
    }
}

/// Derives a type name, preferring an explicit rename override.
#[must_use]
pub fn model_name(name: &str, settings: &Settings) -> String {
    match settings.renamed(name) {
        Some(rename) => rename.to_string(),
        None => to_pascal_case(name),
    }
}

/// Returns the field name for a result column at 0-based `pos`.
#[must_use]
pub fn column_name(column: &Column, pos: usize) -> String {
    if column.name.is_empty() {
        format!("column_{}", pos + 1)
    } else {
        column.name.clone()
    }
}

/// Returns the argument name for a parameter.
#[must_use]
pub fn param_name(param: &Parameter) -> String {
    if param.column.name.is_empty() {
        format!("dollar_{}", param.number)
    } else {
        param.column.name.clone()
    }
}
